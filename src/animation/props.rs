use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::core::MotionError;

/// Animatable property of a page element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prop {
    X,
    Y,
    /// Y offset as a percentage of the element's own height
    YPercent,
    Opacity,
    Scale,
    ScaleX,
    BorderRadius,
    /// Free-standing number (counters)
    Value,
}

impl Prop {
    pub fn name(self) -> &'static str {
        match self {
            Prop::X => "x",
            Prop::Y => "y",
            Prop::YPercent => "yPercent",
            Prop::Opacity => "opacity",
            Prop::Scale => "scale",
            Prop::ScaleX => "scaleX",
            Prop::BorderRadius => "borderRadius",
            Prop::Value => "value",
        }
    }
}

impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Prop {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "x" => Prop::X,
            "y" => Prop::Y,
            "yPercent" => Prop::YPercent,
            "opacity" => Prop::Opacity,
            "scale" => Prop::Scale,
            "scaleX" => Prop::ScaleX,
            "borderRadius" => Prop::BorderRadius,
            "value" => Prop::Value,
            _ => return Err(MotionError::InvalidConfig(format!("unknown property '{}'", s))),
        })
    }
}

/// Current animated value of every (element, property) pair. The host
/// reads from here when writing styles.
#[derive(Clone, Debug, Default)]
pub struct PropertyStore {
    values: HashMap<(String, Prop), f32>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, target: &str, prop: Prop, value: f32) {
        match self.values.get_mut(&(target.to_string(), prop)) {
            Some(v) => *v = value,
            None => {
                self.values.insert((target.to_string(), prop), value);
            }
        }
    }

    pub fn get(&self, target: &str, prop: Prop) -> Option<f32> {
        self.values.get(&(target.to_string(), prop)).copied()
    }

    /// Drop every value of elements whose key starts with `prefix`
    pub fn remove_prefix(&mut self, prefix: &str) {
        self.values.retain(|(target, _), _| !target.starts_with(prefix));
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Snapshot as `{ "target": { "prop": value } }` for the host
    pub fn to_json(&self) -> String {
        let mut out: HashMap<&str, HashMap<&str, f32>> = HashMap::new();
        for ((target, prop), v) in self.values.iter() {
            out.entry(target.as_str()).or_default().insert(prop.name(), *v);
        }
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }
}
