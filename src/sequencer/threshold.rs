use std::collections::HashMap;
use std::str::FromStr;

use crate::core::MotionError;

/// A point along an element or along the viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    Top,
    Center,
    Bottom,
    Percent(f32),
    Px(f32),
}

impl Anchor {
    /// Offset from the top edge of something `len` pixels tall
    pub fn resolve(self, len: f32) -> f32 {
        match self {
            Anchor::Top => 0.0,
            Anchor::Center => len * 0.5,
            Anchor::Bottom => len,
            Anchor::Percent(p) => len * p / 100.0,
            Anchor::Px(px) => px,
        }
    }
}

impl FromStr for Anchor {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || MotionError::InvalidThreshold(s.to_string());
        match s {
            "top" => Ok(Anchor::Top),
            "center" => Ok(Anchor::Center),
            "bottom" => Ok(Anchor::Bottom),
            _ => {
                if let Some(p) = s.strip_suffix('%') {
                    p.parse::<f32>().map(Anchor::Percent).map_err(|_| bad())
                } else if let Some(px) = s.strip_suffix("px") {
                    px.parse::<f32>().map(Anchor::Px).map_err(|_| bad())
                } else {
                    s.parse::<f32>().map(Anchor::Px).map_err(|_| bad())
                }
            }
        }
    }
}

/// `"<element edge> <viewport position>"`, e.g. `"top 80%"`: the trigger
/// point is reached when that edge of the element meets that line of the
/// viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Threshold {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl Threshold {
    pub const fn new(element: Anchor, viewport: Anchor) -> Self {
        Self { element, viewport }
    }

    /// Scroll offset at which the threshold is crossed
    pub fn scroll_offset(&self, region: Region, viewport_height: f32) -> f32 {
        region.top + self.element.resolve(region.height) - self.viewport.resolve(viewport_height)
    }
}

impl FromStr for Threshold {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(element), Some(viewport), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(MotionError::InvalidThreshold(s.to_string()));
        };
        Ok(Self {
            element: element.parse()?,
            viewport: viewport.parse()?,
        })
    }
}

/// Measured document position of a page region
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Region {
    /// Distance from the document top, in px
    pub top: f32,
    pub height: f32,
}

impl Region {
    pub const fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }
}

/// Region measurements plus viewport height. Re-measured by the host on
/// resize and after the post-mount refresh delay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    pub viewport_height: f32,
    regions: HashMap<String, Region>,
}

impl Layout {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            viewport_height,
            regions: HashMap::new(),
        }
    }

    pub fn set_region(&mut self, name: &str, region: Region) {
        self.regions.insert(name.to_string(), region);
    }

    pub fn remove_region(&mut self, name: &str) -> bool {
        self.regions.remove(name).is_some()
    }

    pub fn region(&self, name: &str) -> Option<Region> {
        self.regions.get(name).copied()
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}
