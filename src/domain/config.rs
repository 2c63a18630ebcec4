//! Engine configuration
//!
//! Loaded from JSON by the host (`MotionConfig::from_json`). Every field has
//! a default, so `{}` is a valid config and yields the shipped behaviour.

use serde::{Deserialize, Serialize};

use crate::core::MotionError;
use super::color::Color;

/// Physical properties of a dynamic body
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    /// Tangential damping on contact (0..1)
    pub friction: f32,
    /// Mass per square pixel
    pub density: f32,
    /// Fraction of velocity lost per step
    pub air_friction: f32,
}

impl Material {
    /// Gentle, slow drift
    pub const FLOATING: Material = Material {
        restitution: 0.1,
        friction: 0.05,
        density: 0.001,
        air_friction: 0.05,
    };

    /// Lively, rubber-ball feel
    pub const BOUNCY: Material = Material {
        restitution: 0.85,
        friction: 0.1,
        density: 0.002,
        air_friction: 0.01,
    };

    pub fn clamped(self) -> Material {
        Material {
            restitution: self.restitution.clamp(0.0, 1.0),
            friction: self.friction.clamp(0.0, 1.0),
            density: self.density.max(1e-6),
            air_friction: self.air_friction.clamp(0.0, 1.0),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::FLOATING
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaterialPreset {
    Floating,
    Bouncy,
    Custom(Material),
}

impl MaterialPreset {
    pub fn material(self) -> Material {
        match self {
            MaterialPreset::Floating => Material::FLOATING,
            MaterialPreset::Bouncy => Material::BOUNCY,
            MaterialPreset::Custom(m) => m.clamped(),
        }
    }
}

impl Default for MaterialPreset {
    fn default() -> Self {
        MaterialPreset::Floating
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum IconShape {
    Circle { radius: f32 },
    Rect { width: f32, height: f32 },
}

/// One decorative icon in the footer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSpec {
    pub src: String,
    pub shape: IconShape,
    /// Drawn edge length in pixels (before hover scale)
    pub size: f32,
    #[serde(default)]
    pub glow: Option<Color>,
}

impl IconSpec {
    pub fn circle(src: &str, radius: f32) -> Self {
        Self {
            src: src.to_string(),
            shape: IconShape::Circle { radius },
            size: radius * 2.0,
            glow: None,
        }
    }

    pub fn rect(src: &str, width: f32, height: f32) -> Self {
        Self {
            src: src.to_string(),
            shape: IconShape::Rect { width, height },
            size: width.max(height),
            glow: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AmbientConfig {
    pub enabled: bool,
    pub interval_ms: f64,
    /// Chance per body per tick of receiving an impulse
    pub probability: f32,
    /// Maximum force component applied per impulse
    pub force: f32,
    /// Stop ambient motion once the user has grabbed a body
    pub stop_after_interaction: bool,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: 3000.0,
            probability: 0.3,
            force: 0.02,
            stop_after_interaction: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlowConfig {
    pub max_blur: f32,
    pub period_ms: f64,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            max_blur: 20.0,
            period_ms: 2000.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterConfig {
    /// gravity.y while the footer is sufficiently visible
    pub gravity_on: f32,
    /// Intersection ratio at or above which gravity switches on
    pub gravity_threshold: f32,
    /// Inset of the spawn region from every edge
    pub spawn_margin: f32,
    /// Inset of the post-step clamp from every edge
    pub clamp_margin: f32,
    pub wall_thickness: f32,
    pub hover_radius: f32,
    pub hover_scale: f32,
    /// Fraction of the remaining scale gap closed per frame
    pub hover_ease: f32,
    pub spring_stiffness: f32,
    pub timestep_ms: f64,
    pub max_substeps: u32,
    pub material: MaterialPreset,
    pub ambient: AmbientConfig,
    pub glow: Option<GlowConfig>,
    pub icons: Vec<IconSpec>,
    /// 0 = seed from entropy
    pub seed: u32,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            gravity_on: 0.25,
            gravity_threshold: 0.3,
            spawn_margin: 100.0,
            clamp_margin: 30.0,
            wall_thickness: 100.0,
            hover_radius: 80.0,
            hover_scale: 1.2,
            hover_ease: 0.15,
            spring_stiffness: 0.2,
            timestep_ms: 1000.0 / 60.0,
            max_substeps: 4,
            material: MaterialPreset::Floating,
            ambient: AmbientConfig::default(),
            glow: None,
            icons: default_icons(),
            seed: 0,
        }
    }
}

fn default_icons() -> Vec<IconSpec> {
    vec![
        IconSpec::circle("/images/icon/a.svg", 40.0),
        IconSpec::circle("/images/icon/b.svg", 36.0),
        IconSpec::rect("/images/icon/c.svg", 80.0, 80.0),
        IconSpec::circle("/images/icon/d.svg", 44.0),
        IconSpec::rect("/images/icon/e.svg", 96.0, 64.0),
        IconSpec::circle("/images/icon/f.svg", 32.0),
        IconSpec::circle("/images/icon/g.svg", 40.0),
        IconSpec::rect("/images/icon/h.svg", 72.0, 72.0),
    ]
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    /// scrollY beyond which the header switches to its compact style
    pub header_scroll_threshold: f32,
    pub logo_rotate_ms: f64,
    pub base_background: Color,
    /// Delay before layout is re-measured after mount
    pub refresh_delay_ms: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_scroll_threshold: 100.0,
            logo_rotate_ms: 3000.0,
            base_background: Color::rgb(0xf3, 0xf3, 0xe9),
            refresh_delay_ms: 800.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MotionConfig {
    pub footer: FooterConfig,
    pub page: PageConfig,
}

impl MotionConfig {
    pub fn from_json(json: &str) -> Result<Self, MotionError> {
        let cfg: MotionConfig =
            serde_json::from_str(json).map_err(|e| MotionError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        let f = &self.footer;
        if !(0.0..=1.0).contains(&f.gravity_threshold) {
            return Err(MotionError::InvalidConfig(format!(
                "gravityThreshold must be in [0, 1], got {}",
                f.gravity_threshold
            )));
        }
        if f.spawn_margin < 0.0 || f.clamp_margin < 0.0 {
            return Err(MotionError::InvalidConfig("margins must be non-negative".to_string()));
        }
        if f.timestep_ms <= 0.0 {
            return Err(MotionError::InvalidConfig("timestepMs must be positive".to_string()));
        }
        if !(0.0..=1.0).contains(&f.spring_stiffness) {
            return Err(MotionError::InvalidConfig(format!(
                "springStiffness must be in [0, 1], got {}",
                f.spring_stiffness
            )));
        }
        for icon in f.icons.iter() {
            let ok = match icon.shape {
                IconShape::Circle { radius } => radius > 0.0,
                IconShape::Rect { width, height } => width > 0.0 && height > 0.0,
            };
            if !ok || icon.size <= 0.0 {
                return Err(MotionError::InvalidConfig(format!("icon {} has non-positive size", icon.src)));
            }
        }
        Ok(())
    }
}
