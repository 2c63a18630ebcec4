use crate::domain::GlowConfig;

/// Pulsing glow: intensity swings 0 -> 1 -> 0 once per period
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowPulse {
    pub max_blur: f32,
    pub period_ms: f64,
}

impl GlowPulse {
    pub fn new(config: GlowConfig) -> Self {
        Self {
            max_blur: config.max_blur.max(0.0),
            period_ms: config.period_ms.max(1.0),
        }
    }

    pub fn intensity(&self, t_ms: f64) -> f32 {
        let phase = std::f64::consts::TAU * t_ms / self.period_ms;
        (0.5 - 0.5 * phase.cos()) as f32
    }

    pub fn blur(&self, t_ms: f64) -> f32 {
        self.max_blur * self.intensity(t_ms)
    }
}
