use std::str::FromStr;

use crate::core::MotionError;

/// Easing curves, named after the timeline conventions the site's motion
/// design uses (`power2.out`, `back.out(1.7)`, ...).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power1Out,
    Power2Out,
    Power3Out,
    Power2InOut,
    /// Overshoot then settle; parameter is the overshoot amount
    BackOut(f32),
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Power1Out
    }
}

impl Ease {
    /// Map linear progress in [0, 1] to eased progress. Endpoints are exact.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u * u * u + s * u * u
            }
        }
    }
}

impl FromStr for Ease {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix("back.out") {
            let amount = rest
                .trim_start_matches('(')
                .trim_end_matches(')')
                .trim();
            let overshoot = if amount.is_empty() {
                1.7
            } else {
                amount
                    .parse::<f32>()
                    .map_err(|_| MotionError::InvalidConfig(format!("bad ease '{}'", s)))?
            };
            return Ok(Ease::BackOut(overshoot));
        }
        match s {
            "none" | "linear" => Ok(Ease::Linear),
            "power1.out" | "power1" => Ok(Ease::Power1Out),
            "power2.out" | "power2" => Ok(Ease::Power2Out),
            "power3.out" | "power3" => Ok(Ease::Power3Out),
            "power2.inOut" => Ok(Ease::Power2InOut),
            _ => Err(MotionError::InvalidConfig(format!("unknown ease '{}'", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact_for_every_curve() {
        for ease in [
            Ease::Linear,
            Ease::Power1Out,
            Ease::Power2Out,
            Ease::Power3Out,
            Ease::Power2InOut,
            Ease::BackOut(1.7),
        ] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100).map(|i| Ease::BackOut(1.7).apply(i as f32 / 100.0)).fold(0.0f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn parses_named_eases() {
        assert_eq!("power3.out".parse::<Ease>().unwrap(), Ease::Power3Out);
        assert_eq!("back.out(1.7)".parse::<Ease>().unwrap(), Ease::BackOut(1.7));
        assert_eq!("power2.inOut".parse::<Ease>().unwrap(), Ease::Power2InOut);
        assert!("elastic".parse::<Ease>().is_err());
    }
}
