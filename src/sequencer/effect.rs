use crate::animation::Ease;
use crate::domain::Color;

/// Side effect requested by a trigger event. The page shell executes them.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    PlayMedia(u32),
    PauseMedia(u32),
    /// Assert a page background colour, tweened from the displayed one
    Background { color: Color, duration: f32, ease: Ease },
    /// Start the counter with this key
    StartCounter(String),
}

impl Effect {
    pub fn background(color: Color, duration: f32) -> Self {
        Effect::Background {
            color,
            duration,
            ease: Ease::default(),
        }
    }
}
