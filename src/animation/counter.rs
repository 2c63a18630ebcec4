use super::easing::Ease;
use super::props::Prop;
use super::tween::Tween;

/// Number that animates from 0 to a target and is displayed as an integer.
#[derive(Clone, Debug)]
pub struct Counter {
    target: u32,
    tween: Tween,
    elapsed: f32,
    running: bool,
}

impl Counter {
    pub const DURATION: f32 = 2.0;

    pub fn new(id: &str, target: u32) -> Self {
        Self::with_duration(id, target, Self::DURATION)
    }

    pub fn with_duration(id: &str, target: u32, duration: f32) -> Self {
        Self {
            target,
            tween: Tween::from_to(id, Prop::Value, 0.0, target as f32, duration).ease(Ease::Power1Out),
            elapsed: 0.0,
            running: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.tween.target
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.tween.duration
    }

    /// Advance `dt` seconds and return the displayed value
    pub fn tick(&mut self, dt: f32) -> u32 {
        if self.running {
            self.elapsed += dt.max(0.0);
            if self.is_done() {
                self.running = false;
            }
        }
        self.display()
    }

    /// Floor of the eased value; exactly the target once finished
    pub fn display(&self) -> u32 {
        if self.is_done() {
            return self.target;
        }
        let v = self.tween.value_at(self.elapsed).floor();
        (v.max(0.0) as u32).min(self.target)
    }
}
