use super::easing::Ease;
use super::props::Prop;

/// One property transition on one element
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub target: String,
    pub prop: Prop,
    pub from: f32,
    pub to: f32,
    /// Seconds
    pub duration: f32,
    /// Seconds before the transition starts (inside its slot)
    pub delay: f32,
    pub ease: Ease,
    /// Extra repetitions; -1 repeats forever
    pub repeat: i32,
    /// Alternate direction on every repetition
    pub yoyo: bool,
}

impl Tween {
    pub fn from_to(target: &str, prop: Prop, from: f32, to: f32, duration: f32) -> Self {
        Self {
            target: target.to_string(),
            prop,
            from,
            to,
            duration: duration.max(0.0),
            delay: 0.0,
            ease: Ease::default(),
            repeat: 0,
            yoyo: false,
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn repeat(mut self, repeat: i32, yoyo: bool) -> Self {
        self.repeat = repeat.max(-1);
        self.yoyo = yoyo;
        self
    }

    /// Delay plus every repetition; infinite for `repeat == -1`
    pub fn total_duration(&self) -> f32 {
        if self.repeat < 0 {
            f32::INFINITY
        } else {
            self.delay + self.duration * (self.repeat as f32 + 1.0)
        }
    }

    /// Value at `local` seconds after the tween's slot begins
    pub fn value_at(&self, local: f32) -> f32 {
        let t = local - self.delay;
        if t <= 0.0 {
            return self.from;
        }
        if self.duration <= 0.0 {
            return self.end_value();
        }

        let cycles = if self.repeat < 0 { u32::MAX as f32 } else { self.repeat as f32 + 1.0 };
        let raw = t / self.duration;
        if raw >= cycles - 1e-5 {
            return self.end_value();
        }

        let cycle = raw.floor();
        let mut p = raw - cycle;
        if self.yoyo && (cycle as u32) % 2 == 1 {
            p = 1.0 - p;
        }
        self.from + (self.to - self.from) * self.ease.apply(p)
    }

    /// Value once every repetition has played
    pub fn end_value(&self) -> f32 {
        if self.yoyo && self.repeat > 0 && self.repeat % 2 == 1 {
            self.from
        } else {
            self.to
        }
    }
}
