/// Footer gravity as a function of how much of the footer is visible
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GravityGate {
    /// Intersection ratio at or above which gravity is on
    pub threshold: f32,
    /// gravity.y while on
    pub gravity_on: f32,
    last: Option<bool>,
}

impl GravityGate {
    pub fn new(threshold: f32, gravity_on: f32) -> Self {
        Self {
            threshold,
            gravity_on,
            last: None,
        }
    }

    /// Pure mapping ratio -> gravity vector
    pub fn gravity(&self, ratio: f32) -> (f32, f32) {
        if ratio >= self.threshold {
            (0.0, self.gravity_on)
        } else {
            (0.0, 0.0)
        }
    }

    /// Gravity for `ratio`, plus whether the on/off state flipped
    pub fn observe(&mut self, ratio: f32) -> ((f32, f32), bool) {
        let on = ratio >= self.threshold;
        let changed = self.last != Some(on);
        self.last = Some(on);
        (self.gravity(ratio), changed)
    }
}
