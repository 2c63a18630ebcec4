/// Random number generator (xorshift32)
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Small deterministic RNG for spawn positions and ambient impulses
#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

impl Rng {
    /// Seed 0 is not a valid xorshift state; it is replaced by an entropy
    /// seed on wasm32 and by a fixed constant natively.
    pub fn new(seed: u32) -> Self {
        let state = if seed != 0 { seed } else { entropy_seed() };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }

    /// Uniform in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform in [min, max)
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.next_f32()
    }

    /// True with probability `p`
    pub fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }
}

#[cfg(target_arch = "wasm32")]
fn entropy_seed() -> u32 {
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u32;
    if seed == 0 { 12345 } else { seed }
}

#[cfg(not(target_arch = "wasm32"))]
fn entropy_seed() -> u32 {
    12345
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_f32_stays_in_unit_interval() {
        let mut rng = Rng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn zero_seed_is_replaced() {
        let mut rng = Rng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }
}
