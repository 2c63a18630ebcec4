use crate::core::Rng;
use crate::rigid_body::Vec2;

/// Margin-inset rectangle inside which bodies may be spawned
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRegion {
    pub min: Vec2,
    pub max: Vec2,
}

impl SpawnRegion {
    /// Region inset by `margin` from every edge. A canvas too small for the
    /// margin collapses to its centre point.
    pub fn inset(width: f32, height: f32, margin: f32) -> Self {
        let (min_x, max_x) = inset_axis(width, margin);
        let (min_y, max_y) = inset_axis(height, margin);
        Self {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }

    /// Strictly inside (never on the margin line itself)
    pub fn contains_strict(&self, p: Vec2) -> bool {
        let degenerate_x = self.min.x == self.max.x;
        let degenerate_y = self.min.y == self.max.y;
        let ok_x = if degenerate_x { p.x == self.min.x } else { p.x > self.min.x && p.x < self.max.x };
        let ok_y = if degenerate_y { p.y == self.min.y } else { p.y > self.min.y && p.y < self.max.y };
        ok_x && ok_y
    }

    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(self.min.x, self.max.x), p.y.clamp(self.min.y, self.max.y))
    }

    /// Uniform random point strictly inside the region
    pub fn random_point(&self, rng: &mut Rng) -> Vec2 {
        Vec2::new(open_range(rng, self.min.x, self.max.x), open_range(rng, self.min.y, self.max.y))
    }
}

fn inset_axis(extent: f32, margin: f32) -> (f32, f32) {
    let lo = margin;
    let hi = extent - margin;
    if hi > lo {
        (lo, hi)
    } else {
        let mid = extent * 0.5;
        (mid, mid)
    }
}

fn open_range(rng: &mut Rng, lo: f32, hi: f32) -> f32 {
    if hi <= lo {
        return lo;
    }
    // Keep a hair away from both bounds so the point is strictly inside
    let eps = ((hi - lo) * 1e-4).max(f32::EPSILON * hi.abs().max(1.0));
    rng.range(lo + eps, hi - eps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_points_are_strictly_inside_margin() {
        let region = SpawnRegion::inset(1200.0, 500.0, 100.0);
        let mut rng = Rng::new(99);
        for _ in 0..5_000 {
            let p = region.random_point(&mut rng);
            assert!(p.x > 100.0 && p.x < 1100.0, "x = {}", p.x);
            assert!(p.y > 100.0 && p.y < 400.0, "y = {}", p.y);
        }
    }

    #[test]
    fn tiny_canvas_collapses_to_centre() {
        let region = SpawnRegion::inset(150.0, 150.0, 100.0);
        let mut rng = Rng::new(3);
        assert_eq!(region.random_point(&mut rng), Vec2::new(75.0, 75.0));
    }
}
