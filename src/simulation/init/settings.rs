use crate::rigid_body::Vec2;

use super::perf_stats::PerfStats;
use super::FooterCore;

pub(super) fn gravity(footer: &FooterCore) -> (f32, f32) {
    let g = footer.world.gravity();
    (g.x, g.y)
}

pub(super) fn set_gravity(footer: &mut FooterCore, x: f32, y: f32) {
    if footer.destroyed {
        return;
    }
    footer.world.set_gravity(Vec2::new(x, y));
}

pub(super) fn enable_perf_metrics(footer: &mut FooterCore, enabled: bool) {
    footer.perf_enabled = enabled;
    if !enabled {
        footer.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(footer: &FooterCore) -> PerfStats {
    footer.perf_stats.clone()
}
