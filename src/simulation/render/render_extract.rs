use crate::render::{render_bodies, DrawStats, DrawSurface};
use crate::rigid_body_system::BodySnapshot;

use super::{FooterCore, PerfTimer};

/// Draw every body. After teardown the surface is not touched at all.
pub(super) fn render<S: DrawSurface>(footer: &mut FooterCore, surface: &mut S, images: &[S::Image]) -> DrawStats {
    if footer.destroyed {
        return DrawStats::default();
    }
    let t0 = if footer.perf_enabled { Some(PerfTimer::start()) } else { None };

    let blur = footer.glow.map(|g| g.blur(footer.clock_ms));
    let bounds = footer.world.bounds();
    let stats = render_bodies(surface, footer.world.bodies(), images, bounds.width, bounds.height, blur);

    if let Some(t0) = t0 {
        footer.perf_stats.render_ms = t0.elapsed_ms();
        footer.perf_stats.draw_calls = stats.drawn;
        footer.perf_stats.skipped_draws = stats.skipped;
    }
    stats
}

pub(super) fn snapshot(footer: &FooterCore) -> Vec<BodySnapshot> {
    if footer.destroyed {
        return Vec::new();
    }
    footer.world.snapshot()
}

pub(super) fn snapshot_json(footer: &FooterCore) -> String {
    serde_json::to_string(&snapshot(footer)).unwrap_or_else(|_| "[]".to_string())
}
