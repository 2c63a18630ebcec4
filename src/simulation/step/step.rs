use super::{FooterCore, PerfTimer};

pub(super) fn frame(footer: &mut FooterCore, elapsed_ms: f64) -> u32 {
    if footer.destroyed || !footer.runner.is_running() {
        return 0;
    }
    let elapsed_ms = if elapsed_ms.is_finite() { elapsed_ms.max(0.0) } else { 0.0 };

    let perf_on = footer.perf_enabled;
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    footer.clock_ms += elapsed_ms;
    footer.frame += 1;

    // Inputs first: ambient impulses accumulate as forces for the next step
    let has_interacted = footer.pointer.has_interacted();
    footer
        .ambient
        .advance(&mut footer.world, &mut footer.rng, elapsed_ms, has_interacted);

    let steps = footer.runner.advance(elapsed_ms);
    let dt = footer.runner.timestep_ms() as f32;
    for _ in 0..steps {
        footer.pointer.apply_constraint(&mut footer.world);
        footer.world.step(dt);
    }
    footer.pointer.ease_visuals(&mut footer.world);

    if let Some(t0) = step_start {
        footer.perf_stats.step_ms = t0.elapsed_ms();
        footer.perf_stats.steps = steps;
        footer.perf_stats.bodies = footer.world.body_count() as u32;
        footer.perf_stats.frames = footer.frame;
    }
    steps
}
