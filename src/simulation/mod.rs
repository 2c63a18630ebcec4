//! Footer - the interactive physics canvas
//!
//! `FooterCore` owns one physics world for the lifetime of a mounted
//! footer and orchestrates the per-frame order:
//! inputs -> ambient forces -> spring constraint -> fixed steps -> render.
//!
//! Physics lives in `rigid_body_system`, pointer handling in
//! `systems::pointer`, ambient motion in `systems::ambient` and drawing in
//! `render`. This module only wires them together and guards teardown.

use crate::core::{ListenerId, ListenerRegistry, Rng};
use crate::domain::FooterConfig;
use crate::render::GlowPulse;
use crate::rigid_body_system::{PhysicsWorld, Runner};
use crate::sequencer::GravityGate;
use crate::systems::ambient::AmbientMotion;
use crate::systems::pointer::PointerLayer;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "rigid/rigid.rs"]
mod rigid;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Footer;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

pub use crate::render::DrawStats;
pub use crate::rigid_body_system::BodySnapshot;

/// The mounted footer
pub struct FooterCore {
    config: FooterConfig,
    world: PhysicsWorld,
    runner: Runner,
    pointer: PointerLayer,
    ambient: AmbientMotion,
    gate: GravityGate,
    glow: Option<GlowPulse>,
    rng: Rng,

    // Listeners the host must keep attached while mounted
    listeners: ListenerRegistry,
    listener_ids: Vec<ListenerId>,

    // State
    clock_ms: f64,
    frame: u64,
    intersection_ratio: f32,
    destroyed: bool,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl FooterCore {
    /// Mount on a `width x height` surface. `None` when no surface is
    /// attached or it has no area; the footer then stays inert.
    pub fn mount(width: f32, height: f32, surface_attached: bool, config: FooterConfig) -> Option<Self> {
        init::create_footer_core(width, height, surface_attached, config)
    }

    pub fn config(&self) -> &FooterConfig {
        &self.config
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn width(&self) -> f32 {
        self.world.bounds().width
    }

    pub fn height(&self) -> f32 {
        self.world.bounds().height
    }

    pub fn body_count(&self) -> usize {
        self.world.body_count()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn has_interacted(&self) -> bool {
        self.pointer.has_interacted()
    }

    pub fn ambient_active(&self) -> bool {
        self.ambient.is_active()
    }

    // === SETTINGS ===

    pub fn gravity(&self) -> (f32, f32) {
        settings::gravity(self)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === EVENTS ===

    /// Footer visibility changed; gravity follows the ratio
    pub fn set_intersection_ratio(&mut self, ratio: f32) {
        commands::set_intersection_ratio(self, ratio);
    }

    pub fn intersection_ratio(&self) -> f32 {
        self.intersection_ratio
    }

    /// Returns the grabbed body id
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Option<u32> {
        commands::pointer_down(self, x, y)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        commands::pointer_move(self, x, y);
    }

    pub fn pointer_up(&mut self) {
        commands::pointer_up(self);
    }

    pub fn pointer_leave(&mut self) {
        commands::pointer_leave(self);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        commands::resize(self, width, height);
    }

    // === BODIES ===

    /// Spawn the configured icon at `icon_index` at a random point of the
    /// spawn region
    pub fn spawn_icon(&mut self, icon_index: usize) -> Option<u32> {
        rigid::spawn_icon(self, icon_index)
    }

    pub fn remove_body(&mut self, id: u32) -> bool {
        rigid::remove_body(self, id)
    }

    // === FRAME ===

    /// Advance by the elapsed wall time; returns physics steps taken
    pub fn frame_tick(&mut self, elapsed_ms: f64) -> u32 {
        step::frame(self, elapsed_ms)
    }

    pub fn render<S: crate::render::DrawSurface>(&mut self, surface: &mut S, images: &[S::Image]) -> DrawStats {
        render_extract::render(self, surface, images)
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        render_extract::snapshot(self)
    }

    pub fn snapshot_json(&self) -> String {
        render_extract::snapshot_json(self)
    }

    // === TEARDOWN ===

    /// Stop the runner, cancel ambient motion, detach listeners and drop
    /// every body. Safe to call more than once; returns false if already
    /// torn down.
    pub fn destroy(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        self.runner.stop();
        self.ambient.cancel();
        for id in self.listener_ids.drain(..) {
            self.listeners.remove(id);
        }
        self.pointer.pointer_leave(&mut self.world);
        self.world.clear();
        self.destroyed = true;
        motion_log!("[footer] destroyed after {} frames", self.frame);
        true
    }
}

impl Drop for FooterCore {
    fn drop(&mut self) {
        if !self.destroyed {
            self.destroy();
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
