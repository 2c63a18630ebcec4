use crate::core::{ListenerKind, ListenerRegistry, Rng};
use crate::domain::FooterConfig;
use crate::render::GlowPulse;
use crate::rigid_body::Vec2;
use crate::rigid_body_system::{PhysicsWorld, Runner, WorldBounds};
use crate::sequencer::GravityGate;
use crate::systems::ambient::AmbientMotion;
use crate::systems::pointer::{PointerLayer, PointerSettings};

use super::perf_stats::PerfStats;
use super::FooterCore;

pub(super) fn create_footer_core(
    width: f32,
    height: f32,
    surface_attached: bool,
    config: FooterConfig,
) -> Option<FooterCore> {
    if !surface_attached {
        motion_warn!("[footer] no canvas attached, skipping physics");
        return None;
    }
    if !(width > 0.0 && height > 0.0) {
        motion_warn!("[footer] canvas has no area ({}x{}), skipping physics", width, height);
        return None;
    }

    let bounds = WorldBounds {
        width,
        height,
        spawn_margin: config.spawn_margin,
        clamp_margin: config.clamp_margin,
        wall_thickness: config.wall_thickness,
    };
    // Gravity stays off until the footer reports enough visibility
    let world = PhysicsWorld::new(bounds, Vec2::zero());

    let mut listeners = ListenerRegistry::new();
    let mut listener_ids = vec![
        listeners.add(ListenerKind::PointerDown),
        listeners.add(ListenerKind::PointerMove),
        listeners.add(ListenerKind::PointerUp),
        listeners.add(ListenerKind::PointerLeave),
        listeners.add(ListenerKind::Resize),
        listeners.add(ListenerKind::Intersection),
        listeners.add(ListenerKind::AnimationFrame),
    ];
    if config.ambient.enabled {
        listener_ids.push(listeners.add(ListenerKind::Interval));
    }

    let mut core = FooterCore {
        runner: Runner::new(config.timestep_ms, config.max_substeps),
        pointer: PointerLayer::new(PointerSettings {
            stiffness: config.spring_stiffness,
            hover_radius: config.hover_radius,
            hover_scale: config.hover_scale,
            hover_ease: config.hover_ease,
        }),
        ambient: AmbientMotion::new(config.ambient),
        gate: GravityGate::new(config.gravity_threshold, config.gravity_on),
        glow: config.glow.map(GlowPulse::new),
        rng: Rng::new(config.seed),
        world,
        listeners,
        listener_ids,
        clock_ms: 0.0,
        frame: 0,
        intersection_ratio: 0.0,
        destroyed: false,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    };

    for i in 0..core.config.icons.len() {
        core.spawn_icon(i);
    }
    motion_log!("[footer] mounted {}x{} with {} bodies", width, height, core.body_count());

    Some(core)
}
