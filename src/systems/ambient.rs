//! Ambient motion - a recurring task that nudges random bodies so the
//! footer never looks frozen.

use crate::core::Rng;
use crate::domain::AmbientConfig;
use crate::rigid_body::Vec2;
use crate::rigid_body_system::PhysicsWorld;

#[derive(Clone, Debug)]
pub struct AmbientMotion {
    config: AmbientConfig,
    elapsed_ms: f64,
    cancelled: bool,
    ticks: u64,
}

impl AmbientMotion {
    pub fn new(config: AmbientConfig) -> Self {
        Self {
            config,
            elapsed_ms: 0.0,
            cancelled: !config.enabled,
            ticks: 0,
        }
    }

    /// Advance the interval clock. On every elapsed interval each body
    /// receives a random force with the configured probability. Returns the
    /// number of bodies pushed.
    pub fn advance(&mut self, world: &mut PhysicsWorld, rng: &mut Rng, dt_ms: f64, has_interacted: bool) -> u32 {
        if self.cancelled || self.config.interval_ms <= 0.0 {
            return 0;
        }
        if has_interacted && self.config.stop_after_interaction {
            return 0;
        }

        self.elapsed_ms += dt_ms.max(0.0);
        let mut pushed = 0;
        while self.elapsed_ms >= self.config.interval_ms {
            self.elapsed_ms -= self.config.interval_ms;
            self.ticks += 1;
            pushed += self.tick(world, rng);
        }
        pushed
    }

    fn tick(&self, world: &mut PhysicsWorld, rng: &mut Rng) -> u32 {
        let f = self.config.force;
        let mut pushed = 0;
        for body in world.bodies_mut() {
            if body.is_static || !rng.chance(self.config.probability) {
                continue;
            }
            body.apply_force(Vec2::new(rng.range(-f, f), rng.range(-f, f)));
            pushed += 1;
        }
        pushed
    }

    /// Stop the recurring task for good
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_active(&self) -> bool {
        !self.cancelled
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Material;
    use crate::rigid_body::BodyKind;
    use crate::rigid_body_system::WorldBounds;

    fn world(n: usize) -> PhysicsWorld {
        let mut world = PhysicsWorld::new(
            WorldBounds {
                width: 1000.0,
                height: 600.0,
                spawn_margin: 100.0,
                clamp_margin: 30.0,
                wall_thickness: 100.0,
            },
            Vec2::zero(),
        );
        for i in 0..n {
            world.spawn_body(
                BodyKind::Circle { radius: 10.0 },
                Vec2::new(150.0 + 60.0 * i as f32, 300.0),
                Material::FLOATING,
            );
        }
        world
    }

    #[test]
    fn fires_once_per_interval() {
        let mut w = world(10);
        let mut rng = Rng::new(1);
        let mut ambient = AmbientMotion::new(AmbientConfig {
            probability: 1.0,
            ..AmbientConfig::default()
        });
        assert_eq!(ambient.advance(&mut w, &mut rng, 2_999.0, false), 0);
        assert_eq!(ambient.advance(&mut w, &mut rng, 1.0, false), 10);
        assert_eq!(ambient.ticks(), 1);
    }

    #[test]
    fn stops_after_user_interaction() {
        let mut w = world(3);
        let mut rng = Rng::new(1);
        let mut ambient = AmbientMotion::new(AmbientConfig {
            probability: 1.0,
            ..AmbientConfig::default()
        });
        assert_eq!(ambient.advance(&mut w, &mut rng, 10_000.0, true), 0);
    }

    #[test]
    fn cancelled_task_never_fires() {
        let mut w = world(3);
        let mut rng = Rng::new(1);
        let mut ambient = AmbientMotion::new(AmbientConfig::default());
        ambient.cancel();
        assert_eq!(ambient.advance(&mut w, &mut rng, 10_000.0, false), 0);
        assert!(!ambient.is_active());
    }
}
