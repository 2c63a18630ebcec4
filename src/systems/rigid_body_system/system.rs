use serde::Serialize;

use crate::domain::Material;
use crate::rigid_body::{BodyKind, RigidBody, Vec2};

use super::collision::{contact, resolve};
use super::spawn::SpawnRegion;
use super::walls::wall_layout;

/// Converts gravity units into px/ms² (a gravity of 1.0 is "earth-like"
/// for pixel-sized scenes).
pub const GRAVITY_SCALE: f32 = 0.001;

/// Boundary geometry of a world
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
    /// Spawn region inset
    pub spawn_margin: f32,
    /// Post-step clamp inset
    pub clamp_margin: f32,
    pub wall_thickness: f32,
}

/// Per-frame transform of one dynamic body
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub scale: f32,
    pub opacity: f32,
    pub hovered: bool,
}

/// Bounded 2D world: invisible walls plus the decorative dynamic bodies
pub struct PhysicsWorld {
    bounds: WorldBounds,
    /// Dynamic bodies in creation order (also the draw order)
    bodies: Vec<RigidBody>,
    walls: Vec<RigidBody>,
    gravity: Vec2,
    next_id: u32,
}

impl PhysicsWorld {
    pub fn new(bounds: WorldBounds, gravity: Vec2) -> Self {
        let mut world = Self {
            bounds,
            bodies: Vec::new(),
            walls: Vec::with_capacity(4),
            gravity,
            next_id: 1,
        };
        world.build_walls();
        world
    }

    fn build_walls(&mut self) {
        self.walls.clear();
        for layout in wall_layout(self.bounds.width, self.bounds.height, self.bounds.wall_thickness) {
            let id = self.alloc_id();
            self.walls
                .push(RigidBody::new_static_rect(layout.center, layout.width, layout.height, id));
        }
    }

    fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn spawn_region(&self) -> SpawnRegion {
        SpawnRegion::inset(self.bounds.width, self.bounds.height, self.bounds.spawn_margin)
    }

    /// Add a dynamic body. The position is pulled into the spawn region so
    /// a body can never start inside wall geometry. Returns the body id.
    pub fn spawn_body(&mut self, kind: BodyKind, position: Vec2, material: Material) -> u32 {
        let pos = self.spawn_region().clamp(position);
        let id = self.alloc_id();
        self.bodies.push(RigidBody::new(kind, pos, material, id));
        id
    }

    /// Remove a dynamic body by id. Walls cannot be removed.
    pub fn remove_body(&mut self, id: u32) -> bool {
        match self.bodies.iter().position(|b| b.id == id) {
            Some(idx) => {
                // keep creation order for drawing
                self.bodies.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove all dynamic bodies
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [RigidBody] {
        &mut self.bodies
    }

    pub fn walls(&self) -> &[RigidBody] {
        &self.walls
    }

    pub fn body(&self, id: u32) -> Option<&RigidBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_mut(&mut self, id: u32) -> Option<&mut RigidBody> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Takes effect on the next step
    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    pub fn apply_force(&mut self, id: u32, force: Vec2) -> bool {
        match self.body_mut(id) {
            Some(body) => {
                body.apply_force(force);
                true
            }
            None => false,
        }
    }

    pub fn set_position(&mut self, id: u32, pos: Vec2) -> bool {
        match self.body_mut(id) {
            Some(body) => {
                body.set_position(pos);
                true
            }
            None => false,
        }
    }

    pub fn set_velocity(&mut self, id: u32, velocity: Vec2) -> bool {
        match self.body_mut(id) {
            Some(body) => {
                body.set_velocity(velocity);
                true
            }
            None => false,
        }
    }

    /// Topmost body under a point (last created wins, as it draws last)
    pub fn body_at(&self, p: Vec2) -> Option<u32> {
        self.bodies.iter().rev().find(|b| b.contains_point(p)).map(|b| b.id)
    }

    /// Canvas resized: walls are rebuilt from the new dimensions with zero
    /// velocity and bodies are pulled back inside the new interior.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds.width = width.max(1.0);
        self.bounds.height = height.max(1.0);
        for (wall, layout) in self
            .walls
            .iter_mut()
            .zip(wall_layout(self.bounds.width, self.bounds.height, self.bounds.wall_thickness))
        {
            *wall = RigidBody::new_static_rect(layout.center, layout.width, layout.height, wall.id);
            wall.set_velocity(Vec2::zero());
        }
        self.clamp_bodies();
    }

    /// Advance the simulation by one fixed step of `dt_ms` milliseconds
    pub fn step(&mut self, dt_ms: f32) {
        let dt_sq = dt_ms * dt_ms;
        let gravity_accel = self.gravity * (GRAVITY_SCALE * dt_sq);

        for body in self.bodies.iter_mut() {
            if body.is_static {
                continue;
            }
            let damping = 1.0 - body.material.air_friction;
            body.velocity = body.velocity * damping + gravity_accel + body.force * (body.inv_mass * dt_sq);
            body.pos += body.velocity;
            body.angular_vel *= damping;
            body.angle += body.angular_vel;
            body.force = Vec2::zero();
        }

        self.resolve_collisions();
        self.clamp_bodies();
    }

    fn resolve_collisions(&mut self) {
        let n = self.bodies.len();
        for i in 0..n {
            // body vs body
            for j in (i + 1)..n {
                let (left, right) = self.bodies.split_at_mut(j);
                let a = &mut left[i];
                let b = &mut right[0];
                if let Some(c) = contact(a, b) {
                    resolve(a, b, c);
                }
            }
            // body vs walls
            let body = &mut self.bodies[i];
            for wall in self.walls.iter_mut() {
                if let Some(c) = contact(body, wall) {
                    resolve(body, wall, c);
                }
            }
        }
    }

    /// Bodies that left the interior (margin from each edge) are snapped
    /// back and stopped. The canvas is smaller than the unconstrained
    /// simulation space, so this keeps every body drawable.
    fn clamp_bodies(&mut self) {
        let m = self.bounds.clamp_margin;
        let (min_x, max_x) = clamp_axis(self.bounds.width, m);
        let (min_y, max_y) = clamp_axis(self.bounds.height, m);
        for body in self.bodies.iter_mut() {
            let p = body.pos;
            if p.x < min_x || p.x > max_x || p.y < min_y || p.y > max_y || !p.x.is_finite() || !p.y.is_finite() {
                let x = if p.x.is_finite() { p.x.clamp(min_x, max_x) } else { (min_x + max_x) * 0.5 };
                let y = if p.y.is_finite() { p.y.clamp(min_y, max_y) } else { (min_y + max_y) * 0.5 };
                body.pos = Vec2::new(x, y);
                body.velocity = Vec2::zero();
            }
        }
    }

    /// Interior rectangle every body centre is kept in after a step
    pub fn clamp_interior(&self) -> (Vec2, Vec2) {
        let (min_x, max_x) = clamp_axis(self.bounds.width, self.bounds.clamp_margin);
        let (min_y, max_y) = clamp_axis(self.bounds.height, self.bounds.clamp_margin);
        (Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies
            .iter()
            .map(|b| BodySnapshot {
                id: b.id,
                x: b.pos.x,
                y: b.pos.y,
                angle: b.angle,
                scale: b.visual.scale,
                opacity: b.visual.opacity,
                hovered: b.visual.hovered,
            })
            .collect()
    }
}

fn clamp_axis(extent: f32, margin: f32) -> (f32, f32) {
    if extent - margin > margin {
        (margin, extent - margin)
    } else {
        let mid = extent * 0.5;
        (mid, mid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> WorldBounds {
        WorldBounds {
            width: 800.0,
            height: 400.0,
            spawn_margin: 100.0,
            clamp_margin: 30.0,
            wall_thickness: 100.0,
        }
    }

    #[test]
    fn world_has_four_static_walls() {
        let world = PhysicsWorld::new(bounds(), Vec2::zero());
        assert_eq!(world.walls().len(), 4);
        assert!(world.walls().iter().all(|w| w.is_static));
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn spawn_position_is_pulled_into_safe_region() {
        let mut world = PhysicsWorld::new(bounds(), Vec2::zero());
        let id = world.spawn_body(BodyKind::Circle { radius: 20.0 }, Vec2::new(-50.0, 1000.0), Material::FLOATING);
        let body = world.body(id).unwrap();
        assert_eq!(body.pos, Vec2::new(100.0, 300.0));
    }

    #[test]
    fn gravity_pulls_bodies_down() {
        let mut world = PhysicsWorld::new(bounds(), Vec2::new(0.0, 1.0));
        let id = world.spawn_body(BodyKind::Circle { radius: 20.0 }, Vec2::new(400.0, 150.0), Material::FLOATING);
        for _ in 0..10 {
            world.step(1000.0 / 60.0);
        }
        assert!(world.body(id).unwrap().pos.y > 150.0);
    }

    #[test]
    fn zero_gravity_keeps_resting_body_still() {
        let mut world = PhysicsWorld::new(bounds(), Vec2::zero());
        let id = world.spawn_body(BodyKind::Rect { width: 40.0, height: 40.0 }, Vec2::new(400.0, 200.0), Material::FLOATING);
        for _ in 0..60 {
            world.step(1000.0 / 60.0);
        }
        assert_eq!(world.body(id).unwrap().pos, Vec2::new(400.0, 200.0));
    }

    #[test]
    fn body_teleported_outside_is_clamped_and_stopped() {
        let mut world = PhysicsWorld::new(bounds(), Vec2::zero());
        let id = world.spawn_body(BodyKind::Circle { radius: 10.0 }, Vec2::new(400.0, 200.0), Material::FLOATING);
        world.set_position(id, Vec2::new(5_000.0, -5_000.0));
        world.set_velocity(id, Vec2::new(30.0, -30.0));
        world.step(1000.0 / 60.0);
        let body = world.body(id).unwrap();
        assert_eq!(body.pos, Vec2::new(770.0, 30.0));
        assert_eq!(body.velocity, Vec2::zero());
    }

    #[test]
    fn resize_moves_walls_and_keeps_ids() {
        let mut world = PhysicsWorld::new(bounds(), Vec2::zero());
        let ids: Vec<u32> = world.walls().iter().map(|w| w.id).collect();
        world.resize(1200.0, 600.0);
        let bottom = &world.walls()[1];
        assert_eq!(bottom.pos, Vec2::new(600.0, 650.0));
        assert_eq!(bottom.velocity, Vec2::zero());
        let after: Vec<u32> = world.walls().iter().map(|w| w.id).collect();
        assert_eq!(ids, after);
    }

    #[test]
    fn force_is_consumed_by_one_step() {
        let mut world = PhysicsWorld::new(bounds(), Vec2::zero());
        let id = world.spawn_body(BodyKind::Circle { radius: 20.0 }, Vec2::new(400.0, 200.0), Material::FLOATING);
        assert!(world.apply_force(id, Vec2::new(0.01, 0.0)));
        world.step(1000.0 / 60.0);
        let body = world.body(id).unwrap();
        assert!(body.velocity.x > 0.0);
        assert_eq!(body.force, Vec2::zero());
        assert!(!world.apply_force(9_999, Vec2::new(1.0, 0.0)));
    }
}
