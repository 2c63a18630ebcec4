//! Pointer interaction: drag-and-fling through a spring constraint, and
//! hover emphasis by proximity.
//!
//! Hover uses one threshold for both directions (`distance < radius`), so a
//! pointer resting exactly on the radius may flicker between states.

use crate::rigid_body::Vec2;
use crate::rigid_body_system::PhysicsWorld;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSettings {
    pub stiffness: f32,
    pub hover_radius: f32,
    pub hover_scale: f32,
    pub hover_ease: f32,
}

impl Default for PointerSettings {
    fn default() -> Self {
        Self {
            stiffness: 0.2,
            hover_radius: 80.0,
            hover_scale: 1.2,
            hover_ease: 0.15,
        }
    }
}

/// Body grabbed by the pointer, held by a soft spring
#[derive(Clone, Copy, Debug, PartialEq)]
struct Grab {
    body: u32,
    /// Grab point in the body's local space
    local_anchor: Vec2,
}

#[derive(Clone, Debug)]
pub struct PointerLayer {
    settings: PointerSettings,
    grab: Option<Grab>,
    pointer: Option<Vec2>,
    has_interacted: bool,
}

impl PointerLayer {
    pub fn new(settings: PointerSettings) -> Self {
        Self {
            settings,
            grab: None,
            pointer: None,
            has_interacted: false,
        }
    }

    /// True once the user has grabbed any body; never resets
    pub fn has_interacted(&self) -> bool {
        self.has_interacted
    }

    pub fn grabbed(&self) -> Option<u32> {
        self.grab.map(|g| g.body)
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Returns the grabbed body id, if the pointer went down over one
    pub fn pointer_down(&mut self, world: &PhysicsWorld, p: Vec2) -> Option<u32> {
        self.pointer = Some(p);
        let id = world.body_at(p)?;
        let body = world.body(id)?;
        self.grab = Some(Grab {
            body: id,
            local_anchor: body.world_to_local(p),
        });
        self.has_interacted = true;
        Some(id)
    }

    pub fn pointer_move(&mut self, world: &mut PhysicsWorld, p: Vec2) {
        self.pointer = Some(p);
        self.update_hover(world, p);
    }

    /// Release keeps the body's current velocity, which flings it
    pub fn pointer_up(&mut self) {
        self.grab = None;
    }

    pub fn pointer_leave(&mut self, world: &mut PhysicsWorld) {
        self.grab = None;
        self.pointer = None;
        for body in world.bodies_mut() {
            body.visual.hovered = false;
            body.visual.target_scale = 1.0;
        }
    }

    /// Spring pull toward the pointer. Call once before each physics step.
    pub fn apply_constraint(&mut self, world: &mut PhysicsWorld) {
        let (Some(grab), Some(pointer)) = (self.grab, self.pointer) else {
            return;
        };
        let Some(body) = world.body_mut(grab.body) else {
            // grabbed body was removed
            self.grab = None;
            return;
        };
        let anchor = body.local_to_world(grab.local_anchor);
        let delta = pointer - anchor;
        body.velocity = delta * self.settings.stiffness;
        body.angular_vel *= 0.9;
    }

    fn update_hover(&mut self, world: &mut PhysicsWorld, p: Vec2) {
        let radius = self.settings.hover_radius;
        for body in world.bodies_mut() {
            if body.is_static {
                continue;
            }
            let hovered = body.pos.distance(p) < radius;
            body.visual.hovered = hovered;
            body.visual.target_scale = if hovered { self.settings.hover_scale } else { 1.0 };
        }
    }

    /// Per-frame smoothing of the hover scale toward its target
    pub fn ease_visuals(&self, world: &mut PhysicsWorld) {
        let k = self.settings.hover_ease.clamp(0.0, 1.0);
        for body in world.bodies_mut() {
            let v = &mut body.visual;
            let gap = v.target_scale - v.scale;
            if gap.abs() < 0.001 {
                v.scale = v.target_scale;
            } else {
                v.scale += gap * k;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Material;
    use crate::rigid_body::BodyKind;
    use crate::rigid_body_system::WorldBounds;

    fn world_with_ball() -> (PhysicsWorld, u32) {
        let mut world = PhysicsWorld::new(
            WorldBounds {
                width: 800.0,
                height: 400.0,
                spawn_margin: 100.0,
                clamp_margin: 30.0,
                wall_thickness: 100.0,
            },
            Vec2::zero(),
        );
        let id = world.spawn_body(BodyKind::Circle { radius: 20.0 }, Vec2::new(400.0, 200.0), Material::FLOATING);
        (world, id)
    }

    #[test]
    fn grab_sets_interaction_flag_and_drags_with_lag() {
        let (mut world, id) = world_with_ball();
        let mut pointer = PointerLayer::new(PointerSettings::default());
        assert!(!pointer.has_interacted());

        assert_eq!(pointer.pointer_down(&world, Vec2::new(405.0, 200.0)), Some(id));
        assert!(pointer.has_interacted());

        pointer.pointer_move(&mut world, Vec2::new(505.0, 200.0));
        pointer.apply_constraint(&mut world);
        world.step(1000.0 / 60.0);
        let x = world.body(id).unwrap().pos.x;
        // follows, but not rigidly
        assert!(x > 400.0 && x < 500.0, "x = {}", x);

        pointer.pointer_up();
        assert_eq!(pointer.grabbed(), None);
        assert!(pointer.has_interacted());
        // fling: still moving after release
        assert!(world.body(id).unwrap().velocity.x > 0.0);
    }

    #[test]
    fn pointer_down_on_empty_space_grabs_nothing() {
        let (world, _) = world_with_ball();
        let mut pointer = PointerLayer::new(PointerSettings::default());
        assert_eq!(pointer.pointer_down(&world, Vec2::new(100.0, 100.0)), None);
        assert!(!pointer.has_interacted());
    }

    #[test]
    fn hover_uses_single_threshold() {
        let (mut world, id) = world_with_ball();
        let mut pointer = PointerLayer::new(PointerSettings::default());

        pointer.pointer_move(&mut world, Vec2::new(479.0, 200.0));
        assert!(world.body(id).unwrap().visual.hovered);

        pointer.pointer_move(&mut world, Vec2::new(480.0, 200.0));
        assert!(!world.body(id).unwrap().visual.hovered);
    }

    #[test]
    fn hover_scale_eases_up_and_back() {
        let (mut world, id) = world_with_ball();
        let mut pointer = PointerLayer::new(PointerSettings::default());

        pointer.pointer_move(&mut world, Vec2::new(400.0, 200.0));
        pointer.ease_visuals(&mut world);
        let first = world.body(id).unwrap().visual.scale;
        assert!(first > 1.0 && first < 1.2);
        for _ in 0..200 {
            pointer.ease_visuals(&mut world);
        }
        assert_eq!(world.body(id).unwrap().visual.scale, 1.2);

        pointer.pointer_leave(&mut world);
        for _ in 0..200 {
            pointer.ease_visuals(&mut world);
        }
        assert_eq!(world.body(id).unwrap().visual.scale, 1.0);
    }
}
