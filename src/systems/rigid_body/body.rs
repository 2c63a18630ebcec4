use crate::domain::{Color, IconShape, Material};

use super::vec2::Vec2;

/// Spawn-time shape descriptor (full sizes)
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyKind {
    Circle { radius: f32 },
    Rect { width: f32, height: f32 },
}

impl From<IconShape> for BodyKind {
    fn from(shape: IconShape) -> Self {
        match shape {
            IconShape::Circle { radius } => BodyKind::Circle { radius },
            IconShape::Rect { width, height } => BodyKind::Rect { width, height },
        }
    }
}

/// Collision shape in local space
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    Rect { half_width: f32, half_height: f32 },
}

impl Shape {
    pub fn area(&self) -> f32 {
        match *self {
            Shape::Circle { radius } => std::f32::consts::PI * radius * radius,
            Shape::Rect { half_width, half_height } => 4.0 * half_width * half_height,
        }
    }

    /// Radius of the smallest circle enclosing the shape
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            Shape::Circle { radius } => radius,
            Shape::Rect { half_width, half_height } => (half_width * half_width + half_height * half_height).sqrt(),
        }
    }
}

/// Per-body state consumed by the render bridge
#[derive(Clone, Debug, PartialEq)]
pub struct BodyVisual {
    /// Drawn edge length at scale 1.0
    pub size: f32,
    pub scale: f32,
    pub target_scale: f32,
    pub opacity: f32,
    /// Index into the host's icon image list
    pub image: Option<usize>,
    pub glow: Option<Color>,
    pub hovered: bool,
}

impl BodyVisual {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            scale: 1.0,
            target_scale: 1.0,
            opacity: 1.0,
            image: None,
            glow: None,
            hovered: false,
        }
    }

    /// Current drawn size including the hover scale
    pub fn drawn_size(&self) -> f32 {
        self.size * self.scale
    }
}

/// Rigid Body - moves as a single unit
#[derive(Clone, Debug)]
pub struct RigidBody {
    // === Physics State ===
    /// World position (centre of mass)
    pub pos: Vec2,
    /// Velocity (pixels per step)
    pub velocity: Vec2,
    /// Rotation angle (radians)
    pub angle: f32,
    /// Angular velocity (radians per step)
    pub angular_vel: f32,
    /// Force accumulated for the next step, cleared after integration
    pub force: Vec2,
    pub mass: f32,
    pub inv_mass: f32,
    pub inertia: f32,
    pub inv_inertia: f32,
    /// Walls are static: never integrated, infinite mass
    pub is_static: bool,
    pub id: u32,

    pub shape: Shape,
    pub material: Material,
    pub visual: BodyVisual,
}

impl RigidBody {
    /// Create a dynamic body
    pub fn new(kind: BodyKind, pos: Vec2, material: Material, id: u32) -> Self {
        let material = material.clamped();
        let shape = match kind {
            BodyKind::Circle { radius } => Shape::Circle { radius: radius.max(0.5) },
            BodyKind::Rect { width, height } => Shape::Rect {
                half_width: (width * 0.5).max(0.5),
                half_height: (height * 0.5).max(0.5),
            },
        };

        let mass = (shape.area() * material.density).max(1e-6);
        let inertia = match shape {
            // I = 1/2 m r²
            Shape::Circle { radius } => 0.5 * mass * radius * radius,
            // I = m (w² + h²) / 12
            Shape::Rect { half_width, half_height } => {
                mass * ((2.0 * half_width).powi(2) + (2.0 * half_height).powi(2)) / 12.0
            }
        }
        .max(1e-6);

        let size = match kind {
            BodyKind::Circle { radius } => radius * 2.0,
            BodyKind::Rect { width, height } => width.max(height),
        };

        Self {
            pos,
            velocity: Vec2::zero(),
            angle: 0.0,
            angular_vel: 0.0,
            force: Vec2::zero(),
            mass,
            inv_mass: 1.0 / mass,
            inertia,
            inv_inertia: 1.0 / inertia,
            is_static: false,
            id,
            shape,
            material,
            visual: BodyVisual::new(size),
        }
    }

    /// Create a static, invisible rectangle (boundary wall)
    pub fn new_static_rect(center: Vec2, width: f32, height: f32, id: u32) -> Self {
        let mut body = Self::new(BodyKind::Rect { width, height }, center, Material::default(), id);
        body.is_static = true;
        body.inv_mass = 0.0;
        body.inv_inertia = 0.0;
        body.visual.opacity = 0.0;
        body
    }

    /// Axis-aligned half extents of the collision shape (rotation ignored)
    pub fn half_extents(&self) -> Vec2 {
        match self.shape {
            Shape::Circle { radius } => Vec2::new(radius, radius),
            Shape::Rect { half_width, half_height } => Vec2::new(half_width, half_height),
        }
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        let local = (p - self.pos).rotate(-self.angle);
        match self.shape {
            Shape::Circle { radius } => local.length_squared() <= radius * radius,
            Shape::Rect { half_width, half_height } => local.x.abs() <= half_width && local.y.abs() <= half_height,
        }
    }

    /// Transform a local point to world coordinates
    #[inline]
    pub fn local_to_world(&self, local: Vec2) -> Vec2 {
        self.pos + local.rotate(self.angle)
    }

    /// Transform a world point to local coordinates
    #[inline]
    pub fn world_to_local(&self, world: Vec2) -> Vec2 {
        (world - self.pos).rotate(-self.angle)
    }

    /// Accumulate a force for the next step
    pub fn apply_force(&mut self, force: Vec2) {
        if !self.is_static {
            self.force += force;
        }
    }

    /// Apply impulse at centre of mass
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse * self.inv_mass;
    }

    /// Apply torque impulse
    pub fn apply_angular_impulse(&mut self, torque: f32) {
        self.angular_vel += torque * self.inv_inertia;
    }

    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Set restitution (bounciness)
    pub fn set_restitution(&mut self, r: f32) {
        self.material.restitution = r.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_walls_have_no_inverse_mass() {
        let wall = RigidBody::new_static_rect(Vec2::new(0.0, 0.0), 100.0, 10.0, 1);
        assert!(wall.is_static);
        assert_eq!(wall.inv_mass, 0.0);
        assert_eq!(wall.half_extents(), Vec2::new(50.0, 5.0));
    }

    #[test]
    fn contains_point_respects_rotation() {
        let mut body = RigidBody::new(BodyKind::Rect { width: 40.0, height: 10.0 }, Vec2::new(100.0, 100.0), Material::FLOATING, 1);
        assert!(body.contains_point(Vec2::new(118.0, 100.0)));
        body.angle = std::f32::consts::FRAC_PI_2;
        assert!(!body.contains_point(Vec2::new(118.0, 100.0)));
        assert!(body.contains_point(Vec2::new(100.0, 118.0)));
    }

    #[test]
    fn denser_material_means_heavier_body() {
        let light = RigidBody::new(BodyKind::Circle { radius: 20.0 }, Vec2::zero(), Material::FLOATING, 1);
        let heavy = RigidBody::new(BodyKind::Circle { radius: 20.0 }, Vec2::zero(), Material::BOUNCY, 2);
        assert!(heavy.mass > light.mass);
    }
}
