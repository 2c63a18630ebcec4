use crate::rigid_body::{RigidBody, Shape, Vec2};

/// Penetration positional-correction share and tolerated overlap
const CORRECTION_PERCENT: f32 = 0.8;
const CORRECTION_SLOP: f32 = 0.01;

/// Contact between two bodies; `normal` points from `a` towards `b`
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Contact {
    pub normal: Vec2,
    pub depth: f32,
}

/// Narrow phase. Boxes collide as axis-aligned boxes (their rotation is a
/// visual effect only); circles are exact.
pub(super) fn contact(a: &RigidBody, b: &RigidBody) -> Option<Contact> {
    // Bounding circle reject
    let reach = a.shape.bounding_radius() + b.shape.bounding_radius();
    if (b.pos - a.pos).length_squared() > reach * reach {
        return None;
    }

    match (a.shape, b.shape) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => circle_circle(a.pos, ra, b.pos, rb),
        (Shape::Circle { radius }, Shape::Rect { .. }) => circle_box(a.pos, radius, b.pos, b.half_extents()),
        (Shape::Rect { .. }, Shape::Circle { radius }) => {
            circle_box(b.pos, radius, a.pos, a.half_extents()).map(|c| Contact { normal: -c.normal, depth: c.depth })
        }
        (Shape::Rect { .. }, Shape::Rect { .. }) => box_box(a.pos, a.half_extents(), b.pos, b.half_extents()),
    }
}

fn circle_circle(pa: Vec2, ra: f32, pb: Vec2, rb: f32) -> Option<Contact> {
    let d = pb - pa;
    let dist2 = d.length_squared();
    let r = ra + rb;
    if dist2 >= r * r {
        return None;
    }
    let dist = dist2.sqrt();
    let normal = if dist > 0.0001 { d * (1.0 / dist) } else { Vec2::new(0.0, 1.0) };
    Some(Contact { normal, depth: r - dist })
}

fn circle_box(pc: Vec2, radius: f32, pb: Vec2, half: Vec2) -> Option<Contact> {
    let rel = pc - pb;
    let closest = Vec2::new(rel.x.clamp(-half.x, half.x), rel.y.clamp(-half.y, half.y));
    let inside = closest == rel;

    if inside {
        // Centre inside the box: push out along the shallowest axis
        let dx = half.x - rel.x.abs();
        let dy = half.y - rel.y.abs();
        let (normal, depth) = if dx < dy {
            (Vec2::new(if rel.x < 0.0 { 1.0 } else { -1.0 }, 0.0), dx + radius)
        } else {
            (Vec2::new(0.0, if rel.y < 0.0 { 1.0 } else { -1.0 }), dy + radius)
        };
        return Some(Contact { normal, depth });
    }

    let diff = rel - closest;
    let dist2 = diff.length_squared();
    if dist2 >= radius * radius {
        return None;
    }
    let dist = dist2.sqrt();
    // Normal from circle towards box
    let normal = if dist > 0.0001 { -(diff * (1.0 / dist)) } else { Vec2::new(0.0, 1.0) };
    Some(Contact { normal, depth: radius - dist })
}

fn box_box(pa: Vec2, ha: Vec2, pb: Vec2, hb: Vec2) -> Option<Contact> {
    let d = pb - pa;
    let ox = ha.x + hb.x - d.x.abs();
    let oy = ha.y + hb.y - d.y.abs();
    if ox <= 0.0 || oy <= 0.0 {
        return None;
    }
    if ox < oy {
        Some(Contact { normal: Vec2::new(if d.x < 0.0 { -1.0 } else { 1.0 }, 0.0), depth: ox })
    } else {
        Some(Contact { normal: Vec2::new(0.0, if d.y < 0.0 { -1.0 } else { 1.0 }), depth: oy })
    }
}

/// Impulse resolution with restitution and friction, plus positional
/// correction so resting bodies do not sink into walls.
pub(super) fn resolve(a: &mut RigidBody, b: &mut RigidBody, c: Contact) {
    let inv_sum = a.inv_mass + b.inv_mass;
    if inv_sum <= 0.0 {
        return;
    }

    let correction = c.normal * ((c.depth - CORRECTION_SLOP).max(0.0) / inv_sum * CORRECTION_PERCENT);
    a.pos -= correction * a.inv_mass;
    b.pos += correction * b.inv_mass;

    let rv = b.velocity - a.velocity;
    let vn = rv.dot(c.normal);
    if vn > 0.0 {
        return;
    }

    let e = a.material.restitution.max(b.material.restitution);
    let j = -(1.0 + e) * vn / inv_sum;
    let impulse = c.normal * j;
    a.velocity -= impulse * a.inv_mass;
    b.velocity += impulse * b.inv_mass;

    // Friction along the contact tangent
    let rv = b.velocity - a.velocity;
    let tangent = (rv - c.normal * rv.dot(c.normal)).normalize();
    if tangent == Vec2::zero() {
        return;
    }
    let mu = (a.material.friction * b.material.friction).sqrt();
    let jt = (-rv.dot(tangent) / inv_sum).clamp(-j * mu, j * mu);
    let friction = tangent * jt;
    a.velocity -= friction * a.inv_mass;
    b.velocity += friction * b.inv_mass;

    // Tangential impulse at the contact arm spins the bodies
    let arm_a = c.normal * a.shape.bounding_radius();
    let arm_b = -c.normal * b.shape.bounding_radius();
    a.apply_angular_impulse(-arm_a.cross(friction));
    b.apply_angular_impulse(arm_b.cross(friction));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Material;
    use crate::rigid_body::BodyKind;

    fn circle(x: f32, y: f32, r: f32) -> RigidBody {
        RigidBody::new(BodyKind::Circle { radius: r }, Vec2::new(x, y), Material::BOUNCY, 1)
    }

    #[test]
    fn overlapping_circles_report_depth_along_centres() {
        let a = circle(0.0, 0.0, 10.0);
        let b = circle(15.0, 0.0, 10.0);
        let c = contact(&a, &b).unwrap();
        assert_eq!(c.normal, Vec2::new(1.0, 0.0));
        assert!((c.depth - 5.0).abs() < 1e-4);
        assert!(contact(&a, &circle(25.0, 0.0, 10.0)).is_none());
    }

    #[test]
    fn circle_resting_on_wall_points_down_into_it() {
        let ball = circle(50.0, 95.0, 10.0);
        let wall = RigidBody::new_static_rect(Vec2::new(50.0, 150.0), 200.0, 100.0, 2);
        let c = contact(&ball, &wall).unwrap();
        assert_eq!(c.normal, Vec2::new(0.0, 1.0));
        assert!((c.depth - 5.0).abs() < 1e-4);
    }

    #[test]
    fn head_on_bounce_reverses_velocity() {
        let mut ball = circle(50.0, 95.0, 10.0);
        ball.velocity = Vec2::new(0.0, 4.0);
        let mut wall = RigidBody::new_static_rect(Vec2::new(50.0, 150.0), 200.0, 100.0, 2);
        let c = contact(&ball, &wall).unwrap();
        resolve(&mut ball, &mut wall, c);
        assert!(ball.velocity.y < 0.0);
        assert!(ball.pos.y < 95.0);
        assert_eq!(wall.pos, Vec2::new(50.0, 150.0));
    }
}
