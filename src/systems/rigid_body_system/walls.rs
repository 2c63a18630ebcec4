use crate::rigid_body::Vec2;

/// Placement of one invisible boundary wall
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallLayout {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
}

/// Four walls sitting just outside the `width × height` canvas, each
/// `thickness` deep and overlapping at the corners so nothing leaks out.
pub fn wall_layout(width: f32, height: f32, thickness: f32) -> [WallLayout; 4] {
    let t = thickness.max(1.0);
    let half_t = t * 0.5;
    [
        // top
        WallLayout {
            center: Vec2::new(width * 0.5, -half_t),
            width: width + 2.0 * t,
            height: t,
        },
        // bottom
        WallLayout {
            center: Vec2::new(width * 0.5, height + half_t),
            width: width + 2.0 * t,
            height: t,
        },
        // left
        WallLayout {
            center: Vec2::new(-half_t, height * 0.5),
            width: t,
            height: height + 2.0 * t,
        },
        // right
        WallLayout {
            center: Vec2::new(width + half_t, height * 0.5),
            width: t,
            height: height + 2.0 * t,
        },
    ]
}
