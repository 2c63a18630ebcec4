use crate::rigid_body::RigidBody;

use super::surface::{DrawSurface, ImageSource};

/// Per-frame draw counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub drawn: u32,
    /// Bodies without a ready image this frame
    pub skipped: u32,
}

/// Clear the surface and draw every dynamic body in creation order.
///
/// `glow_blur` is the current pulse blur; only bodies with a glow colour
/// use it. Static bodies (walls) are never drawn.
pub fn render_bodies<S: DrawSurface>(
    surface: &mut S,
    bodies: &[RigidBody],
    images: &[S::Image],
    width: f32,
    height: f32,
    glow_blur: Option<f32>,
) -> DrawStats {
    let mut stats = DrawStats::default();
    surface.clear(width, height);

    for body in bodies.iter().filter(|b| !b.is_static) {
        let image = match body.visual.image.and_then(|i| images.get(i)) {
            Some(img) if img.is_ready() => img,
            _ => {
                stats.skipped += 1;
                continue;
            }
        };

        let size = body.visual.drawn_size();
        surface.save();
        surface.translate(body.pos.x, body.pos.y);
        surface.rotate(body.angle);
        surface.set_alpha(body.visual.opacity);
        match (body.visual.glow, glow_blur) {
            (Some(color), Some(blur)) => surface.set_glow(Some(color), blur),
            _ => surface.set_glow(None, 0.0),
        }
        surface.draw_image(image, -size * 0.5, -size * 0.5, size, size);
        surface.restore();
        stats.drawn += 1;
    }

    stats
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::domain::Color;

    #[derive(Clone, Copy, Debug, PartialEq)]
    pub(crate) struct FakeImage {
        pub ready: bool,
        pub tag: u32,
    }

    impl ImageSource for FakeImage {
        fn is_ready(&self) -> bool {
            self.ready
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) enum Call {
        Clear,
        Draw { tag: u32, size: f32 },
        Glow(Option<Color>),
    }

    /// Records calls instead of drawing
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub calls: Vec<Call>,
        pub depth: i32,
    }

    impl RecordingSurface {
        pub(crate) fn draws(&self) -> Vec<u32> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Draw { tag, .. } => Some(*tag),
                    _ => None,
                })
                .collect()
        }
    }

    impl DrawSurface for RecordingSurface {
        type Image = FakeImage;

        fn clear(&mut self, _width: f32, _height: f32) {
            self.calls.push(Call::Clear);
        }
        fn save(&mut self) {
            self.depth += 1;
        }
        fn restore(&mut self) {
            self.depth -= 1;
        }
        fn translate(&mut self, _x: f32, _y: f32) {}
        fn rotate(&mut self, _angle: f32) {}
        fn set_alpha(&mut self, _alpha: f32) {}
        fn set_glow(&mut self, color: Option<Color>, _blur: f32) {
            self.calls.push(Call::Glow(color));
        }
        fn draw_image(&mut self, image: &FakeImage, _x: f32, _y: f32, width: f32, _height: f32) {
            self.calls.push(Call::Draw { tag: image.tag, size: width });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::domain::{Color, Material};
    use crate::rigid_body::{BodyKind, Vec2};

    fn body(id: u32, image: Option<usize>) -> RigidBody {
        let mut b = RigidBody::new(BodyKind::Circle { radius: 20.0 }, Vec2::new(100.0, 100.0), Material::FLOATING, id);
        b.visual.image = image;
        b
    }

    #[test]
    fn draws_in_creation_order_and_skips_unready() {
        let images = [
            FakeImage { ready: true, tag: 10 },
            FakeImage { ready: false, tag: 11 },
            FakeImage { ready: true, tag: 12 },
        ];
        let bodies = vec![body(1, Some(2)), body(2, Some(1)), body(3, Some(0)), body(4, None)];
        let mut surface = RecordingSurface::default();
        let stats = render_bodies(&mut surface, &bodies, &images, 800.0, 400.0, None);
        assert_eq!(stats, DrawStats { drawn: 2, skipped: 2 });
        assert_eq!(surface.draws(), vec![12, 10]);
        assert_eq!(surface.depth, 0);
    }

    #[test]
    fn hover_scale_grows_drawn_size() {
        let images = [FakeImage { ready: true, tag: 1 }];
        let mut b = body(1, Some(0));
        b.visual.scale = 1.5;
        let mut surface = RecordingSurface::default();
        render_bodies(&mut surface, &[b], &images, 800.0, 400.0, None);
        assert!(surface.calls.contains(&Call::Draw { tag: 1, size: 60.0 }));
    }

    #[test]
    fn glow_only_for_tagged_bodies() {
        let images = [FakeImage { ready: true, tag: 1 }];
        let mut tagged = body(1, Some(0));
        tagged.visual.glow = Some(Color::rgb(0xff, 0x64, 0x65));
        let plain = body(2, Some(0));
        let mut surface = RecordingSurface::default();
        render_bodies(&mut surface, &[tagged, plain], &images, 800.0, 400.0, Some(8.0));
        let glows: Vec<&Call> = surface.calls.iter().filter(|c| matches!(c, Call::Glow(_))).collect();
        assert_eq!(glows, vec![&Call::Glow(Some(Color::rgb(0xff, 0x64, 0x65))), &Call::Glow(None)]);
    }
}
