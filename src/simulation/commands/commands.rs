use crate::rigid_body::Vec2;

use super::FooterCore;

pub(super) fn set_intersection_ratio(footer: &mut FooterCore, ratio: f32) {
    if footer.destroyed {
        return;
    }
    let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 };
    footer.intersection_ratio = ratio;
    let ((gx, gy), changed) = footer.gate.observe(ratio);
    footer.world.set_gravity(Vec2::new(gx, gy));
    if changed {
        motion_log!("[footer] gravity {} at ratio {:.2}", if gy != 0.0 { "on" } else { "off" }, ratio);
    }
}

pub(super) fn pointer_down(footer: &mut FooterCore, x: f32, y: f32) -> Option<u32> {
    if footer.destroyed {
        return None;
    }
    footer.pointer.pointer_down(&footer.world, Vec2::new(x, y))
}

pub(super) fn pointer_move(footer: &mut FooterCore, x: f32, y: f32) {
    if footer.destroyed {
        return;
    }
    footer.pointer.pointer_move(&mut footer.world, Vec2::new(x, y));
}

pub(super) fn pointer_up(footer: &mut FooterCore) {
    footer.pointer.pointer_up();
}

pub(super) fn pointer_leave(footer: &mut FooterCore) {
    if footer.destroyed {
        return;
    }
    footer.pointer.pointer_leave(&mut footer.world);
}

pub(super) fn resize(footer: &mut FooterCore, width: f32, height: f32) {
    if footer.destroyed || !(width > 0.0 && height > 0.0) {
        return;
    }
    footer.world.resize(width, height);
}
