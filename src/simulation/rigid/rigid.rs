use crate::rigid_body::BodyKind;

use super::FooterCore;

pub(super) fn spawn_icon(footer: &mut FooterCore, icon_index: usize) -> Option<u32> {
    if footer.destroyed {
        return None;
    }
    let icon = footer.config.icons.get(icon_index)?;
    let kind = BodyKind::from(icon.shape);
    let size = icon.size;
    let glow = icon.glow;
    let material = footer.config.material.material();

    let pos = footer.world.spawn_region().random_point(&mut footer.rng);
    let id = footer.world.spawn_body(kind, pos, material);
    if let Some(body) = footer.world.body_mut(id) {
        body.visual.size = size;
        body.visual.image = Some(icon_index);
        body.visual.glow = glow;
    }
    Some(id)
}

pub(super) fn remove_body(footer: &mut FooterCore, id: u32) -> bool {
    if footer.pointer.grabbed() == Some(id) {
        footer.pointer.pointer_up();
    }
    footer.world.remove_body(id)
}
