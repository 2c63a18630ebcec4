//! Letter-by-letter and list reveals

use super::easing::Ease;
use super::props::Prop;
use super::timeline::{Position, Timeline};
use super::tween::Tween;

/// Element keys for every letter of `text`, as `"{line}/{index}"`.
/// Spaces get a key too so indices match the rendered spans.
pub fn split_letters(line: &str, text: &str) -> Vec<String> {
    text.chars().enumerate().map(|(i, _)| format!("{}/{}", line, i)).collect()
}

/// Letters rise `rise` px into place while fading in, one after another
pub fn letter_reveal(letters: &[String], rise: f32, duration: f32, stagger: f32, ease: Ease) -> Timeline {
    let mut tl = Timeline::new();
    let y = Tween::from_to("", Prop::Y, rise, 0.0, duration).ease(ease);
    let fade = Tween::from_to("", Prop::Opacity, 0.0, 1.0, duration).ease(ease);
    tl.stagger(letters, &y, stagger, Position::At(0.0));
    tl.stagger(letters, &fade, stagger, Position::At(0.0));
    tl
}

/// Cards fade in and widen from `scale_x_from` to full width
pub fn card_reveal(cards: &[String], scale_x_from: f32, duration: f32, stagger: f32, ease: Ease) -> Timeline {
    let mut tl = Timeline::new();
    let fade = Tween::from_to("", Prop::Opacity, 0.0, 1.0, duration).ease(ease);
    let widen = Tween::from_to("", Prop::ScaleX, scale_x_from, 1.0, duration).ease(ease);
    tl.stagger(cards, &fade, stagger, Position::At(0.0));
    tl.stagger(cards, &widen, stagger, Position::At(0.0));
    tl
}
