//! Tweens, timelines and counters driven by the scroll sequencer

pub mod counter;
pub mod easing;
pub mod props;
pub mod reveal;
pub mod timeline;
pub mod tween;

pub use counter::Counter;
pub use easing::Ease;
pub use props::{Prop, PropertyStore};
pub use timeline::{Direction, Position, Timeline};
pub use tween::Tween;
