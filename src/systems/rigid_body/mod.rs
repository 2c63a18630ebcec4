//! RigidBody - a decorative icon or an invisible wall
//!
//! Bodies keep their shape in local coordinates (centred at 0,0) and carry
//! the visual state the render bridge reads each frame.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::{BodyKind, BodyVisual, RigidBody, Shape};
