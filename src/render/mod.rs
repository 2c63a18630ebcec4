//! Render bridge: physics bodies onto a 2D drawing surface

pub mod bridge;
pub mod glow;
pub mod surface;

pub use bridge::{render_bodies, DrawStats};
pub use glow::GlowPulse;
pub use surface::{DrawSurface, ImageSource};
