//! RigidBodySystem - small 2D rigid-body engine for the footer icons
//!
//! Current behavior:
//! - Four static, invisible walls enclose the canvas.
//! - Dynamic circles and boxes integrate gravity, accumulated forces and
//!   air friction once per fixed step.
//! - Contacts are resolved with impulses (restitution + friction) and a
//!   positional correction; boxes collide axis-aligned.
//! - After every step bodies outside the clamp interior are snapped back
//!   and stopped.

mod collision;
mod runner;
mod spawn;
mod system;
mod walls;

pub use runner::Runner;
pub use spawn::SpawnRegion;
pub use system::{BodySnapshot, PhysicsWorld, WorldBounds, GRAVITY_SCALE};
pub use walls::{wall_layout, WallLayout};
