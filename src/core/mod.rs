//! Core - shared plumbing for every subsystem
//!
//! - log        - console logging macros (browser console on wasm32, stderr natively)
//! - error      - error taxonomy for the decorative features
//! - listeners  - explicit bookkeeping of host event listeners
//! - random     - xorshift32 RNG used for spawns and ambient motion

// Macros first so every later module can use them
#[macro_use]
pub mod log;
pub mod error;
pub mod listeners;
pub mod random;

pub use error::MotionError;
pub use listeners::{ListenerId, ListenerKind, ListenerRegistry};
pub use random::Rng;
