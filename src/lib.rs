//! Humaan Motion - footer physics and scroll-driven motion in WASM
//!
//! Architecture:
//! - core/        - logging macros, errors, listener bookkeeping, RNG
//! - domain/      - configuration and static site content
//! - animation/   - tweens, timelines, counters, letter reveals
//! - sequencer/   - scroll triggers, media autoplay, background theme
//! - systems/     - rigid bodies, pointer and ambient behaviours
//! - render/      - canvas draw bridge
//! - simulation/  - the footer orchestration and its JS facade
//! - page/        - section mounting and the page JS facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod animation;
pub mod sequencer;
pub mod systems;
pub mod render;
pub mod simulation;
pub mod page;

// Short paths used throughout the physics code
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    motion_log!("humaan-motion {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::MotionError;
pub use domain::{FooterConfig, MotionConfig, PageConfig};
pub use page::{PageCore, PageMotion, Section};
pub use simulation::{Footer, FooterCore};
