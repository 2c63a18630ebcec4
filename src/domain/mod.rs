//! Domain - configuration and static site content
//!
//! Everything here is plain data: serde-loadable with code defaults that
//! match the shipped site.

pub mod color;
pub mod config;
pub mod content;

pub use color::Color;
pub use config::{AmbientConfig, FooterConfig, GlowConfig, IconShape, IconSpec, Material, MaterialPreset, MotionConfig, PageConfig};
pub use content::{FeedCatalog, FeedItem, LogoCatalog, LogoEntry};
