//! Scroll- and visibility-driven sequencing
//!
//! Triggers watch the scroll offset against measured regions and fire
//! enter/leave events; the page shell turns those events into media
//! playback, timeline toggles and background colour changes.

pub mod effect;
pub mod gate;
pub mod media;
pub mod registry;
pub mod theme;
pub mod threshold;
pub mod toggle;
pub mod trigger;

pub use effect::Effect;
pub use gate::GravityGate;
pub use media::{AutoplayGuard, MediaElement, MediaSet, WebVideo};
pub use registry::{Fired, ScrubUpdate, TriggerRegistry};
pub use theme::ThemeService;
pub use threshold::{Anchor, Layout, Region, Threshold};
pub use toggle::{ToggleAction, ToggleActions};
pub use trigger::{Phase, Scrub, Trigger, TriggerEvent, TriggerId, TriggerSpec, Zone};
