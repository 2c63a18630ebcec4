//! Error taxonomy
//!
//! None of these are fatal to the page. Each one disables or degrades a
//! single decorative feature and is handled where it occurs.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    /// Image, video or script asset could not be loaded
    #[error("asset failed to load: {src}")]
    AssetLoad {
        src: String,
    },

    /// The platform refused unsolicited media playback
    #[error("autoplay blocked for media {media}")]
    AutoplayBlocked {
        media: u32,
    },

    /// A trigger or observer referenced a region that is not laid out
    #[error("missing target region '{region}'")]
    MissingTarget {
        region: String,
    },

    /// Static data could not be fetched or decoded
    #[error("failed to load {resource}: {reason}")]
    DataFetch {
        resource: &'static str,
        reason: String,
    },

    /// Configuration JSON was malformed or out of range
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A scroll-trigger threshold string could not be parsed
    #[error("invalid trigger threshold '{0}'")]
    InvalidThreshold(String),

    /// A colour string was not `#rgb` or `#rrggbb`
    #[error("invalid colour '{0}'")]
    InvalidColor(String),
}

impl From<MotionError> for wasm_bindgen::JsValue {
    fn from(err: MotionError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
