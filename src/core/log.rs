//! Console logging
//!
//! On wasm32 everything goes to `web_sys::console`. Native builds (tests,
//! tooling) print to stderr so no call ever reaches into JS.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

#[doc(hidden)]
pub fn emit(level: Level, message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let msg = wasm_bindgen::JsValue::from_str(message);
        match level {
            Level::Info => web_sys::console::log_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Error => web_sys::console::error_1(&msg),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let tag = match level {
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        };
        eprintln!("[humaan-motion {}] {}", tag, message);
    }
}

/// Informational log line
#[macro_export]
macro_rules! motion_log {
    ($($arg:tt)*) => {{
        $crate::core::log::emit($crate::core::log::Level::Info, &format!($($arg)*));
    }};
}

/// Degraded-feature warning (missing asset, missing target, ...)
#[macro_export]
macro_rules! motion_warn {
    ($($arg:tt)*) => {{
        $crate::core::log::emit($crate::core::log::Level::Warn, &format!($($arg)*));
    }};
}

/// Failure that disabled a feature (data fetch, config parse)
#[macro_export]
macro_rules! motion_error {
    ($($arg:tt)*) => {{
        $crate::core::log::emit($crate::core::log::Level::Error, &format!($($arg)*));
    }};
}
