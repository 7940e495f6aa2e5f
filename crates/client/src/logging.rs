//! Cross-platform logging.
//!
//! `log_*!` macros format their arguments and hand them to [`log`], which
//! writes to the browser console on web and to `tracing` on desktop.
//! The shared crate logs through `tracing` directly; on desktop both end up
//! in the same subscriber.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

#[cfg(target_arch = "wasm32")]
pub fn log(level: Level, msg: &str) {
    let msg: wasm_bindgen::JsValue = msg.into();
    match level {
        Level::Debug => web_sys::console::debug_1(&msg),
        Level::Info => web_sys::console::log_1(&msg),
        Level::Warn => web_sys::console::warn_1(&msg),
        Level::Error => web_sys::console::error_1(&msg),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(level: Level, msg: &str) {
    match level {
        Level::Debug => tracing::debug!("{}", msg),
        Level::Info => tracing::info!("{}", msg),
        Level::Warn => tracing::warn!("{}", msg),
        Level::Error => tracing::error!("{}", msg),
    }
}

/// Install the desktop subscriber. Web builds log to the console as-is.
pub fn init() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("lahwita_client=debug,lahwita_shared=debug")
            }))
            .init();
    }
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::logging::Level::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::logging::Level::Error, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::logging::Level::Warn, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::logging::Level::Debug, &format!($($arg)*))
    };
}
