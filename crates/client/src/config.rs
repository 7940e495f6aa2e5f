//! Endpoint configuration for the running platform.
//!
//! Desktop reads `LAHWITA_API_URL` / `LAHWITA_WS_URL` from the process
//! environment at startup. Web builds have no process environment, so the
//! same variables are baked in at compile time.

use lahwita_shared::config::{API_URL_VAR, WS_URL_VAR};
use lahwita_shared::ClientConfig;

#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> ClientConfig {
    ClientConfig::from_env()
}

#[cfg(target_arch = "wasm32")]
pub fn load() -> ClientConfig {
    ClientConfig::from_lookup(|key| match key {
        API_URL_VAR => option_env!("LAHWITA_API_URL").map(str::to_string),
        WS_URL_VAR => option_env!("LAHWITA_WS_URL").map(str::to_string),
        _ => None,
    })
}

/// Log where the client is pointed.
pub fn describe(config: &ClientConfig) {
    crate::log_info!(
        "{API_URL_VAR}={} {WS_URL_VAR}={}",
        config.api_url,
        config.ws_url
    );
}
