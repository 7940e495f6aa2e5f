//! Client configuration from environment variables.

use crate::protocol::DEFAULT_WS_URL;

/// Default REST API base.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8001";

pub const API_URL_VAR: &str = "LAHWITA_API_URL";
pub const WS_URL_VAR: &str = "LAHWITA_WS_URL";

/// Spacing between dials of a socket that keeps failing to open.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconnectConfig {
    /// Initial delay in milliseconds
    pub initial_delay_ms: u32,
    /// Maximum delay in milliseconds
    pub max_delay_ms: u32,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f32,
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 1000,
            max_delay_ms: 30000,
            backoff_multiplier: 1.5,
        }
    }
}

impl ReconnectConfig {
    /// Delay before dialing for the given attempt. Attempt 0 dials at once.
    pub fn delay_for_attempt(&self, attempt: u32) -> u32 {
        if attempt == 0 {
            return 0;
        }
        let delay =
            self.initial_delay_ms as f32 * self.backoff_multiplier.powi(attempt as i32 - 1);
        (delay as u32).min(self.max_delay_ms)
    }
}

/// Endpoints the client talks to.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub ws_url: String,
    pub reconnect: ReconnectConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            ws_url: DEFAULT_WS_URL.to_string(),
            reconnect: ReconnectConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Build a config from a variable lookup.
    ///
    /// - `LAHWITA_API_URL`: REST base (default: "http://127.0.0.1:8001")
    /// - `LAHWITA_WS_URL`: chat socket (default: "ws://127.0.0.1:8001/ws/chat")
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            api_url: read(API_URL_VAR, DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            ws_url: read(WS_URL_VAR, DEFAULT_WS_URL),
            reconnect: ReconnectConfig::default(),
        }
    }

    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset_or_blank() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config, ClientConfig::default());

        let config = ClientConfig::from_lookup(|_| Some("  ".into()));
        assert_eq!(config.ws_url, DEFAULT_WS_URL);
    }

    #[test]
    fn overrides_are_applied() {
        let vars: HashMap<&str, &str> = [
            (API_URL_VAR, "https://api.lahwita.app/"),
            (WS_URL_VAR, "wss://api.lahwita.app/ws/chat"),
        ]
        .into_iter()
        .collect();
        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.api_url, "https://api.lahwita.app");
        assert_eq!(config.ws_url, "wss://api.lahwita.app/ws/chat");
    }

    #[test]
    fn backoff_grows_and_caps() {
        let rc = ReconnectConfig::default();
        assert_eq!(rc.delay_for_attempt(0), 0);
        assert_eq!(rc.delay_for_attempt(1), 1000);
        assert_eq!(rc.delay_for_attempt(2), 1500);
        assert_eq!(rc.delay_for_attempt(3), 2250);
        assert_eq!(rc.delay_for_attempt(40), 30000);
    }
}
