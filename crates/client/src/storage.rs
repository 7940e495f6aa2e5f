//! Cross-platform persistent storage.
//!
//! [`PlatformStorage`] implements [`SessionStorage`] on top of:
//! - Web: `localStorage`
//! - Desktop: one file per key in the platform config directory:
//!   - Linux: `~/.config/lahwita/`
//!   - macOS: `~/Library/Application Support/lahwita/`
//!   - Windows: `%APPDATA%\lahwita\`

use lahwita_shared::session::SessionStorage;

/// Storage handle for the running platform. Stateless and cheap to copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformStorage;

impl SessionStorage for PlatformStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        load_raw(key)
    }

    fn set_item(&self, key: &str, value: &str) -> bool {
        save_raw(key, value)
    }

    fn remove_item(&self, key: &str) {
        remove_raw(key);
    }
}

// =========================================
// Web (WASM) implementation
// =========================================

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
fn save_raw(key: &str, value: &str) -> bool {
    local_storage().is_some_and(|s| s.set_item(key, value).is_ok())
}

#[cfg(target_arch = "wasm32")]
fn load_raw(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

#[cfg(target_arch = "wasm32")]
fn remove_raw(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

// =========================================
// Desktop (native) implementation
// =========================================

#[cfg(not(target_arch = "wasm32"))]
fn file_path(key: &str) -> anyhow::Result<std::path::PathBuf> {
    use anyhow::Context;

    let app_dir = dirs::config_dir()
        .context("no config directory on this platform")?
        .join("lahwita");
    std::fs::create_dir_all(&app_dir)
        .with_context(|| format!("creating {}", app_dir.display()))?;

    let safe_key = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
    Ok(app_dir.join(safe_key))
}

#[cfg(not(target_arch = "wasm32"))]
fn save_raw(key: &str, value: &str) -> bool {
    let result = file_path(key).and_then(|path| {
        std::fs::write(&path, value).map_err(anyhow::Error::from)
    });
    match result {
        Ok(()) => true,
        Err(e) => {
            crate::log_warn!("failed to persist {key}: {e:#}");
            false
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_raw(key: &str) -> Option<String> {
    let path = file_path(key).ok()?;
    std::fs::read_to_string(path).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn remove_raw(key: &str) {
    if let Ok(path) = file_path(key) {
        let _ = std::fs::remove_file(path);
    }
}
