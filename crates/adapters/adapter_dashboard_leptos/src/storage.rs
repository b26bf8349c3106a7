//! `localStorage`-backed preference store.

use sensordash_app::ports::{PreferenceError, PreferenceStore};

/// Preferences kept in the browser's `localStorage`.
///
/// Storage may be unavailable (private browsing, disabled cookies); reads
/// then return nothing and writes fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStoragePreferences;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let error = || PreferenceError {
            key: key.to_string(),
        };
        let storage = local_storage().ok_or_else(error)?;
        storage.set_item(key, value).map_err(|_| error())
    }
}
