//! Preference port — a process-wide key/value store (browser `localStorage`).

/// Failure to persist a preference value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to persist preference {key:?}")]
pub struct PreferenceError {
    /// Key that could not be written.
    pub key: String,
}

/// String key/value storage that survives page reloads.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError`] when the backing store rejects the write
    /// (quota exceeded, storage disabled).
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

impl<T: PreferenceStore> PreferenceStore for std::rc::Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        (**self).set(key, value)
    }
}
