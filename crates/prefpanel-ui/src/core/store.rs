//! Storage seam and the preference service built on it.

use crate::core::error::PrefsError;
use crate::core::record::PreferenceRecord;

/// Raw string key/value storage (browser local storage in production).
pub trait PreferenceStore {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::StorageRead`] when the backend is unavailable.
    fn read(&self, key: &str) -> Result<Option<String>, PrefsError>;

    /// Overwrites the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::StorageWrite`] when the backend rejects the write.
    fn write(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// Loads and saves the preference record under a single fixed key.
#[derive(Debug)]
pub struct PreferenceService<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> PreferenceService<S> {
    /// Creates a service bound to `key`.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Storage key in use.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Mutably borrow the underlying store.
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Reads the stored record. A missing or empty blob yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Decode`] for corrupt blobs and propagates store
    /// read failures.
    pub fn load(&self) -> Result<Option<PreferenceRecord>, PrefsError> {
        match self.store.read(&self.key)? {
            Some(raw) if !raw.is_empty() => PreferenceRecord::decode(&raw).map(Some),
            _ => Ok(None),
        }
    }

    /// Serializes `record` and overwrites the stored blob.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Encode`] or the store's write error.
    pub fn save(&mut self, record: &PreferenceRecord) -> Result<(), PrefsError> {
        let raw = record.encode()?;
        self.store.write(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::PreferenceService;
    use crate::core::error::PrefsError;
    use crate::core::memory::MemoryStore;
    use crate::core::record::PreferenceRecord;

    #[test]
    fn load_returns_none_when_nothing_stored() -> Result<(), PrefsError> {
        let service = PreferenceService::new(MemoryStore::default(), "ui_settings");
        assert_eq!(service.load()?, None);
        Ok(())
    }

    #[test]
    fn empty_blob_is_treated_as_absent() -> Result<(), PrefsError> {
        let store = MemoryStore::with_entry("ui_settings", "");
        let service = PreferenceService::new(store, "ui_settings");
        assert_eq!(service.load()?, None);
        Ok(())
    }

    #[test]
    fn save_then_load_round_trips() -> Result<(), PrefsError> {
        let mut service = PreferenceService::new(MemoryStore::default(), "ui_settings");
        let record = PreferenceRecord::from_controls("light", "#00ff88", "Inter");
        service.save(&record)?;
        assert_eq!(service.load()?, Some(record));
        Ok(())
    }

    #[test]
    fn save_overwrites_previous_value() -> Result<(), PrefsError> {
        let mut service = PreferenceService::new(MemoryStore::default(), "ui_settings");
        service.save(&PreferenceRecord::from_controls("dark", "red", "Inter"))?;
        service.save(&PreferenceRecord::from_controls("light", "blue", "Outfit"))?;
        assert_eq!(
            service.store().get("ui_settings"),
            Some(r#"{"theme":"light","accent":"blue","font":"Outfit"}"#)
        );
        Ok(())
    }

    #[test]
    fn write_failures_surface_to_caller() {
        let mut service = PreferenceService::new(MemoryStore::default(), "ui_settings");
        service.store_mut().fail_writes("quota exceeded");
        let err = service
            .save(&PreferenceRecord::default())
            .expect_err("write should fail");
        assert!(matches!(err, PrefsError::StorageWrite { ref detail, .. } if detail == "quota exceeded"));
    }
}
