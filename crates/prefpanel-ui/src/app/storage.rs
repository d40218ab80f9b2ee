//! Browser local storage backing for the preference service.

use crate::core::error::PrefsError;
use crate::core::store::PreferenceStore;
use gloo::storage::{LocalStorage, Storage};
use wasm_bindgen::JsValue;

/// Reads and writes raw strings through `window.localStorage`.
#[derive(Debug, Default)]
pub(crate) struct LocalStore;

impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Result<Option<String>, PrefsError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|err| PrefsError::StorageRead {
                key: key.to_string(),
                detail: js_detail(&err),
            })
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| PrefsError::StorageWrite {
                key: key.to_string(),
                detail: js_detail(&err),
            })
    }
}

pub(crate) fn js_detail(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
