//! In-memory store and document for native hosts and tests.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::config::{DEFAULT_ACCENT, PanelConfig};
use crate::core::error::PrefsError;
use crate::core::store::PreferenceStore;
use crate::core::surface::{ClassTarget, DocumentSurface};

/// Map-backed [`PreferenceStore`] with optional write failure injection.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    write_failure: Option<String>,
}

impl MemoryStore {
    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// Raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Makes every subsequent write fail with `detail`.
    pub fn fail_writes(&mut self, detail: impl Into<String>) {
        self.write_failure = Some(detail.into());
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        if let Some(detail) = &self.write_failure {
            return Err(PrefsError::StorageWrite {
                key: key.to_string(),
                detail: detail.clone(),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
struct MemoryElement {
    value: Option<String>,
    classes: BTreeSet<String>,
}

/// Element/class/style model of a page, enough to drive the controller.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    elements: BTreeMap<String, MemoryElement>,
    body_classes: BTreeSet<String>,
    style: BTreeMap<String, String>,
}

impl MemoryDocument {
    /// Page with the modal (initially hidden) and the three controls at their
    /// built-in defaults.
    #[must_use]
    pub fn with_panel(config: &PanelConfig) -> Self {
        let mut doc = Self::default();
        doc.insert_element(&config.modal_id, None);
        if let Some(modal) = doc.elements.get_mut(&config.modal_id) {
            modal.classes.insert(config.hidden_class.clone());
        }
        doc.insert_element(&config.theme_control_id, Some("light"));
        doc.insert_element(&config.accent_control_id, Some(DEFAULT_ACCENT));
        doc.insert_element(&config.font_control_id, Some("Outfit"));
        doc
    }

    /// Adds an element; `value` makes it a value-bearing control.
    pub fn insert_element(&mut self, id: &str, value: Option<&str>) {
        self.elements.insert(
            id.to_string(),
            MemoryElement {
                value: value.map(str::to_string),
                classes: BTreeSet::new(),
            },
        );
    }

    /// Removes an element, simulating markup that lacks it.
    pub fn remove_element(&mut self, id: &str) {
        self.elements.remove(id);
    }

    /// Current value of a root custom property.
    #[must_use]
    pub fn style_property(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }

    fn element(&self, id: &str) -> Result<&MemoryElement, PrefsError> {
        self.elements
            .get(id)
            .ok_or_else(|| PrefsError::MissingElement { id: id.to_string() })
    }

    fn classes_mut(&mut self, target: ClassTarget<'_>) -> Result<&mut BTreeSet<String>, PrefsError> {
        match target {
            ClassTarget::Body => Ok(&mut self.body_classes),
            ClassTarget::Element(id) => self
                .elements
                .get_mut(id)
                .map(|element| &mut element.classes)
                .ok_or_else(|| PrefsError::MissingElement { id: id.to_string() }),
        }
    }
}

impl DocumentSurface for MemoryDocument {
    fn control_value(&self, id: &str) -> Result<String, PrefsError> {
        Ok(self.element(id)?.value.clone().unwrap_or_default())
    }

    fn set_control_value(&mut self, id: &str, value: &str) -> Result<(), PrefsError> {
        let element = self
            .elements
            .get_mut(id)
            .ok_or_else(|| PrefsError::MissingElement { id: id.to_string() })?;
        element.value = Some(value.to_string());
        Ok(())
    }

    fn set_class(
        &mut self,
        target: ClassTarget<'_>,
        class: &str,
        enabled: bool,
    ) -> Result<(), PrefsError> {
        let classes = self.classes_mut(target)?;
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
        Ok(())
    }

    fn has_class(&self, target: ClassTarget<'_>, class: &str) -> Result<bool, PrefsError> {
        match target {
            ClassTarget::Body => Ok(self.body_classes.contains(class)),
            ClassTarget::Element(id) => Ok(self.element(id)?.classes.contains(class)),
        }
    }

    fn set_style_property(&mut self, name: &str, value: &str) -> Result<(), PrefsError> {
        self.style.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryDocument, MemoryStore};
    use crate::core::config::{DEFAULT_ACCENT, PanelConfig};
    use crate::core::error::PrefsError;
    use crate::core::store::PreferenceStore;
    use crate::core::surface::{ClassTarget, DocumentSurface};

    #[test]
    fn panel_document_starts_hidden_with_defaults() -> Result<(), PrefsError> {
        let config = PanelConfig::default();
        let doc = MemoryDocument::with_panel(&config);
        assert!(doc.has_class(ClassTarget::Element("customize-modal"), "hidden")?);
        assert_eq!(doc.control_value("ui-font")?, "Outfit");
        assert_eq!(doc.control_value("ui-accent")?, DEFAULT_ACCENT);
        assert_eq!(doc.style_property("--accent"), None);
        Ok(())
    }

    #[test]
    fn missing_elements_are_reported() {
        let mut doc = MemoryDocument::default();
        let err = doc
            .set_control_value("ui-theme", "dark")
            .expect_err("no controls present");
        assert!(matches!(err, PrefsError::MissingElement { ref id } if id == "ui-theme"));
    }

    #[test]
    fn failing_store_keeps_existing_entries() -> Result<(), PrefsError> {
        let mut store = MemoryStore::with_entry("k", "old");
        store.fail_writes("quota");
        assert!(store.write("k", "new").is_err());
        assert_eq!(store.read("k")?, Some("old".to_string()));
        Ok(())
    }
}
