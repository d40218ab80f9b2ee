//! DOM ids, class names, style variables and the storage key used by the panel.

use serde::Deserialize;

use crate::core::error::PrefsError;

/// Storage key holding the serialized preference record.
pub const STORAGE_KEY: &str = "ui_settings";
/// Id of the element carrying optional JSON overrides for [`PanelConfig`].
pub const CONFIG_ELEMENT_ID: &str = "customize-config";
/// Id of the element the panel component mounts into.
pub const MOUNT_ELEMENT_ID: &str = "customize-root";
/// Accent color the panel markup starts with.
pub const DEFAULT_ACCENT: &str = "#6366f1";

/// Wiring between the controller and the host page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Modal element toggled by open/close.
    pub modal_id: String,
    /// Theme selector.
    pub theme_control_id: String,
    /// Accent color input.
    pub accent_control_id: String,
    /// Font selector.
    pub font_control_id: String,
    /// Class marking the modal as hidden.
    pub hidden_class: String,
    /// Body class enabling the dark theme.
    pub dark_class: String,
    /// Root custom property receiving the accent color.
    pub accent_property: String,
    /// Root custom property receiving the font stack.
    pub font_property: String,
    /// Local storage key.
    pub storage_key: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            modal_id: "customize-modal".to_string(),
            theme_control_id: "ui-theme".to_string(),
            accent_control_id: "ui-accent".to_string(),
            font_control_id: "ui-font".to_string(),
            hidden_class: "hidden".to_string(),
            dark_class: "theme-dark".to_string(),
            accent_property: "--accent".to_string(),
            font_property: "--ui-font".to_string(),
            storage_key: STORAGE_KEY.to_string(),
        }
    }
}

impl PanelConfig {
    /// Parses overrides; omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Config`] when the payload is not a JSON object
    /// of string fields.
    pub fn from_json(raw: &str) -> Result<Self, PrefsError> {
        serde_json::from_str(raw).map_err(|source| PrefsError::Config { source })
    }
}
