//! The persisted preference record.

use serde::Serialize;
use serde::de::Error as _;
use serde_json::{Map, Value};

use crate::core::error::PrefsError;
use crate::core::theme::ThemeMode;

/// User customization of theme, accent color and font.
///
/// Every field is optional when decoded. Fields follow truthiness: missing,
/// `null`, `false`, `0` and empty strings count as absent, so a stored
/// `{"theme": ""}` restores nothing for the theme control.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PreferenceRecord {
    /// Theme selector value (`"dark"` or anything else for light).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Raw CSS color for `--accent`; never validated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    /// Font selector value, resolved through the font table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

impl PreferenceRecord {
    /// Builds a record from the three control values as read from the panel.
    #[must_use]
    pub fn from_controls(
        theme: impl Into<String>,
        accent: impl Into<String>,
        font: impl Into<String>,
    ) -> Self {
        Self {
            theme: Some(theme.into()),
            accent: Some(accent.into()),
            font: Some(font.into()),
        }
    }

    /// Decodes a stored blob field by field.
    ///
    /// Only named fields of a JSON object are read. Any other non-null JSON
    /// value (array, string, number, boolean) decodes to an empty record.
    /// Numbers and `true` are kept in their JSON text form; nested arrays and
    /// objects count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Decode`] when the blob is not valid JSON or is the
    /// literal `null`.
    pub fn decode(raw: &str) -> Result<Self, PrefsError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|source| PrefsError::Decode { source })?;
        match value {
            Value::Null => Err(PrefsError::Decode {
                source: serde_json::Error::custom("stored preferences are null"),
            }),
            Value::Object(fields) => Ok(Self {
                theme: field(&fields, "theme"),
                accent: field(&fields, "accent"),
                font: field(&fields, "font"),
            }),
            _ => Ok(Self::default()),
        }
    }

    /// Serializes the record as a flat JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Encode`] if serialization fails.
    pub fn encode(&self) -> Result<String, PrefsError> {
        serde_json::to_string(self).map_err(|source| PrefsError::Encode { source })
    }

    /// Present theme value, if any.
    #[must_use]
    pub fn theme(&self) -> Option<&str> {
        present(self.theme.as_deref())
    }

    /// Present accent value, if any.
    #[must_use]
    pub fn accent(&self) -> Option<&str> {
        present(self.accent.as_deref())
    }

    /// Present font value, if any.
    #[must_use]
    pub fn font(&self) -> Option<&str> {
        present(self.font.as_deref())
    }

    /// Theme mode implied by the record; absent means light.
    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        ThemeMode::from_optional(self.theme())
    }
}

fn field(fields: &Map<String, Value>, name: &str) -> Option<String> {
    match fields.get(name)? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64().is_some_and(|n| n != 0.0) => {
            Some(number.to_string())
        }
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::PreferenceRecord;
    use crate::core::error::PrefsError;
    use crate::core::theme::ThemeMode;

    #[test]
    fn encodes_fields_in_control_order() -> Result<(), PrefsError> {
        let record = PreferenceRecord::from_controls("dark", "#ff0000", "Poppins");
        assert_eq!(
            record.encode()?,
            r##"{"theme":"dark","accent":"#ff0000","font":"Poppins"}"##
        );
        Ok(())
    }

    #[test]
    fn decode_accepts_partial_records() -> Result<(), PrefsError> {
        let record = PreferenceRecord::decode(r#"{"font":"Inter"}"#)?;
        assert_eq!(record.theme(), None);
        assert_eq!(record.accent(), None);
        assert_eq!(record.font(), Some("Inter"));
        assert_eq!(record.theme_mode(), ThemeMode::Light);
        Ok(())
    }

    #[test]
    fn empty_and_null_fields_count_as_absent() -> Result<(), PrefsError> {
        let record = PreferenceRecord::decode(r#"{"theme":"","accent":null,"font":"Poppins"}"#)?;
        assert_eq!(record.theme, None);
        assert_eq!(record.accent, None);
        assert_eq!(record.font(), Some("Poppins"));
        Ok(())
    }

    #[test]
    fn unknown_fields_are_ignored() -> Result<(), PrefsError> {
        let record = PreferenceRecord::decode(r#"{"theme":"dark","density":"compact"}"#)?;
        assert_eq!(record.theme_mode(), ThemeMode::Dark);
        Ok(())
    }

    #[test]
    fn array_of_strings_is_not_read_positionally() -> Result<(), PrefsError> {
        let record = PreferenceRecord::decode(r##"["dark","#00ff00","Poppins"]"##)?;
        assert_eq!(record, PreferenceRecord::default());
        assert_eq!(record.theme_mode(), ThemeMode::Light);
        Ok(())
    }

    #[test]
    fn non_string_field_keeps_sibling_fields() -> Result<(), PrefsError> {
        let record = PreferenceRecord::decode(r##"{"theme":"dark","accent":"#ff0000","font":7}"##)?;
        assert_eq!(record.theme(), Some("dark"));
        assert_eq!(record.accent(), Some("#ff0000"));
        assert_eq!(record.font(), Some("7"));
        Ok(())
    }

    #[test]
    fn falsy_and_nested_values_count_as_absent() -> Result<(), PrefsError> {
        let record =
            PreferenceRecord::decode(r#"{"theme":false,"accent":0,"font":{"name":"Inter"}}"#)?;
        assert_eq!(record, PreferenceRecord::default());
        let record = PreferenceRecord::decode(r#"{"theme":true,"accent":1.5,"font":[]}"#)?;
        assert_eq!(record.theme(), Some("true"));
        assert_eq!(record.accent(), Some("1.5"));
        assert_eq!(record.font(), None);
        Ok(())
    }

    #[test]
    fn scalar_blobs_decode_to_empty_record() -> Result<(), PrefsError> {
        for raw in ["5", "true", r#""dark""#] {
            assert_eq!(PreferenceRecord::decode(raw)?, PreferenceRecord::default(), "{raw}");
        }
        Ok(())
    }

    #[test]
    fn invalid_json_and_null_fail_to_decode() {
        for raw in ["not json", "null", "{\"theme\":"] {
            let err = PreferenceRecord::decode(raw).expect_err(raw);
            assert_eq!(err.kind(), "decode", "{raw}");
        }
    }
}
