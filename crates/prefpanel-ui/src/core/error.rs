//! Error type shared by the preference store, document surface and controller.

use thiserror::Error;

/// Failures raised while reading, writing or applying preferences.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// The backing store could not be read.
    #[error("preference storage read failed")]
    StorageRead {
        /// Storage key that was being read.
        key: String,
        /// Backend-specific detail.
        detail: String,
    },
    /// The backing store rejected a write (for example, quota exceeded).
    #[error("preference storage write failed")]
    StorageWrite {
        /// Storage key that was being written.
        key: String,
        /// Backend-specific detail.
        detail: String,
    },
    /// The stored blob was not a valid preference record.
    #[error("stored preferences could not be decoded")]
    Decode {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The record could not be serialized.
    #[error("preferences could not be encoded")]
    Encode {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// A required element was not present in the document.
    #[error("element not found")]
    MissingElement {
        /// DOM id that failed to resolve.
        id: String,
    },
    /// The document rejected a mutation.
    #[error("document update failed")]
    Dom {
        /// Operation that failed.
        operation: &'static str,
        /// Backend-specific detail.
        detail: String,
    },
    /// Panel configuration overrides were malformed.
    #[error("invalid panel configuration")]
    Config {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl PrefsError {
    /// Short machine-readable label for log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::StorageRead { .. } => "storage_read",
            Self::StorageWrite { .. } => "storage_write",
            Self::Decode { .. } => "decode",
            Self::Encode { .. } => "encode",
            Self::MissingElement { .. } => "missing_element",
            Self::Dom { .. } => "dom",
            Self::Config { .. } => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PrefsError;

    #[test]
    fn decode_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{not json")
            .expect_err("malformed json should fail");
        let err = PrefsError::Decode { source };
        assert_eq!(err.kind(), "decode");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn missing_element_reports_kind() {
        let err = PrefsError::MissingElement {
            id: "ui-theme".to_string(),
        };
        assert_eq!(err.kind(), "missing_element");
        assert_eq!(err.to_string(), "element not found");
    }
}
