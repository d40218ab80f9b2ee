//! Preference controller: ties the panel controls, the document and storage together.

use crate::core::config::PanelConfig;
use crate::core::error::PrefsError;
use crate::core::panel::PanelVisibility;
use crate::core::record::PreferenceRecord;
use crate::core::store::{PreferenceService, PreferenceStore};
use crate::core::surface::{ClassTarget, DocumentSurface, StylePlan};

/// Result of restoring preferences at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing stored; the page keeps its built-in defaults.
    Empty,
    /// A stored record was pushed into the controls and styles.
    Restored(PreferenceRecord),
    /// The stored blob was unreadable; the page keeps its built-in defaults.
    Corrupt {
        /// Decoder message for diagnostics.
        detail: String,
    },
}

/// Drives the customize panel against a [`DocumentSurface`] and a [`PreferenceStore`].
#[derive(Debug)]
pub struct PreferenceController<S, D> {
    service: PreferenceService<S>,
    surface: D,
    config: PanelConfig,
    visibility: PanelVisibility,
}

impl<S: PreferenceStore, D: DocumentSurface> PreferenceController<S, D> {
    /// Builds a controller; the modal is assumed hidden until opened.
    pub fn new(store: S, surface: D, config: PanelConfig) -> Self {
        let service = PreferenceService::new(store, config.storage_key.clone());
        Self {
            service,
            surface,
            config,
            visibility: PanelVisibility::default(),
        }
    }

    /// Current modal state.
    #[must_use]
    pub const fn visibility(&self) -> PanelVisibility {
        self.visibility
    }

    /// Panel wiring in use.
    #[must_use]
    pub const fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Borrow the document surface.
    #[must_use]
    pub const fn surface(&self) -> &D {
        &self.surface
    }

    /// Mutably borrow the document surface.
    pub const fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    /// Borrow the preference service.
    #[must_use]
    pub const fn service(&self) -> &PreferenceService<S> {
        &self.service
    }

    /// Mutably borrow the preference service.
    pub const fn service_mut(&mut self) -> &mut PreferenceService<S> {
        &mut self.service
    }

    /// Reveals the modal.
    ///
    /// # Errors
    ///
    /// Fails if the modal element is missing.
    pub fn open_panel(&mut self) -> Result<(), PrefsError> {
        self.set_visibility(PanelVisibility::Open)
    }

    /// Hides the modal; a no-op on an already hidden modal.
    ///
    /// # Errors
    ///
    /// Fails if the modal element is missing.
    pub fn close_panel(&mut self) -> Result<(), PrefsError> {
        self.set_visibility(PanelVisibility::Hidden)
    }

    /// Snapshot of the three controls.
    ///
    /// # Errors
    ///
    /// Fails if any control is missing.
    pub fn read_controls(&self) -> Result<PreferenceRecord, PrefsError> {
        Ok(PreferenceRecord::from_controls(
            self.surface.control_value(&self.config.theme_control_id)?,
            self.surface.control_value(&self.config.accent_control_id)?,
            self.surface.control_value(&self.config.font_control_id)?,
        ))
    }

    /// Applies the current control values, persists them and closes the modal.
    ///
    /// The styles are live and the modal closes even when the write fails; the
    /// write error is then returned so the caller can tell the user.
    ///
    /// # Errors
    ///
    /// Returns surface failures immediately and storage failures after the
    /// modal has been closed. A storage failure takes precedence over a
    /// failure to close the modal.
    pub fn apply_and_persist(&mut self) -> Result<PreferenceRecord, PrefsError> {
        let record = self.read_controls()?;
        StylePlan::for_persist(&record).apply_to(&mut self.surface, &self.config)?;

        let saved = self.service.save(&record);
        if let Err(err) = &saved {
            tracing::warn!(
                key = self.service.key(),
                kind = err.kind(),
                error = %err,
                "failed to persist UI settings"
            );
        } else {
            tracing::debug!(
                theme = record.theme().unwrap_or_default(),
                accent = record.accent().unwrap_or_default(),
                font = record.font().unwrap_or_default(),
                "UI settings saved"
            );
        }

        let closed = self.close_panel();
        match saved {
            Err(err) => {
                if let Err(close_err) = closed {
                    tracing::warn!(
                        kind = close_err.kind(),
                        error = %close_err,
                        "failed to close customize panel"
                    );
                }
                Err(err)
            }
            Ok(()) => closed.map(|()| record),
        }
    }

    /// Restores stored preferences into the controls and document styles.
    ///
    /// Missing storage leaves everything untouched. A corrupt blob is logged
    /// and reported as [`LoadOutcome::Corrupt`] without touching the page.
    ///
    /// # Errors
    ///
    /// Returns storage read failures and surface failures.
    pub fn load_and_apply(&mut self) -> Result<LoadOutcome, PrefsError> {
        let record = match self.service.load() {
            Ok(Some(record)) => record,
            Ok(None) => return Ok(LoadOutcome::Empty),
            Err(PrefsError::Decode { source }) => {
                tracing::warn!(
                    key = self.service.key(),
                    error = %source,
                    "failed to load UI settings"
                );
                return Ok(LoadOutcome::Corrupt {
                    detail: source.to_string(),
                });
            }
            Err(err) => return Err(err),
        };

        if let Some(theme) = record.theme() {
            self.surface
                .set_control_value(&self.config.theme_control_id, theme)?;
        }
        if let Some(accent) = record.accent() {
            self.surface
                .set_control_value(&self.config.accent_control_id, accent)?;
        }
        if let Some(font) = record.font() {
            self.surface
                .set_control_value(&self.config.font_control_id, font)?;
        }
        StylePlan::for_restore(&record).apply_to(&mut self.surface, &self.config)?;

        tracing::debug!(key = self.service.key(), "UI settings restored");
        Ok(LoadOutcome::Restored(record))
    }

    fn set_visibility(&mut self, next: PanelVisibility) -> Result<(), PrefsError> {
        self.surface.set_class(
            ClassTarget::Element(&self.config.modal_id),
            &self.config.hidden_class,
            next.is_hidden(),
        )?;
        self.visibility = next;
        Ok(())
    }
}
