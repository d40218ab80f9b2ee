//! Document seam plus the pure style plan applied through it.

use crate::core::config::PanelConfig;
use crate::core::error::PrefsError;
use crate::core::fonts::font_stack_for;
use crate::core::record::PreferenceRecord;

/// Element whose class list is being changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassTarget<'a> {
    /// Element looked up by DOM id.
    Element(&'a str),
    /// The document body.
    Body,
}

/// The slice of the live document the controller touches.
pub trait DocumentSurface {
    /// Current value of the input/select control with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::MissingElement`] if no such control exists.
    fn control_value(&self, id: &str) -> Result<String, PrefsError>;

    /// Sets the displayed value of the control with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::MissingElement`] if no such control exists.
    fn set_control_value(&mut self, id: &str, value: &str) -> Result<(), PrefsError>;

    /// Adds (`enabled`) or removes `class` on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::MissingElement`] or [`PrefsError::Dom`].
    fn set_class(
        &mut self,
        target: ClassTarget<'_>,
        class: &str,
        enabled: bool,
    ) -> Result<(), PrefsError>;

    /// Whether `target` currently carries `class`.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::MissingElement`] if the target does not exist.
    fn has_class(&self, target: ClassTarget<'_>, class: &str) -> Result<bool, PrefsError>;

    /// Sets a custom property on the document root style.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Dom`] when the style declaration rejects the write.
    fn set_style_property(&mut self, name: &str, value: &str) -> Result<(), PrefsError>;
}

/// Visual changes derived from a record, computed before touching the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StylePlan {
    /// Whether the body gets the dark-mode class.
    pub dark: bool,
    /// Value for the accent property; `None` leaves it untouched.
    pub accent: Option<String>,
    /// Value for the font property; `None` leaves it untouched.
    pub font_stack: Option<&'static str>,
}

impl StylePlan {
    /// Plan for a confirmed panel submission: every field is applied, and a
    /// missing font falls back to the default stack.
    #[must_use]
    pub fn for_persist(record: &PreferenceRecord) -> Self {
        Self {
            dark: record.theme_mode().is_dark(),
            accent: Some(record.accent.clone().unwrap_or_default()),
            font_stack: Some(font_stack_for(record.font.as_deref().unwrap_or_default())),
        }
    }

    /// Plan for restoring a stored record at startup: the theme is always
    /// recomputed, accent and font only when present.
    #[must_use]
    pub fn for_restore(record: &PreferenceRecord) -> Self {
        Self {
            dark: record.theme_mode().is_dark(),
            accent: record.accent().map(str::to_string),
            font_stack: record.font().map(font_stack_for),
        }
    }

    /// Writes the plan to the document.
    ///
    /// # Errors
    ///
    /// Propagates the first surface failure.
    pub fn apply_to<D: DocumentSurface + ?Sized>(
        &self,
        surface: &mut D,
        config: &PanelConfig,
    ) -> Result<(), PrefsError> {
        surface.set_class(ClassTarget::Body, &config.dark_class, self.dark)?;
        if let Some(accent) = &self.accent {
            surface.set_style_property(&config.accent_property, accent)?;
        }
        if let Some(stack) = self.font_stack {
            surface.set_style_property(&config.font_property, stack)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassTarget, DocumentSurface, StylePlan};
    use crate::core::config::PanelConfig;
    use crate::core::error::PrefsError;
    use crate::core::fonts::FontFamily;
    use crate::core::memory::MemoryDocument;
    use crate::core::record::PreferenceRecord;

    #[test]
    fn persist_plan_applies_every_field() {
        let record = PreferenceRecord::from_controls("dark", "not-a-color", "Comic Sans");
        let plan = StylePlan::for_persist(&record);
        assert!(plan.dark);
        assert_eq!(plan.accent.as_deref(), Some("not-a-color"));
        assert_eq!(plan.font_stack, Some(FontFamily::Outfit.stack()));
    }

    #[test]
    fn restore_plan_skips_absent_accent_and_font() {
        let record = PreferenceRecord {
            theme: Some("light".to_string()),
            accent: None,
            font: None,
        };
        let plan = StylePlan::for_restore(&record);
        assert!(!plan.dark);
        assert_eq!(plan.accent, None);
        assert_eq!(plan.font_stack, None);
    }

    #[test]
    fn apply_leaves_untouched_properties_alone() -> Result<(), PrefsError> {
        let config = PanelConfig::default();
        let mut doc = MemoryDocument::with_panel(&config);
        doc.set_style_property("--accent", "#123456")?;
        doc.set_class(ClassTarget::Body, "theme-dark", true)?;

        StylePlan {
            dark: false,
            accent: None,
            font_stack: Some(FontFamily::Inter.stack()),
        }
        .apply_to(&mut doc, &config)?;

        assert_eq!(doc.style_property("--accent"), Some("#123456"));
        assert_eq!(doc.style_property("--ui-font"), Some(FontFamily::Inter.stack()));
        assert!(!doc.has_class(ClassTarget::Body, "theme-dark")?);
        Ok(())
    }
}
