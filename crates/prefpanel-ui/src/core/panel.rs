//! Visibility state of the customize modal.

/// The modal is either hidden or open; pages start with it hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelVisibility {
    /// Modal carries the hidden class.
    #[default]
    Hidden,
    /// Modal is shown.
    Open,
}

impl PanelVisibility {
    /// Whether the modal should carry the hidden class.
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}
