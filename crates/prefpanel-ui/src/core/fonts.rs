//! Font family lookup table mapping selector values to CSS font stacks.

/// Prepends a family name to the shared fallback chain.
macro_rules! font_stack {
    ($family:literal) => {
        concat!(
            $family,
            r#", system-ui, -apple-system, "Segoe UI", Roboto, "Helvetica Neue", Arial"#
        )
    };
}

/// Selectable UI font families.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontFamily {
    /// Default family.
    #[default]
    Outfit,
    /// Inter.
    Inter,
    /// Poppins.
    Poppins,
}

/// Family name to font stack, one row per family.
pub const FONT_STACKS: [(FontFamily, &str); 3] = [
    (FontFamily::Outfit, font_stack!("Outfit")),
    (FontFamily::Inter, font_stack!("Inter")),
    (FontFamily::Poppins, font_stack!("Poppins")),
];

impl FontFamily {
    /// Families in selector order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Outfit, Self::Inter, Self::Poppins]
    }

    /// Value carried by the font control and the stored record.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Outfit => "Outfit",
            Self::Inter => "Inter",
            Self::Poppins => "Poppins",
        }
    }

    /// Exact, case-sensitive match; unknown names fall back to the default family.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|family| family.as_str() == value)
            .unwrap_or_default()
    }

    /// CSS font stack for this family.
    #[must_use]
    pub fn stack(self) -> &'static str {
        FONT_STACKS
            .iter()
            .find_map(|(family, stack)| (*family == self).then_some(*stack))
            .unwrap_or(FONT_STACKS[0].1)
    }
}

/// Font stack for a raw selector value.
#[must_use]
pub fn font_stack_for(value: &str) -> &'static str {
    FontFamily::from_value(value).stack()
}

#[cfg(test)]
mod tests {
    use super::{FONT_STACKS, FontFamily, font_stack_for};

    #[test]
    fn known_families_map_to_their_stack() {
        assert!(font_stack_for("Inter").starts_with("Inter, "));
        assert!(font_stack_for("Poppins").starts_with("Poppins, "));
    }

    #[test]
    fn unknown_values_use_default_stack() {
        let default_stack = FontFamily::Outfit.stack();
        assert_eq!(font_stack_for("Outfit"), default_stack);
        assert_eq!(font_stack_for(""), default_stack);
        assert_eq!(font_stack_for("inter"), default_stack);
        assert_eq!(font_stack_for("Comic Sans"), default_stack);
    }

    #[test]
    fn stacks_lead_with_family_and_share_fallbacks() {
        for (family, stack) in FONT_STACKS {
            assert_eq!(
                stack,
                format!(
                    r#"{}, system-ui, -apple-system, "Segoe UI", Roboto, "Helvetica Neue", Arial"#,
                    family.as_str()
                ),
            );
            assert_eq!(family.stack(), stack);
        }
    }
}
