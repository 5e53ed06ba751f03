//! Attribute-name casing check.
//!
//! Unknown attributes are stored under their lowercase name. A name authored
//! with uppercase letters still works, but is flagged so the author can be
//! told to spell it the way the DOM will store it.

use std::borrow::Cow;

use crate::diagnostics::DiagnosticEvent;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameCheck<'a> {
    pub canonical: Cow<'a, str>,
    pub is_non_canonical: bool,
}

impl NameCheck<'_> {
    /// Casing diagnostic for `original`, if the name was not canonical.
    pub fn diagnostic(&self, original: &str) -> Option<DiagnosticEvent> {
        self.is_non_canonical
            .then(|| DiagnosticEvent::unknown_prop_casing(original, &self.canonical))
    }
}

/// Fold `name` to its canonical lowercase form. Borrows when already canonical.
pub fn validate(name: &str) -> NameCheck<'_> {
    if !name.chars().any(char::is_uppercase) {
        return NameCheck {
            canonical: Cow::Borrowed(name),
            is_non_canonical: false,
        };
    }
    NameCheck {
        canonical: Cow::Owned(name.to_lowercase()),
        is_non_canonical: true,
    }
}
