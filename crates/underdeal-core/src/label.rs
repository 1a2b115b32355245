//! Card labels and the standard 13-card order.

use crate::error::LabelError;
use std::fmt;

/// Card values of a standard suit, ace low, in ascending order.
pub const STANDARD_LABELS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// An opaque card label (`"A"`, `"10"`, `"Q"`).
///
/// A valid label is a non-empty token without whitespace. Labels
/// compare by value and may repeat within a deck; the processes track
/// position, not identity.
///
/// # Examples
///
/// ```
/// use underdeal_core::{Label, LabelError};
///
/// let ace = Label::new("A").unwrap();
/// assert_eq!(ace.as_str(), "A");
///
/// assert_eq!(Label::new(""), Err(LabelError::Empty));
/// assert!(matches!(
///     Label::new("10 of clubs"),
///     Err(LabelError::Whitespace { .. })
/// ));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(String);

impl Label {
    /// Validate a token as a card label.
    pub fn new(token: impl Into<String>) -> Result<Self, LabelError> {
        let token = token.into();
        if token.is_empty() {
            return Err(LabelError::Empty);
        }
        if token.chars().any(char::is_whitespace) {
            return Err(LabelError::Whitespace { token });
        }
        Ok(Self(token))
    }

    /// The label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The standard 13-card desired order, `A` through `K`.
///
/// This is the default order applied when a caller does not supply one.
pub fn standard_order() -> Vec<Label> {
    // The constants are known-valid tokens; skip re-validation.
    STANDARD_LABELS.iter().map(|s| Label((*s).to_owned())).collect()
}
