//! The spelling deal: one rotate per letter, then a reveal.

use std::iter;

use underdeal_core::{Action, Pattern, PatternError};

/// Spelled-out names for the standard order, position for position
/// with [`STANDARD_LABELS`](underdeal_core::STANDARD_LABELS).
pub const STANDARD_SPELLINGS: [&str; 13] = [
    "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE", "TEN", "JACK",
    "QUEEN", "KING",
];

/// Build the spelling pattern for a sequence of words.
///
/// For each word, one rotate per character and then a reveal, so each
/// card surfaces once its name has been spelled out. An empty word
/// contributes a bare reveal; an empty word list is rejected.
///
/// # Examples
///
/// ```
/// use underdeal_patterns::spelling;
///
/// let pattern = spelling(&["ACE", "TWO"]).unwrap();
/// assert_eq!(pattern.codes(), [1, 1, 1, 0, 1, 1, 1, 0]);
/// ```
pub fn spelling<S: AsRef<str>>(words: &[S]) -> Result<Pattern, PatternError> {
    let mut actions = Vec::new();
    for word in words {
        let letters = word.as_ref().chars().count();
        actions.extend(iter::repeat(Action::Rotate).take(letters));
        actions.push(Action::Reveal);
    }
    Pattern::from_actions(actions)
}
