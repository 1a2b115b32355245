//! The alternating deal: rotate one, reveal one.

use underdeal_core::{Action, Pattern, PatternError};

/// Build the alternating pattern for `count` cards.
///
/// `[Rotate, Reveal]` repeated `count` times; `count` of zero is an
/// empty pattern and is rejected.
///
/// # Examples
///
/// ```
/// use underdeal_patterns::alternating;
///
/// let pattern = alternating(3).unwrap();
/// assert_eq!(pattern.codes(), [1, 0, 1, 0, 1, 0]);
/// ```
pub fn alternating(count: usize) -> Result<Pattern, PatternError> {
    Pattern::from_actions((0..count).flat_map(|_| [Action::Rotate, Action::Reveal]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_reveal_per_card() {
        let pattern = alternating(13).unwrap();
        assert_eq!(pattern.len(), 26);
        assert_eq!(pattern.reveal_count(), 13);
    }

    #[test]
    fn zero_cards_rejected() {
        assert_eq!(alternating(0), Err(PatternError::Empty));
    }
}
