//! The incremental draw: ever-deepening runs of rotates.

use std::iter;

use underdeal_core::{Action, Pattern, PatternError};

/// Build the incremental-draw pattern for `count` cards.
///
/// For each `i` in `1..=count`, `i` rotates then one reveal: the first
/// card surfaces after one rotate, the second after two, and so on.
///
/// # Examples
///
/// ```
/// use underdeal_patterns::incremental_draw;
///
/// let pattern = incremental_draw(3).unwrap();
/// assert_eq!(pattern.codes(), [1, 0, 1, 1, 0, 1, 1, 1, 0]);
/// ```
pub fn incremental_draw(count: usize) -> Result<Pattern, PatternError> {
    let mut actions = Vec::new();
    for depth in 1..=count {
        actions.extend(iter::repeat(Action::Rotate).take(depth));
        actions.push(Action::Reveal);
    }
    Pattern::from_actions(actions)
}
