//! The reverse simulation and its validation funnel.

use underdeal_core::{standard_order, Action, ArrangeError, Deck, Label, Pattern, PatternError};

/// Compute the initial deck that makes `pattern` reveal `desired_order`.
///
/// The pattern is processed back to front, undoing each action: a
/// rotate is undone by moving the back card to the front (a no-op while
/// the working deck is still empty), a reveal by pushing onto the front
/// the card that was revealed at that step. Reveals are undone in
/// reverse chronological order, so the walk starts at the last
/// desired-order entry and moves toward the first.
///
/// Fails with [`ArrangeError::EmptyDesiredOrder`] or
/// [`ArrangeError::RevealCountMismatch`]; pattern emptiness and action
/// validity are already guaranteed by [`Pattern`]'s constructors.
///
/// # Examples
///
/// ```
/// use underdeal_arrange::arrange;
/// use underdeal_core::{standard_order, Pattern};
///
/// // Rotate one, reveal one, thirteen times over.
/// let pattern = Pattern::from_codes(&[1u8, 0].repeat(13)).unwrap();
/// let deck = arrange(&pattern, &standard_order()).unwrap();
/// assert_eq!(deck.len(), 13);
/// assert_eq!(deck.front().unwrap().as_str(), "7");
/// ```
pub fn arrange(pattern: &Pattern, desired_order: &[Label]) -> Result<Deck, ArrangeError> {
    if desired_order.is_empty() {
        return Err(ArrangeError::EmptyDesiredOrder);
    }
    let expected = desired_order.len();
    let actual = pattern.reveal_count();
    if actual != expected {
        return Err(ArrangeError::RevealCountMismatch { expected, actual });
    }

    let mut deck = Deck::new();
    let mut reveal_index = desired_order.len();
    for &action in pattern.actions().iter().rev() {
        match action {
            Action::Rotate => deck.unrotate(),
            Action::Reveal => {
                reveal_index -= 1;
                deck.restore(desired_order[reveal_index].clone());
            }
        }
    }
    Ok(deck)
}

/// Arrange from raw input: action codes and string labels.
///
/// Validation runs in one canonical order, each failure a distinct
/// [`ArrangeError`] variant and an immediate abort: non-empty pattern,
/// non-empty desired order, label validity (offending index reported),
/// action validity (distinct offending codes reported), reveal-count
/// match. Nothing is coerced or defaulted.
///
/// # Examples
///
/// ```
/// use underdeal_arrange::arrange_codes;
/// use underdeal_core::ArrangeError;
///
/// let deck = arrange_codes(&[1, 0, 1, 0, 1, 0], &["A", "2", "3"]).unwrap();
/// assert_eq!(deck.to_string(), "2, A, 3");
///
/// // Two reveals cannot produce three cards.
/// assert_eq!(
///     arrange_codes(&[1, 0, 1, 0], &["A", "2", "3"]),
///     Err(ArrangeError::RevealCountMismatch {
///         expected: 3,
///         actual: 2,
///     })
/// );
/// ```
pub fn arrange_codes<S: AsRef<str>>(
    codes: &[u8],
    desired_order: &[S],
) -> Result<Deck, ArrangeError> {
    if codes.is_empty() {
        return Err(PatternError::Empty.into());
    }
    if desired_order.is_empty() {
        return Err(ArrangeError::EmptyDesiredOrder);
    }
    let mut labels = Vec::with_capacity(desired_order.len());
    for (index, token) in desired_order.iter().enumerate() {
        let label = Label::new(token.as_ref())
            .map_err(|reason| ArrangeError::InvalidLabel { index, reason })?;
        labels.push(label);
    }
    let pattern = Pattern::from_codes(codes)?;
    arrange(&pattern, &labels)
}

/// Arrange against the standard 13-card order, `A` through `K`.
pub fn arrange_standard(codes: &[u8]) -> Result<Deck, ArrangeError> {
    let pattern = Pattern::from_codes(codes)?;
    arrange(&pattern, &standard_order())
}
