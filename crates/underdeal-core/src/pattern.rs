//! Validated action sequences.

use crate::action::Action;
use crate::error::PatternError;
use indexmap::IndexSet;
use smallvec::SmallVec;

/// A non-empty, validated sequence of [`Action`]s.
///
/// The pattern fixes the forward process completely: replaying it
/// performs its actions in order against the deck. Construction is the
/// validation boundary — a `Pattern` never contains an action outside
/// the vocabulary and never has zero length.
///
/// Storage is inline for patterns up to 32 actions; longer patterns
/// (a spelled-out suit runs to 65) spill to the heap transparently.
///
/// # Examples
///
/// ```
/// use underdeal_core::{Action, Pattern, PatternError};
///
/// let pattern = Pattern::from_codes(&[1, 0, 1, 0]).unwrap();
/// assert_eq!(pattern.len(), 4);
/// assert_eq!(pattern.reveal_count(), 2);
/// assert_eq!(pattern.actions()[0], Action::Rotate);
///
/// // Unknown codes are collected, distinct, in first-seen order.
/// assert_eq!(
///     Pattern::from_codes(&[1, 2, 0, 9, 2]),
///     Err(PatternError::InvalidActions { codes: vec![2, 9] })
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    actions: SmallVec<[Action; 32]>,
}

impl Pattern {
    /// Decode a pattern from raw action codes.
    ///
    /// The whole sequence is scanned before failing, so
    /// [`PatternError::InvalidActions`] reports every distinct
    /// offending code, not just the first.
    pub fn from_codes(codes: &[u8]) -> Result<Self, PatternError> {
        if codes.is_empty() {
            return Err(PatternError::Empty);
        }
        let mut actions = SmallVec::with_capacity(codes.len());
        let mut invalid = IndexSet::new();
        for &code in codes {
            match Action::from_code(code) {
                Some(action) => actions.push(action),
                None => {
                    invalid.insert(code);
                }
            }
        }
        if !invalid.is_empty() {
            return Err(PatternError::InvalidActions {
                codes: invalid.into_iter().collect(),
            });
        }
        Ok(Self { actions })
    }

    /// Build a pattern from already-typed actions.
    pub fn from_actions(actions: impl IntoIterator<Item = Action>) -> Result<Self, PatternError> {
        let actions: SmallVec<[Action; 32]> = actions.into_iter().collect();
        if actions.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Self { actions })
    }

    /// The actions in forward order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Number of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Always `false`: a pattern is non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of [`Action::Reveal`] actions.
    ///
    /// A pattern pairs with a desired order of exactly this length.
    pub fn reveal_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| **a == Action::Reveal)
            .count()
    }

    /// The raw wire codes of the actions, in forward order.
    pub fn codes(&self) -> Vec<u8> {
        self.actions.iter().map(|a| a.code()).collect()
    }
}
