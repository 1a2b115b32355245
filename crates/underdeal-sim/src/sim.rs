//! Forward replay of a pattern against a deck.

use smallvec::SmallVec;
use underdeal_core::{Action, Deck, Pattern, SimulateError};

use crate::record::{RunRecord, StepRecord};

/// Replay `pattern` forward against a clone of `deck`.
///
/// Each action is applied in pattern order and recorded: a rotate moves
/// the front card to the back, a reveal pops the front card into the
/// revealed sequence. The caller's deck is untouched.
///
/// The revealed sequence has one entry per reveal action; its i-th
/// entry is the card at the front of the working deck when the i-th
/// reveal executes. A rotate on an empty deck is a defined no-op (the
/// forward mirror of the arranger's unrotate-on-empty case); a reveal
/// on an empty deck fails with [`SimulateError::DeckExhausted`], with
/// no partial result.
pub fn simulate(deck: &Deck, pattern: &Pattern) -> Result<RunRecord, SimulateError> {
    run(deck, pattern.actions())
}

/// Replay a raw action-code sequence from any source.
///
/// Codes are decoded before the deck is touched; an unrecognized code
/// aborts with [`SimulateError::UnknownAction`] naming the 1-based step
/// it occupies, with no partial result.
///
/// # Examples
///
/// ```
/// use underdeal_core::{Deck, Label, SimulateError};
/// use underdeal_sim::simulate_codes;
///
/// let deck = Deck::from_labels([Label::new("A").unwrap()]);
/// assert_eq!(
///     simulate_codes(&deck, &[1, 2, 0]),
///     Err(SimulateError::UnknownAction { step: 2, code: 2 })
/// );
/// ```
pub fn simulate_codes(deck: &Deck, codes: &[u8]) -> Result<RunRecord, SimulateError> {
    let mut actions: SmallVec<[Action; 32]> = SmallVec::with_capacity(codes.len());
    for (index, &code) in codes.iter().enumerate() {
        match Action::from_code(code) {
            Some(action) => actions.push(action),
            None => {
                return Err(SimulateError::UnknownAction {
                    step: index + 1,
                    code,
                })
            }
        }
    }
    run(deck, &actions)
}

fn run(deck: &Deck, actions: &[Action]) -> Result<RunRecord, SimulateError> {
    let mut working = deck.clone();
    let mut steps = Vec::with_capacity(actions.len());
    let mut revealed = Vec::new();

    for (index, &action) in actions.iter().enumerate() {
        let step = index + 1;
        let card = match action {
            Action::Rotate => working.rotate(),
            Action::Reveal => {
                let card = working
                    .reveal()
                    .ok_or(SimulateError::DeckExhausted { step })?;
                revealed.push(card.clone());
                Some(card)
            }
        };
        steps.push(StepRecord {
            step,
            action,
            card,
            deck_after: working.to_vec(),
        });
    }

    Ok(RunRecord {
        initial_deck: deck.to_vec(),
        steps,
        revealed,
    })
}
