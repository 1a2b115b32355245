//! Data types recording one forward replay.

use underdeal_core::{Action, Label};

/// One executed action during a forward replay.
///
/// A rotate records the card moved to the back; a reveal records the
/// card taken off the deck. `deck_after` is the working deck once the
/// action has been applied, front to back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepRecord {
    /// 1-based position of this step within the pattern.
    pub step: usize,
    /// The action taken.
    pub action: Action,
    /// The card the action affected.
    ///
    /// `None` for a rotate that found the deck already empty — a
    /// defined no-op that occurs when a pattern carries rotates after
    /// its final reveal.
    pub card: Option<Label>,
    /// The working deck after the action, front to back.
    pub deck_after: Vec<Label>,
}

/// The full record of one forward replay.
///
/// Carries everything the printed trace needs: the deck as supplied,
/// every executed step in pattern order, and the revealed cards in
/// reveal order.
///
/// # Examples
///
/// ```
/// use underdeal_core::{Deck, Label, Pattern};
/// use underdeal_sim::simulate;
///
/// let deck = Deck::from_labels(["2", "A", "3"].map(|s| Label::new(s).unwrap()));
/// let pattern = Pattern::from_codes(&[1, 0, 1, 0, 1, 0]).unwrap();
///
/// let run = simulate(&deck, &pattern).unwrap();
/// assert_eq!(run.initial_deck.len(), 3);
/// assert_eq!(run.steps.len(), 6);
/// let revealed: Vec<_> = run.revealed.iter().map(|l| l.as_str()).collect();
/// assert_eq!(revealed, ["A", "2", "3"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunRecord {
    /// The deck the replay started from, front to back.
    pub initial_deck: Vec<Label>,
    /// Every executed step, in pattern order.
    pub steps: Vec<StepRecord>,
    /// The cards revealed, in reveal order.
    pub revealed: Vec<Label>,
}
