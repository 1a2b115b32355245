//! The deck container and its primitive moves.

use crate::label::Label;
use std::collections::{vec_deque, VecDeque};
use std::fmt;

/// An ordered deck of labeled cards, front to back.
///
/// Both halves of the system are expressed through the four primitive
/// moves defined here: the forward process uses [`rotate`](Deck::rotate)
/// and [`reveal`](Deck::reveal); the reverse construction undoes them
/// with [`unrotate`](Deck::unrotate) and [`restore`](Deck::restore).
///
/// Decks clone cheaply and every operation that replays a pattern works
/// on its own clone, so a caller's deck is never mutated behind its
/// back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Label>,
}

impl Deck {
    /// An empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck from labels in front-to-back order.
    pub fn from_labels(labels: impl IntoIterator<Item = Label>) -> Self {
        Self {
            cards: labels.into_iter().collect(),
        }
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// `true` if the deck holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The front card, if any.
    pub fn front(&self) -> Option<&Label> {
        self.cards.front()
    }

    /// Move the front card to the back, returning the moved card.
    pub fn rotate(&mut self) -> Option<Label> {
        let card = self.cards.pop_front()?;
        self.cards.push_back(card.clone());
        Some(card)
    }

    /// Remove and return the front card.
    pub fn reveal(&mut self) -> Option<Label> {
        self.cards.pop_front()
    }

    /// Undo a rotate: move the back card to the front.
    ///
    /// A defined no-op on an empty deck. Reverse processing reaches
    /// that state whenever the pattern opens with rotates, before the
    /// first reveal has been undone.
    pub fn unrotate(&mut self) {
        if let Some(card) = self.cards.pop_back() {
            self.cards.push_front(card);
        }
    }

    /// Undo a reveal: put `card` back on the front.
    pub fn restore(&mut self, card: Label) {
        self.cards.push_front(card);
    }

    /// Iterate the cards front to back.
    pub fn iter(&self) -> vec_deque::Iter<'_, Label> {
        self.cards.iter()
    }

    /// The cards as a front-to-back vector.
    pub fn to_vec(&self) -> Vec<Label> {
        self.cards.iter().cloned().collect()
    }
}

impl fmt::Display for Deck {
    /// Cards joined with `", "`, front first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in &self.cards {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromIterator<Label> for Deck {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        Self::from_labels(iter)
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Label;
    type IntoIter = vec_deque::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(labels: &[&str]) -> Deck {
        labels
            .iter()
            .map(|s| Label::new(*s).unwrap())
            .collect()
    }

    #[test]
    fn rotate_cycles_front_to_back() {
        let mut d = deck(&["A", "2", "3"]);
        let moved = d.rotate().unwrap();
        assert_eq!(moved.as_str(), "A");
        assert_eq!(d, deck(&["2", "3", "A"]));
    }

    #[test]
    fn reveal_pops_front() {
        let mut d = deck(&["A", "2"]);
        assert_eq!(d.reveal().unwrap().as_str(), "A");
        assert_eq!(d.reveal().unwrap().as_str(), "2");
        assert_eq!(d.reveal(), None);
    }

    #[test]
    fn unrotate_inverts_rotate() {
        let mut d = deck(&["A", "2", "3"]);
        d.rotate();
        d.unrotate();
        assert_eq!(d, deck(&["A", "2", "3"]));
    }

    #[test]
    fn unrotate_on_empty_deck_is_noop() {
        let mut d = Deck::new();
        d.unrotate();
        assert!(d.is_empty());
    }

    #[test]
    fn restore_inverts_reveal() {
        let mut d = deck(&["A", "2"]);
        let card = d.reveal().unwrap();
        d.restore(card);
        assert_eq!(d, deck(&["A", "2"]));
    }

    #[test]
    fn display_joins_front_first() {
        assert_eq!(deck(&["A", "2", "10"]).to_string(), "A, 2, 10");
        assert_eq!(Deck::new().to_string(), "");
    }
}
