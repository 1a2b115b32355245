//! End-to-end tests of the deal process: arrange a deck, replay it
//! forward, and require the revealed sequence to match the desired
//! order exactly.

use underdeal::patterns::{alternating, incremental_draw, spelling, STANDARD_SPELLINGS};
use underdeal::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────

fn labels(tokens: &[&str]) -> Vec<Label> {
    tokens.iter().map(|t| Label::new(*t).unwrap()).collect()
}

/// Arrange for `(pattern, order)`, replay forward, and assert the
/// round trip: revealed sequence == desired order.
fn assert_round_trip(pattern: &Pattern, order: &[Label]) -> Deck {
    let deck = arrange(pattern, order).expect("arrangement should succeed");
    assert_eq!(deck.len(), order.len());

    let run = simulate(&deck, pattern).expect("replay should succeed");
    assert_eq!(run.revealed, order, "replay diverged from desired order");
    assert_eq!(run.revealed.len(), pattern.reveal_count());
    deck
}

// ── Stock pattern families ──────────────────────────────────────

#[test]
fn alternating_deal_round_trips() {
    let pattern = alternating(13).unwrap();
    let deck = assert_round_trip(&pattern, &standard_order());
    assert_eq!(deck.to_string(), "7, A, Q, 2, 8, 3, J, 4, 9, 5, K, 6, 10");
}

#[test]
fn incremental_draw_round_trips() {
    let pattern = incremental_draw(13).unwrap();
    assert_round_trip(&pattern, &standard_order());
}

#[test]
fn spelling_deal_round_trips() {
    let pattern = spelling(&STANDARD_SPELLINGS).unwrap();
    assert_round_trip(&pattern, &standard_order());
}

// ── Small hand-checked scenarios ────────────────────────────────

#[test]
fn three_card_alternating_deal() {
    let pattern = Pattern::from_codes(&[1, 0, 1, 0, 1, 0]).unwrap();
    assert_round_trip(&pattern, &labels(&["A", "2", "3"]));
}

#[test]
fn pattern_with_leading_rotates_round_trips() {
    let pattern = Pattern::from_codes(&[1, 1, 1, 0, 1, 0]).unwrap();
    assert_round_trip(&pattern, &labels(&["A", "2"]));
}

#[test]
fn duplicate_labels_round_trip() {
    let pattern = Pattern::from_codes(&[1, 0, 1, 0, 0]).unwrap();
    assert_round_trip(&pattern, &labels(&["X", "X", "Y"]));
}

#[test]
fn pattern_with_trailing_rotates_round_trips() {
    // The rotates after the final reveal run against an empty deck,
    // forward and backward alike.
    let pattern = Pattern::from_codes(&[1, 0, 0, 1, 1]).unwrap();
    assert_round_trip(&pattern, &labels(&["A", "2"]));
}

#[test]
fn single_card_single_reveal() {
    let pattern = Pattern::from_codes(&[0]).unwrap();
    let deck = assert_round_trip(&pattern, &labels(&["A"]));
    assert_eq!(deck.to_string(), "A");
}

// ── Validation funnel, end to end ───────────────────────────────

#[test]
fn short_pattern_is_rejected_with_both_counts() {
    assert_eq!(
        arrange_codes(&[1, 0, 1, 0], &["A", "2", "3"]),
        Err(ArrangeError::RevealCountMismatch {
            expected: 3,
            actual: 2,
        })
    );
}

#[test]
fn foreign_action_code_is_rejected_by_name() {
    assert_eq!(
        arrange_codes(&[1, 0, 2, 0, 1, 0], &["A", "2", "3"]),
        Err(ArrangeError::Pattern(PatternError::InvalidActions {
            codes: vec![2]
        }))
    );
}

#[test]
fn trace_of_a_full_deal_carries_every_step() {
    let pattern = alternating(13).unwrap();
    let deck = arrange(&pattern, &standard_order()).unwrap();
    let run = simulate(&deck, &pattern).unwrap();

    let mut writer = TraceWriter::new(Vec::new());
    writer.write_run(&run).unwrap();
    let trace = String::from_utf8(writer.into_inner()).unwrap();

    assert!(trace.contains("Initial deck:\n7, A, Q, 2, 8, 3, J, 4, 9, 5, K, 6, 10\n"));
    assert_eq!(trace.lines().filter(|l| l.starts_with("Step")).count(), 26);
    assert!(trace.contains("Revealed cards:\nA, 2, 3, 4, 5, 6, 7, 8, 9, 10, J, Q, K\n"));
}
