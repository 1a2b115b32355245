//! Property tests over randomly generated patterns and desired orders.
//!
//! The generators follow the system's own invariant — a pattern with
//! `k` reveals pairs with a desired order of `k` labels — and check
//! the round trip from every direction.

use proptest::prelude::*;
use underdeal::prelude::*;

/// Raw action codes with at least one reveal.
fn arb_codes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..=1, 1..128)
        .prop_filter("pattern needs at least one reveal", |codes| {
            codes.contains(&Action::REVEAL_CODE)
        })
}

/// A pattern plus a same-length order drawn from a three-label
/// alphabet, so duplicates are common.
fn arb_pattern_with_duplicates() -> impl Strategy<Value = (Vec<u8>, Vec<String>)> {
    arb_codes().prop_flat_map(|codes| {
        let reveals = codes.iter().filter(|&&c| c == Action::REVEAL_CODE).count();
        let token = prop::sample::select(vec!["A", "B", "C"]);
        let order = prop::collection::vec(token.prop_map(str::to_owned), reveals..=reveals);
        (Just(codes), order)
    })
}

fn distinct_order(len: usize) -> Vec<Label> {
    (0..len)
        .map(|i| Label::new(format!("c{i}")).unwrap())
        .collect()
}

proptest! {
    #[test]
    fn arrange_then_simulate_round_trips(codes in arb_codes()) {
        let pattern = Pattern::from_codes(&codes).unwrap();
        let order = distinct_order(pattern.reveal_count());

        let deck = arrange(&pattern, &order).unwrap();
        prop_assert_eq!(deck.len(), order.len());

        let run = simulate(&deck, &pattern).unwrap();
        prop_assert_eq!(run.revealed, order);
        prop_assert_eq!(run.steps.len(), pattern.len());
    }

    #[test]
    fn round_trip_survives_duplicate_labels(
        (codes, tokens) in arb_pattern_with_duplicates()
    ) {
        let deck = arrange_codes(&codes, &tokens).unwrap();
        let run = simulate_codes(&deck, &codes).unwrap();

        let revealed: Vec<&str> = run.revealed.iter().map(|l| l.as_str()).collect();
        prop_assert_eq!(revealed, tokens);
    }

    #[test]
    fn arrange_is_idempotent(codes in arb_codes()) {
        let pattern = Pattern::from_codes(&codes).unwrap();
        let order = distinct_order(pattern.reveal_count());
        prop_assert_eq!(
            arrange(&pattern, &order).unwrap(),
            arrange(&pattern, &order).unwrap()
        );
    }

    #[test]
    fn simulate_never_mutates_the_input_deck(codes in arb_codes()) {
        let pattern = Pattern::from_codes(&codes).unwrap();
        let order = distinct_order(pattern.reveal_count());
        let deck = arrange(&pattern, &order).unwrap();

        let before = deck.clone();
        simulate(&deck, &pattern).unwrap();
        prop_assert_eq!(deck, before);
    }

    #[test]
    fn revealed_count_matches_reveal_actions(codes in arb_codes()) {
        let pattern = Pattern::from_codes(&codes).unwrap();
        let order = distinct_order(pattern.reveal_count());
        let deck = arrange(&pattern, &order).unwrap();

        let run = simulate(&deck, &pattern).unwrap();
        prop_assert_eq!(run.revealed.len(), pattern.reveal_count());
    }
}
