//! Underdeal: deck arrangement for deterministic rotate/reveal deals.
//!
//! A deal pattern is a fixed sequence of two moves — rotate the front
//! card to the back, or reveal it off the top — and the question is
//! which initial deck makes the deal reveal the cards in a chosen
//! order. The arranger answers it by undoing the pattern back to
//! front; the simulator replays the pattern forward to visualize and
//! verify the construction.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all underdeal sub-crates. For most users, adding `underdeal`
//! as a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use underdeal::prelude::*;
//! use underdeal::patterns::alternating;
//!
//! // Rotate one, reveal one, over a full 13-card suit.
//! let pattern = alternating(13).unwrap();
//! let order = standard_order();
//!
//! // The deck that makes the deal reveal A, 2, ..., K in order.
//! let deck = arrange(&pattern, &order).unwrap();
//! assert_eq!(deck.to_string(), "7, A, Q, 2, 8, 3, J, 4, 9, 5, K, 6, 10");
//!
//! // Replaying forward round-trips to the desired order.
//! let run = simulate(&deck, &pattern).unwrap();
//! assert_eq!(run.revealed, order);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `underdeal-core` | Action vocabulary, labels, patterns, decks, errors |
//! | [`arranger`] | `underdeal-arrange` | Reverse construction of initial decks |
//! | [`sim`] | `underdeal-sim` | Forward replay, run records, trace rendering |
//! | [`patterns`] | `underdeal-patterns` | Stock pattern builders |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary, containers, and error types (`underdeal-core`).
pub use underdeal_core as types;

/// Reverse construction of initial decks (`underdeal-arrange`).
///
/// [`arrange()`](underdeal_arrange::arrange()) is the typed entry
/// point; [`arrange_codes`](underdeal_arrange::arrange_codes) applies
/// the full validation funnel to raw input.
pub use underdeal_arrange as arranger;

/// Forward replay and trace rendering (`underdeal-sim`).
///
/// [`simulate`](underdeal_sim::simulate) produces a
/// [`RunRecord`](underdeal_sim::RunRecord);
/// [`TraceWriter`](underdeal_sim::TraceWriter) renders it.
pub use underdeal_sim as sim;

/// Stock pattern builders (`underdeal-patterns`).
///
/// The alternating, incremental-draw, and spelling deal families.
pub use underdeal_patterns as patterns;

/// Common imports for typical underdeal usage.
///
/// ```rust
/// use underdeal::prelude::*;
/// ```
///
/// This imports the arranger and simulator entry points, the core
/// types, and every error type.
pub mod prelude {
    // Core vocabulary and containers
    pub use underdeal_core::{standard_order, Action, Deck, Label, Pattern, STANDARD_LABELS};

    // Errors
    pub use underdeal_core::{ArrangeError, LabelError, PatternError, SimulateError};

    // Arranger
    pub use underdeal_arrange::{arrange, arrange_codes, arrange_standard};

    // Simulator
    pub use underdeal_sim::{simulate, simulate_codes, RunRecord, StepRecord, TraceWriter};
}
