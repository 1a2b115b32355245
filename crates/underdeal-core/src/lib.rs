//! Core vocabulary and containers for the underdeal workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the two-action vocabulary ([`Action`]), validated card labels
//! ([`Label`]) and action sequences ([`Pattern`]), the [`Deck`]
//! container with the primitive moves both the arranger and the
//! simulator are built from, and every error type used across the
//! workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod deck;
pub mod error;
pub mod label;
pub mod pattern;

pub use action::Action;
pub use deck::Deck;
pub use error::{ArrangeError, LabelError, PatternError, SimulateError};
pub use label::{standard_order, Label, STANDARD_LABELS};
pub use pattern::Pattern;
