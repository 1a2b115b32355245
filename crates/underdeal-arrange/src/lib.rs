//! Reverse construction of deck arrangements.
//!
//! Given the action pattern a forward deal will perform and the order
//! its reveals must produce, [`arrange()`] computes the unique initial
//! deck by undoing the pattern back to front. [`arrange_codes`] accepts
//! loosely-typed input (raw action codes, string labels) and applies
//! the full validation funnel before constructing; [`arrange_standard`]
//! pairs a pattern with the standard 13-card order.
//!
//! The result guarantee — replaying the pattern forward against the
//! returned deck reveals exactly the desired order — is a derived
//! property verified by the simulator in the test suite, not re-checked
//! here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arrange;

pub use arrange::{arrange, arrange_codes, arrange_standard};
