//! Stock pattern builders for deal demonstrations.
//!
//! Three families, each producing exactly one reveal per desired card
//! so the resulting pattern pairs with a desired order of the matching
//! length:
//!
//! 1. [`alternating`] — rotate one, reveal one.
//! 2. [`incremental_draw`] — `i` rotates then a reveal, for each `i`
//!    up to the card count.
//! 3. [`spelling`] — one rotate per letter of each word, then a
//!    reveal.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alternating;
pub mod incremental;
pub mod spelling;

pub use alternating::alternating;
pub use incremental::incremental_draw;
pub use spelling::{spelling, STANDARD_SPELLINGS};
