//! Arrange a 13-card suit for the spelling deal and replay it.
//!
//! Each card is spelled out — one rotate per letter of O-N-E, T-W-O,
//! and so on — before it is revealed. Run with
//! `cargo run --example spelling`.

use std::error::Error;
use std::io;

use underdeal::patterns::{spelling, STANDARD_SPELLINGS};
use underdeal::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    let pattern = spelling(&STANDARD_SPELLINGS)?;
    let deck = arrange(&pattern, &standard_order())?;

    let run = simulate(&deck, &pattern)?;
    TraceWriter::new(io::stdout().lock()).write_run(&run)?;
    Ok(())
}
