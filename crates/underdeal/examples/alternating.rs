//! Arrange a 13-card suit for the alternating deal and replay it.
//!
//! Run with `cargo run --example alternating`.

use std::error::Error;
use std::io;

use underdeal::patterns::alternating;
use underdeal::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    let pattern = alternating(13)?;
    let deck = arrange(&pattern, &standard_order())?;

    let run = simulate(&deck, &pattern)?;
    TraceWriter::new(io::stdout().lock()).write_run(&run)?;
    Ok(())
}
