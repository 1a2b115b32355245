//! Arrange a 13-card suit for the incremental draw and replay it.
//!
//! The first card surfaces after one rotate, the second after two, and
//! so on down the suit. Run with `cargo run --example incremental_draw`.

use std::error::Error;
use std::io;

use underdeal::patterns::incremental_draw;
use underdeal::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    let order = standard_order();
    let pattern = incremental_draw(order.len())?;
    let deck = arrange(&pattern, &order)?;

    let run = simulate(&deck, &pattern)?;
    TraceWriter::new(io::stdout().lock()).write_run(&run)?;
    Ok(())
}
