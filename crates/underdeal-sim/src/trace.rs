//! Rendering run records as line-oriented traces.

use std::io::{self, Write};

use underdeal_core::{Action, Label};

use crate::record::RunRecord;

/// Renders [`RunRecord`]s to a byte stream.
///
/// Generic over `W: Write` so tests can render into `Vec<u8>` and demo
/// programs into stdout. The rendered data — step order, action, card,
/// resulting deck, revealed list — is contractual; column widths and
/// separators are not.
///
/// # Examples
///
/// ```
/// use underdeal_core::{Deck, Label, Pattern};
/// use underdeal_sim::{simulate, TraceWriter};
///
/// let deck = Deck::from_labels([Label::new("A").unwrap()]);
/// let pattern = Pattern::from_codes(&[1, 0]).unwrap();
/// let run = simulate(&deck, &pattern).unwrap();
///
/// let mut writer = TraceWriter::new(Vec::new());
/// writer.write_run(&run).unwrap();
/// let trace = String::from_utf8(writer.into_inner()).unwrap();
/// assert!(trace.starts_with("Initial deck:\nA\n"));
/// assert!(trace.ends_with("Revealed cards:\nA\n"));
/// ```
pub struct TraceWriter<W: Write> {
    writer: W,
}

impl<W: Write> TraceWriter<W> {
    /// Create a trace writer over `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Render one full run: initial deck, one line per step, revealed cards.
    pub fn write_run(&mut self, run: &RunRecord) -> io::Result<()> {
        writeln!(self.writer, "Initial deck:")?;
        writeln!(self.writer, "{}", join(&run.initial_deck))?;
        writeln!(self.writer, "{}", "-".repeat(72))?;

        for step in &run.steps {
            let action = match step.action {
                Action::Reveal => "REVEAL *",
                Action::Rotate => "ROTATE",
            };
            let card = step.card.as_ref().map(Label::as_str).unwrap_or("-");
            writeln!(
                self.writer,
                "Step {:>3} | Action: {:<8} | Card: {:<3} | Deck: {}",
                step.step,
                action,
                card,
                join(&step.deck_after),
            )?;
        }

        writeln!(self.writer, "{}", "-".repeat(72))?;
        writeln!(self.writer, "Revealed cards:")?;
        writeln!(self.writer, "{}", join(&run.revealed))?;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Consume the writer and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn join(labels: &[Label]) -> String {
    labels
        .iter()
        .map(Label::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
