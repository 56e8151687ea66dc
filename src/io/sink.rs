//! Result sink: renders the ranked keyword list to any writer.

use std::io::{self, Write};

use crate::engine::RankedKeyword;
use crate::types::OutputConfig;

/// Line-oriented output destination for ranked keywords.
pub struct ResultSink<W: Write> {
    writer: W,
}

impl<W: Write> ResultSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a single output line.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }

    /// Render the ranked list, one keyword per line, in ranking order.
    /// Verbose mode prints `"<rank>. <word> (<score>)"` with 1-based ranks
    /// and two-decimal scores; terse mode prints the bare word.
    pub fn write_results(
        &mut self,
        results: &[RankedKeyword],
        config: &OutputConfig,
    ) -> io::Result<()> {
        for (i, keyword) in results.iter().enumerate() {
            if config.verbose {
                self.write_line(&format!("{}. {} ({:.2})", i + 1, keyword.word, keyword.score))?;
            } else {
                self.write_line(&keyword.word)?;
            }
        }
        Ok(())
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
