use crate::engine::ChangeEngine;
use crate::error::Result;
use crate::validator::validate;
use std::io::{BufRead, Write};

const QUIT_TOKEN: &str = "q";

/// Interactive read/validate/compute/print loop.
///
/// Generic over the line channels so tests can drive a full session against
/// in-memory buffers instead of a terminal.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
    engine: ChangeEngine,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            engine: ChangeEngine::new(),
        }
    }

    /// Runs transaction cycles until the quit token or end of input.
    ///
    /// Invalid input re-prompts both values; it never terminates the process.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the Change Calculator")?;
        writeln!(self.output, "Note: please use a dot '.' for decimal values")?;
        writeln!(self.output)?;

        loop {
            writeln!(self.output, "Please enter the product price:")?;
            let Some(price) = self.read_line()? else {
                break;
            };
            writeln!(self.output, "Please enter the payment amount:")?;
            let Some(payment) = self.read_line()? else {
                break;
            };

            match validate(&price, &payment) {
                Ok((price, payment)) => {
                    for line in self.engine.render(price, payment) {
                        writeln!(self.output, "{line}")?;
                    }
                }
                Err(reason) => {
                    writeln!(self.output, "{reason}")?;
                    continue;
                }
            }

            writeln!(self.output, "To end enter '{QUIT_TOKEN}', otherwise press enter")?;
            match self.read_line()? {
                Some(token) if token == QUIT_TOKEN => break,
                Some(_) => {}
                None => break,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Reads one line with its ending stripped; `None` means the channel is
    /// exhausted. Value normalization (whitespace trimming) belongs to the
    /// validator, not here.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }
}
