use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io;
use till_change::console::Console;

/// Interactive change calculator over the standard UK coin and note values.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    console.run().into_diagnostic()?;

    Ok(())
}
