//! Batch encoding (`t9 batch ...`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use t9spelling::{BatchRunner, Keypad, parse_cases};
use tracing::debug;

use crate::cli::common::OutputFormatArg;
use crate::cli::utils::{read_source, write_sink};

/// Arguments for `t9 batch`.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Read cases from file (`-` for stdin).
    #[arg(long = "from", default_value = "-")]
    pub from: PathBuf,
    /// Write results to file (`-` for stdout).
    #[arg(long, short = 'o', default_value = "-")]
    pub output: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormatArg::Text)]
    pub format: OutputFormatArg,
}

/// Execute a batch command.
pub fn handle(keypad: &Keypad, args: BatchArgs) -> Result<()> {
    let input = read_source(&args.from)?;
    debug!(source = %args.from.display(), bytes = input.len(), "read batch input");

    let rendered = render(keypad, &input, args.format).context("batch aborted")?;
    write_sink(&args.output, &rendered)
}

/// Encode the whole batch and render it; nothing is produced if any case fails.
fn render(keypad: &Keypad, input: &str, format: OutputFormatArg) -> Result<String> {
    let messages = parse_cases(input)?;
    let runner = BatchRunner::new(keypad);
    match format {
        OutputFormatArg::Text => {
            let lines = runner.run_lines(&messages)?;
            Ok(lines.iter().map(|line| format!("{line}\n")).collect())
        }
        OutputFormatArg::Json => {
            let results = runner.run(&messages)?;
            let mut json = serde_json::to_string_pretty(&results)
                .context("failed to serialize batch results")?;
            json.push('\n');
            Ok(json)
        }
    }
}
