//! Single message encoding (`t9 encode ...`).

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use t9spelling::{EncodeError, Keypad, encode_message};

use crate::cli::utils::{read_text_arg, strip_line_ending};

/// Arguments for `t9 encode`.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Message text (falls back to stdin if omitted).
    #[arg(long)]
    pub text: Option<String>,
    /// Read the message from file (`-` for stdin).
    #[arg(long = "from", conflicts_with = "text")]
    pub from: Option<PathBuf>,
}

/// Execute an encode command.
pub fn handle(keypad: &Keypad, args: EncodeArgs) -> Result<()> {
    let text = read_text_arg(args.text, args.from)?;
    println!("{}", encode_input(keypad, &text)?);
    Ok(())
}

/// Encode one message read from a file or stream, ignoring its final newline.
fn encode_input(keypad: &Keypad, text: &str) -> Result<String, EncodeError> {
    encode_message(keypad, strip_line_ending(text))
}
