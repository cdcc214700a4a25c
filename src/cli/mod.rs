//! Command-line interface wiring for the `t9` binary.
//!
//! This module owns the clap definitions and delegates execution to
//! the submodule of each command.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use t9spelling::Keypad;

pub mod batch;
pub mod common;
pub mod encode;
pub mod keypad;
pub mod utils;

/// Parsed CLI entrypoint for the `t9` binary.
#[derive(Parser, Debug)]
#[command(name = "t9", version, about = "Telephone keypad (T9) spelling toolkit")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Top-level command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Commands made available to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a numbered batch of messages (count line followed by messages).
    Batch(batch::BatchArgs),
    /// Encode a single message without a case label.
    Encode(encode::EncodeArgs),
    /// Print the keypad layout.
    Keypad,
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    let keypad = Keypad::standard();
    match cli.command {
        Command::Batch(args) => batch::handle(&keypad, args),
        Command::Encode(args) => encode::handle(&keypad, args),
        Command::Keypad => keypad::handle(&keypad),
    }
}
