//! Shared clap helper types for CLI commands.

use clap::ValueEnum;

/// Output formats for batch results.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormatArg {
    /// `Case #N: <digits>` lines.
    #[default]
    Text,
    /// JSON array of `{ "case_no", "encoded" }` objects.
    Json,
}
