use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::encoding::{CaseLabel, EncodeError, MessageEncoder, MessageProcessor, label_case};
use crate::keypad::KeyResolver;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    #[error("incorrect input format: {0}")]
    MalformedInput(String),
    #[error("case #{case_no} could not be encoded")]
    Encode {
        case_no: usize,
        #[source]
        source: EncodeError,
    },
}

/// One encoded message together with its 1-based case number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseResult {
    pub case_no: usize,
    pub encoded: String,
}

impl fmt::Display for CaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&label_case(self.case_no, &self.encoded))
    }
}

/// Split raw batch input into its messages.
///
/// The first line holds the number of cases, each following line is one
/// message. Lines past the announced count are ignored.
pub fn parse_cases(input: &str) -> Result<Vec<&str>, BatchError> {
    let mut lines = input.lines();
    let header = lines
        .next()
        .ok_or_else(|| BatchError::MalformedInput("input is empty".to_string()))?;
    let count: usize = header.trim().parse().map_err(|_| {
        BatchError::MalformedInput(format!(
            "case count '{}' is not a non-negative integer",
            header.escape_debug()
        ))
    })?;

    let messages: Vec<&str> = lines.take(count).collect();
    if messages.len() < count {
        return Err(BatchError::MalformedInput(format!(
            "expected {} messages, found {}",
            count,
            messages.len()
        )));
    }
    Ok(messages)
}

/// Runs every message of a batch through the encoder, in order.
#[derive(Debug, Clone, Copy)]
pub struct BatchRunner<R> {
    encoder: MessageEncoder<R>,
}

impl<R: KeyResolver> BatchRunner<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            encoder: MessageEncoder::new(resolver),
        }
    }

    /// Encode `messages`, numbering cases from 1.
    ///
    /// Stops at the first message that fails; no partial results are returned.
    pub fn run<S: AsRef<str>>(&self, messages: &[S]) -> Result<Vec<CaseResult>, BatchError> {
        let mut results = Vec::with_capacity(messages.len());
        for (idx, message) in messages.iter().enumerate() {
            let case_no = idx + 1;
            let encoded = self
                .encoder
                .encode(message.as_ref())
                .map_err(|source| BatchError::Encode { case_no, source })?;
            results.push(CaseResult { case_no, encoded });
        }
        info!(cases = results.len(), "batch encoded");
        Ok(results)
    }

    /// Produce the labelled output lines for `messages`.
    pub fn run_lines<S: AsRef<str>>(&self, messages: &[S]) -> Result<Vec<String>, BatchError> {
        let mut lines = Vec::with_capacity(messages.len());
        for (idx, message) in messages.iter().enumerate() {
            let case_no = idx + 1;
            let line = CaseLabel::new(&self.encoder, case_no)
                .process(message.as_ref())
                .map_err(|source| BatchError::Encode { case_no, source })?;
            lines.push(line);
        }
        info!(cases = lines.len(), "batch encoded");
        Ok(lines)
    }

    /// Parse the count line and messages from `input`, then run them.
    pub fn run_input(&self, input: &str) -> Result<Vec<CaseResult>, BatchError> {
        let messages = parse_cases(input)?;
        self.run(&messages)
    }
}
