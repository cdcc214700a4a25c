//! Core library for turning text into telephone keypad (T9) keypresses.

mod batch;
mod encoding;
mod keypad;

pub use batch::{BatchError, BatchRunner, CaseResult, parse_cases};
pub use encoding::{CaseLabel, EncodeError, MessageEncoder, MessageProcessor, PAUSE};
pub use keypad::{Key, KeyPress, KeyResolver, Keypad, LayoutError, MAX_DIGIT};

/// Encodes a single message on `keypad`, without a case label.
pub fn encode_message(keypad: &Keypad, message: &str) -> Result<String, EncodeError> {
    MessageEncoder::new(keypad).encode(message)
}
