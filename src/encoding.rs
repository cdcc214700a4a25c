use thiserror::Error;
use tracing::debug;

use crate::keypad::KeyResolver;

/// Separates two digit groups typed on the same key.
pub const PAUSE: char = ' ';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("unsupported character: '{}' (U+{:04X}) rejected by {component}", .ch.escape_debug(), codepoint(.ch))]
    UnsupportedCharacter { ch: char, component: String },
}

fn codepoint(ch: &char) -> u32 {
    u32::from(*ch)
}

impl EncodeError {
    pub(crate) fn unsupported(ch: char, component: impl Into<String>) -> Self {
        EncodeError::UnsupportedCharacter {
            ch,
            component: component.into(),
        }
    }
}

/// Anything that turns one message into another piece of text.
pub trait MessageProcessor {
    fn process(&self, message: &str) -> Result<String, EncodeError>;
}

impl<P: MessageProcessor + ?Sized> MessageProcessor for &P {
    fn process(&self, message: &str) -> Result<String, EncodeError> {
        (**self).process(message)
    }
}

/// Turns whole messages into keypress strings.
///
/// Walks the message left to right and emits each character's digit group.
/// When a character sits on the same digit as the one before it, a [`PAUSE`]
/// goes in between so the two groups are not read as one longer run.
#[derive(Debug, Clone, Copy)]
pub struct MessageEncoder<R> {
    resolver: R,
}

impl<R: KeyResolver> MessageEncoder<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn encode(&self, message: &str) -> Result<String, EncodeError> {
        let mut out = String::with_capacity(message.len() * 2);
        let mut last_digit: Option<u8> = None;

        for ch in message.chars() {
            let press = self
                .resolver
                .resolve(ch)
                .ok_or_else(|| EncodeError::unsupported(ch, self.resolver.name()))?;
            if last_digit == Some(press.digit()) {
                out.push(PAUSE);
            }
            out.push_str(&press.render());
            last_digit = Some(press.digit());
        }

        debug!(chars = message.chars().count(), encoded_len = out.len(), "encoded message");
        Ok(out)
    }
}

impl<R: KeyResolver> MessageProcessor for MessageEncoder<R> {
    fn process(&self, message: &str) -> Result<String, EncodeError> {
        self.encode(message)
    }
}

/// Prefixes the output of another processor with `Case #N: `.
#[derive(Debug, Clone, Copy)]
pub struct CaseLabel<P> {
    origin: P,
    case_no: usize,
}

impl<P: MessageProcessor> CaseLabel<P> {
    pub fn new(origin: P, case_no: usize) -> Self {
        Self { origin, case_no }
    }

    pub fn case_no(&self) -> usize {
        self.case_no
    }
}

impl<P: MessageProcessor> MessageProcessor for CaseLabel<P> {
    fn process(&self, message: &str) -> Result<String, EncodeError> {
        let body = self.origin.process(message)?;
        Ok(label_case(self.case_no, &body))
    }
}

/// `Case #N: <body>`.
pub(crate) fn label_case(case_no: usize, body: &str) -> String {
    format!("Case #{case_no}: {body}")
}
