use std::collections::HashMap;
use std::fmt;

use thiserror::Error;
use tracing::warn;

use crate::encoding::EncodeError;

/// Highest digit available on a telephone keypad.
pub const MAX_DIGIT: u8 = 9;

/// Reasons a key or keypad layout is rejected at construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("digit {0} is out of the keypad range [0 - 9]")]
    DigitOutOfRange(u8),
    #[error("key {0} has no characters")]
    NoCharacters(u8),
    #[error("key {digit} lists characters '{chars}' with duplicated items")]
    DuplicateCharacters { digit: u8, chars: String },
    #[error("key press position must be at least 1")]
    ZeroPosition,
}

/// Presses needed to type one character: push `digit` `position` times.
///
/// Always holds a digit in `0..=9` and a position of at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    digit: u8,
    position: usize,
}

impl KeyPress {
    pub fn new(digit: u8, position: usize) -> Result<Self, LayoutError> {
        if digit > MAX_DIGIT {
            return Err(LayoutError::DigitOutOfRange(digit));
        }
        if position == 0 {
            return Err(LayoutError::ZeroPosition);
        }
        Ok(Self { digit, position })
    }

    pub fn digit(&self) -> u8 {
        self.digit
    }

    /// 1-based rank of the character on its key.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Digit character repeated `position` times, e.g. `(5, 3)` -> `"555"`.
    pub fn render(&self) -> String {
        let digit = char::from(b'0' + self.digit);
        std::iter::repeat_n(digit, self.position).collect()
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// A single keypad button: a digit and the ordered characters it cycles through.
///
/// Order matters: the first character takes one press, the second two, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    digit: u8,
    chars: Vec<char>,
}

impl Key {
    pub fn new<I>(digit: u8, chars: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = char>,
    {
        if digit > MAX_DIGIT {
            return Err(LayoutError::DigitOutOfRange(digit));
        }
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(LayoutError::NoCharacters(digit));
        }
        for (i, ch) in chars.iter().enumerate() {
            if chars[..i].contains(ch) {
                return Err(LayoutError::DuplicateCharacters {
                    digit,
                    chars: chars.iter().collect(),
                });
            }
        }
        Ok(Self { digit, chars })
    }

    pub fn digit(&self) -> u8 {
        self.digit
    }

    /// Characters served by this key, in press order.
    pub fn supported_characters(&self) -> &[char] {
        &self.chars
    }

    pub fn press_for(&self, ch: char) -> Option<KeyPress> {
        self.chars
            .iter()
            .position(|&c| c == ch)
            .map(|idx| KeyPress {
                digit: self.digit,
                position: idx + 1,
            })
    }

    pub fn encode_char(&self, ch: char) -> Result<String, EncodeError> {
        self.press_for(ch)
            .map(|press| press.render())
            .ok_or_else(|| EncodeError::unsupported(ch, format!("key {}", self.digit)))
    }
}

/// Resolves characters to the key presses that produce them.
///
/// The encoder only talks to this trait, so callers can swap in their own layouts.
pub trait KeyResolver {
    /// Short label used in diagnostics.
    fn name(&self) -> &str;
    fn resolve(&self, ch: char) -> Option<KeyPress>;
}

impl<R: KeyResolver + ?Sized> KeyResolver for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn resolve(&self, ch: char) -> Option<KeyPress> {
        (**self).resolve(ch)
    }
}

/// Immutable character -> key press table.
#[derive(Debug, Clone)]
pub struct Keypad {
    keys: Vec<Key>,
    map: HashMap<char, KeyPress>,
}

impl Keypad {
    /// Build a keypad from keys in registration order.
    ///
    /// A character listed under two keys resolves to the later one.
    pub fn from_keys(keys: Vec<Key>) -> Self {
        let mut map = HashMap::new();
        for key in &keys {
            for (idx, &ch) in key.chars.iter().enumerate() {
                let press = KeyPress {
                    digit: key.digit,
                    position: idx + 1,
                };
                if let Some(previous) = map.insert(ch, press) {
                    warn!(
                        ch = %ch.escape_debug(),
                        from = previous.digit,
                        to = press.digit,
                        "character re-registered on another key"
                    );
                }
            }
        }
        Self { keys, map }
    }

    /// Lowercase Latin letters plus space, as printed on a phone keypad.
    pub fn standard() -> Self {
        let layout: [(u8, &str); 9] = [
            (2, "abc"),
            (3, "def"),
            (4, "ghi"),
            (5, "jkl"),
            (6, "mno"),
            (7, "pqrs"),
            (8, "tuv"),
            (9, "wxyz"),
            (0, " "),
        ];
        let keys = layout
            .iter()
            .map(|&(digit, chars)| Key {
                digit,
                chars: chars.chars().collect(),
            })
            .collect();
        Self::from_keys(keys)
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn lookup(&self, ch: char) -> Option<KeyPress> {
        self.map.get(&ch).copied()
    }

    pub fn is_supported(&self, ch: char) -> bool {
        self.map.contains_key(&ch)
    }

    pub fn encode_char(&self, ch: char) -> Result<String, EncodeError> {
        self.lookup(ch)
            .map(|press| press.render())
            .ok_or_else(|| EncodeError::unsupported(ch, self.name()))
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

impl KeyResolver for Keypad {
    fn name(&self) -> &str {
        "keypad"
    }

    fn resolve(&self, ch: char) -> Option<KeyPress> {
        self.lookup(ch)
    }
}
