//! Layout listing (`t9 keypad`).

use anyhow::Result;
use t9spelling::{Key, Keypad};

pub fn handle(keypad: &Keypad) -> Result<()> {
    for key in keypad.keys() {
        println!("{}", key_line(key));
    }
    Ok(())
}

/// `2: abc`; keys holding only whitespace are quoted so they stay visible.
fn key_line(key: &Key) -> String {
    let chars: String = key.supported_characters().iter().collect();
    if chars.trim().is_empty() {
        format!("{}: '{}'", key.digit(), chars)
    } else {
        format!("{}: {}", key.digit(), chars)
    }
}
