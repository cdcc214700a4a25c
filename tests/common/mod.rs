//! Shared test resolvers.

#![allow(dead_code)]

use std::cell::Cell;

use t9spelling::{KeyPress, KeyResolver};

/// Wraps a resolver and counts how often it is consulted.
pub struct CountingResolver<R> {
    pub inner: R,
    pub lookups: Cell<usize>,
}

impl<R> CountingResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            lookups: Cell::new(0),
        }
    }
}

impl<R: KeyResolver> KeyResolver for CountingResolver<R> {
    fn name(&self) -> &str {
        "counting"
    }

    fn resolve(&self, ch: char) -> Option<KeyPress> {
        self.lookups.set(self.lookups.get() + 1);
        self.inner.resolve(ch)
    }
}

/// Puts every character on key 1 with a single press.
pub struct SingleKey;

impl KeyResolver for SingleKey {
    fn name(&self) -> &str {
        "single key"
    }

    fn resolve(&self, _ch: char) -> Option<KeyPress> {
        KeyPress::new(1, 1).ok()
    }
}

/// Claims every character sits on key 12, which no keypad has.
pub struct OffPadKey;

impl KeyResolver for OffPadKey {
    fn name(&self) -> &str {
        "off pad"
    }

    fn resolve(&self, _ch: char) -> Option<KeyPress> {
        KeyPress::new(12, 2).ok()
    }
}

/// Resolves nothing.
pub struct NoKeys;

impl KeyResolver for NoKeys {
    fn name(&self) -> &str {
        "empty"
    }

    fn resolve(&self, _ch: char) -> Option<KeyPress> {
        None
    }
}
