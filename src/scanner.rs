//! FILENAME: src/scanner.rs
//! PURPOSE: Forward-only cursor over expression text with consume primitives.
//! CONTEXT: This is the leaf layer of the evaluator. The grammar rules
//! never buffer tokens; they rely on the guarantee that a failed consume
//! leaves the cursor exactly where it was, so alternative productions can
//! be retried from the same position without save/restore.
//!
//! RECOGNIZED CLASSES:
//! - Whitespace: space and horizontal tab only (no newline semantics)
//! - Digits and letters: ASCII only

/// A read-only view over the input text plus the current scan position.
/// Lives for the duration of a single `eval` call.
pub struct Cursor<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Cursor {
            src: input.as_bytes(),
            pos: 0,
        }
    }

    /// Skips consecutive whitespace characters.
    /// Returns true if any input remains afterwards.
    pub fn eat_ws(&mut self) -> bool {
        while let Some(b' ' | b'\t') = self.peek() {
            self.pos += 1;
        }
        self.pos < self.src.len()
    }

    /// Returns the byte at the current position without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    /// Advances past the current byte. Only call after a successful `peek`.
    pub fn bump(&mut self) {
        self.pos += 1;
    }

    /// Consumes `s` if the input starts with it here.
    /// On mismatch the cursor does not move.
    pub fn consume_str(&mut self, s: &str) -> bool {
        if self.src[self.pos..].starts_with(s.as_bytes()) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    /// Consumes a single expected byte. On mismatch the cursor does not move.
    pub fn consume_ch(&mut self, ch: u8) -> bool {
        if self.peek() == Some(ch) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes one byte if it is in `set`, returning which one.
    pub fn consume_any(&mut self, set: &[u8]) -> Option<u8> {
        match self.peek() {
            Some(ch) if set.contains(&ch) => {
                self.pos += 1;
                Some(ch)
            }
            _ => None,
        }
    }
}

/// Returns true for ASCII decimal digits.
pub fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// Returns true for ASCII letters. Identifiers are ASCII-only.
pub fn is_alpha(ch: u8) -> bool {
    ch.is_ascii_alphabetic()
}

/// Returns true for ASCII letters and digits.
pub fn is_alnum(ch: u8) -> bool {
    is_digit(ch) || is_alpha(ch)
}
