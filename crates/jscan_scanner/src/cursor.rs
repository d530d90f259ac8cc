//! Read cursor over the source text.
//!
//! The cursor owns the only mutable position in a scan. Every character
//! the scanner consumes goes through [`Cursor::bump`] or
//! [`Cursor::advance_to`], so the line counter stays exact no matter
//! which token path consumed a newline.

use crate::char_codes::is_line_break;
use jscan_core::text::{Location, TextPos};

/// Saved cursor position for bounded lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pos: usize,
    newlines: u32,
    column: u32,
}

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    /// Byte offset of the next unread character.
    pos: usize,
    /// Number of `\n` characters consumed so far.
    newlines: u32,
    /// Characters consumed since the start of the current line.
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            newlines: 0,
            column: 0,
        }
    }

    /// Look at the next character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Look `n` characters past the next one (`peek_nth(0) == peek()`).
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Consume one character.
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if is_line_break(ch) {
            self.newlines += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Consume characters while `pred` holds.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.bump();
        }
    }

    /// Jump forward to byte offset `target`, counting the newlines skipped.
    ///
    /// `target` must lie on a character boundary at or after the current position.
    pub fn advance_to(&mut self, target: usize) {
        debug_assert!(target >= self.pos && self.text.is_char_boundary(target));
        let skipped = &self.text[self.pos..target];
        match memchr::memrchr(b'\n', skipped.as_bytes()) {
            Some(last) => {
                self.newlines += memchr::memchr_iter(b'\n', skipped.as_bytes()).count() as u32;
                self.column = skipped[last + 1..].chars().count() as u32;
            }
            None => self.column += skipped.chars().count() as u32,
        }
        self.pos = target;
    }

    /// Byte offset of the next `\n`, or the end of the text.
    pub fn line_end(&self) -> usize {
        memchr::memchr(b'\n', self.rest().as_bytes())
            .map_or(self.text.len(), |offset| self.pos + offset)
    }

    /// Byte offset of the next occurrence of `needle`, if any.
    pub fn find(&self, needle: &str) -> Option<usize> {
        memchr::memmem::find(self.rest().as_bytes(), needle.as_bytes()).map(|offset| self.pos + offset)
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            newlines: self.newlines,
            column: self.column,
        }
    }

    /// Return to a checkpoint, un-reading everything consumed since.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
        self.newlines = checkpoint.newlines;
        self.column = checkpoint.column;
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn text_pos(&self) -> TextPos {
        self.pos as TextPos
    }

    #[inline]
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn newlines(&self) -> u32 {
        self.newlines
    }

    /// The 1-based line/column of the next unread character.
    pub fn location(&self) -> Location {
        Location::new(self.newlines + 1, self.column + 1)
    }

    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[start..end]
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }
}
