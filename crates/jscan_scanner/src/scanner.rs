//! The scanner.
//!
//! Converts source text into a lazy stream of tokens. Declaration and
//! use events go to the binder as a side effect of classification, so by
//! the time the stream is exhausted the symbol table is complete.

use crate::char_codes::*;
use crate::cursor::Cursor;
use crate::keywords::{is_declaration_keyword, is_keyword};
use crate::lint::SemicolonLint;
use crate::operators::match_operator;
use crate::state::ScanState;
use crate::token::{Token, TokenFlags, TokenKind};
use jscan_binder::{Binder, SymbolTable};
use jscan_core::text::{Location, TextSpan};
use jscan_diagnostics::WarningCollection;
use jscan_options::ScanOptions;
use std::iter::FusedIterator;
use tracing::trace;

pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    binder: Binder,
    /// Present only when the missing-semicolon lint is enabled.
    lint: Option<SemicolonLint>,
    max_token_length: Option<usize>,
    /// End of input has been reached and the final line checked.
    done: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner with default options.
    pub fn new(text: &'a str) -> Self {
        Self::with_options(text, &ScanOptions::default())
    }

    pub fn with_options(text: &'a str, options: &ScanOptions) -> Self {
        Self {
            cursor: Cursor::new(text),
            binder: Binder::new(),
            lint: options.check_semicolons.then(SemicolonLint::new),
            max_token_length: options.max_token_length,
            done: false,
        }
    }

    /// Warnings recorded so far.
    pub fn diagnostics(&self) -> &WarningCollection {
        self.binder.diagnostics()
    }

    pub fn symbols(&self) -> &SymbolTable {
        self.binder.symbols()
    }

    /// Newlines consumed so far.
    pub fn lines(&self) -> u32 {
        self.cursor.newlines()
    }

    /// Scan the rest of the input and hand back the accumulated state.
    pub fn finish(mut self) -> ScanState {
        while self.next_token().is_some() {}
        ScanState::new(self.binder, self.cursor.newlines())
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Scan the next token, or `None` at end of input.
    ///
    /// Whitespace after a token is consumed with it, so any line-end
    /// warning is recorded before the token is returned.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        self.skip_white_space();

        let Some(ch) = self.cursor.peek() else {
            self.finish_input();
            return None;
        };

        let start = self.cursor.pos();
        let start_loc = self.cursor.location();
        let token = if is_identifier_start(ch) {
            self.scan_word(start, start_loc)
        } else {
            let (kind, text, flags) = match ch {
                _ if is_digit(ch) => self.scan_number(start),
                DOT if self.cursor.peek_nth(1).is_some_and(is_digit) => self.scan_number(start),
                DOT => {
                    self.cursor.bump();
                    (TokenKind::Operator, DOT.to_string(), TokenFlags::NONE)
                }
                _ if is_quote(ch) => self.scan_string(start, ch),
                SLASH if self.cursor.peek_nth(1) == Some(SLASH) => self.scan_line_comment(start),
                SLASH if self.cursor.peek_nth(1) == Some(ASTERISK) => self.scan_block_comment(),
                _ if is_delimiter(ch) => {
                    self.cursor.bump();
                    (TokenKind::Delimiter, ch.to_string(), TokenFlags::NONE)
                }
                _ => self.scan_operator(ch),
            };
            self.make_token(kind, text, flags, start, start_loc)
        };

        self.skip_white_space();
        if self.cursor.is_eof() {
            self.finish_input();
        }
        Some(token)
    }

    fn finish_input(&mut self) {
        self.end_line();
        self.done = true;
    }

    /// Build a token ending at the cursor and run it past the lint.
    fn make_token(
        &mut self,
        kind: TokenKind,
        text: String,
        flags: TokenFlags,
        start: usize,
        start_loc: Location,
    ) -> Token {
        let (text, clipped) = self.clip(text);
        let span = TextSpan::new(start as u32, self.cursor.text_pos());
        let mut token = Token::new(kind, text, start_loc, span).with_flags(flags);
        if clipped {
            token.flags |= TokenFlags::TRUNCATED;
        }
        if let Some(lint) = self.lint.as_mut() {
            lint.observe(&token, self.cursor.location());
        }
        trace!(kind = %token.kind, text = %token.text, line = token.line, column = token.column, "token");
        token
    }

    /// Skip whitespace, closing out a line for the lint at every newline.
    fn skip_white_space(&mut self) {
        while let Some(ch) = self.cursor.peek() {
            if is_line_break(ch) {
                self.cursor.bump();
                self.end_line();
            } else if is_white_space_single_line(ch) {
                self.cursor.bump();
            } else {
                break;
            }
        }
    }

    fn end_line(&mut self) {
        if let Some(warning) = self.lint.as_mut().and_then(SemicolonLint::end_line) {
            self.binder.report(warning);
        }
    }

    /// Apply the maximum token length option.
    fn clip(&self, mut text: String) -> (String, bool) {
        match self.max_token_length {
            Some(max) => match text.char_indices().nth(max) {
                Some((cut, _)) => {
                    text.truncate(cut);
                    (text, true)
                }
                None => (text, false),
            },
            None => (text, false),
        }
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    fn scan_word(&mut self, start: usize, start_loc: Location) -> Token {
        self.cursor.eat_while(is_identifier_part);
        let word = self.cursor.slice(start, self.cursor.pos());

        if !is_keyword(word) {
            let token =
                self.make_token(TokenKind::Identifier, word.to_string(), TokenFlags::NONE, start, start_loc);
            self.binder.mark_used(&token.text);
            return token;
        }

        let token = self.make_token(TokenKind::Keyword, word.to_string(), TokenFlags::NONE, start, start_loc);
        if is_declaration_keyword(word) {
            self.scan_declared_name();
        }
        token
    }

    /// Consume the name after `var`/`let`/`const` and declare it. The name
    /// is not a token of its own. Anything other than an identifier is left
    /// for the next token.
    fn scan_declared_name(&mut self) {
        self.skip_white_space();
        if !self.cursor.peek().is_some_and(is_identifier_start) {
            return;
        }
        let start = self.cursor.pos();
        let line = self.cursor.location().line;
        self.cursor.eat_while(is_identifier_part);
        let (name, _) = self.clip(self.cursor.slice(start, self.cursor.pos()).to_string());
        self.binder.declare(&name, line, start as u32);
        if let Some(lint) = self.lint.as_mut() {
            lint.observe_declaration(self.cursor.location());
        }
    }

    /// Digits and dots, unvalidated. A leading dot gets an implicit zero.
    fn scan_number(&mut self, start: usize) -> (TokenKind, String, TokenFlags) {
        self.cursor.eat_while(|ch| is_digit(ch) || ch == DOT);
        let raw = self.cursor.slice(start, self.cursor.pos());
        if raw.starts_with(DOT) {
            (TokenKind::Number, format!("0{raw}"), TokenFlags::IMPLICIT_LEADING_ZERO)
        } else {
            (TokenKind::Number, raw.to_string(), TokenFlags::NONE)
        }
    }

    /// Through the matching unescaped quote, or to end of input.
    fn scan_string(&mut self, start: usize, quote: char) -> (TokenKind, String, TokenFlags) {
        self.cursor.bump(); // skip opening quote
        let flags = loop {
            match self.cursor.bump() {
                None => break TokenFlags::UNTERMINATED,
                Some(BACKSLASH) => {
                    self.cursor.bump();
                }
                Some(ch) if ch == quote => break TokenFlags::NONE,
                Some(_) => {}
            }
        };
        let text = self.cursor.slice(start, self.cursor.pos()).to_string();
        (TokenKind::String, text, flags)
    }

    /// `//` up to, not including, the newline.
    fn scan_line_comment(&mut self, start: usize) -> (TokenKind, String, TokenFlags) {
        let end = self.cursor.line_end();
        self.cursor.advance_to(end);
        let text = self.cursor.slice(start, end).to_string();
        (TokenKind::Comment, text, TokenFlags::NONE)
    }

    /// `/*` through the first `*/`. An unclosed comment runs to end of input
    /// and is reported closed anyway.
    fn scan_block_comment(&mut self) -> (TokenKind, String, TokenFlags) {
        self.cursor.bump();
        self.cursor.bump();
        let body_start = self.cursor.pos();
        let (body_end, flags) = match self.cursor.find("*/") {
            Some(close) => {
                self.cursor.advance_to(close + 2);
                (close, TokenFlags::BLOCK_COMMENT)
            }
            None => {
                let end = self.cursor.text_len();
                self.cursor.advance_to(end);
                (end, TokenFlags::BLOCK_COMMENT | TokenFlags::UNTERMINATED)
            }
        };
        let body = self.cursor.slice(body_start, body_end);
        (TokenKind::Comment, format!("/*{body}*/"), flags)
    }

    /// Longest-match operator using up to two characters of lookahead.
    fn scan_operator(&mut self, first: char) -> (TokenKind, String, TokenFlags) {
        let mark = self.cursor.checkpoint();
        self.cursor.bump();
        let mut lookahead = ['\0'; 2];
        let mut read = 0;
        while read < lookahead.len() {
            match self.cursor.bump() {
                Some(ch) => {
                    lookahead[read] = ch;
                    read += 1;
                }
                None => break,
            }
        }
        self.cursor.restore(mark);

        match match_operator(first, &lookahead[..read]) {
            Some(op) => {
                for _ in 0..op.len() {
                    self.cursor.bump();
                }
                (TokenKind::Operator, op.to_string(), TokenFlags::NONE)
            }
            None => {
                self.cursor.bump();
                (TokenKind::Unknown, first.to_string(), TokenFlags::NONE)
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl FusedIterator for Scanner<'_> {}
