//! Missing-semicolon lint.
//!
//! A line-based heuristic: when a line ends and its last significant
//! token could end a statement, a semicolon was probably forgotten. The
//! `)` that closes an `if`/`for`/`while`/`function` header is exempt.

use crate::keywords::{is_value_keyword, opens_header};
use crate::token::{Token, TokenKind};
use jscan_core::text::Location;
use jscan_diagnostics::{messages, Warning};

#[derive(Debug, Default)]
pub(crate) struct SemicolonLint {
    /// Where the last significant token of the current line ended, if
    /// that token can end a statement.
    pending: Option<Location>,
    /// Saw a header keyword and no `(` yet.
    header_keyword: bool,
    /// Paren depth at which the open header started.
    header_depth: Option<u32>,
    depth: u32,
}

impl SemicolonLint {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Feed a token and the location just past its last character.
    pub(crate) fn observe(&mut self, token: &Token, end: Location) {
        let keeps_header = match token.kind {
            TokenKind::Keyword => opens_header(&token.text),
            TokenKind::Identifier => self.header_keyword,
            _ => false,
        };
        let ends_statement = match (token.kind, token.text.as_str()) {
            (TokenKind::Comment, _) => return,
            (TokenKind::Keyword, word) => is_value_keyword(word),
            // A function name sits between the keyword and its header.
            (TokenKind::Identifier, _) if self.header_keyword => false,
            (TokenKind::Identifier | TokenKind::Number | TokenKind::String, _) => true,
            (TokenKind::Delimiter, "(") => {
                self.depth += 1;
                if self.header_keyword && self.header_depth.is_none() {
                    self.header_depth = Some(self.depth);
                }
                false
            }
            (TokenKind::Delimiter, ")") => {
                let closes_header = self.header_depth == Some(self.depth);
                if closes_header {
                    self.header_depth = None;
                }
                self.depth = self.depth.saturating_sub(1);
                !closes_header
            }
            (TokenKind::Delimiter, "]") => true,
            (TokenKind::Operator, "++" | "--") => true,
            _ => false,
        };

        self.header_keyword = keeps_header;
        self.pending = ends_statement.then_some(end);
    }

    /// A declared name was consumed after `var`/`let`/`const`. It is not a
    /// token, but `let x` at the end of a line still ends a statement.
    pub(crate) fn observe_declaration(&mut self, end: Location) {
        self.header_keyword = false;
        self.pending = Some(end);
    }

    /// The current line is over; report it if it looked unterminated.
    pub(crate) fn end_line(&mut self) -> Option<Warning> {
        self.pending
            .take()
            .map(|end| Warning::with_location(end, &messages::MISSING_SEMICOLON, &[]))
    }
}
