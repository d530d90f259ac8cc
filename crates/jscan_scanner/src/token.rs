//! Tokens produced by the scanner.

use bitflags::bitflags;
use jscan_core::text::{Location, TextSpan};
use std::fmt;

/// The classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    Operator,
    Delimiter,
    String,
    Comment,
    Unknown,
}

impl TokenKind {
    /// The tag printed in front of the token in the trace.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::String => "STRING",
            TokenKind::Comment => "COMMENT",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

bitflags! {
    /// Facts about how a token was scanned.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u8 {
        const NONE                  = 0;
        /// String or block comment ran into the end of input.
        const UNTERMINATED          = 1 << 0;
        /// `/* ... */` rather than `// ...`.
        const BLOCK_COMMENT         = 1 << 1;
        /// Number written as `.5` and reported as `0.5`.
        const IMPLICIT_LEADING_ZERO = 1 << 2;
        /// Text clipped by the maximum token length option.
        const TRUNCATED             = 1 << 3;
    }
}

/// A scanned token.
///
/// `text` is the token as it appears in the trace: strings keep their
/// quotes, comments keep their delimiters (a truncated block comment is
/// closed with `*/`), and `.5` reads `0.5`. `span` always covers the
/// exact source bytes consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character, in characters.
    pub column: u32,
    pub span: TextSpan,
    pub flags: TokenFlags,
}

impl Token {
    pub fn new(kind: TokenKind, text: String, start: Location, span: TextSpan) -> Self {
        Self {
            kind,
            text,
            line: start.line,
            column: start.column,
            span,
            flags: TokenFlags::NONE,
        }
    }

    pub fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    /// The text between the comment delimiters, for comment tokens.
    pub fn comment_body(&self) -> Option<&str> {
        if self.kind != TokenKind::Comment {
            return None;
        }
        if self.flags.contains(TokenFlags::BLOCK_COMMENT) {
            self.text.strip_prefix("/*")?.strip_suffix("*/")
        } else {
            self.text.strip_prefix("//")
        }
    }
}

/// The trace line for this token, e.g. `[OPERATOR] ===`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let token = Token::new(
            TokenKind::Operator,
            "===".to_string(),
            Location::new(1, 3),
            TextSpan::new(2, 5),
        );
        assert_eq!(token.to_string(), "[OPERATOR] ===");
        assert!(token.is(TokenKind::Operator, "==="));
    }

    #[test]
    fn test_comment_body() {
        let line = Token::new(
            TokenKind::Comment,
            "// hi".to_string(),
            Location::new(1, 1),
            TextSpan::new(0, 5),
        );
        assert_eq!(line.comment_body(), Some(" hi"));

        let block = Token::new(
            TokenKind::Comment,
            "/*x*/".to_string(),
            Location::new(1, 1),
            TextSpan::new(0, 5),
        )
        .with_flags(TokenFlags::BLOCK_COMMENT);
        assert_eq!(block.comment_body(), Some("x"));
    }
}
