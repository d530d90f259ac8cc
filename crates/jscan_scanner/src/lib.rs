//! jscan_scanner: Single-pass scanner for JavaScript-like source.
//!
//! Turns source text into classified [`Token`]s while feeding variable
//! declarations and references to the binder:
//! - identifiers and the fixed keyword set, with `var`/`let`/`const`
//!   declarations registered as they are scanned
//! - loose numbers (`1.2.3` is one number, `.5` reads `0.5`)
//! - strings with backslash escapes, line and block comments
//! - longest-match operators and one-character delimiters
//!
//! Malformed input never stops a scan; anything unrecognized becomes an
//! `Unknown` token.

mod char_codes;
mod cursor;
mod keywords;
mod lint;
mod operators;
mod scanner;
mod state;
mod token;

pub use cursor::{Checkpoint, Cursor};
pub use keywords::{is_keyword, KEYWORDS};
pub use operators::{match_operator, OPERATORS};
pub use scanner::Scanner;
pub use state::ScanState;
pub use token::{Token, TokenFlags, TokenKind};
