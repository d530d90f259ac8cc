//! The fixed keyword set.

pub const KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "return", "function", "var", "let", "const", "null", "true",
    "false", "console", "log",
];

/// Keywords that introduce a variable declaration.
pub const DECLARATION_KEYWORDS: &[&str] = &["var", "let", "const"];

#[inline]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

#[inline]
pub fn is_declaration_keyword(word: &str) -> bool {
    DECLARATION_KEYWORDS.contains(&word)
}

/// Keywords whose parenthesized header is not followed by a semicolon.
#[inline]
pub fn opens_header(word: &str) -> bool {
    matches!(word, "if" | "for" | "while" | "function")
}

/// Keywords that are complete values and so may end a statement.
#[inline]
pub fn is_value_keyword(word: &str) -> bool {
    matches!(word, "null" | "true" | "false")
}
