//! Character classes used by the scanner.

pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';
pub const DOUBLE_QUOTE: char = '"';
pub const SINGLE_QUOTE: char = '\'';
pub const BACKSLASH: char = '\\';
pub const DOT: char = '.';
pub const SLASH: char = '/';
pub const ASTERISK: char = '*';
pub const UNDERSCORE: char = '_';

/// Characters that form one-character delimiter tokens.
pub const DELIMITERS: &[char] = &['[', ']', '{', '}', '(', ')', ',', ';'];

/// Check if a character is a line terminator. Only `\n` advances the line counter.
#[inline]
pub fn is_line_break(ch: char) -> bool {
    ch == LINE_FEED
}

/// Check if a character is whitespace (not line break).
#[inline]
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | CARRIAGE_RETURN
            | '\u{000B}' // vertical tab
            | '\u{000C}' // form feed
            | '\u{00A0}' // no-break space
            | '\u{1680}' // ogham space mark
            | '\u{2000}'..='\u{200A}' // various spaces
            | '\u{2028}' // line separator
            | '\u{2029}' // paragraph separator
            | '\u{202F}' // narrow no-break space
            | '\u{205F}' // medium mathematical space
            | '\u{3000}' // ideographic space
            | '\u{FEFF}' // BOM / zero-width no-break space
    )
}

/// Check if a character is a decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

#[inline]
pub fn is_quote(ch: char) -> bool {
    ch == DOUBLE_QUOTE || ch == SINGLE_QUOTE
}

#[inline]
pub fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(&ch)
}

/// Check if a character can start an identifier: a letter or underscore.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    ch == UNDERSCORE
        || ch.is_ascii_alphabetic()
        || (ch as u32 > 0x7F && unicode_xid::UnicodeXID::is_xid_start(ch))
}

/// Check if a character can be part of an identifier.
#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    ch == UNDERSCORE
        || ch.is_ascii_alphanumeric()
        || (ch as u32 > 0x7F && unicode_xid::UnicodeXID::is_xid_continue(ch))
}
