//! Operator table and longest-match lookup.

/// Multi-character operators, longest first.
pub const OPERATORS: &[&str] = &[
    "===", "!==", "==", "!=", "<=", ">=", "+=", "-=", "*=", "/=", "++", "--", "&&", "||", "=>",
];

/// Operators that stand on their own when no longer operator matches.
pub const SINGLE_CHAR_OPERATORS: &[&str] = &["+", "-", "*", "/", "=", "<", ">", "&", "|", "!"];

/// The longest operator spelled by `first` followed by `lookahead`.
///
/// `lookahead` holds the (at most two) characters after `first`; a
/// shorter slice means the input ended there. Returns `None` when
/// `first` does not start any operator.
pub fn match_operator(first: char, lookahead: &[char]) -> Option<&'static str> {
    let mut candidate = String::with_capacity(3);
    candidate.push(first);
    candidate.extend(lookahead.iter().take(2));

    while candidate.len() > first.len_utf8() {
        if let Some(op) = OPERATORS.iter().copied().find(|op| *op == candidate) {
            return Some(op);
        }
        candidate.pop();
    }
    SINGLE_CHAR_OPERATORS.iter().copied().find(|op| *op == candidate)
}
