//! Scanner integration tests.
//!
//! Verifies classification, declaration tracking, line counting and the
//! missing-semicolon lint on small JavaScript-like inputs.

use jscan_core::text::Location;
use jscan_diagnostics::WarningKind;
use jscan_options::ScanOptions;
use jscan_scanner::{Scanner, Token, TokenFlags, TokenKind};

/// Helper: scan all tokens from source as trace lines.
fn trace(source: &str) -> Vec<String> {
    Scanner::new(source).map(|t| t.to_string()).collect()
}

fn scan_all(source: &str) -> Vec<Token> {
    Scanner::new(source).collect()
}

fn lint_options() -> ScanOptions {
    ScanOptions {
        check_semicolons: true,
        ..ScanOptions::default()
    }
}

#[test]
fn test_empty_source() {
    assert!(scan_all("").is_empty());
    let state = Scanner::new("").finish();
    assert_eq!(state.total_lines(), 0);
    assert!(state.symbols().is_empty());
    assert!(state.warnings().is_empty());
}

#[test]
fn test_whitespace_only() {
    assert!(scan_all("   \n\t  \r\n").is_empty());
    assert_eq!(Scanner::new("   \n\t  \r\n").finish().total_lines(), 2);
}

#[test]
fn test_declaration_statement() {
    assert_eq!(
        trace("let x = 5;"),
        vec!["[KEYWORD] let", "[OPERATOR] =", "[NUMBER] 5", "[DELIMITER] ;"]
    );
    let state = Scanner::new("let x = 5;").finish();
    let x = state.symbols().get("x").unwrap();
    assert_eq!(x.declared_line, 1);
    assert_eq!(x.declared_column, 4);
    assert!(!x.used);
}

#[test]
fn test_declaration_then_use() {
    let source = "const total = 1;\nconsole.log(total);\n";
    assert_eq!(
        trace(source),
        vec![
            "[KEYWORD] const",
            "[OPERATOR] =",
            "[NUMBER] 1",
            "[DELIMITER] ;",
            "[KEYWORD] console",
            "[OPERATOR] .",
            "[KEYWORD] log",
            "[DELIMITER] (",
            "[IDENTIFIER] total",
            "[DELIMITER] )",
            "[DELIMITER] ;",
        ]
    );
    let state = Scanner::new(source).finish();
    assert!(state.symbols().get("total").unwrap().used);
    assert!(state.warnings().is_empty());
    assert_eq!(state.total_lines(), 2);
}

#[test]
fn test_undeclared_use_warns_without_location() {
    let state = Scanner::new("y = 1;").finish();
    let warnings = state.warnings().warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::UndeclaredVariable);
    assert_eq!(warnings[0].message, "Undeclared variable used: y");
    assert_eq!(warnings[0].location, None);
}

#[test]
fn test_use_before_declaration_is_undeclared() {
    let state = Scanner::new("x;\nlet x;").finish();
    assert_eq!(state.warnings().count_of(WarningKind::UndeclaredVariable), 1);
    assert!(!state.symbols().get("x").unwrap().used);
}

#[test]
fn test_duplicate_declaration_keeps_first() {
    let state = Scanner::new("let a;\nvar a;\na;").finish();
    assert_eq!(state.symbols().len(), 1);
    let a = state.symbols().get("a").unwrap();
    assert_eq!(a.declared_line, 1);
    assert!(a.used);
}

#[test]
fn test_declared_name_after_newline() {
    let state = Scanner::new("let  \n x;").finish();
    let x = state.symbols().get("x").unwrap();
    assert_eq!(x.declared_line, 2);
    assert_eq!(x.declared_column, 7);
}

#[test]
fn test_declaration_without_name() {
    assert_eq!(trace("let 5"), vec!["[KEYWORD] let", "[NUMBER] 5"]);
    assert_eq!(trace("var = 3"), vec!["[KEYWORD] var", "[OPERATOR] =", "[NUMBER] 3"]);
    assert!(Scanner::new("let 5").finish().symbols().is_empty());
}

#[test]
fn test_keywords_and_identifiers() {
    let tokens = scan_all("if else for while return function null true false Let _tmp x1");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(&kinds[..9], &[TokenKind::Keyword; 9]);
    assert_eq!(&kinds[9..], &[TokenKind::Identifier; 3]);
}

#[test]
fn test_numbers() {
    assert_eq!(trace("42 3.14 1.2.3"), vec!["[NUMBER] 42", "[NUMBER] 3.14", "[NUMBER] 1.2.3"]);

    let tokens = scan_all(".5");
    assert_eq!(tokens[0].text, "0.5");
    assert!(tokens[0].flags.contains(TokenFlags::IMPLICIT_LEADING_ZERO));
    assert_eq!(tokens[0].span.len(), 2);
}

#[test]
fn test_member_access_dot() {
    assert_eq!(
        trace("a.b"),
        vec!["[IDENTIFIER] a", "[OPERATOR] .", "[IDENTIFIER] b"]
    );
}

#[test]
fn test_strings() {
    assert_eq!(
        trace(r#""a\"b" 'c'"#),
        vec![r#"[STRING] "a\"b""#, "[STRING] 'c'"]
    );

    let tokens = scan_all("'abc");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "'abc");
    assert!(tokens[0].flags.contains(TokenFlags::UNTERMINATED));
}

#[test]
fn test_comments() {
    let tokens = scan_all("// hi\nx");
    assert_eq!(tokens[0].to_string(), "[COMMENT] // hi");
    assert_eq!(tokens[1].location(), Location::new(2, 1));

    let tokens = scan_all("/* a */x");
    assert_eq!(tokens[0].text, "/* a */");
    assert!(tokens[0].flags.contains(TokenFlags::BLOCK_COMMENT));
    assert_eq!(tokens[1].text, "x");

    let tokens = scan_all("/* open");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "/* open*/");
    assert!(tokens[0].flags.contains(TokenFlags::UNTERMINATED));
}

#[test]
fn test_longest_match_operators() {
    assert_eq!(
        trace("a===b"),
        vec!["[IDENTIFIER] a", "[OPERATOR] ===", "[IDENTIFIER] b"]
    );
    assert_eq!(
        trace("!== != ! => >= > && & || |"),
        vec![
            "[OPERATOR] !==",
            "[OPERATOR] !=",
            "[OPERATOR] !",
            "[OPERATOR] =>",
            "[OPERATOR] >=",
            "[OPERATOR] >",
            "[OPERATOR] &&",
            "[OPERATOR] &",
            "[OPERATOR] ||",
            "[OPERATOR] |",
        ]
    );
    assert_eq!(
        trace("x/=2"),
        vec!["[IDENTIFIER] x", "[OPERATOR] /=", "[NUMBER] 2"]
    );
    assert_eq!(trace("a++"), vec!["[IDENTIFIER] a", "[OPERATOR] ++"]);
}

#[test]
fn test_unknown_characters() {
    assert_eq!(
        trace("% @ $"),
        vec!["[UNKNOWN] %", "[UNKNOWN] @", "[UNKNOWN] $"]
    );
}

#[test]
fn test_token_locations() {
    let tokens = scan_all("a\n  b\né = c");
    assert_eq!(tokens[0].location(), Location::new(1, 1));
    assert_eq!(tokens[1].location(), Location::new(2, 3));
    assert_eq!(tokens[2].location(), Location::new(3, 1));
    assert_eq!(tokens[4].location(), Location::new(3, 5));
}

#[test]
fn test_long_single_line_columns() {
    let count = 50_000;
    let source = "a;".repeat(count);
    let tokens = scan_all(&source);
    assert_eq!(tokens.len(), count * 2);

    let last = tokens.last().unwrap();
    assert_eq!(last.location(), Location::new(1, (count * 2) as u32));
    let last_ident = &tokens[tokens.len() - 2];
    assert_eq!(last_ident.location(), Location::new(1, (count * 2 - 1) as u32));
}

#[test]
fn test_columns_after_multibyte_and_block_comment() {
    let tokens = scan_all("é /* ü\n ö */ x /* ä */ y");
    assert_eq!(tokens[2].location(), Location::new(2, 7));
    assert_eq!(tokens[4].location(), Location::new(2, 17));
}

#[test]
fn test_lines_inside_strings_and_comments_count() {
    let state = Scanner::new("a\n'b\nc'\n// x\n/* \n */").finish();
    assert_eq!(state.total_lines(), 5);
}

#[test]
fn test_spans_cover_source_text() {
    let source = "let x = a + 'b'; // c\nif (x !== 2) { x += 1 }";
    for token in scan_all(source) {
        assert_eq!(&source[token.span.to_range()], token.text, "{token:?}");
    }
}

#[test]
fn test_gaps_between_spans_hold_only_whitespace_and_declared_names() {
    let source = "let a = 1;\nconst\n  b = a + .5; /* c */ var c\n";
    let tokens = scan_all(source);
    let mut gaps = String::new();
    let mut last_end = 0;
    for token in &tokens {
        assert!(token.span.start >= last_end, "{token:?} overlaps");
        gaps.push_str(&source[last_end as usize..token.span.start as usize]);
        last_end = token.span.end;
    }
    gaps.push_str(&source[last_end as usize..]);
    let words: Vec<&str> = gaps.split_whitespace().collect();
    assert_eq!(words, vec!["a", "b", "c"]);
}

#[test]
fn test_max_token_length() {
    let options = ScanOptions {
        max_token_length: Some(3),
        ..ScanOptions::default()
    };
    let mut scanner = Scanner::with_options("let abcdef = 1;\nabcxyz;", &options);
    let tokens: Vec<Token> = scanner.by_ref().collect();
    assert_eq!(tokens.last().unwrap().text, ";");
    let ident = &tokens[4];
    assert_eq!(ident.text, "abc");
    assert!(ident.flags.contains(TokenFlags::TRUNCATED));
    assert_eq!(ident.span.len(), 6);

    let state = scanner.finish();
    assert!(state.symbols().get("abc").unwrap().used);
    assert!(state.warnings().is_empty());
}

#[test]
fn test_finish_drains_remaining_input() {
    let mut scanner = Scanner::new("a;\nb;\nlet c;");
    scanner.next_token();
    let state = scanner.finish();
    assert_eq!(state.total_lines(), 2);
    assert_eq!(state.symbols().len(), 1);
    assert_eq!(state.warnings().len(), 2);
}

#[test]
fn test_scan_is_deterministic() {
    let source = "function f(a) {\n  return a === null ? 0 : a;\n}\n";
    assert_eq!(scan_all(source), scan_all(source));
}

// ============================================================================
// Missing-semicolon lint
// ============================================================================

fn missing_semicolons(source: &str) -> Vec<Location> {
    Scanner::with_options(source, &lint_options())
        .finish()
        .warnings()
        .iter()
        .filter(|w| w.kind == WarningKind::MissingSemicolon)
        .filter_map(|w| w.location)
        .collect()
}

#[test]
fn test_lint_off_by_default() {
    let state = Scanner::new("let x = 5\n").finish();
    assert!(state.warnings().is_empty());
}

#[test]
fn test_lint_reports_line_end() {
    assert_eq!(
        missing_semicolons("let x = 5\nlet y = x;\n"),
        vec![Location::new(1, 10)]
    );
}

#[test]
fn test_lint_reports_end_of_input() {
    assert_eq!(missing_semicolons("let x;\nx++"), vec![Location::new(2, 4)]);
    assert_eq!(missing_semicolons("let x"), vec![Location::new(1, 6)]);
}

#[test]
fn test_lint_exempts_headers_and_blocks() {
    let source = "function f(a)\n{\n  if (a)\n    return a;\n  while (f(a) > 1) {\n  }\n}\n";
    assert!(missing_semicolons(source).is_empty());
}

#[test]
fn test_lint_ignores_trailing_comments() {
    assert_eq!(
        missing_semicolons("let x = 1 // one\nlet y = 2; // two\n"),
        vec![Location::new(1, 10)]
    );
}

#[test]
fn test_lint_call_statement() {
    assert_eq!(
        missing_semicolons("let x;\nconsole.log(x)\n"),
        vec![Location::new(2, 15)]
    );
}
