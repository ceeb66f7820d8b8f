#[cfg(test)]
use super::*;
#[cfg(test)]
use std::io::Cursor;

#[cfg(test)]
fn scanner(input: &str) -> Scanner {
    Scanner::new(input, DialectConfig::default())
}

#[test]
fn test_construction_primes_first_character() {
    let s = scanner("ab");
    assert_eq!(s.current(), Some('a'));
    assert_eq!(s.line_number(), 1);
    assert_eq!(s.column(), 1);
    assert_eq!(s.line(), "ab");
    assert!(!s.eof());
}

#[test]
fn test_empty_input_is_eof_after_construction() {
    let s = scanner("");
    assert_eq!(s.current(), None);
    assert!(s.eof());
}

#[test]
fn test_advance_crosses_empty_lines_transparently() {
    let mut s = scanner("ab\n\ncd");
    assert_eq!(s.current(), Some('a'));
    assert_eq!(s.advance(), Some('b'));
    assert_eq!((s.line_number(), s.column()), (1, 2));

    // The empty line 2 is crossed in one advance but still counts.
    assert_eq!(s.advance(), Some('c'));
    assert_eq!((s.line_number(), s.column()), (3, 1));
    assert_eq!(s.line(), "cd");

    assert_eq!(s.advance(), Some('d'));
    assert_eq!(s.advance(), None);
    assert!(s.eof());
}

#[test]
fn test_newlines_never_surface_as_current() {
    let mut s = scanner("a\nb");
    let mut seen = Vec::new();
    seen.push(s.current().unwrap());
    while let Some(c) = s.advance() {
        seen.push(c);
    }
    assert_eq!(seen, vec!['a', 'b']);
}

#[test]
fn test_skip_space_stops_on_first_solid_character() {
    let mut s = scanner("  \t x");
    s.skip_space().expect("skip_space failed");
    assert_eq!(s.current(), Some('x'));
    assert_eq!((s.line_number(), s.column()), (1, 5));
}

#[test]
fn test_skip_space_crosses_lines() {
    let mut s = scanner("  \n  y");
    s.skip_space().expect("skip_space failed");
    assert_eq!(s.current(), Some('y'));
    assert_eq!((s.line_number(), s.column()), (2, 3));
}

#[test]
fn test_skip_space_skips_line_comment() {
    let mut s = scanner("// note\nunit");
    s.skip_space().expect("skip_space failed");
    assert_eq!(s.current(), Some('u'));
    assert_eq!(s.line_number(), 2);
}

#[test]
fn test_skip_space_skips_block_comment() {
    let mut s = scanner("/* note */x");
    s.skip_space().expect("skip_space failed");
    assert_eq!(s.current(), Some('x'));
}

#[test]
fn test_skip_space_skips_multiline_block_comment() {
    let mut s = scanner("/* a\nb\nc */ x");
    s.skip_space().expect("skip_space failed");
    assert_eq!(s.current(), Some('x'));
    assert_eq!(s.line_number(), 3);
}

#[test]
fn test_unclosed_block_comment_is_an_error() {
    let mut s = scanner("/* never closed");
    let err = s.skip_space().unwrap_err();
    assert_eq!(
        err,
        UnitdefError::UnclosedComment {
            line: 1,
            column: 1,
            hint: Some("Close the comment with '*/'".into()),
            code: Some(101),
        }
    );
}

#[test]
fn test_skip_space_leaves_comments_when_disabled() {
    let dialect = DialectConfig {
        skip_comment_with_space: false,
        ..DialectConfig::default()
    };
    let mut s = Scanner::new("  // text", dialect);
    s.skip_space().expect("skip_space failed");
    assert_eq!(s.current(), Some('/'));
}

#[test]
fn test_parse_quoted_string_with_escape_prefix() {
    let dialect = DialectConfig {
        escape_in_double_quotes: Some('\\'),
        ..DialectConfig::default()
    };
    let mut s = Scanner::new(r#""a\"b""#, dialect);
    let content = s.parse_quoted_string().expect("Failed to parse string");
    assert_eq!(content, "a\"b");
    assert!(s.eof());
}

#[test]
fn test_parse_quoted_string_with_escapes_disabled() {
    let dialect = DialectConfig {
        escape_in_double_quotes: None,
        ..DialectConfig::default()
    };
    // Without escapes the backslash is plain text and the second quote
    // closes the string, leaving an orphan quote that never closes.
    let mut s = Scanner::new(r#""a\"b""#, dialect);
    let content = s.parse_quoted_string().expect("Failed to parse string");
    assert_eq!(content, "a\\");
    assert_eq!(s.current(), Some('b'));

    s.parse_until('"');
    let err = s.parse_quoted_string().unwrap_err();
    assert!(matches!(err, UnitdefError::UnclosedString { quote: '"', .. }));
}

#[test]
fn test_default_dialect_uses_hash_escape() {
    let mut s = scanner(r#""a#"b""#);
    let content = s.parse_quoted_string().expect("Failed to parse string");
    assert_eq!(content, "a\"b");
}

#[test]
fn test_single_quotes_have_no_escape_by_default() {
    let mut s = scanner("'a#b'");
    let content = s.parse_quoted_string().expect("Failed to parse string");
    assert_eq!(content, "a#b");
}

#[test]
fn test_unclosed_string_reports_opening_position() {
    let mut s = scanner("  \"abc");
    s.skip_space().expect("skip_space failed");
    let err = s.parse_quoted_string().unwrap_err();
    assert_eq!(
        err,
        UnitdefError::UnclosedString {
            quote: '"',
            line: 1,
            column: 3,
            hint: Some("String literal not closed".into()),
            code: Some(103),
        }
    );
}

#[test]
fn test_parse_quoted_string_requires_a_quote() {
    let mut s = scanner("abc");
    let err = s.parse_quoted_string().unwrap_err();
    assert!(matches!(err, UnitdefError::SyntaxError { line: 1, column: 1, .. }));
}

#[test]
fn test_bounded_scans() {
    let mut s = scanner("abc123,def");
    assert_eq!(s.parse_alphabetic(), "abc");
    assert_eq!(s.current(), Some('1'));
    assert_eq!(s.parse_alphanumeric(), "123");
    assert_eq!(s.current(), Some(','));
    s.advance();
    assert_eq!(s.parse_until_any(&[';', ',']), "def");
    assert!(s.eof());
}

#[test]
fn test_parse_until_crosses_lines() {
    let mut s = scanner("ab\ncd;");
    assert_eq!(s.parse_until(';'), "abcd");
    assert_eq!(s.current(), Some(';'));
}

#[test]
fn test_must_be_reports_expected_and_found() {
    let s = scanner("x");
    assert_eq!(s.must_be('x'), Ok('x'));
    assert_eq!(
        s.must_be('y'),
        Err(UnitdefError::ExpectedCharacter {
            expected: 'y',
            found: Some('x'),
            line: 1,
            column: 1,
            hint: None,
            code: Some(120),
        })
    );
}

#[test]
fn test_must_not_be() {
    let s = scanner("x");
    assert_eq!(s.must_not_be('y'), Ok(Some('x')));
    assert!(s.must_not_be('x').is_err());
}

#[test]
fn test_skip_word_fails_at_first_mismatch() {
    let mut s = scanner("unix=");
    let err = s.skip_word("unit=").unwrap_err();
    assert_eq!(
        err,
        UnitdefError::ExpectedCharacter {
            expected: 't',
            found: Some('x'),
            line: 1,
            column: 4,
            hint: None,
            code: Some(120),
        }
    );
}

#[test]
fn test_lookahead_is_limited_to_the_current_line() {
    let s = scanner("unit=X");
    assert!(s.starts_with("unit="));
    assert!(s.is_followed_by("nit="));
    assert!(!s.is_followed_by("nit=XY"));

    let split = scanner("un\nit=");
    assert!(!split.starts_with("unit="));
}

#[test]
fn test_lookahead_does_not_move_the_cursor() {
    let s = scanner("unit=X");
    assert!(s.starts_with("unit"));
    assert_eq!((s.line_number(), s.column()), (1, 1));
    assert_eq!(s.current(), Some('u'));
}

#[test]
fn test_from_reader_decodes_utf8() {
    let mut s = Scanner::from_reader(Cursor::new("ty=g;".as_bytes()), DialectConfig::default())
        .expect("Failed to build scanner from reader");
    assert_eq!(s.current(), Some('t'));
    assert_eq!(s.parse_alphanumeric(), "ty");
}

#[test]
fn test_from_reader_rejects_invalid_utf8() {
    let err = Scanner::from_reader(Cursor::new(vec![0xff, 0xfe]), DialectConfig::default())
        .unwrap_err();
    assert!(matches!(err, UnitdefError::Unexpected { .. }));
    assert!(!err.is_syntax_error());
}

#[test]
fn test_multibyte_characters_count_one_column_each() {
    let mut s = scanner("あい;");
    assert_eq!(s.current(), Some('あ'));
    assert_eq!(s.advance(), Some('い'));
    assert_eq!((s.line_number(), s.column()), (1, 2));
    assert_eq!(s.advance(), Some(';'));
    assert_eq!(s.column(), 3);
}
