use super::*;

/// Skip whitespace, delegating to `skip_comment` whenever the remaining input
/// starts with a comment marker and the dialect skips comments with space.
/// Stops on the first non-space, non-comment character or at EOF.
pub(super) fn skip_space(scanner: &mut Scanner) -> Result<(), UnitdefError> {
    while let Some(c) = scanner.current() {
        if c <= ' ' {
            scanner.advance();
        } else if scanner.dialect().skip_comment_with_space && at_comment_start(scanner) {
            skip_comment(scanner)?;
        } else {
            break;
        }
    }
    Ok(())
}

fn at_comment_start(scanner: &Scanner) -> bool {
    let dialect = scanner.dialect();
    let at = |marker: &Option<String>| match marker {
        Some(m) => scanner.starts_with(m),
        None => false,
    };
    at(&dialect.line_comment_start) || at(&dialect.block_comment_start)
}

/// Skip one comment. A line comment runs to the end of the current line; a
/// block comment runs through the matching end marker, and reaching EOF
/// before it is a syntax error. Does nothing when the cursor is not on a
/// comment marker.
pub(super) fn skip_comment(scanner: &mut Scanner) -> Result<(), UnitdefError> {
    let line_start = scanner.dialect().line_comment_start.clone();
    if let Some(marker) = line_start {
        if scanner.starts_with(&marker) {
            scanner.next_line();
            return Ok(());
        }
    }
    let block_start = scanner.dialect().block_comment_start.clone();
    let block_end = scanner.dialect().block_comment_end.clone();
    if let (Some(start), Some(end)) = (block_start, block_end) {
        if scanner.starts_with(&start) {
            let (line, column) = (scanner.line_number(), scanner.column());
            skip_word(scanner, &start)?;
            while !scanner.eof() {
                if scanner.starts_with(&end) {
                    return skip_word(scanner, &end);
                }
                scanner.advance();
            }
            return Err(UnitdefError::UnclosedComment {
                line,
                column,
                hint: Some(format!("Close the comment with '{}'", end)),
                code: Some(101),
            });
        }
    }
    Ok(())
}

pub(super) fn skip_word(scanner: &mut Scanner, word: &str) -> Result<(), UnitdefError> {
    for c in word.chars() {
        scanner.must_be(c)?;
        scanner.advance();
    }
    Ok(())
}

/// Read a quoted string starting at the cursor. The escape prefix is chosen
/// per quote kind from the dialect; `None` leaves escapes disabled, so the
/// prefix character passes through and the first matching quote closes the
/// string. Leaves the cursor on the character after the closing quote.
pub(super) fn parse_quoted_string(scanner: &mut Scanner) -> Result<String, UnitdefError> {
    let quote = match scanner.current() {
        Some(c @ ('"' | '\'')) => c,
        found => {
            return Err(UnitdefError::SyntaxError {
                message: format!(
                    "expected a quoted string, found {}",
                    found.map_or("end of input".to_string(), |c| format!("'{}'", c))
                ),
                line: scanner.line_number(),
                column: scanner.column(),
                hint: None,
                code: Some(102),
            });
        }
    };
    let escape = if quote == '"' {
        scanner.dialect().escape_in_double_quotes
    } else {
        scanner.dialect().escape_in_single_quotes
    };
    let (start_line, start_column) = (scanner.line_number(), scanner.column());
    scanner.advance();

    let mut content = String::new();
    while let Some(c) = scanner.current() {
        if c == quote {
            scanner.advance();
            return Ok(content);
        }
        if escape == Some(c) {
            // Drop the prefix and take the following character literally.
            match scanner.advance() {
                Some(escaped) => content.push(escaped),
                None => break,
            }
        } else {
            content.push(c);
        }
        scanner.advance();
    }

    Err(UnitdefError::UnclosedString {
        quote,
        line: start_line,
        column: start_column,
        hint: Some("String literal not closed".into()),
        code: Some(103),
    })
}

pub(super) fn parse_until_any(scanner: &mut Scanner, cs: &[char]) -> String {
    let mut out = String::new();
    while let Some(c) = scanner.current() {
        if cs.contains(&c) {
            break;
        }
        out.push(c);
        scanner.advance();
    }
    out
}

pub(super) fn parse_alphabetic(scanner: &mut Scanner) -> String {
    let mut out = String::new();
    while let Some(c) = scanner.current() {
        if c.is_ascii_alphabetic() {
            out.push(c);
            scanner.advance();
        } else {
            break;
        }
    }
    out
}

pub(super) fn parse_alphanumeric(scanner: &mut Scanner) -> String {
    let mut out = String::new();
    while let Some(c) = scanner.current() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
            scanner.advance();
        } else {
            break;
        }
    }
    out
}
