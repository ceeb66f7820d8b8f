// License: MIT

use std::io::Read;

use crate::UnitdefError;
use crate::dialect::DialectConfig;

mod helpers;

/// Character cursor over the text being parsed.
///
/// The scanner walks one line at a time, so the current character is never a
/// newline: advancing past the last character of a line transparently lands
/// on the first character of the next non-empty line. Line and column are
/// both 1-based. Construction performs one internal advance, leaving the
/// cursor on the first character (or at EOF for empty input) before any
/// positional query.
#[derive(Debug)]
pub struct Scanner {
    dialect: DialectConfig,
    lines: Vec<String>,
    /// Characters of the line currently being walked.
    chars: Vec<char>,
    /// 1-based number of the current line; one past the last line at EOF.
    line_no: usize,
    /// 1-based column of the current character; 0 when no character of the
    /// current line has been consumed yet.
    column: usize,
    current: Option<char>,
    eof: bool,
}

impl Scanner {
    pub fn new(input: &str, dialect: DialectConfig) -> Self {
        let mut scanner = Scanner {
            dialect,
            lines: input.lines().map(|l| l.to_string()).collect(),
            chars: Vec::new(),
            line_no: 0,
            column: 0,
            current: None,
            eof: false,
        };
        scanner.advance();
        scanner
    }

    /// Builds a scanner from a UTF-8 byte stream. The stream is consumed in
    /// full here, so it is released before parsing starts regardless of how
    /// the parse ends. Read and decode failures map to the non-syntax
    /// `Unexpected` error kind.
    pub fn from_reader<R: Read>(mut reader: R, dialect: DialectConfig) -> Result<Self, UnitdefError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(|e| UnitdefError::Unexpected {
            message: format!("Failed to read input: {}", e),
            hint: None,
            code: Some(310),
        })?;
        let text = String::from_utf8(bytes).map_err(|e| UnitdefError::Unexpected {
            message: format!("Input is not valid UTF-8: {}", e),
            hint: Some("Unit definition text must be UTF-8 encoded".into()),
            code: Some(311),
        })?;
        Ok(Scanner::new(&text, dialect))
    }

    pub fn dialect(&self) -> &DialectConfig {
        &self.dialect
    }

    /// The current character, or `None` at end of input.
    pub fn current(&self) -> Option<char> {
        self.current
    }

    pub fn line_number(&self) -> usize {
        self.line_no
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Full text of the current line; empty before the first line and at EOF.
    pub fn line(&self) -> &str {
        if self.line_no == 0 || self.line_no > self.lines.len() {
            ""
        } else {
            &self.lines[self.line_no - 1]
        }
    }

    pub fn eof(&self) -> bool {
        self.eof
    }

    /// Moves the cursor one character forward and returns the new current
    /// character. Zero-length lines are crossed transparently; their line
    /// numbers still count.
    pub fn advance(&mut self) -> Option<char> {
        if self.eof {
            return None;
        }
        loop {
            if self.column < self.chars.len() {
                self.current = Some(self.chars[self.column]);
                self.column += 1;
                return self.current;
            }
            if self.line_no >= self.lines.len() {
                self.eof = true;
                self.current = None;
                self.line_no += 1;
                self.column = 0;
                return None;
            }
            self.chars = self.lines[self.line_no].chars().collect();
            self.line_no += 1;
            self.column = 0;
        }
    }

    /// Moves the cursor to the first character of the next line and returns
    /// that line's text.
    pub fn next_line(&mut self) -> &str {
        let l = self.line_no;
        while !self.eof && self.line_no == l {
            self.advance();
        }
        self.line()
    }

    // --- lookahead ---

    pub fn is(&self, c: char) -> bool {
        self.current == Some(c)
    }

    pub fn is_not(&self, c: char) -> bool {
        !self.is(c)
    }

    pub fn is_any_of(&self, cs: &[char]) -> bool {
        matches!(self.current, Some(c) if cs.contains(&c))
    }

    /// Whether the rest of the current line, after the current character,
    /// starts with `s`. Pure lookahead: the cursor does not move, and the
    /// check never crosses a line boundary.
    pub fn is_followed_by(&self, s: &str) -> bool {
        if s.is_empty() || self.current.is_none() {
            return false;
        }
        let mut idx = self.column;
        for c in s.chars() {
            if idx >= self.chars.len() || self.chars[idx] != c {
                return false;
            }
            idx += 1;
        }
        true
    }

    /// Whether the remaining input, current character included, starts with
    /// `s`. Like `is_followed_by`, limited to the current line.
    pub fn starts_with(&self, s: &str) -> bool {
        let mut cs = s.chars();
        match cs.next() {
            None => false,
            Some(first) => {
                let rest = cs.as_str();
                self.is(first) && (rest.is_empty() || self.is_followed_by(rest))
            }
        }
    }

    // --- assertions ---

    /// Error value for "expected `c` here", carrying the exact position and
    /// the character actually found.
    pub fn expected(&self, c: char) -> UnitdefError {
        UnitdefError::ExpectedCharacter {
            expected: c,
            found: self.current,
            line: self.line_no,
            column: self.column,
            hint: None,
            code: Some(120),
        }
    }

    pub fn must_be(&self, c: char) -> Result<char, UnitdefError> {
        if self.is(c) { Ok(c) } else { Err(self.expected(c)) }
    }

    pub fn must_not_be(&self, c: char) -> Result<Option<char>, UnitdefError> {
        if self.is(c) {
            Err(UnitdefError::SyntaxError {
                message: format!("character '{}' is not allowed here", c),
                line: self.line_no,
                column: self.column,
                hint: None,
                code: Some(121),
            })
        } else {
            Ok(self.current)
        }
    }

    // --- lexical helpers ---

    /// Skips whitespace (any character `<= ' '`), and comments too when the
    /// dialect enables `skip_comment_with_space`.
    pub fn skip_space(&mut self) -> Result<(), UnitdefError> {
        helpers::skip_space(self)
    }

    /// Skips one line or block comment starting at the cursor.
    pub fn skip_comment(&mut self) -> Result<(), UnitdefError> {
        helpers::skip_comment(self)
    }

    /// Consumes `word` character by character, failing with an exact-position
    /// error on the first mismatch.
    pub fn skip_word(&mut self, word: &str) -> Result<(), UnitdefError> {
        helpers::skip_word(self, word)
    }

    /// Reads a `"..."` or `'...'` string, resolving the dialect's escape
    /// prefix for that quote kind, and returns the content without quotes.
    pub fn parse_quoted_string(&mut self) -> Result<String, UnitdefError> {
        helpers::parse_quoted_string(self)
    }

    /// Reads up to (not including) the first occurrence of `c`.
    pub fn parse_until(&mut self, c: char) -> String {
        helpers::parse_until_any(self, &[c])
    }

    /// Reads up to (not including) the first occurrence of any of `cs`.
    pub fn parse_until_any(&mut self, cs: &[char]) -> String {
        helpers::parse_until_any(self, cs)
    }

    /// Reads a run of ASCII letters, leaving the cursor on the first
    /// non-letter.
    pub fn parse_alphabetic(&mut self) -> String {
        helpers::parse_alphabetic(self)
    }

    /// Reads a run of ASCII letters and digits, leaving the cursor on the
    /// first other character.
    pub fn parse_alphanumeric(&mut self) -> String {
        helpers::parse_alphanumeric(self)
    }
}

#[cfg(test)]
mod tests;
