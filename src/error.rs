use std::fmt;

/// The main error type for unit definition parsing and formatting.
///
/// Two failure families: syntax errors (structural mismatch, unclosed
/// string/comment, premature end of input) carry the exact line and column;
/// file/unexpected errors wrap unreadable or undecodable input so callers can
/// tell malformed input apart from input that could not be read at all.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitdefError {
    SyntaxError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a structural token does not match the character expected
    /// by the grammar. `found` is `None` at end of input.
    ExpectedCharacter {
        expected: char,
        found: Option<char>,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnexpectedEof {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a quoted string is not closed before end of input.
    UnclosedString {
        quote: char,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a block comment is not closed before end of input.
    UnclosedComment {
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised for unexpected non-syntax failures, such as undecodable input.
    Unexpected {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl UnitdefError {
    /// True for the syntax-error family, false for file/unexpected errors.
    pub fn is_syntax_error(&self) -> bool {
        !matches!(
            self,
            UnitdefError::FileError { .. } | UnitdefError::Unexpected { .. }
        )
    }
}

impl fmt::Display for UnitdefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitdefError::SyntaxError { message, line, column, hint, code } =>
                write!(f, "[UNITDEF] Syntax Error at {}:{}: {}{}{}",
                    line, column, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            UnitdefError::ExpectedCharacter { expected, found, line, column, hint, code } =>
                write!(f, "[UNITDEF] Syntax Error at {}:{}: expected '{}' but found {}{}{}",
                    line, column, expected,
                    found.map_or("end of input".to_string(), |c| format!("'{}'", c)),
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            UnitdefError::UnexpectedEof { message, line, column, hint, code } =>
                write!(f, "[UNITDEF] Unexpected EOF at {}:{}: {}{}{}",
                    line, column, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            UnitdefError::UnclosedString { quote, line, column, hint, code } =>
                write!(f, "[UNITDEF] Unclosed string starting with {} at {}:{}{}{}",
                    quote, line, column,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            UnitdefError::UnclosedComment { line, column, hint, code } =>
                write!(f, "[UNITDEF] Unclosed block comment at {}:{}{}{}",
                    line, column,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            UnitdefError::FileError { message, path, hint, code } =>
                write!(f, "[UNITDEF] File Error '{}': {}{}{}",
                    path, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            UnitdefError::Unexpected { message, hint, code } =>
                write!(f, "[UNITDEF] Unexpected Error: {}{}{}",
                    message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for UnitdefError {}
