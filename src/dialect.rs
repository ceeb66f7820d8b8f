/// Lexical rule set parameterizing the scanner for one grammar dialect.
///
/// The unit definition language shares its surface lexics (quoted strings,
/// comments, comma-separated lists) with sibling formats that differ only in
/// escape prefixes and comment markers, so those knobs live here instead of
/// being hard-wired into the scanner.
#[derive(Debug, Clone, PartialEq)]
pub struct DialectConfig {
    /// Escape prefix recognized inside double-quoted strings.
    /// `None` disables escape handling for that quote kind.
    pub escape_in_double_quotes: Option<char>,
    /// Escape prefix recognized inside single-quoted strings.
    pub escape_in_single_quotes: Option<char>,
    /// Marker opening a comment that runs to the end of the line.
    pub line_comment_start: Option<String>,
    /// Marker opening a block comment.
    pub block_comment_start: Option<String>,
    /// Marker closing a block comment.
    pub block_comment_end: Option<String>,
    /// Whether `skip_space` also skips comments it encounters.
    pub skip_comment_with_space: bool,
}

impl DialectConfig {
    /// The unit definition dialect: `#` escapes inside double quotes (the
    /// scheduler product's own escape character), no single-quote escapes,
    /// `//` line comments and `/* */` block comments skipped with whitespace.
    pub fn unit_definition() -> Self {
        DialectConfig {
            escape_in_double_quotes: Some('#'),
            escape_in_single_quotes: None,
            line_comment_start: Some("//".to_string()),
            block_comment_start: Some("/*".to_string()),
            block_comment_end: Some("*/".to_string()),
            skip_comment_with_space: true,
        }
    }
}

impl Default for DialectConfig {
    fn default() -> Self {
        DialectConfig::unit_definition()
    }
}
