// License: MIT

use once_cell::sync::Lazy;

use crate::ast::{Parameter, Tuple, Unit, Value};
use crate::dialect::DialectConfig;

/// Options controlling the formatter's surface output.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    /// Line separator emitted after every structural line.
    pub line_separator: String,
    /// Number of spaces per nesting depth.
    pub tab_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            line_separator: "\r\n".to_string(),
            tab_width: 4,
        }
    }
}

/// Formatter shared by callers that are happy with CRLF, four-space indents
/// and the default dialect.
pub static DEFAULT: Lazy<Formatter> = Lazy::new(Formatter::default);

/// Format a unit with the [`DEFAULT`] formatter.
pub fn format(unit: &Unit) -> String {
    DEFAULT.format(unit)
}

/// Re-emits a unit tree as surface syntax.
///
/// The walk is depth-first: a header line, an opening-brace line, one line
/// per parameter, one indented block per child unit, then a closing-brace
/// line. Comments and the original whitespace are not retained, so output is
/// not byte-identical to arbitrary source, but re-parsing formatter output
/// always reproduces the same tree and re-formatting that tree reproduces the
/// same text.
#[derive(Debug, Clone)]
pub struct Formatter {
    line_separator: String,
    tab_width: usize,
    dialect: DialectConfig,
}

impl Formatter {
    pub fn new(options: FormatOptions) -> Self {
        Formatter::with_dialect(options, DialectConfig::default())
    }

    /// The dialect supplies the escape prefix re-applied inside quoted
    /// values.
    pub fn with_dialect(options: FormatOptions, dialect: DialectConfig) -> Self {
        Formatter {
            line_separator: options.line_separator,
            tab_width: options.tab_width,
            dialect,
        }
    }

    pub fn format(&self, unit: &Unit) -> String {
        let mut out = String::new();
        self.format_unit(&mut out, 0, unit);
        out
    }

    fn format_unit(&self, out: &mut String, depth: usize, unit: &Unit) {
        self.push_indent(out, depth);
        out.push_str("unit=");
        out.push_str(unit.name());
        for attr in unit.attrs() {
            out.push(',');
            out.push_str(attr);
        }
        out.push(';');
        out.push_str(&self.line_separator);

        self.push_indent(out, depth);
        out.push('{');
        out.push_str(&self.line_separator);

        for param in unit.params() {
            self.format_param(out, depth + 1, param);
        }
        for subunit in unit.subunits() {
            self.format_unit(out, depth + 1, subunit);
        }

        self.push_indent(out, depth);
        out.push('}');
        out.push_str(&self.line_separator);
    }

    fn format_param(&self, out: &mut String, depth: usize, param: &Parameter) {
        self.push_indent(out, depth);
        out.push_str(param.name());
        for (i, value) in param.values().iter().enumerate() {
            out.push(if i == 0 { '=' } else { ',' });
            self.format_value(out, value);
        }
        out.push(';');
        out.push_str(&self.line_separator);
    }

    fn format_value(&self, out: &mut String, value: &Value) {
        match value {
            Value::Scalar(s) => out.push_str(s),
            Value::Quoted(s) => self.push_quoted(out, s),
            Value::Tuple(t) => self.format_tuple(out, t),
        }
    }

    fn format_tuple(&self, out: &mut String, tuple: &Tuple) {
        out.push('(');
        for (i, entry) in tuple.entries().iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            if let Some(key) = entry.key() {
                out.push_str(key);
                out.push('=');
            }
            self.format_value(out, entry.value());
        }
        out.push(')');
    }

    /// Re-quotes resolved string content, escaping the quote character and
    /// the escape prefix itself.
    fn push_quoted(&self, out: &mut String, content: &str) {
        let quote = self.pick_quote(content);
        let escape = if quote == '"' {
            self.dialect.escape_in_double_quotes
        } else {
            self.dialect.escape_in_single_quotes
        };
        out.push(quote);
        for c in content.chars() {
            if let Some(prefix) = escape {
                if c == quote || c == prefix {
                    out.push(prefix);
                }
            }
            out.push(c);
        }
        out.push(quote);
    }

    /// Chooses the quote kind whose rules can represent the content: double
    /// quotes when the content holds no double quote or the dialect can
    /// escape one, single quotes otherwise. A string a parser built under
    /// this dialect always fits one of the two; content satisfying neither
    /// is a programmer error and comes out double-quoted verbatim.
    fn pick_quote(&self, content: &str) -> char {
        let fits = |quote: char, escape: Option<char>| {
            escape.is_some() || !content.contains(quote)
        };
        if fits('"', self.dialect.escape_in_double_quotes) {
            '"'
        } else if fits('\'', self.dialect.escape_in_single_quotes) {
            '\''
        } else {
            '"'
        }
    }

    fn push_indent(&self, out: &mut String, depth: usize) {
        for _ in 0..depth * self.tab_width {
            out.push(' ');
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::new(FormatOptions::default())
    }
}
