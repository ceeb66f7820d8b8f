// License: MIT

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::UnitdefError;
use crate::ast::Unit;
use crate::dialect::DialectConfig;
use crate::scanner::Scanner;

mod unit;
mod value;

/// Recursive-descent parser over a [`Scanner`], building the unit tree.
///
/// One parser runs one parse session; after a failure the instance is simply
/// dropped. Failures are all-or-nothing: no partial tree is ever returned.
pub struct Parser {
    scanner: Scanner,
}

impl Parser {
    /// Parser over a string, using the default unit definition dialect.
    pub fn new(input: &str) -> Self {
        Parser::with_dialect(input, DialectConfig::default())
    }

    pub fn with_dialect(input: &str, dialect: DialectConfig) -> Self {
        Parser {
            scanner: Scanner::new(input, dialect),
        }
    }

    /// Parser over a UTF-8 byte stream, using the default dialect. The stream
    /// is fully consumed before this returns, so it is released on every
    /// exit path.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, UnitdefError> {
        Parser::from_reader_with_dialect(reader, DialectConfig::default())
    }

    pub fn from_reader_with_dialect<R: Read>(
        reader: R,
        dialect: DialectConfig,
    ) -> Result<Self, UnitdefError> {
        Ok(Parser {
            scanner: Scanner::from_reader(reader, dialect)?,
        })
    }

    /// Parses every top-level unit in the input. At least one unit must be
    /// present, and nothing but whitespace and comments may follow the last
    /// closing brace.
    pub fn parse_root(&mut self) -> Result<Vec<Unit>, UnitdefError> {
        unit::parse_root(self)
    }

    /// Parses a single unit block starting at the cursor.
    pub fn parse_unit(&mut self) -> Result<Unit, UnitdefError> {
        unit::parse_unit(self)
    }

    pub(crate) fn line(&self) -> usize {
        self.scanner.line_number()
    }

    pub(crate) fn column(&self) -> usize {
        self.scanner.column()
    }
}

/// Parse all top-level units from a string with the default dialect.
pub fn parse_str(input: &str) -> Result<Vec<Unit>, UnitdefError> {
    Parser::new(input).parse_root()
}

/// Parse all top-level units from a UTF-8 byte stream with the default
/// dialect.
pub fn parse_reader<R: Read>(reader: R) -> Result<Vec<Unit>, UnitdefError> {
    Parser::from_reader(reader)?.parse_root()
}

/// Read a unit definition file and parse all of its top-level units.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Unit>, UnitdefError> {
    let content = fs::read_to_string(&path).map_err(|e| UnitdefError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.as_ref().to_string_lossy().to_string(),
        hint: Some("Check that the file exists and is readable".into()),
        code: Some(301),
    })?;
    parse_str(&content)
}
