pub mod ast;
pub mod dialect;
pub mod error;
pub mod export;
pub mod formatter;
pub mod parser;
pub mod scanner;

pub use ast::{Parameter, Tuple, TupleEntry, Unit, Value};
pub use dialect::DialectConfig;
pub use error::UnitdefError;
pub use formatter::{FormatOptions, Formatter};
pub use parser::{Parser, parse_file, parse_reader, parse_str};
