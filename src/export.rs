// License: MIT

use crate::UnitdefError;
use crate::ast::Unit;
use crate::parser;

/// Export a parsed unit to pretty-printed JSON.
///
/// The JSON mirrors the tree structure: `name`, the positional `attrs`,
/// `params` with their ordered value lists, and `subunits` recursively.
/// Values serialize tagged by variant so consumers can tell a scalar `"g"`
/// from a quoted `"g"`:
/// - Scalar → `{"scalar": "raw text"}`
/// - Quoted → `{"quoted": "resolved content"}`
/// - Tuple → `{"tuple": {"entries": [{"key": ..., "value": ...}, ...]}}`
///   (positional entries carry `"key": null`)
pub fn unit_to_json(unit: &Unit) -> Result<String, UnitdefError> {
    serde_json::to_string_pretty(unit).map_err(serialize_error)
}

/// Export several units (e.g. every top-level unit of a file) as a JSON
/// array.
pub fn units_to_json(units: &[Unit]) -> Result<String, UnitdefError> {
    serde_json::to_string_pretty(units).map_err(serialize_error)
}

/// Export a unit definition file directly to JSON.
///
/// Convenience function that reads, parses, and exports in one call.
///
/// # Errors
/// Returns an error if the file cannot be read or contains invalid unit
/// definition syntax.
pub fn export_unitdef_file(path: &str) -> Result<String, UnitdefError> {
    let units = parser::parse_file(path)?;
    units_to_json(&units)
}

fn serialize_error(e: serde_json::Error) -> UnitdefError {
    UnitdefError::Unexpected {
        message: format!("Failed to serialize unit tree: {}", e),
        hint: None,
        code: Some(500),
    }
}
