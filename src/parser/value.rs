use super::*;
use crate::ast::{Parameter, Tuple, TupleEntry, Value};

/// Characters ending a scalar run in a parameter value list.
const SCALAR_STOPS: &[char] = &[',', ';', ')', '"', '\''];
/// Characters ending a scalar run inside a tuple, where ';' is plain text.
const TUPLE_SCALAR_STOPS: &[char] = &[',', ')', '"', '\''];

/// parameter := name "=" value ("," value)* ";"
pub(super) fn parse_parameter(parser: &mut Parser) -> Result<Parameter, UnitdefError> {
    parser.scanner.skip_space()?;
    let name = parser.scanner.parse_alphanumeric();
    if name.is_empty() {
        return Err(UnitdefError::SyntaxError {
            message: "expected a parameter name".into(),
            line: parser.line(),
            column: parser.column(),
            hint: Some("Parameter names are short alphanumeric tokens".into()),
            code: Some(221),
        });
    }
    parser.scanner.skip_space()?;
    parser.scanner.must_be('=')?;
    parser.scanner.advance();

    let mut values = Vec::new();
    loop {
        values.push(parse_value(parser, false)?);
        parser.scanner.skip_space()?;
        if parser.scanner.is(',') {
            parser.scanner.advance();
            continue;
        }
        parser.scanner.must_be(';')?;
        parser.scanner.advance();
        break;
    }
    Ok(Parameter::new(name, values))
}

/// value := quoted-string | tuple | scalar
///
/// Dispatch is by lookahead on the first character. A scalar runs to the next
/// delimiter, so embedded spaces (`+80 +48`) survive verbatim; leading space
/// before a value is structural and skipped.
pub(super) fn parse_value(parser: &mut Parser, in_tuple: bool) -> Result<Value, UnitdefError> {
    parser.scanner.skip_space()?;
    match parser.scanner.current() {
        Some('"') | Some('\'') => Ok(Value::Quoted(parser.scanner.parse_quoted_string()?)),
        Some('(') => Ok(Value::Tuple(parse_tuple(parser)?)),
        Some(_) => {
            let stops = if in_tuple { TUPLE_SCALAR_STOPS } else { SCALAR_STOPS };
            Ok(Value::Scalar(parser.scanner.parse_until_any(stops)))
        }
        None => Err(UnitdefError::UnexpectedEof {
            message: "expected a parameter value".into(),
            line: parser.line(),
            column: parser.column(),
            hint: None,
            code: Some(222),
        }),
    }
}

/// tuple := "(" ( entry ("," entry)* )? ")"
/// entry := key "=" value | value
///
/// A bare token (no '=') becomes a positional entry with no key. The empty
/// tuple "()" is valid.
fn parse_tuple(parser: &mut Parser) -> Result<Tuple, UnitdefError> {
    parser.scanner.must_be('(')?;
    parser.scanner.advance();

    let mut entries = Vec::new();
    if parser.scanner.is(')') {
        parser.scanner.advance();
        return Ok(Tuple::new(entries));
    }
    loop {
        entries.push(parse_tuple_entry(parser)?);
        parser.scanner.skip_space()?;
        if parser.scanner.is(',') {
            parser.scanner.advance();
            continue;
        }
        parser.scanner.must_be(')')?;
        parser.scanner.advance();
        break;
    }
    Ok(Tuple::new(entries))
}

fn parse_tuple_entry(parser: &mut Parser) -> Result<TupleEntry, UnitdefError> {
    parser.scanner.skip_space()?;
    match parser.scanner.current() {
        // A quoted string or nested tuple in entry position cannot carry a
        // key, so it is positional by construction.
        Some('"') | Some('\'') | Some('(') => {
            Ok(TupleEntry::positional(parse_value(parser, true)?))
        }
        Some(_) => {
            let run = parser.scanner.parse_until_any(&['=', ',', ')', '"', '\'']);
            if parser.scanner.is('=') {
                parser.scanner.advance();
                Ok(TupleEntry::keyed(run, parse_value(parser, true)?))
            } else {
                Ok(TupleEntry::positional(Value::Scalar(run)))
            }
        }
        None => Err(parser.scanner.expected(')')),
    }
}
