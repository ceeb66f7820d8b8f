use super::*;
use crate::ast::Parameter;

pub(super) fn parse_root(parser: &mut Parser) -> Result<Vec<Unit>, UnitdefError> {
    let mut units = vec![parse_unit(parser)?];
    loop {
        parser.scanner.skip_space()?;
        if parser.scanner.eof() {
            break;
        }
        units.push(parse_unit(parser)?);
    }
    Ok(units)
}

/// unit := "unit=" name ("," attr)* ";" "{" (parameter|unit)* "}"
pub(super) fn parse_unit(parser: &mut Parser) -> Result<Unit, UnitdefError> {
    parser.scanner.skip_space()?;
    parser.scanner.skip_word("unit=")?;

    let name = parse_header_field(parser);
    if name.is_empty() {
        return Err(UnitdefError::SyntaxError {
            message: "unit name must not be empty".into(),
            line: parser.line(),
            column: parser.column(),
            hint: None,
            code: Some(220),
        });
    }

    // Positional attributes: permission mode, owner, resource group. Fields
    // are kept verbatim, empty ones included, so the header round-trips.
    let mut attrs = Vec::new();
    while parser.scanner.is(',') {
        parser.scanner.advance();
        attrs.push(parse_header_field(parser));
    }
    parser.scanner.must_be(';')?;
    parser.scanner.advance();

    parser.scanner.skip_space()?;
    parser.scanner.must_be('{')?;
    parser.scanner.advance();

    let mut params: Vec<Parameter> = Vec::new();
    let mut subunits: Vec<Unit> = Vec::new();
    loop {
        parser.scanner.skip_space()?;
        if parser.scanner.eof() {
            return Err(parser.scanner.expected('}'));
        }
        if parser.scanner.is('}') {
            parser.scanner.advance();
            break;
        }
        // Lookahead for a nested unit header; anything else in the body must
        // be a parameter line.
        if parser.scanner.starts_with("unit=") {
            subunits.push(parse_unit(parser)?);
        } else {
            params.push(value::parse_parameter(parser)?);
        }
    }

    Ok(Unit::new(name, attrs, params, subunits))
}

fn parse_header_field(parser: &mut Parser) -> String {
    parser.scanner.parse_until_any(&[',', ';'])
}
