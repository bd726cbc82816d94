use nom::{
    IResult, Parser,
    bytes::complete::{is_not, tag_no_case, take_while1},
    character::complete::space1,
    combinator::map_res,
    number::complete::recognize_float,
    sequence::preceded,
};

use crate::prelude::*;

/// Metric suffixes this grammar recognizes, matched case-sensitively against
/// a single trailing byte (`m` is milli, `M` is mega).
fn suffix_multiplier(suffix: char) -> Option<f64> {
    match suffix {
        'n' => Some(1e-9),
        'u' => Some(1e-6),
        'm' => Some(1e-3),
        'k' => Some(1e3),
        'M' => Some(1e6),
        'g' => Some(1e9),
        _ => None,
    }
}

/// Parses a SPICE-style numeric value: a leading decimal or exponential
/// float, optionally followed by a single metric suffix byte.
///
/// This mirrors `strtod` plus a one-byte suffix lookup: the suffix is
/// whatever byte immediately follows the parsed float, and any bytes after
/// that are ignored. An unrecognized suffix byte is not an error — it just
/// means a multiplier of 1, logged as a warning (the `UnknownSuffix`
/// recoverable condition).
pub fn parse_value(s: &str) -> Result<f64> {
    let (rest, num_str) = recognize_float::<_, nom::error::Error<&str>>(s)
        .map_err(|_| Error::InvalidFloatValue(format!("Invalid numeric value '{s}'")))?;

    let base_val: f64 = num_str
        .parse()
        .map_err(|_| Error::InvalidFloatValue(format!("Invalid numeric value '{s}'")))?;

    let multiplier = match rest.chars().next() {
        None => 1.0,
        Some(c) => suffix_multiplier(c).unwrap_or_else(|| {
            log::warn!("unrecognized value suffix '{c}' in '{s}', treating as multiplier 1");
            1.0
        }),
    };

    Ok(base_val * multiplier)
}

/// Parses a string consisting of alphanumeric characters and underscores.
pub fn alphanumeric_or_underscore1(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_').parse(input)
}

/// A nom parser that recognizes a value token and parses it using our custom logic.
pub fn value_parser(input: &str) -> IResult<&str, f64> {
    let token_parser = is_not(" \t\r\n()");
    map_res(token_parser, parse_value).parse(input)
}

/// The common `<prefix><name> <node_a> <node_b> <value>` card shape shared
/// by every two-terminal element (R, L, C, V, I). `prefix` is matched
/// case-insensitively against the leading character; the rest of the name
/// (digits, letters, underscores) is free-form.
///
/// Returns `(name, node_a, node_b, value)`.
pub fn two_terminal_card<'a>(
    prefix: &'static str,
) -> impl FnMut(&'a str) -> IResult<&'a str, (String, String, String, f64)> {
    move |input: &'a str| {
        let (input, matched_prefix) = tag_no_case(prefix)(input)?;
        let (input, rest) = alphanumeric_or_underscore1(input)?;
        let name = format!("{matched_prefix}{rest}");

        let (input, node_a) = preceded(space1, alphanumeric_or_underscore1).parse(input)?;
        let (input, node_b) = preceded(space1, alphanumeric_or_underscore1).parse(input)?;
        let (input, value) = preceded(space1, value_parser).parse(input)?;

        Ok((input, (name, node_a.to_string(), node_b.to_string(), value)))
    }
}
