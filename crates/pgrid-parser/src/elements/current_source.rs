use nom::{Parser, combinator::all_consuming};

use crate::prelude::*;

/// A two-terminal current source: `I<name> <node_a> <node_b> <value>`.
/// Current flows from `node_a` to `node_b` through the external circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentSource {
    pub name: String,
    pub node_a: String,
    pub node_b: String,
    pub value: f64,
}

impl CurrentSource {
    pub fn identifier(&self) -> &str {
        &self.name
    }
}

pub fn parse_current_source(input: &str) -> nom::IResult<&str, CurrentSource> {
    let (input, (name, node_a, node_b, value)) = two_terminal_card("i").parse(input)?;
    Ok((
        input,
        CurrentSource {
            name,
            node_a,
            node_b,
            value,
        },
    ))
}

impl FromStr for CurrentSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        all_consuming(parse_current_source)
            .parse(s.trim())
            .map(|(_, source)| source)
            .map_err(|_| Error::InvalidFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_current_source() {
        let source = CurrentSource::from_str("I1 n1 n2 1m").unwrap();
        assert_eq!(source.name, "I1");
        assert_eq!(source.node_a, "n1");
        assert_eq!(source.node_b, "n2");
        assert!((source.value - 1e-3).abs() < 1e-12);
    }

    #[test]
    fn test_parse_lowercase_identifier() {
        let source = CurrentSource::from_str("i5 vdd gnd 10").unwrap();
        assert_eq!(source.name, "i5");
    }

    #[test]
    fn test_invalid_current_source_format() {
        assert!(CurrentSource::from_str("I1 n1 n2").is_err());
    }

    #[test]
    fn test_invalid_prefix() {
        assert!(CurrentSource::from_str("V1 n1 n2 1.0").is_err());
    }

    #[test]
    fn test_invalid_current_source_value() {
        assert!(CurrentSource::from_str("I1 n1 n2 abc").is_err());
    }
}
