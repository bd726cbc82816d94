use nom::{Parser, combinator::all_consuming};

use crate::prelude::*;

/// A two-terminal DC voltage source: `V<name> <node_a> <node_b> <value>`.
///
/// `node_a` is held `value` volts above `node_b`. Unlike the other four
/// element kinds, a voltage source needs its own branch-current unknown in
/// the DC solve, not just a conductance contribution.
#[derive(Debug, Clone, PartialEq)]
pub struct VoltageSource {
    pub name: String,
    pub node_a: String,
    pub node_b: String,
    pub value: f64,
}

impl VoltageSource {
    pub fn identifier(&self) -> &str {
        &self.name
    }
}

pub fn parse_voltage_source(input: &str) -> nom::IResult<&str, VoltageSource> {
    let (input, (name, node_a, node_b, value)) = two_terminal_card("v").parse(input)?;
    Ok((
        input,
        VoltageSource {
            name,
            node_a,
            node_b,
            value,
        },
    ))
}

impl FromStr for VoltageSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        all_consuming(parse_voltage_source)
            .parse(s.trim())
            .map(|(_, source)| source)
            .map_err(|_| Error::InvalidFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_voltage_source() {
        let vs = VoltageSource::from_str("V1 n1 n2 5").unwrap();
        assert_eq!(vs.name, "V1");
        assert_eq!(vs.node_a, "n1");
        assert_eq!(vs.node_b, "n2");
        assert!((vs.value - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_case_insensitive() {
        let vs = VoltageSource::from_str("v3 n5 n6 12").unwrap();
        assert_eq!(vs.name, "v3");
    }

    #[test]
    fn test_invalid_format_too_many_parts() {
        assert!(VoltageSource::from_str("V1 n1 n2 5 6").is_err());
    }

    #[test]
    fn test_invalid_prefix() {
        assert!(VoltageSource::from_str("I1 n1 n2 5").is_err());
    }

    #[test]
    fn test_invalid_value() {
        assert!(VoltageSource::from_str("V1 n1 n2 abc").is_err());
    }
}
