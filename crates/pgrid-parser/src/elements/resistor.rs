use nom::{Parser, combinator::all_consuming};

use crate::prelude::*;

/// A two-terminal resistor: `R<name> <node_a> <node_b> <value>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Resistor {
    pub name: String,
    pub node_a: String,
    pub node_b: String,
    pub value: f64,
}

impl Resistor {
    pub fn identifier(&self) -> &str {
        &self.name
    }
}

pub fn parse_resistor(input: &str) -> nom::IResult<&str, Resistor> {
    let (input, (name, node_a, node_b, value)) = two_terminal_card("r").parse(input)?;
    Ok((
        input,
        Resistor {
            name,
            node_a,
            node_b,
            value,
        },
    ))
}

impl FromStr for Resistor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        all_consuming(parse_resistor)
            .parse(s.trim())
            .map(|(_, resistor)| resistor)
            .map_err(|_| Error::InvalidFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resistor() {
        let resistor = Resistor::from_str("R1 n1 n2 1k").unwrap();
        assert_eq!(resistor.name, "R1");
        assert_eq!(resistor.node_a, "n1");
        assert_eq!(resistor.node_b, "n2");
        assert!((resistor.value - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_lowercase() {
        let resistor = Resistor::from_str("r1 n1 n2 50").unwrap();
        assert_eq!(resistor.name, "r1");
    }

    #[test]
    fn test_parse_resistor_invalid_prefix() {
        assert!(Resistor::from_str("V1 n1 n2 1k").is_err());
    }

    #[test]
    fn test_parse_resistor_missing_value() {
        assert!(Resistor::from_str("R1 n1 n2").is_err());
    }

    #[test]
    fn test_parse_resistor_invalid_value() {
        assert!(Resistor::from_str("R1 n1 n2 garbage").is_err());
    }
}
