use nom::{Parser, combinator::all_consuming};

use crate::prelude::*;

/// A two-terminal capacitor: `C<name> <node_a> <node_b> <value>`.
///
/// Capacitors contribute no conductance to a DC solve -- an open circuit at
/// DC -- so this crate keeps their parsed value around but the solver never
/// stamps it into the conductance matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Capacitor {
    pub name: String,
    pub node_a: String,
    pub node_b: String,
    pub value: f64,
}

impl Capacitor {
    pub fn identifier(&self) -> &str {
        &self.name
    }
}

pub fn parse_capacitor(input: &str) -> nom::IResult<&str, Capacitor> {
    let (input, (name, node_a, node_b, value)) = two_terminal_card("c").parse(input)?;
    Ok((
        input,
        Capacitor {
            name,
            node_a,
            node_b,
            value,
        },
    ))
}

impl FromStr for Capacitor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        all_consuming(parse_capacitor)
            .parse(s.trim())
            .map(|(_, capacitor)| capacitor)
            .map_err(|_| Error::InvalidFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_capacitor() {
        let capacitor = Capacitor::from_str("C1 n1 n2 1u").unwrap();
        assert_eq!(capacitor.name, "C1");
        assert_eq!(capacitor.node_a, "n1");
        assert_eq!(capacitor.node_b, "n2");
        assert!((capacitor.value - 1e-6).abs() < 1e-12);
    }

    #[test]
    fn test_parse_lowercase() {
        let capacitor = Capacitor::from_str("c1 n1 n2 10e-9").unwrap();
        assert_eq!(capacitor.name, "c1");
    }

    #[test]
    fn test_invalid_capacitor_format() {
        assert!(Capacitor::from_str("C1 n1 n2").is_err());
    }

    #[test]
    fn test_invalid_identifier_prefix() {
        assert!(Capacitor::from_str("R1 n1 n2 100").is_err());
    }

    #[test]
    fn test_invalid_capacitor_value() {
        assert!(Capacitor::from_str("C1 n1 n2 abc").is_err());
    }
}
