use nom::{Parser, combinator::all_consuming};

use crate::prelude::*;

/// A two-terminal inductor: `L<name> <node_a> <node_b> <value>`.
///
/// Inductors are a short circuit at DC -- the solver assembles them as a
/// zero-valued voltage source rather than stamping their value anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Inductor {
    pub name: String,
    pub node_a: String,
    pub node_b: String,
    pub value: f64,
}

impl Inductor {
    pub fn identifier(&self) -> &str {
        &self.name
    }
}

pub fn parse_inductor(input: &str) -> nom::IResult<&str, Inductor> {
    let (input, (name, node_a, node_b, value)) = two_terminal_card("l").parse(input)?;
    Ok((
        input,
        Inductor {
            name,
            node_a,
            node_b,
            value,
        },
    ))
}

impl FromStr for Inductor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        all_consuming(parse_inductor)
            .parse(s.trim())
            .map(|(_, inductor)| inductor)
            .map_err(|_| Error::InvalidFormat(s.to_string()))
    }
}
