use nom::{
    Parser,
    bytes::complete::tag,
    character::complete::{digit1, multispace0, space0},
    combinator::{map_res, opt},
    sequence::preceded,
};

use crate::utils::alphanumeric_or_underscore1;

/// Which supply net a layer comment's `net_id` belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetType {
    Gnd,
    Vdd,
}

/// A parsed `* layer: <metal>,<net_name> net: <net_id>` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerComment {
    pub net_id: usize,
    pub net_type: NetType,
    pub layer_name: String,
}

/// Parses the `layer:` subform of a comment line. Returns `None` for any
/// comment that isn't in this shape — ordinary comments are silently
/// ignored, never an error.
pub fn parse_layer_comment(line: &str) -> Option<LayerComment> {
    fn inner(input: &str) -> nom::IResult<&str, LayerComment> {
        let (input, _) = preceded(opt(tag("*")), (space0, tag("layer:"), space0)).parse(input)?;
        let (input, layer_name) = alphanumeric_or_underscore1(input)?;
        let (input, _) = tag(",")(input)?;
        let (input, net_name) = alphanumeric_or_underscore1(input)?;
        let (input, _) = (multispace0, tag("net:"), space0).parse(input)?;
        let (input, net_id) = map_res(digit1, str::parse::<usize>).parse(input)?;

        let net_type = if net_name == "GND" { NetType::Gnd } else { NetType::Vdd };

        Ok((
            input,
            LayerComment {
                net_id,
                net_type,
                layer_name: layer_name.to_string(),
            },
        ))
    }

    inner(line.trim()).ok().map(|(_, comment)| comment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vdd_layer_comment() {
        let comment = parse_layer_comment("* layer: M1,VDD net: 1").unwrap();
        assert_eq!(comment.net_id, 1);
        assert_eq!(comment.net_type, NetType::Vdd);
        assert_eq!(comment.layer_name, "M1");
    }

    #[test]
    fn parses_gnd_layer_comment() {
        let comment = parse_layer_comment("* layer: M1,GND net: 2").unwrap();
        assert_eq!(comment.net_type, NetType::Gnd);
    }

    #[test]
    fn non_layer_comment_returns_none() {
        assert!(parse_layer_comment("* just a comment").is_none());
        assert!(parse_layer_comment("* layer: malformed").is_none());
    }
}
