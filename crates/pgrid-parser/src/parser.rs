use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::comment::{LayerComment, parse_layer_comment};
use crate::elements::{
    Element, capacitor::Capacitor, current_source::CurrentSource, inductor::Inductor,
    resistor::Resistor, voltage_source::VoltageSource,
};
use crate::netlist::Netlist;
use crate::prelude::*;

/// Parses a single component card into its typed [`Element`], dispatching on
/// the lowercase of the leading character.
fn parse_element(line: &str) -> Result<Element> {
    let leading = line.chars().next().ok_or_else(|| Error::InvalidFormat(line.to_string()))?;

    match leading.to_ascii_lowercase() {
        'r' => Resistor::from_str(line).map(Element::from),
        'c' => Capacitor::from_str(line).map(Element::from),
        'l' => Inductor::from_str(line).map(Element::from),
        'v' => VoltageSource::from_str(line).map(Element::from),
        'i' => CurrentSource::from_str(line).map(Element::from),
        _ => Err(Error::InvalidFormat(line.to_string())),
    }
}

/// Parses a SPICE-like netlist into a [`Netlist`] plus any `layer:` comments
/// it carried (the power-grid extractor uses those to partition nets).
///
/// The grammar:
/// - Case-insensitive component prefixes (`R`, `C`, `L`, `V`, `I`).
/// - Each line describes one component card entirely; line order doesn't
///   matter.
/// - A line whose first non-whitespace character is `*` is a comment. Most
///   comments are ignored outright; one shape, `* layer: <metal>,<net> net:
///   <id>`, is captured and returned alongside the netlist.
/// - Blank lines and lines that don't start with a recognized component
///   prefix (directives like `.end`) are skipped rather than rejected.
/// - Node names are arbitrary identifiers; `"0"` is always ground.
pub fn parse_circuit_description(input: &str) -> Result<(Netlist, Vec<LayerComment>)> {
    let mut netlist = Netlist::new();
    let mut comments = Vec::new();

    for (line_num, raw_line) in input.lines().enumerate() {
        let current_line = line_num + 1;
        let line = raw_line.trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('*') {
            if let Some(comment) = parse_layer_comment(line) {
                comments.push(comment);
            }
            continue;
        }

        let Some(kind_char) = line.chars().next() else {
            continue;
        };
        if crate::netlist::ComponentKind::from_leading_char(kind_char).is_none() {
            // Not a component card we understand (a `.` directive, stray
            // text, etc) -- tolerated, not an error.
            continue;
        }

        let element = parse_element(line).map_err(|e| Error::ParseError {
            line: current_line,
            message: e.to_string(),
        })?;

        let (node_a, node_b) = element.nodes();
        let source = netlist.ensure_node(node_a);
        let target = netlist.ensure_node(node_b);
        netlist.connect(element.identifier(), source, target, element.kind(), element.value());
    }

    Ok((netlist, comments))
}

pub fn parse_circuit_description_file(file_path: &Path) -> Result<(Netlist, Vec<LayerComment>)> {
    let file = File::open(file_path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    parse_circuit_description(&contents)
}
