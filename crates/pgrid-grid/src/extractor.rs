use std::collections::{BTreeSet, HashMap, HashSet};

use pgrid_parser::comment::{LayerComment, NetType};
use pgrid_parser::netlist::{ComponentKind, Netlist};

use crate::desc::{GridDesc, LoadDesc, PadDesc, PowerGridDesc, WireDesc};
use crate::error::Error;
use crate::node_pattern::{GridCoord, match_grid_node};

/// Which supply net to extract the induced subgraph for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Net {
    Vdd,
    Gnd,
}

/// Extracts a [`PowerGridDesc`] for one supply net from a parsed netlist and
/// its `layer:` comments.
pub fn extract_power_grid(
    netlist: &Netlist,
    comments: &[LayerComment],
    net: Net,
) -> Result<PowerGridDesc, Error> {
    let wanted_type = match net {
        Net::Vdd => NetType::Vdd,
        Net::Gnd => NetType::Gnd,
    };
    let net_ids: HashSet<usize> =
        comments.iter().filter(|c| c.net_type == wanted_type).map(|c| c.net_id).collect();

    // Coordinates for every node that matches the grid-node pattern and
    // whose net_id is in scope; ground is always in scope too, so pad arcs
    // down to the rail can be discovered.
    let mut coords: HashMap<usize, GridCoord> = HashMap::new();
    for (id, name) in netlist.nodes() {
        if id == Netlist::GROUND {
            continue;
        }
        if let Some(coord) = match_grid_node(name) {
            if net_ids.contains(&(coord.net_id as usize)) {
                coords.insert(id, coord);
            }
        }
    }

    let mut xs: BTreeSet<i64> = BTreeSet::new();
    let mut ys: BTreeSet<i64> = BTreeSet::new();
    for coord in coords.values() {
        xs.insert(coord.x);
        ys.insert(coord.y);
    }
    if xs.len() < 2 || ys.len() < 2 {
        return Err(Error::GridShapeError);
    }

    let grid = GridDesc {
        start_x: *xs.first().unwrap(),
        start_y: *ys.first().unwrap(),
        end_x: *xs.last().unwrap(),
        end_y: *ys.last().unwrap(),
        step_x: mean_step(&xs),
        step_y: mean_step(&ys),
    };

    let mut wires = Vec::new();
    let mut loads = Vec::new();
    let mut pads = Vec::new();

    for arc in &netlist.arcs {
        let source_is_ground = arc.source == Netlist::GROUND;
        let target_is_ground = arc.target == Netlist::GROUND;

        match arc.kind {
            ComponentKind::Current if target_is_ground => {
                if let Some(source) = coords.get(&arc.source) {
                    loads.push(LoadDesc {
                        x: source.x,
                        y: source.y,
                        current: arc.value,
                    });
                }
            }
            ComponentKind::Resistor if !source_is_ground && !target_is_ground => {
                let (Some(source), Some(target)) =
                    (coords.get(&arc.source), coords.get(&arc.target))
                else {
                    continue;
                };
                if source.net_id != target.net_id {
                    continue;
                }
                if source.x == target.x && source.y == target.y {
                    pads.push(PadDesc {
                        x: source.x,
                        y: source.y,
                        resistance: arc.value,
                    });
                } else if (source.x == target.x) != (source.y == target.y) {
                    wires.push(WireDesc {
                        x1: source.x,
                        y1: source.y,
                        x2: target.x,
                        y2: target.y,
                        resistance: arc.value,
                    });
                }
            }
            _ => {}
        }
    }

    Ok(PowerGridDesc {
        grid,
        wires,
        loads,
        pads,
    })
}

/// Mean of adjacent differences in a sorted set, rounded toward zero --
/// matches the original extractor's integer-division step detection.
fn mean_step(sorted: &BTreeSet<i64>) -> i64 {
    let values: Vec<i64> = sorted.iter().copied().collect();
    let diffs: Vec<i64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    let sum: i64 = diffs.iter().sum();
    sum / diffs.len() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgrid_parser::parser::parse_circuit_description;

    #[test]
    fn extracts_a_small_vdd_grid() {
        let description = "\
* layer: M1,VDD net: 1
R1 n1_0_0 n1_10_0 1
R2 n1_0_0 n1_0_10 1
R3 n1_10_0 n1_10_10 1
R4 n1_0_10 n1_10_10 1
I1 n1_10_10 0 5m
R5 n1_0_0 n1_0_0 2
";
        let (netlist, comments) = parse_circuit_description(description).unwrap();
        let desc = extract_power_grid(&netlist, &comments, Net::Vdd).unwrap();

        assert_eq!(desc.grid.start_x, 0);
        assert_eq!(desc.grid.end_x, 10);
        assert_eq!(desc.grid.step_x, 10);
        assert_eq!(desc.wires.len(), 4);
        assert_eq!(desc.loads.len(), 1);
        assert_eq!(desc.pads.len(), 1);
    }

    #[test]
    fn too_few_coordinates_is_a_shape_error() {
        let description = "\
* layer: M1,VDD net: 1
R1 n1_0_0 n1_0_0 1
";
        let (netlist, comments) = parse_circuit_description(description).unwrap();
        let err = extract_power_grid(&netlist, &comments, Net::Vdd).unwrap_err();
        assert!(matches!(err, Error::GridShapeError));
    }

    #[test]
    fn non_matching_nodes_are_excluded_without_failing() {
        let description = "\
* layer: M1,VDD net: 1
R1 n1_0_0 n1_10_0 1
R2 n1_0_0 n1_0_10 1
R3 n1_10_0 n1_10_10 1
R4 n1_0_10 n1_10_10 1
R5 not_a_grid_node n1_0_0 1
";
        let (netlist, comments) = parse_circuit_description(description).unwrap();
        let desc = extract_power_grid(&netlist, &comments, Net::Vdd).unwrap();
        assert_eq!(desc.wires.len(), 4);
    }
}
