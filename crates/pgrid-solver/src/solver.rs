use std::collections::HashMap;

use pgrid_matrix::mna_matrix::MnaMatrix;
use pgrid_parser::netlist::{ComponentKind, Netlist};

use crate::prelude::*;

/// The DC operating-point solution: voltage at every node, indexed the same
/// way the source [`Netlist`] indexes nodes. `voltages[0]` (ground) is
/// always `0.0`.
#[derive(Debug, Clone)]
pub struct Solution {
    voltages: Vec<f64>,
}

impl Solution {
    pub fn voltage(&self, node: usize) -> f64 {
        self.voltages[node]
    }

    pub fn node_count(&self) -> usize {
        self.voltages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.voltages.iter().copied().enumerate()
    }
}

/// Solves a netlist for its DC operating point via Modified Nodal Analysis.
///
/// Capacitors contribute nothing (open circuit at DC) and are skipped.
/// Inductors are assembled as zero-valued voltage sources in the same
/// orientation (short circuit at DC) -- they get a branch-current row just
/// like a real voltage source, just pinned to 0V.
pub struct Solver {
    netlist: Netlist,
    config: SolverConfig,
}

impl Solver {
    pub const fn new(netlist: Netlist, config: SolverConfig) -> Self {
        Self { netlist, config }
    }

    pub fn solve(&self) -> Result<Solution> {
        let node_count = self.netlist.node_count();
        let non_ground_count = node_count - 1;

        // Every V and L arc needs its own branch-current row, assigned in
        // the order arcs are encountered.
        let mut branch_row: HashMap<usize, usize> = HashMap::new();
        let mut next_branch_row = non_ground_count;
        for (idx, arc) in self.netlist.arcs.iter().enumerate() {
            if matches!(arc.kind, ComponentKind::Voltage | ComponentKind::Inductor) {
                branch_row.insert(idx, next_branch_row);
                next_branch_row += 1;
            }
        }
        let unknown_count = next_branch_row;

        let mut mna = MnaMatrix::new(unknown_count);

        // `row(node)` is `None` for ground -- the row it would occupy is
        // simply elided from the system, per the stamp table's `s'=s-1`
        // remap (skipped entirely when the endpoint is ground).
        let row = |node: usize| -> Option<usize> {
            if node == Netlist::GROUND { None } else { Some(node - 1) }
        };

        for (idx, arc) in self.netlist.arcs.iter().enumerate() {
            let s = row(arc.source);
            let t = row(arc.target);

            match arc.kind {
                ComponentKind::Resistor => {
                    let resistance = arc.value.abs().max(self.config.minimum_resistance);
                    let g = 1.0 / resistance;
                    if let Some(s) = s {
                        mna.conductance_matrix.add(s, s, g);
                    }
                    if let Some(t) = t {
                        mna.conductance_matrix.add(t, t, g);
                    }
                    if let (Some(s), Some(t)) = (s, t) {
                        mna.conductance_matrix.add(s, t, -g);
                        mna.conductance_matrix.add(t, s, -g);
                    }
                }
                ComponentKind::Current => {
                    if let Some(s) = s {
                        mna.excitation_vector.add(s, 0, -arc.value);
                    }
                    if let Some(t) = t {
                        mna.excitation_vector.add(t, 0, arc.value);
                    }
                }
                ComponentKind::Voltage | ComponentKind::Inductor => {
                    let value = if arc.kind == ComponentKind::Inductor { 0.0 } else { arc.value };
                    let r = branch_row[&idx];
                    if let Some(s) = s {
                        mna.conductance_matrix.add(s, r, 1.0);
                        mna.conductance_matrix.add(r, s, 1.0);
                    }
                    if let Some(t) = t {
                        mna.conductance_matrix.add(t, r, -1.0);
                        mna.conductance_matrix.add(r, t, -1.0);
                    }
                    mna.excitation_vector.insert(r, 0, value);
                }
                ComponentKind::Capacitor => {}
            }
        }

        let x = mna.solve()?;

        let mut voltages = vec![0.0; node_count];
        for node in 1..node_count {
            voltages[node] = x[(node - 1, 0)];
        }

        Ok(Solution { voltages })
    }
}
