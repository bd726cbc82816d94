/// Robustness knobs for the DC solve. There's no iteration here -- the
/// netlist only ever contains linear elements -- so this is much smaller
/// than a general SPICE solver's config.
#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Resistor values at or below this floor are clamped to it, to avoid a
    /// divide-by-zero conductance stamp from a degenerate `R ... 0` card.
    pub minimum_resistance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            minimum_resistance: 1e-9,
        }
    }
}
