/// The detected lattice bounds and stride, in the same integer coordinate
/// space as grid node names (`n<net>_<x>_<y>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDesc {
    pub start_x: i64,
    pub start_y: i64,
    pub end_x: i64,
    pub end_y: i64,
    pub step_x: i64,
    pub step_y: i64,
}

/// A planar resistor between two lattice points that share a row or column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireDesc {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
    pub resistance: f64,
}

/// A current draw at a lattice point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadDesc {
    pub x: i64,
    pub y: i64,
    pub current: f64,
}

/// A via resistance from a lattice point down to the ideal supply rail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadDesc {
    pub x: i64,
    pub y: i64,
    pub resistance: f64,
}

/// Everything the grid builder needs, extracted from one supply net's
/// induced subgraph.
#[derive(Debug, Clone)]
pub struct PowerGridDesc {
    pub grid: GridDesc,
    pub wires: Vec<WireDesc>,
    pub loads: Vec<LoadDesc>,
    pub pads: Vec<PadDesc>,
}
