use crate::desc::{GridDesc, LoadDesc, PadDesc, PowerGridDesc, WireDesc};

/// The materialized lattice plus its per-edge and per-node electrical
/// quantities, indexed `[i][j]` over `points_x`/`points_y`.
#[derive(Debug, Clone)]
pub struct PowerGrid {
    pub points_x: Vec<i64>,
    pub points_y: Vec<i64>,
    /// Horizontal-edge conductance between `(points_x[i], points_x[i+1])`
    /// at row `j`: `cond_x[i][j]`.
    pub cond_x: Vec<Vec<f64>>,
    /// Vertical-edge conductance between `(points_y[j], points_y[j+1])` at
    /// column `i`: `cond_y[i][j]`.
    pub cond_y: Vec<Vec<f64>>,
    /// Pad (via-to-rail) conductance at `(points_x[i], points_y[j])`.
    pub cond_z: Vec<Vec<f64>>,
    /// Load current drawn at `(points_x[i], points_y[j])`.
    pub load: Vec<Vec<f64>>,
}

/// Steps the lattice from `start` to `end` by `stride`, clipping the final
/// point to `end` even when the stride doesn't evenly divide the span.
fn materialize_axis(start: i64, end: i64, stride: i64) -> Vec<i64> {
    let mut points = Vec::new();
    let mut p = start;
    loop {
        points.push(p.min(end));
        if p >= end {
            break;
        }
        p += stride;
    }
    points
}

/// Finds the lower-left corner index for `v` among sorted `points`: the
/// greatest index `i` with `points[i] <= v`, alongside whether `v` lands
/// exactly on that point.
///
/// `lower_bound`-style searches return the *upper* corner when `v` isn't
/// exactly on the lattice; using that as the lower-left corner (as the
/// original builder did) produces a negative or nonsensical interpolation
/// fraction. This resolves that by stepping back one index whenever the
/// found point overshoots `v`.
fn locate_cell(points: &[i64], v: i64) -> (usize, bool) {
    match points.binary_search(&v) {
        Ok(i) => (i, true),
        Err(i) => {
            let lower = i.saturating_sub(1).min(points.len() - 2);
            (lower, false)
        }
    }
}

fn redistribute(target: &mut [Vec<f64>], points_x: &[i64], points_y: &[i64], x: i64, y: i64, amount: f64) {
    let (i, exact_x) = locate_cell(points_x, x);
    let (j, exact_y) = locate_cell(points_y, y);

    match (exact_x, exact_y) {
        (true, true) => {
            target[i][j] += amount;
        }
        (true, false) => {
            let t = (y - points_y[j]) as f64 / (points_y[j + 1] - points_y[j]) as f64;
            target[i][j] += (1.0 - t) * amount;
            target[i][j + 1] += t * amount;
        }
        (false, true) => {
            let s = (x - points_x[i]) as f64 / (points_x[i + 1] - points_x[i]) as f64;
            target[i][j] += (1.0 - s) * amount;
            target[i + 1][j] += s * amount;
        }
        (false, false) => {
            let s = (x - points_x[i]) as f64 / (points_x[i + 1] - points_x[i]) as f64;
            let t = (y - points_y[j]) as f64 / (points_y[j + 1] - points_y[j]) as f64;
            target[i][j] += (1.0 - s) * (1.0 - t) * amount;
            target[i][j + 1] += (1.0 - s) * t * amount;
            target[i + 1][j] += s * (1.0 - t) * amount;
            target[i + 1][j + 1] += s * t * amount;
        }
    }
}

/// A wire segment weighted for inclusion in one lattice row/column's
/// `makeConductance` call.
struct Segment {
    a: i64,
    b: i64,
    g: f64,
}

/// Series/parallel-reduces a set of wire segments crossing the span
/// `points` into one conductance per elementary cell `[points[j],
/// points[j+1])`.
fn make_conductance(segments: &[Segment], points: &[i64]) -> Vec<f64> {
    let mut breakpoints: Vec<i64> = points.to_vec();
    for s in segments {
        breakpoints.push(s.a);
        breakpoints.push(s.b);
    }
    breakpoints.sort_unstable();
    breakpoints.dedup();

    let mut cs = vec![0.0; breakpoints.len().saturating_sub(1)];
    for (i, window) in breakpoints.windows(2).enumerate() {
        let (q_lo, q_hi) = (window[0], window[1]);
        let mut acc = 0.0;
        for s in segments {
            let overlap = s.b.min(q_hi) - s.a.max(q_lo);
            if overlap > 0 {
                acc += s.g * (s.b - s.a) as f64 / overlap as f64;
            }
        }
        cs[i] = acc;
    }

    let mut out = Vec::with_capacity(points.len().saturating_sub(1));
    for window in points.windows(2) {
        let lo = breakpoints.binary_search(&window[0]).unwrap();
        let hi = breakpoints.binary_search(&window[1]).unwrap();

        let mut c = 0.0;
        let mut first = true;
        for cs_val in &cs[lo..hi] {
            if first {
                c = *cs_val;
                first = false;
            } else if c + cs_val > 0.0 {
                c = c * cs_val / (c + cs_val);
            } else {
                c = 0.0;
            }
        }
        out.push(if first { 0.0 } else { c });
    }
    out
}

/// Builds a [`PowerGrid`] from an extracted [`PowerGridDesc`].
pub fn build_power_grid(desc: &PowerGridDesc) -> PowerGrid {
    let GridDesc {
        start_x,
        start_y,
        end_x,
        end_y,
        step_x,
        step_y,
    } = desc.grid;

    let points_x = materialize_axis(start_x, end_x, step_x);
    let points_y = materialize_axis(start_y, end_y, step_y);
    let (nx, ny) = (points_x.len(), points_y.len());

    let mut load = vec![vec![0.0; ny]; nx];
    for LoadDesc { x, y, current } in &desc.loads {
        redistribute(&mut load, &points_x, &points_y, *x, *y, *current);
    }

    let mut cond_z = vec![vec![0.0; ny]; nx];
    for PadDesc { x, y, resistance } in &desc.pads {
        redistribute(&mut cond_z, &points_x, &points_y, *x, *y, 1.0 / resistance);
    }

    let (x_wires, y_wires): (Vec<&WireDesc>, Vec<&WireDesc>) =
        desc.wires.iter().partition(|w| w.y1 == w.y2);

    let mut cond_x = Vec::new();
    if nx > 1 {
        cond_x = vec![vec![0.0; ny]; nx - 1];
        for j in 0..ny {
            let (ly, hy) = (points_y[j], *points_y.get(j + 1).unwrap_or(&points_y[j]));
            let segments: Vec<Segment> = x_wires
                .iter()
                .filter(|w| {
                    if j == ny - 1 {
                        w.y1 == points_y[ny - 1]
                    } else {
                        w.y1 >= ly && w.y1 < hy
                    }
                })
                .map(|w| {
                    let weight = if j == ny - 1 {
                        1.0
                    } else {
                        (hy - w.y1) as f64 / (hy - ly) as f64
                    };
                    Segment {
                        a: w.x1.min(w.x2),
                        b: w.x1.max(w.x2),
                        g: weight / w.resistance,
                    }
                })
                .collect();

            let column = make_conductance(&segments, &points_x);
            for (i, g) in column.into_iter().enumerate() {
                cond_x[i][j] = g;
            }
        }
    }

    let mut cond_y = Vec::new();
    if ny > 1 {
        cond_y = vec![vec![0.0; ny - 1]; nx];
        for i in 0..nx {
            let (lx, hx) = (points_x[i], *points_x.get(i + 1).unwrap_or(&points_x[i]));
            let segments: Vec<Segment> = y_wires
                .iter()
                .filter(|w| {
                    if i == nx - 1 {
                        w.x1 == points_x[nx - 1]
                    } else {
                        w.x1 >= lx && w.x1 < hx
                    }
                })
                .map(|w| {
                    let weight = if i == nx - 1 { 1.0 } else { (hx - w.x1) as f64 / (hx - lx) as f64 };
                    Segment {
                        a: w.y1.min(w.y2),
                        b: w.y1.max(w.y2),
                        g: weight / w.resistance,
                    }
                })
                .collect();

            let row = make_conductance(&segments, &points_y);
            for (j, g) in row.into_iter().enumerate() {
                cond_y[i][j] = g;
            }
        }
    }

    PowerGrid {
        points_x,
        points_y,
        cond_x,
        cond_y,
        cond_z,
        load,
    }
}
