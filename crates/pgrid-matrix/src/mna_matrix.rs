use faer::linalg::solvers::Solve;
use faer::mat::Mat;

use crate::{Error, Matrix};

/// An assembled modified-nodal-analysis linear system: `conductance_matrix *
/// x = excitation_vector`. Row/column `r` for `r < node_count` is node `r`'s
/// KCL equation; rows at or beyond `node_count` are voltage-source branch
/// current constraints.
pub struct MnaMatrix {
    pub conductance_matrix: Matrix,
    pub excitation_vector: Matrix,
}

impl MnaMatrix {
    pub fn new(unknown_count: usize) -> Self {
        Self {
            conductance_matrix: Matrix::new(unknown_count, unknown_count),
            excitation_vector: Matrix::new(unknown_count, 1),
        }
    }

    /// Factorizes and solves the system, returning the dense solution
    /// vector indexed the same way as the matrix rows.
    pub fn solve(&self) -> Result<Mat<f64>, Error> {
        let lu = self
            .conductance_matrix
            .to_sparse_col_mat()
            .sp_lu()
            .map_err(|_| Error::SingularMatrix)?;

        Ok(lu.solve(self.excitation_vector.to_dense_mat()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_a_voltage_divider_system() {
        // Two 1k resistors in series across a 10V source, tapped at the midpoint.
        // Node 0: input tied to the source (eliminated via branch current row 2).
        // Node 1: midpoint.
        let mut mna = MnaMatrix::new(3);
        let g = 1.0 / 1000.0;

        mna.conductance_matrix.add(0, 0, g);
        mna.conductance_matrix.add(0, 1, -g);
        mna.conductance_matrix.add(1, 0, -g);
        mna.conductance_matrix.add(1, 1, 2.0 * g);

        mna.conductance_matrix.add(0, 2, 1.0);
        mna.conductance_matrix.add(2, 0, 1.0);
        mna.excitation_vector.insert(2, 0, 10.0);

        let x = mna.solve().unwrap();
        assert!((x[(0, 0)] - 10.0).abs() < 1e-9);
        assert!((x[(1, 0)] - 5.0).abs() < 1e-9);
    }

    #[test]
    fn singular_system_is_reported_as_an_error() {
        let mna = MnaMatrix::new(2);
        assert!(mna.solve().is_err());
    }
}
