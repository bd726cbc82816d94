use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The conductance matrix has no LU factorization -- an unsupplied
    /// ground reference, a floating node, or a genuinely singular network.
    #[error("conductance matrix is singular")]
    SingularMatrix,
}
