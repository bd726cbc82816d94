use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Fewer than two distinct x- or y-coordinates were found among the
    /// in-scope nodes -- there's no lattice to detect.
    #[error("grid has fewer than two distinct coordinates along one axis")]
    GridShapeError,
}
