use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Matrix(#[from] pgrid_matrix::Error),
}
