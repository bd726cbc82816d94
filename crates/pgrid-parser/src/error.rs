use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A card didn't match the expected `<name> <node_a> <node_b> <value>` shape.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// The value token couldn't be parsed as a float at all (not a recoverable
    /// unknown-suffix case -- that's handled by treating the suffix as a
    /// multiplier of 1, see `utils::parse_value`).
    #[error("Invalid float value: {0}")]
    InvalidFloatValue(String),

    /// A fatal parse failure pinned to a specific line of the netlist.
    #[error("Parse error on line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("IO error reading file: {0}")]
    Io(#[from] std::io::Error),
}
