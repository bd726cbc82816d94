pub use crate::error::Error;
pub type Result<T> = core::result::Result<T, Error>;

pub use crate::utils::parse_value;
pub use crate::utils::{alphanumeric_or_underscore1, two_terminal_card, value_parser};
pub use std::str::FromStr;
