//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Invalid configuration: {0}.
    InvalidConfiguration(String),
    /// Cell index {index} is out of range for a grid of {len} cells.
    IndexOutOfRange { index: usize, len: usize },
    /// Expected {expected} cells, got {actual}.
    LengthMismatch { expected: usize, actual: usize },
    /// Unable to parse configuration: {0}
    ConfigParse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
