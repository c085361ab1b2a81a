//! Error types for marga-nav.

use crate::core::Cell;
use thiserror::Error;

/// Crate error type.
///
/// A search that finds no path is *not* an error; the engines report that
/// as `Ok(None)`. Errors are reserved for caller contract violations and
/// collaborator-layer failures (file I/O, parsing, configuration).
#[derive(Error, Debug)]
pub enum Error {
    /// Start or goal lies outside the grid.
    #[error("cell {cell} is outside the {side}x{side} grid")]
    OutOfBounds { cell: Cell, side: usize },

    /// A map description line or entity could not be parsed.
    #[error("map format error: {0}")]
    MapFormat(String),

    /// The map description lacks a required entity.
    #[error("map description is missing required entity '{0}'")]
    MissingEntity(&'static str),

    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration problem.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
