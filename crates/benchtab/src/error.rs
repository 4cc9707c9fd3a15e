//! Error types for log parsing and table output.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while parsing a log or writing tables.
#[derive(Error, Debug)]
pub enum Error {
    /// An order or result line appeared before any graph-load line.
    #[error("line {line}: result line before any graph was loaded")]
    NoActiveGraph {
        /// One-based line number in the input log.
        line: usize,
    },

    /// A table was rendered from an empty row sequence.
    #[error("cannot render a table with no rows")]
    EmptyTable,

    /// The command given to the dispatcher is not recognized.
    #[error("unknown command {0:?} (expected \"csv\" or \"csv-dir\")")]
    UnknownCommand(String),

    /// A sink failed to persist a rendered table.
    #[error("failed to write table")]
    Io(#[from] std::io::Error),
}
