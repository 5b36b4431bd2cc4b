//! Error types for dualnum

use thiserror::Error;

/// dualnum error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Narrowing a dual number into a plain real would drop its derivative.
    #[error("unsupported conversion from {from} to {to}: read the value component explicitly")]
    UnsupportedConversion {
        /// Source type name.
        from: &'static str,
        /// Requested target type name.
        to: &'static str,
    },

    /// Linear solve met a zero pivot.
    #[error("singular matrix: zero pivot in column {column}")]
    Singular {
        /// Elimination column with no usable pivot.
        column: usize,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
