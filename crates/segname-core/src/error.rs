//! Error types for structured names
//!
//! Three kinds of failure are kept apart. Argument errors are the only kind
//! calling code is expected to handle; postcondition and invariant errors
//! mean the library itself is broken and should propagate.

use thiserror::Error;

/// Result type alias for name operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for name operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A precondition on caller input failed. Nothing was changed.
    #[error("Illegal argument: {0}")]
    Argument(#[from] ArgumentError),

    /// An operation produced a result that breaks its own guarantee.
    #[error("Method failed: {0}")]
    Postcondition(String),

    /// A name ended up in a state that violates its invariants.
    #[error("Invalid state: {0}")]
    Invariant(String),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Argument,
    Postcondition,
    Invariant,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Argument(_) => ErrorKind::Argument,
            Error::Postcondition(_) => ErrorKind::Postcondition,
            Error::Invariant(_) => ErrorKind::Invariant,
        }
    }

    /// True for errors caused by caller input rather than a defect
    pub fn is_argument(&self) -> bool {
        self.kind() == ErrorKind::Argument
    }
}

/// Precondition violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("index {index} out of bounds for name with {len} components")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("insert index {index} out of bounds for name with {len} components")]
    InsertIndexOutOfBounds { index: usize, len: usize },

    #[error("delimiter cannot be empty")]
    EmptyDelimiter,

    #[error("delimiter must be a single character, got {0:?}")]
    MultiCharDelimiter(String),

    #[error("the escape character cannot be used as a delimiter")]
    EscapeAsDelimiter,

    #[error("component {component:?} contains an unmasked delimiter {delimiter:?}")]
    UnmaskedDelimiter { component: String, delimiter: char },

    #[error("{0:?} ends with a dangling escape character")]
    DanglingEscape(String),

    #[error("unknown backing {0:?}, expected \"array\" or \"string\"")]
    UnknownBacking(String),
}
