//! Error types for fretlib.

use thiserror::Error;

/// Result type for fretboard operations.
pub type FretResult<T> = Result<T, FretError>;

/// Errors that can occur while mapping, adapting or rendering a fretboard.
#[derive(Debug, Error)]
pub enum FretError {
    /// A string index or fret number outside the board.
    #[error("{what} {value} out of range (max {max})")]
    OutOfRange {
        /// What was indexed ("string", "fret").
        what: &'static str,
        /// The offending value.
        value: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// Tuning rejected at construction.
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    /// Note text that does not read as name + octave.
    #[error("invalid note: '{0}'")]
    InvalidNote(String),

    /// Board layout rejected by validation.
    #[error("invalid board config: {0}")]
    InvalidConfig(String),

    /// Instance document is structurally wrong.
    #[error("instance error: {0}")]
    Instance(String),

    /// A relation the adapter needs has no value for an atom.
    #[error("atom '{atom}' has no '{field}'")]
    MissingAtom {
        /// Atom label.
        atom: String,
        /// Field that was joined.
        field: String,
    },

    /// XML parse failure.
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FretError {
    pub(crate) fn out_of_range(what: &'static str, value: impl Into<i64>, max: impl Into<i64>) -> Self {
        FretError::OutOfRange {
            what,
            value: value.into(),
            max: max.into(),
        }
    }
}
