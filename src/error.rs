//! Error types for decoding and for the text I/O around it.
//!
//! Every check runs before a trellis is allocated, so an `Err` never comes
//! with a half-filled score table attached.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The decoder needs at least one observation.
    #[error("observation sequence is empty")]
    EmptySequence,

    /// A discrete observation outside the model's alphabet.
    #[error("observation {value} at position {index} is outside the alphabet of {alphabet} symbols")]
    ObservationOutOfDomain {
        index: usize,
        value: usize,
        alphabet: usize,
    },

    /// A Poisson rate that is not finite and strictly positive.
    #[error("poisson rate for state {state} must be finite and positive, got {rate}")]
    InvalidRate { state: usize, rate: f64 },

    /// Two sequences that must line up do not.
    #[error("length mismatch: expected {expected} entries, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token that could not be parsed as the expected kind of value.
    #[error("line {line}: cannot parse {token:?}: {reason}")]
    Parse {
        line: usize,
        token: String,
        reason: String,
    },

    /// A reference-state label that maps to neither hidden state.
    #[error("line {line}: unknown state label {label:?}")]
    UnknownStateLabel { line: usize, label: String },
}
