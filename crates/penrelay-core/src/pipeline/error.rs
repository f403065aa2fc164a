//! Terminal error type shared by the pipeline stages.

use thiserror::Error;

/// Why a pipeline stage stopped producing.
///
/// The variants carry owned strings rather than `std::io::Error` sources so
/// the error is `Clone + PartialEq`: an idempotent `close()` must be able to
/// hand the same terminal error to every caller, and tests compare errors
/// structurally.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// The underlying byte source failed mid-stream.
    #[error("transport read failed: {0}")]
    Transport(String),

    /// The byte source ended in the middle of a record.  The stream is
    /// unusable from this point; records carry no framing to resynchronize
    /// on.
    #[error("truncated record: expected {expected} bytes, read {read}")]
    TruncatedRecord { expected: usize, read: usize },
}
