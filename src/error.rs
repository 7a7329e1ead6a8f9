//! Error taxonomy shared by every fallible operation in the crate.

/// Errors produced by tour construction, the genetic operators and the
/// optimization loop.
///
/// All errors are fatal to the call that produced them; nothing in the
/// crate retries or masks them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GaError {
    /// Malformed operator input: mismatched parent lengths, a segment
    /// length out of range, a tour too short to mutate, bad configuration.
    #[error("InvalidArgument: {0}")]
    InvalidArgument(String),

    /// Operation invoked in the wrong lifecycle state, or on a degenerate
    /// problem (fewer than two cities).
    #[error("InvalidState: {0}")]
    InvalidState(String),

    /// A city list line could not be parsed.
    #[error("ParseError: line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl GaError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        GaError::InvalidArgument(message.into())
    }

    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        GaError::InvalidState(message.into())
    }
}
