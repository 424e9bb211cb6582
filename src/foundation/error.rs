/// Convenience result type used across the crate.
pub type FixtureResult<T> = Result<T, FixtureError>;

/// Top-level error taxonomy used by generator APIs.
#[derive(thiserror::Error, Debug)]
pub enum FixtureError {
    /// Invalid sequence parameters or a frame that does not match its sink configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while encoding a frame as PNG.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FixtureError {
    /// Build a [`FixtureError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FixtureError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
