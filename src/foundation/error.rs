/// Convenience result type used across Tweenline.
pub type TimelineResult<T> = Result<T, TimelineError>;

/// Top-level error taxonomy used by model and formatter APIs.
#[derive(thiserror::Error, Debug)]
pub enum TimelineError {
    /// Malformed input to an operation (negative or inverted times, negative
    /// extents, unknown shape kind, empty name, no-op scale/recolor target).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation references a shape name not present in the registry.
    #[error("unknown shape: {0}")]
    UnknownShape(String),

    /// Structurally valid operation that conflicts with existing timeline
    /// state (duplicate creation, same-kind overlap, window outside the
    /// shape's lifetime).
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Errors when decoding animation scripts or JSON documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TimelineError {
    /// Build a [`TimelineError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`TimelineError::UnknownShape`] value.
    pub fn unknown_shape(msg: impl Into<String>) -> Self {
        Self::UnknownShape(msg.into())
    }

    /// Build a [`TimelineError::InvalidState`] value.
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Build a [`TimelineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
