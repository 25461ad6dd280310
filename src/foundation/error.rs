/// Convenience result type used across scenefold.
pub type SceneResult<T> = Result<T, SceneError>;

/// Top-level error taxonomy used by scenefold APIs.
///
/// The optimization pass itself never fails; these errors come from the surrounding
/// collaborators (timeline arithmetic, document loading and validation).
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// A precondition on an argument was violated (for example mixing timelines).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The scene graph is malformed (dangling handles, cycles, bad root).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing scene documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SceneError {
    /// Build a [`SceneError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`SceneError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SceneError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
