/// Convenience result type used across framecraft.
pub type FramecraftResult<T> = Result<T, FramecraftError>;

/// Top-level error taxonomy.
///
/// Frame evaluation itself never fails for in-range input; errors come from malformed
/// configuration caught at construction or validation time.
#[derive(thiserror::Error, Debug)]
pub enum FramecraftError {
    /// Invalid user-provided timing, theme or composition data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while validating or sampling animation primitives.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while evaluating a frame of a composition.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing configuration documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramecraftError {
    /// Build a [`FramecraftError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FramecraftError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`FramecraftError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`FramecraftError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FramecraftError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
