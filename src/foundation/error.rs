/// Convenience alias used across the crate.
pub type SierpinskiResult<T> = Result<T, SierpinskiError>;

/// Errors raised outside the recursion itself: configuration, rasterization, IO plumbing.
#[derive(thiserror::Error, Debug)]
pub enum SierpinskiError {
    /// Configuration values the renderer cannot work with.
    #[error("validation error: {0}")]
    Validation(String),

    /// A surface could not be created or read back.
    #[error("render error: {0}")]
    Render(String),

    /// Config or plan (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SierpinskiError {
    /// Build a [`SierpinskiError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SierpinskiError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SierpinskiError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
