/// Convenience result type used across proc2d.
pub type ProcResult<T> = Result<T, ProcError>;

/// Top-level error taxonomy for recoverable failures.
///
/// Stack-discipline violations (popping the root context, leaving pushes unbalanced at the
/// end of a draw call) are programming errors and panic instead.
#[derive(thiserror::Error, Debug)]
pub enum ProcError {
    /// Invalid canvas, coordinate range or configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Failures while turning a frame plan into pixels.
    #[error("render error: {0}")]
    Render(String),

    /// Failures while encoding or writing a frame to disk.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProcError {
    /// Build a [`ProcError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ProcError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ProcError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
