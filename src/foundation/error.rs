/// Convenience result type used across loopreel.
pub type LoopreelResult<T> = Result<T, LoopreelError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum LoopreelError {
    /// Invalid user-provided values (progress out of range, bad settings, bad sizes).
    #[error("validation error: {0}")]
    Validation(String),

    /// A selection referenced a key that is not in the catalog.
    #[error("unknown catalog key: {0}")]
    UnknownCatalogKey(String),

    /// Catalog and renderer registry disagree about a key.
    #[error("missing renderer: {0}")]
    MissingRenderer(String),

    /// Errors while rasterizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while writing frames to an output sink.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LoopreelError {
    /// Build a [`LoopreelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LoopreelError::UnknownCatalogKey`] value.
    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownCatalogKey(key.into())
    }

    /// Build a [`LoopreelError::MissingRenderer`] value.
    pub fn missing_renderer(msg: impl Into<String>) -> Self {
        Self::MissingRenderer(msg.into())
    }

    /// Build a [`LoopreelError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LoopreelError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`LoopreelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
