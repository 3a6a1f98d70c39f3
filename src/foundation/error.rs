/// Convenience result type used across the crate.
pub type OgResult<T> = Result<T, OgError>;

/// Error taxonomy for the preview pipeline.
///
/// Only these outcomes surface to callers. Partial or missing data is recovered locally by
/// omitting the affected scene node.
#[derive(thiserror::Error, Debug)]
pub enum OgError {
    /// Malformed or ambiguous request parameters.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The metadata collaborator has no item for the requested id/type.
    #[error("not found: {0}")]
    NotFound(String),

    /// The metadata fetch failed or timed out where it was mandatory.
    #[error("upstream fetch failure: {0}")]
    UpstreamFetch(String),

    /// Rasterization could not produce an image.
    #[error("render failure: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OgError {
    /// Build an [`OgError::InvalidRequest`] value.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Build an [`OgError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build an [`OgError::UpstreamFetch`] value.
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::UpstreamFetch(msg.into())
    }

    /// Build an [`OgError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
