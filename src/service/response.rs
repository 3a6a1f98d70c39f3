use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::foundation::error::{OgError, OgResult};
use crate::render::raster::EncodedImage;

/// Cache directive for rendered cards: the output for a given URL never changes.
pub const IMMUTABLE_CACHE: &str = "public, max-age=31536000, immutable";
/// Cache directive for every error response.
pub const NO_STORE: &str = "no-store";

/// Turn a pipeline outcome into the HTTP response.
pub fn build(result: OgResult<EncodedImage>) -> Response {
    match result {
        Ok(image) => image.into_response(),
        Err(err) => err.into_response(),
    }
}

impl IntoResponse for EncodedImage {
    fn into_response(self) -> Response {
        let headers = [
            (header::CONTENT_TYPE, HeaderValue::from_static(self.mime())),
            (header::CACHE_CONTROL, HeaderValue::from_static(IMMUTABLE_CACHE)),
        ];
        (StatusCode::OK, headers, self.into_bytes()).into_response()
    }
}

impl OgError {
    pub fn status(&self) -> StatusCode {
        match self {
            OgError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            OgError::NotFound(_) => StatusCode::NOT_FOUND,
            OgError::UpstreamFetch(_) => StatusCode::BAD_GATEWAY,
            OgError::Render(_) | OgError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Internal detail stays in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            OgError::InvalidRequest(_) => "Invalid request",
            OgError::NotFound(_) => "Not found",
            OgError::UpstreamFetch(_) => "Upstream fetch failed",
            OgError::Render(_) | OgError::Other(_) => "Render failed",
        }
    }
}

impl IntoResponse for OgError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, err = %self, "og image request failed");
        } else {
            tracing::debug!(%status, err = %self, "og image request rejected");
        }
        let headers = [(header::CACHE_CONTROL, HeaderValue::from_static(NO_STORE))];
        let body = Json(serde_json::json!({ "message": self.public_message() }));
        (status, headers, body).into_response()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/service/response.rs"]
mod tests;
