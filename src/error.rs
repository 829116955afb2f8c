use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TrafficError {
    #[error("shared fragment '{}' is unavailable: {source}", .path.display())]
    FragmentUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid map view: {0}")]
    InvalidView(String),

    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl IntoResponse for TrafficError {
    fn into_response(self) -> Response {
        tracing::error!("❌ {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
