//! Public API types

use axum::response::{IntoResponse, Response};
use http::StatusCode;

// Errors

pub enum ApiError {
    NotFound(String),
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn session_not_found(id: &str) -> Self {
        Self::NotFound(format!("Coach session {} not found", id))
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            Self::Internal(err) => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Something went wrong: {}", err),
                )
                    .into_response()
            }
        }
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}

// Re-export public types from each route

pub mod coach {
    pub use crate::api::routes::coach::public::*;
}
