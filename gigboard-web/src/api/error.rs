//! Page-level error responses
//!
//! Every HTML handler funnels failures here so users get the shared
//! 404/500 pages rather than raw error text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::render;

const NOT_FOUND_HTML: &str = include_str!("../ui/not_found.html");
const SERVER_ERROR_HTML: &str = include_str!("../ui/server_error.html");

/// Errors surfaced by page handlers
#[derive(Debug)]
pub enum PageError {
    NotFound,
    Internal(String),
}

impl From<gigboard_common::Error> for PageError {
    fn from(err: gigboard_common::Error) -> Self {
        match err {
            gigboard_common::Error::NotFound(_) => PageError::NotFound,
            other => PageError::Internal(other.to_string()),
        }
    }
}

impl From<sqlx::Error> for PageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => PageError::NotFound,
            other => PageError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound => (
                StatusCode::NOT_FOUND,
                render::render_page("Not found", None, NOT_FOUND_HTML),
            )
                .into_response(),
            PageError::Internal(msg) => {
                error!("Request failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    render::render_page("Server error", None, SERVER_ERROR_HTML),
                )
                    .into_response()
            }
        }
    }
}
