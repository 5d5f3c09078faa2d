//! Home page, embedded static assets, and the catch-all 404

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::api::PageError;
use crate::render;

const HOME_HTML: &str = include_str!("../ui/home.html");
const STYLE_CSS: &str = include_str!("../ui/style.css");

/// Home page, optionally with a notice from a just-completed action
pub(crate) fn home_page(notice: Option<&str>) -> Html<String> {
    render::render_page("Home", notice, HOME_HTML)
}

/// GET /
pub async fn serve_home() -> Html<String> {
    home_page(None)
}

/// GET /static/style.css
pub async fn serve_style_css() -> Response {
    (StatusCode::OK, [("content-type", "text/css")], STYLE_CSS).into_response()
}

/// Fallback for unknown routes
pub async fn not_found() -> PageError {
    PageError::NotFound
}
