//! gigboard-web library - server-rendered booking directory
//!
//! HTML pages for listing, searching, viewing, creating, and editing
//! venues, artists, and the shows linking them.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod forms;
pub mod render;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;
    use axum::routing::post;

    Router::new()
        .route("/", get(api::serve_home))
        .route("/static/style.css", get(api::serve_style_css))
        .merge(api::health_routes())
        // Venues
        .route("/venues", get(api::list_venues))
        .route("/venues/search", post(api::search_venues))
        .route("/venues/create", get(api::new_venue_form).post(api::create_venue))
        .route("/venues/:venue_id", get(api::show_venue).delete(api::delete_venue))
        .route("/venues/:venue_id/edit", get(api::edit_venue_form).post(api::update_venue))
        // Artists
        .route("/artists", get(api::list_artists))
        .route("/artists/search", post(api::search_artists))
        .route("/artists/create", get(api::new_artist_form).post(api::create_artist))
        .route("/artists/:artist_id", get(api::show_artist))
        .route("/artists/:artist_id/edit", get(api::edit_artist_form).post(api::update_artist))
        // Shows
        .route("/shows", get(api::list_shows))
        .route("/shows/create", get(api::new_show_form).post(api::create_show))
        .fallback(api::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
