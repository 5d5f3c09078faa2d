//! HTTP handlers for gigboard-web

use serde::Deserialize;

pub mod artists;
pub mod error;
pub mod health;
pub mod search;
pub mod shows;
pub mod ui;
pub mod venues;

pub use artists::{
    create_artist, edit_artist_form, list_artists, new_artist_form, show_artist, update_artist,
};
pub use error::PageError;
pub use health::health_routes;
pub use search::{search_artists, search_venues};
pub use shows::{create_show, list_shows, new_show_form};
pub use ui::{not_found, serve_home, serve_style_css};
pub use venues::{
    create_venue, delete_venue, edit_venue_form, list_venues, new_venue_form, show_venue,
    update_venue,
};

/// Notice code carried across a redirect after an edit
#[derive(Debug, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

/// Map a notice code from the query string to display text. Unknown codes
/// show nothing rather than echoing request data into the page.
pub(crate) fn notice_text(code: &str, kind: &str, name: &str) -> Option<String> {
    match code {
        "edited" => Some(format!("{} {} was successfully edited.", kind, name)),
        "edit-failed" => Some(format!(
            "An error occurred. {} {} could not be edited.",
            kind, name
        )),
        _ => None,
    }
}
