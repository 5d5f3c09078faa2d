//! Name search for venues and artists
//!
//! Both searches are substring matches on the name column; result rows
//! carry the upcoming-show count computed at request time.

use axum::extract::{Form, State};
use axum::response::Html;
use gigboard_common::datetime;

use crate::api::PageError;
use crate::forms::SearchForm;
use crate::render::{escape, render_page};
use crate::AppState;

/// Search box markup shared by the listing and result pages
pub(crate) fn search_box(action: &str, term: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{}\" class=\"search\">\
         <input type=\"search\" name=\"search_term\" value=\"{}\" placeholder=\"Find by name\">\
         <button type=\"submit\">Search</button></form>",
        escape(action),
        escape(term)
    )
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, PageError> {
    let term = form.search_term.trim();
    let now = datetime::now_stamp();

    let matches = crate::db::venues::search_venues(&state.db, term, &now).await?;

    let mut content = format!("<h1>Find venues</h1>{}", search_box("/venues/search", term));
    content.push_str(&format!(
        "<p class=\"count\">{} result(s) for \"{}\"</p>",
        matches.len(),
        escape(term)
    ));
    content.push_str("<ul>");
    for hit in &matches {
        content.push_str(&format!(
            "<li><a href=\"/venues/{}\">{}</a> \
             <span class=\"count\">{} upcoming show(s)</span></li>",
            escape(&hit.guid),
            escape(&hit.name),
            hit.upcoming_count
        ));
    }
    content.push_str("</ul>");

    Ok(render_page("Search venues", None, &content))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, PageError> {
    let term = form.search_term.trim();
    let now = datetime::now_stamp();

    let matches = crate::db::artists::search_artists(&state.db, term, &now).await?;

    let mut content = format!("<h1>Find artists</h1>{}", search_box("/artists/search", term));
    content.push_str(&format!(
        "<p class=\"count\">{} result(s) for \"{}\"</p>",
        matches.len(),
        escape(term)
    ));
    content.push_str("<ul>");
    for hit in &matches {
        content.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a> \
             <span class=\"count\">{} upcoming show(s)</span></li>",
            escape(&hit.guid),
            escape(&hit.name),
            hit.upcoming_count
        ));
    }
    content.push_str("</ul>");

    Ok(render_page("Search artists", None, &content))
}
