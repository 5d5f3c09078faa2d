//! Show pages: listing and create

use axum::extract::{Form, State};
use axum::response::{Html, IntoResponse, Response};
use gigboard_common::datetime;
use gigboard_common::db::models::Show;
use tracing::{error, info};

use crate::api::PageError;
use crate::db;
use crate::forms::ShowForm;
use crate::render::{error_list, escape, render_page};
use crate::AppState;

const SHOW_FORM_HTML: &str = include_str!("../ui/show_form.html");

/// GET /shows
///
/// Every show with its venue and artist, ordered by start time.
pub async fn list_shows(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let listings = db::shows::list_shows(&state.db).await?;

    let mut content = String::from(
        "<h1>Shows</h1>\
         <div class=\"actions\"><a href=\"/shows/create\">List a show</a></div>",
    );

    if listings.is_empty() {
        content.push_str("<p>No shows listed yet.</p>");
    } else {
        content.push_str(
            "<table><tr><th></th><th>Artist</th><th>Venue</th><th>Start time</th></tr>",
        );
        for show in &listings {
            let image = match &show.artist_image_link {
                Some(link) => format!(
                    "<img src=\"{}\" alt=\"\" width=\"40\" height=\"40\">",
                    escape(link)
                ),
                None => String::new(),
            };
            content.push_str(&format!(
                "<tr><td>{}</td>\
                 <td><a href=\"/artists/{}\">{}</a></td>\
                 <td><a href=\"/venues/{}\">{}</a></td>\
                 <td>{}</td></tr>",
                image,
                escape(&show.artist_id),
                escape(&show.artist_name),
                escape(&show.venue_id),
                escape(&show.venue_name),
                escape(&datetime::format_display(&show.starts_at))
            ));
        }
        content.push_str("</table>");
    }

    Ok(render_page("Shows", None, &content))
}

/// GET /shows/create
pub async fn new_show_form() -> Html<String> {
    show_form_page(&ShowForm::default(), &[])
}

/// POST /shows/create
///
/// Field validation first, then both referenced rows must exist; any
/// problem re-renders the form. A database failure lands on home with a
/// failure notice.
pub async fn create_show(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> Result<Response, PageError> {
    let mut errors = form.validate();

    if errors.is_empty() {
        if !db::shows::artist_exists(&state.db, form.artist_id.trim()).await? {
            errors.push("No artist with that ID".to_string());
        }
        if !db::shows::venue_exists(&state.db, form.venue_id.trim()).await? {
            errors.push("No venue with that ID".to_string());
        }
    }

    if !errors.is_empty() {
        return Ok(show_form_page(&form, &errors).into_response());
    }

    // validate() already proved starts_at parses
    let starts_at = datetime::parse_start_time(&form.starts_at)
        .map(|dt| datetime::to_storage(&dt))
        .ok_or_else(|| PageError::Internal("start time vanished after validation".to_string()))?;

    let show = Show::new(
        form.artist_id.trim().to_string(),
        form.venue_id.trim().to_string(),
        starts_at,
    );

    let notice = match db::shows::create_show(&state.db, &show).await {
        Ok(()) => {
            info!("Listed show {} at venue {}", show.guid, show.venue_id);
            "Show was successfully listed!".to_string()
        }
        Err(e) => {
            error!("Failed to list show: {}", e);
            "An error occurred. Show could not be listed.".to_string()
        }
    };

    Ok(crate::api::ui::home_page(Some(&notice)).into_response())
}

fn show_form_page(form: &ShowForm, errors: &[String]) -> Html<String> {
    let content = SHOW_FORM_HTML
        .replace("{{ERRORS}}", &error_list(errors))
        .replace("{{ARTIST_ID}}", &escape(&form.artist_id))
        .replace("{{VENUE_ID}}", &escape(&form.venue_id))
        .replace("{{STARTS_AT}}", &escape(&form.starts_at));

    render_page("List a show", None, &content)
}
