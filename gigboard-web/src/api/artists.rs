//! Artist pages: listing, detail, create, edit

use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use gigboard_common::datetime;
use gigboard_common::db::models::{Artist, Contact};
use tracing::{error, info};

use crate::api::venues::contact_block;
use crate::api::{notice_text, search::search_box, NoticeQuery, PageError};
use crate::db;
use crate::forms::{optional, ArtistForm, STATES};
use crate::render::{error_list, escape, render_page, select_options};
use crate::AppState;

const ARTIST_FORM_HTML: &str = include_str!("../ui/artist_form.html");

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let listings = db::artists::list_artists(&state.db).await?;

    let mut content = format!(
        "<h1>Artists</h1>{}<div class=\"actions\"><a href=\"/artists/create\">List an artist</a></div>",
        search_box("/artists/search", "")
    );
    content.push_str("<ul>");
    for listing in &listings {
        content.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a></li>",
            escape(&listing.guid),
            escape(&listing.name)
        ));
    }
    content.push_str("</ul>");
    if listings.is_empty() {
        content.push_str("<p>No artists listed yet.</p>");
    }

    Ok(render_page("Artists", None, &content))
}

/// GET /artists/:artist_id
///
/// Artist detail with shows partitioned into past and upcoming against the
/// current wall-clock time.
pub async fn show_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    Query(query): Query<NoticeQuery>,
) -> Result<Html<String>, PageError> {
    let (artist, contact) = db::artists::load_artist(&state.db, &artist_id)
        .await?
        .ok_or(PageError::NotFound)?;
    let shows = db::artists::artist_shows(&state.db, &artist_id).await?;

    let now = datetime::now_stamp();
    let (past, upcoming): (Vec<_>, Vec<_>) =
        shows.into_iter().partition(|s| s.starts_at.as_str() < now.as_str());

    let notice = query
        .notice
        .as_deref()
        .and_then(|code| notice_text(code, "Artist", &artist.name));

    let mut content = format!("<h1>{}</h1>", escape(&artist.name));
    content.push_str(&format!(
        "<p class=\"count\">{}</p>",
        escape(&artist.genres.join(", "))
    ));
    content.push_str(&contact_block(&contact, false));
    content.push_str(&format!(
        "<div class=\"actions\"><a href=\"/artists/{}/edit\">Edit artist</a></div>",
        escape(&artist.guid)
    ));

    content.push_str(&format!("<h2>Upcoming shows ({})</h2>", upcoming.len()));
    content.push_str("<ul>");
    for show in &upcoming {
        content.push_str(&artist_show_item(show));
    }
    content.push_str("</ul>");

    content.push_str(&format!("<h2>Past shows ({})</h2>", past.len()));
    content.push_str("<ul>");
    for show in &past {
        content.push_str(&artist_show_item(show));
    }
    content.push_str("</ul>");

    Ok(render_page(&artist.name, notice.as_deref(), &content))
}

/// GET /artists/create
pub async fn new_artist_form() -> Html<String> {
    artist_form_page(
        "List an artist",
        "/artists/create",
        "List artist",
        &ArtistForm::default(),
        &[],
    )
}

/// POST /artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> Result<Response, PageError> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Ok(artist_form_page(
            "List an artist",
            "/artists/create",
            "List artist",
            &form,
            &errors,
        )
        .into_response());
    }

    let contact = contact_from_form(&form);
    let artist = Artist::new(
        form.name.trim().to_string(),
        form.genre_list(),
        contact.guid.clone(),
    );

    let notice = match db::artists::create_artist(&state.db, &contact, &artist).await {
        Ok(()) => {
            info!("Listed artist {} ({})", artist.name, artist.guid);
            format!("Artist {} was successfully listed!", artist.name)
        }
        Err(e) => {
            error!("Failed to list artist {}: {}", artist.name, e);
            format!("An error occurred. Artist {} could not be listed.", artist.name)
        }
    };

    Ok(crate::api::ui::home_page(Some(&notice)).into_response())
}

/// GET /artists/:artist_id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
) -> Result<Html<String>, PageError> {
    let (artist, contact) = db::artists::load_artist(&state.db, &artist_id)
        .await?
        .ok_or(PageError::NotFound)?;

    let form = ArtistForm {
        name: artist.name.clone(),
        city: contact.city.clone(),
        state: contact.state.clone(),
        phone: contact.phone.clone().unwrap_or_default(),
        genres: artist.genres.join(", "),
        website_link: contact.website_link.clone().unwrap_or_default(),
        facebook_link: contact.facebook_link.clone().unwrap_or_default(),
        image_link: contact.image_link.clone().unwrap_or_default(),
    };

    Ok(artist_form_page(
        &format!("Edit {}", artist.name),
        &format!("/artists/{}/edit", artist.guid),
        "Save changes",
        &form,
        &[],
    ))
}

/// POST /artists/:artist_id/edit
pub async fn update_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    Form(form): Form<ArtistForm>,
) -> Result<Response, PageError> {
    let (artist, contact) = db::artists::load_artist(&state.db, &artist_id)
        .await?
        .ok_or(PageError::NotFound)?;

    let errors = form.validate();
    if !errors.is_empty() {
        return Ok(artist_form_page(
            &format!("Edit {}", artist.name),
            &format!("/artists/{}/edit", artist.guid),
            "Save changes",
            &form,
            &errors,
        )
        .into_response());
    }

    let mut updated_artist = artist;
    updated_artist.name = form.name.trim().to_string();
    updated_artist.genres = form.genre_list();

    let mut updated_contact = contact;
    updated_contact.city = form.city.trim().to_string();
    updated_contact.state = form.state.trim().to_string();
    updated_contact.phone = optional(&form.phone);
    updated_contact.website_link = optional(&form.website_link);
    updated_contact.facebook_link = optional(&form.facebook_link);
    updated_contact.image_link = optional(&form.image_link);

    match db::artists::update_artist(&state.db, &updated_artist, &updated_contact).await {
        Ok(()) => {
            info!("Edited artist {} ({})", updated_artist.name, artist_id);
            Ok(Redirect::to(&format!("/artists/{}?notice=edited", artist_id)).into_response())
        }
        Err(e) => {
            error!("Failed to edit artist {}: {}", artist_id, e);
            Ok(Redirect::to(&format!("/artists/{}?notice=edit-failed", artist_id)).into_response())
        }
    }
}

fn artist_show_item(show: &db::artists::ArtistShow) -> String {
    let image = match &show.venue_image_link {
        Some(link) => format!(
            "<img src=\"{}\" alt=\"\" width=\"40\" height=\"40\"> ",
            escape(link)
        ),
        None => String::new(),
    };
    format!(
        "<li>{}<a href=\"/venues/{}\">{}</a> \
         <span class=\"count\">{}</span></li>",
        image,
        escape(&show.venue_id),
        escape(&show.venue_name),
        escape(&datetime::format_display(&show.starts_at))
    )
}

fn artist_form_page(
    heading: &str,
    action: &str,
    submit_label: &str,
    form: &ArtistForm,
    errors: &[String],
) -> Html<String> {
    let content = ARTIST_FORM_HTML
        .replace("{{HEADING}}", &escape(heading))
        .replace("{{ERRORS}}", &error_list(errors))
        .replace("{{ACTION}}", &escape(action))
        .replace("{{NAME}}", &escape(&form.name))
        .replace("{{CITY}}", &escape(&form.city))
        .replace("{{STATE_OPTIONS}}", &select_options(STATES, form.state.trim()))
        .replace("{{PHONE}}", &escape(&form.phone))
        .replace("{{GENRES}}", &escape(&form.genres))
        .replace("{{WEBSITE_LINK}}", &escape(&form.website_link))
        .replace("{{FACEBOOK_LINK}}", &escape(&form.facebook_link))
        .replace("{{IMAGE_LINK}}", &escape(&form.image_link))
        .replace("{{SUBMIT_LABEL}}", &escape(submit_label));

    render_page(heading, None, &content)
}

fn contact_from_form(form: &ArtistForm) -> Contact {
    let mut contact = Contact::new(form.city.trim().to_string(), form.state.trim().to_string());
    contact.phone = optional(&form.phone);
    contact.website_link = optional(&form.website_link);
    contact.facebook_link = optional(&form.facebook_link);
    contact.image_link = optional(&form.image_link);
    contact
}
