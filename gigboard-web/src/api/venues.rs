//! Venue pages: listing, detail, create, edit, delete

use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use gigboard_common::datetime;
use gigboard_common::db::models::{Contact, Venue};
use tracing::{error, info};

use crate::api::{notice_text, search::search_box, NoticeQuery, PageError};
use crate::db;
use crate::forms::{optional, VenueForm, STATES};
use crate::render::{error_list, escape, render_page, select_options};
use crate::AppState;

const VENUE_FORM_HTML: &str = include_str!("../ui/venue_form.html");

/// GET /venues
///
/// All venues grouped by (city, state); each row carries its upcoming-show
/// count. Rows arrive region-ordered, so grouping is one pass.
pub async fn list_venues(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let now = datetime::now_stamp();
    let listings = db::venues::list_venues(&state.db, &now).await?;

    let mut content = format!(
        "<h1>Venues</h1>{}<div class=\"actions\"><a href=\"/venues/create\">List a venue</a></div>",
        search_box("/venues/search", "")
    );

    let mut current_region: Option<(String, String)> = None;
    for listing in &listings {
        let region = (listing.state.clone(), listing.city.clone());
        if current_region.as_ref() != Some(&region) {
            if current_region.is_some() {
                content.push_str("</ul></section>");
            }
            content.push_str(&format!(
                "<section class=\"region\"><h2>{}, {}</h2><ul>",
                escape(&listing.city),
                escape(&listing.state)
            ));
            current_region = Some(region);
        }
        content.push_str(&format!(
            "<li><a href=\"/venues/{}\">{}</a> \
             <span class=\"count\">{} upcoming show(s)</span></li>",
            escape(&listing.guid),
            escape(&listing.name),
            listing.upcoming_count
        ));
    }
    if current_region.is_some() {
        content.push_str("</ul></section>");
    }
    if listings.is_empty() {
        content.push_str("<p>No venues listed yet.</p>");
    }

    Ok(render_page("Venues", None, &content))
}

/// GET /venues/:venue_id
///
/// Venue detail with shows partitioned into past and upcoming against the
/// current wall-clock time.
pub async fn show_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    Query(query): Query<NoticeQuery>,
) -> Result<Html<String>, PageError> {
    let (venue, contact) = db::venues::load_venue(&state.db, &venue_id)
        .await?
        .ok_or(PageError::NotFound)?;
    let shows = db::venues::venue_shows(&state.db, &venue_id).await?;

    let now = datetime::now_stamp();
    let (past, upcoming): (Vec<_>, Vec<_>) =
        shows.into_iter().partition(|s| s.starts_at.as_str() < now.as_str());

    let notice = query
        .notice
        .as_deref()
        .and_then(|code| notice_text(code, "Venue", &venue.name));

    let mut content = format!("<h1>{}</h1>", escape(&venue.name));
    content.push_str(&format!(
        "<p class=\"count\">{}</p>",
        escape(&venue.genres.join(", "))
    ));
    content.push_str(&contact_block(&contact, true));
    content.push_str(&format!(
        "<div class=\"actions\"><a href=\"/venues/{}/edit\">Edit venue</a></div>",
        escape(&venue.guid)
    ));

    content.push_str(&format!("<h2>Upcoming shows ({})</h2>", upcoming.len()));
    content.push_str("<ul>");
    for show in &upcoming {
        content.push_str(&venue_show_item(show));
    }
    content.push_str("</ul>");

    content.push_str(&format!("<h2>Past shows ({})</h2>", past.len()));
    content.push_str("<ul>");
    for show in &past {
        content.push_str(&venue_show_item(show));
    }
    content.push_str("</ul>");

    Ok(render_page(&venue.name, notice.as_deref(), &content))
}

/// GET /venues/create
pub async fn new_venue_form() -> Html<String> {
    venue_form_page(
        "List a venue",
        "/venues/create",
        "List venue",
        &VenueForm::default(),
        &[],
    )
}

/// POST /venues/create
///
/// Validation failure re-renders the form with the submitted values; a
/// database failure rolls back and lands on home with a failure notice.
pub async fn create_venue(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> Result<Response, PageError> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Ok(
            venue_form_page("List a venue", "/venues/create", "List venue", &form, &errors)
                .into_response(),
        );
    }

    let contact = contact_from_form(&form);
    let venue = Venue::new(
        form.name.trim().to_string(),
        form.genre_list(),
        contact.guid.clone(),
    );

    let notice = match db::venues::create_venue(&state.db, &contact, &venue).await {
        Ok(()) => {
            info!("Listed venue {} ({})", venue.name, venue.guid);
            format!("Venue {} was successfully listed!", venue.name)
        }
        Err(e) => {
            error!("Failed to list venue {}: {}", venue.name, e);
            format!("An error occurred. Venue {} could not be listed.", venue.name)
        }
    };

    Ok(crate::api::ui::home_page(Some(&notice)).into_response())
}

/// GET /venues/:venue_id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> Result<Html<String>, PageError> {
    let (venue, contact) = db::venues::load_venue(&state.db, &venue_id)
        .await?
        .ok_or(PageError::NotFound)?;

    let form = VenueForm {
        name: venue.name.clone(),
        city: contact.city.clone(),
        state: contact.state.clone(),
        address: contact.address.clone().unwrap_or_default(),
        phone: contact.phone.clone().unwrap_or_default(),
        genres: venue.genres.join(", "),
        website_link: contact.website_link.clone().unwrap_or_default(),
        facebook_link: contact.facebook_link.clone().unwrap_or_default(),
        image_link: contact.image_link.clone().unwrap_or_default(),
    };

    Ok(venue_form_page(
        &format!("Edit {}", venue.name),
        &format!("/venues/{}/edit", venue.guid),
        "Save changes",
        &form,
        &[],
    ))
}

/// POST /venues/:venue_id/edit
pub async fn update_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    Form(form): Form<VenueForm>,
) -> Result<Response, PageError> {
    let (venue, contact) = db::venues::load_venue(&state.db, &venue_id)
        .await?
        .ok_or(PageError::NotFound)?;

    let errors = form.validate();
    if !errors.is_empty() {
        return Ok(venue_form_page(
            &format!("Edit {}", venue.name),
            &format!("/venues/{}/edit", venue.guid),
            "Save changes",
            &form,
            &errors,
        )
        .into_response());
    }

    let mut updated_venue = venue;
    updated_venue.name = form.name.trim().to_string();
    updated_venue.genres = form.genre_list();

    let mut updated_contact = contact;
    updated_contact.city = form.city.trim().to_string();
    updated_contact.state = form.state.trim().to_string();
    updated_contact.address = optional(&form.address);
    updated_contact.phone = optional(&form.phone);
    updated_contact.website_link = optional(&form.website_link);
    updated_contact.facebook_link = optional(&form.facebook_link);
    updated_contact.image_link = optional(&form.image_link);

    match db::venues::update_venue(&state.db, &updated_venue, &updated_contact).await {
        Ok(()) => {
            info!("Edited venue {} ({})", updated_venue.name, venue_id);
            Ok(Redirect::to(&format!("/venues/{}?notice=edited", venue_id)).into_response())
        }
        Err(e) => {
            error!("Failed to edit venue {}: {}", venue_id, e);
            Ok(Redirect::to(&format!("/venues/{}?notice=edit-failed", venue_id)).into_response())
        }
    }
}

/// DELETE /venues/:venue_id
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> Result<StatusCode, PageError> {
    if db::venues::delete_venue(&state.db, &venue_id).await? {
        info!("Deleted venue {}", venue_id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(PageError::NotFound)
    }
}

fn venue_show_item(show: &db::venues::VenueShow) -> String {
    let image = match &show.artist_image_link {
        Some(link) => format!(
            "<img src=\"{}\" alt=\"\" width=\"40\" height=\"40\"> ",
            escape(link)
        ),
        None => String::new(),
    };
    format!(
        "<li>{}<a href=\"/artists/{}\">{}</a> \
         <span class=\"count\">{}</span></li>",
        image,
        escape(&show.artist_id),
        escape(&show.artist_name),
        escape(&datetime::format_display(&show.starts_at))
    )
}

/// Contact details block shared by the venue and artist detail pages
pub(crate) fn contact_block(contact: &Contact, with_address: bool) -> String {
    let mut out = String::from("<p>");
    if with_address {
        if let Some(address) = &contact.address {
            out.push_str(&format!("{}<br>", escape(address)));
        }
    }
    out.push_str(&format!(
        "{}, {}",
        escape(&contact.city),
        escape(&contact.state)
    ));
    if let Some(phone) = &contact.phone {
        out.push_str(&format!("<br>{}", escape(phone)));
    }
    out.push_str("</p>");

    if let Some(link) = &contact.website_link {
        out.push_str(&format!(
            "<p><a href=\"{0}\">{0}</a></p>",
            escape(link)
        ));
    }
    if let Some(link) = &contact.facebook_link {
        out.push_str(&format!(
            "<p><a href=\"{0}\">{0}</a></p>",
            escape(link)
        ));
    }
    if let Some(link) = &contact.image_link {
        out.push_str(&format!(
            "<p><img src=\"{}\" alt=\"\" width=\"200\"></p>",
            escape(link)
        ));
    }

    out
}

fn venue_form_page(
    heading: &str,
    action: &str,
    submit_label: &str,
    form: &VenueForm,
    errors: &[String],
) -> Html<String> {
    let content = VENUE_FORM_HTML
        .replace("{{HEADING}}", &escape(heading))
        .replace("{{ERRORS}}", &error_list(errors))
        .replace("{{ACTION}}", &escape(action))
        .replace("{{NAME}}", &escape(&form.name))
        .replace("{{CITY}}", &escape(&form.city))
        .replace("{{STATE_OPTIONS}}", &select_options(STATES, form.state.trim()))
        .replace("{{ADDRESS}}", &escape(&form.address))
        .replace("{{PHONE}}", &escape(&form.phone))
        .replace("{{GENRES}}", &escape(&form.genres))
        .replace("{{WEBSITE_LINK}}", &escape(&form.website_link))
        .replace("{{FACEBOOK_LINK}}", &escape(&form.facebook_link))
        .replace("{{IMAGE_LINK}}", &escape(&form.image_link))
        .replace("{{SUBMIT_LABEL}}", &escape(submit_label));

    render_page(heading, None, &content)
}

fn contact_from_form(form: &VenueForm) -> Contact {
    let mut contact = Contact::new(form.city.trim().to_string(), form.state.trim().to_string());
    contact.address = optional(&form.address);
    contact.phone = optional(&form.phone);
    contact.website_link = optional(&form.website_link);
    contact.facebook_link = optional(&form.facebook_link);
    contact.image_link = optional(&form.image_link);
    contact
}
