//! Artist database operations

use gigboard_common::db::models::{genres_from_json, genres_to_json, Artist, Contact};
use gigboard_common::Result;
use sqlx::{Row, SqlitePool};

/// Artist row for the flat listing page
#[derive(Debug, Clone)]
pub struct ArtistListing {
    pub guid: String,
    pub name: String,
}

/// Artist row for search results
#[derive(Debug, Clone)]
pub struct ArtistMatch {
    pub guid: String,
    pub name: String,
    pub upcoming_count: i64,
}

/// One of an artist's shows, with the venue details the page displays
#[derive(Debug, Clone)]
pub struct ArtistShow {
    pub venue_id: String,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub starts_at: String,
}

/// Save a new artist and its contact record in one transaction
pub async fn create_artist(pool: &SqlitePool, contact: &Contact, artist: &Artist) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO contacts (
            guid, address, city, state, phone, website_link, facebook_link, image_link,
            created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(&contact.guid)
    .bind(&contact.address)
    .bind(&contact.city)
    .bind(&contact.state)
    .bind(&contact.phone)
    .bind(&contact.website_link)
    .bind(&contact.facebook_link)
    .bind(&contact.image_link)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO artists (guid, name, genres, contact_id, created_at, updated_at)
        VALUES (?, ?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(&artist.guid)
    .bind(&artist.name)
    .bind(genres_to_json(&artist.genres))
    .bind(&artist.contact_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}

/// Update an artist and its contact record in one transaction
pub async fn update_artist(pool: &SqlitePool, artist: &Artist, contact: &Contact) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        UPDATE artists SET name = ?, genres = ?, updated_at = CURRENT_TIMESTAMP
        WHERE guid = ?
        "#,
    )
    .bind(&artist.name)
    .bind(genres_to_json(&artist.genres))
    .bind(&artist.guid)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        UPDATE contacts SET address = ?, city = ?, state = ?, phone = ?,
            website_link = ?, facebook_link = ?, image_link = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE guid = ?
        "#,
    )
    .bind(&contact.address)
    .bind(&contact.city)
    .bind(&contact.state)
    .bind(&contact.phone)
    .bind(&contact.website_link)
    .bind(&contact.facebook_link)
    .bind(&contact.image_link)
    .bind(&contact.guid)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}

/// Load an artist and its contact record
pub async fn load_artist(pool: &SqlitePool, guid: &str) -> Result<Option<(Artist, Contact)>> {
    let row = sqlx::query(
        r#"
        SELECT a.guid, a.name, a.genres, a.contact_id,
               c.address, c.city, c.state, c.phone,
               c.website_link, c.facebook_link, c.image_link
        FROM artists a
        JOIN contacts c ON c.guid = a.contact_id
        WHERE a.guid = ?
        "#,
    )
    .bind(guid)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => {
            let genres_raw: String = row.get("genres");
            let contact_id: String = row.get("contact_id");

            let artist = Artist {
                guid: row.get("guid"),
                name: row.get("name"),
                genres: genres_from_json(&genres_raw),
                contact_id: contact_id.clone(),
            };
            let contact = Contact {
                guid: contact_id,
                address: row.get("address"),
                city: row.get("city"),
                state: row.get("state"),
                phone: row.get("phone"),
                website_link: row.get("website_link"),
                facebook_link: row.get("facebook_link"),
                image_link: row.get("image_link"),
            };

            Ok(Some((artist, contact)))
        }
        None => Ok(None),
    }
}

/// All artists, id and name only, ordered by name
pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<ArtistListing>> {
    let rows = sqlx::query("SELECT guid, name FROM artists ORDER BY name")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .map(|row| ArtistListing {
            guid: row.get("guid"),
            name: row.get("name"),
        })
        .collect())
}

/// Artists whose name contains the search term (case-insensitive)
pub async fn search_artists(pool: &SqlitePool, term: &str, now: &str) -> Result<Vec<ArtistMatch>> {
    let pattern = format!("%{}%", term);

    let rows = sqlx::query(
        r#"
        SELECT a.guid, a.name,
               (SELECT COUNT(*) FROM shows s
                WHERE s.artist_id = a.guid AND s.starts_at >= ?) AS upcoming_count
        FROM artists a
        WHERE a.name LIKE ?
        ORDER BY a.name
        "#,
    )
    .bind(now)
    .bind(&pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| ArtistMatch {
            guid: row.get("guid"),
            name: row.get("name"),
            upcoming_count: row.get("upcoming_count"),
        })
        .collect())
}

/// An artist's shows with venue details, ordered by start time
pub async fn artist_shows(pool: &SqlitePool, artist_guid: &str) -> Result<Vec<ArtistShow>> {
    let rows = sqlx::query(
        r#"
        SELECT s.venue_id, v.name AS venue_name, c.image_link, s.starts_at
        FROM shows s
        JOIN venues v ON v.guid = s.venue_id
        JOIN contacts c ON c.guid = v.contact_id
        WHERE s.artist_id = ?
        ORDER BY s.starts_at
        "#,
    )
    .bind(artist_guid)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| ArtistShow {
            venue_id: row.get("venue_id"),
            venue_name: row.get("venue_name"),
            venue_image_link: row.get("image_link"),
            starts_at: row.get("starts_at"),
        })
        .collect())
}
