//! Show database operations

use gigboard_common::db::models::Show;
use gigboard_common::Result;
use sqlx::{Row, SqlitePool};

/// Show row for the listing page, joined with both sides of the booking
#[derive(Debug, Clone)]
pub struct ShowListing {
    pub venue_id: String,
    pub venue_name: String,
    pub artist_id: String,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub starts_at: String,
}

/// Save a new show
pub async fn create_show(pool: &SqlitePool, show: &Show) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO shows (guid, artist_id, venue_id, starts_at, created_at)
        VALUES (?, ?, ?, ?, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(&show.guid)
    .bind(&show.artist_id)
    .bind(&show.venue_id)
    .bind(&show.starts_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// All shows with venue and artist details, ordered by start time
pub async fn list_shows(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let rows = sqlx::query(
        r#"
        SELECT s.venue_id, v.name AS venue_name,
               s.artist_id, a.name AS artist_name,
               c.image_link, s.starts_at
        FROM shows s
        JOIN venues v ON v.guid = s.venue_id
        JOIN artists a ON a.guid = s.artist_id
        JOIN contacts c ON c.guid = a.contact_id
        ORDER BY s.starts_at
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| ShowListing {
            venue_id: row.get("venue_id"),
            venue_name: row.get("venue_name"),
            artist_id: row.get("artist_id"),
            artist_name: row.get("artist_name"),
            artist_image_link: row.get("image_link"),
            starts_at: row.get("starts_at"),
        })
        .collect())
}

/// Whether an artist row exists
pub async fn artist_exists(pool: &SqlitePool, guid: &str) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM artists WHERE guid = ?)")
        .bind(guid)
        .fetch_one(pool)
        .await?;
    Ok(exists)
}

/// Whether a venue row exists
pub async fn venue_exists(pool: &SqlitePool, guid: &str) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM venues WHERE guid = ?)")
        .bind(guid)
        .fetch_one(pool)
        .await?;
    Ok(exists)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::test_pool;
    use gigboard_common::db::models::{Artist, Contact, Venue};

    async fn seed_booking(pool: &SqlitePool) -> (Artist, Venue) {
        let venue_contact = Contact::new("Boise".to_string(), "ID".to_string());
        let venue = Venue::new(
            "The Dusty Owl".to_string(),
            vec!["Jazz".to_string()],
            venue_contact.guid.clone(),
        );
        crate::db::venues::create_venue(pool, &venue_contact, &venue)
            .await
            .unwrap();

        let artist_contact = Contact::new("Seattle".to_string(), "WA".to_string());
        let artist = Artist::new(
            "Nightjar".to_string(),
            vec!["Folk".to_string()],
            artist_contact.guid.clone(),
        );
        crate::db::artists::create_artist(pool, &artist_contact, &artist)
            .await
            .unwrap();

        (artist, venue)
    }

    #[tokio::test]
    async fn test_create_and_list_shows() {
        let pool = test_pool().await;
        let (artist, venue) = seed_booking(&pool).await;

        let later = Show::new(
            artist.guid.clone(),
            venue.guid.clone(),
            "2026-09-01 21:00:00".to_string(),
        );
        let earlier = Show::new(
            artist.guid.clone(),
            venue.guid.clone(),
            "2026-08-01 20:00:00".to_string(),
        );
        create_show(&pool, &later).await.unwrap();
        create_show(&pool, &earlier).await.unwrap();

        let listings = list_shows(&pool).await.unwrap();
        assert_eq!(listings.len(), 2);
        // Ordered by start time
        assert_eq!(listings[0].starts_at, "2026-08-01 20:00:00");
        assert_eq!(listings[0].venue_name, "The Dusty Owl");
        assert_eq!(listings[0].artist_name, "Nightjar");
    }

    #[tokio::test]
    async fn test_create_show_rejects_dangling_references() {
        let pool = test_pool().await;
        let show = Show::new(
            "no-such-artist".to_string(),
            "no-such-venue".to_string(),
            "2026-08-01 20:00:00".to_string(),
        );

        assert!(create_show(&pool, &show).await.is_err());
    }

    #[tokio::test]
    async fn test_existence_checks() {
        let pool = test_pool().await;
        let (artist, venue) = seed_booking(&pool).await;

        assert!(artist_exists(&pool, &artist.guid).await.unwrap());
        assert!(venue_exists(&pool, &venue.guid).await.unwrap());
        assert!(!artist_exists(&pool, &venue.guid).await.unwrap());
        assert!(!venue_exists(&pool, "missing").await.unwrap());
    }
}
