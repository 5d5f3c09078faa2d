//! Venue database operations

use gigboard_common::db::models::{genres_from_json, genres_to_json, Contact, Venue};
use gigboard_common::Result;
use sqlx::{Row, SqlitePool};

/// Venue row for the grouped listing page
#[derive(Debug, Clone)]
pub struct VenueListing {
    pub guid: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub upcoming_count: i64,
}

/// Venue row for search results
#[derive(Debug, Clone)]
pub struct VenueMatch {
    pub guid: String,
    pub name: String,
    pub upcoming_count: i64,
}

/// One of a venue's shows, with the artist details the page displays
#[derive(Debug, Clone)]
pub struct VenueShow {
    pub artist_id: String,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub starts_at: String,
}

/// Save a new venue and its contact record in one transaction
pub async fn create_venue(pool: &SqlitePool, contact: &Contact, venue: &Venue) -> Result<()> {
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
        INSERT INTO venues (guid, name, genres, contact_id, created_at, updated_at)
        VALUES (?, ?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(&venue.guid)
    .bind(&venue.name)
    .bind(genres_to_json(&venue.genres))
    .bind(&venue.contact_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}

/// Update a venue and its contact record in one transaction
pub async fn update_venue(pool: &SqlitePool, venue: &Venue, contact: &Contact) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        UPDATE venues SET name = ?, genres = ?, updated_at = CURRENT_TIMESTAMP
        WHERE guid = ?
        "#,
    )
    .bind(&venue.name)
    .bind(genres_to_json(&venue.genres))
    .bind(&venue.guid)
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

/// Load a venue and its contact record
pub async fn load_venue(pool: &SqlitePool, guid: &str) -> Result<Option<(Venue, Contact)>> {
    let row = sqlx::query(
        r#"
        SELECT v.guid, v.name, v.genres, v.contact_id,
               c.address, c.city, c.state, c.phone,
               c.website_link, c.facebook_link, c.image_link
        FROM venues v
        JOIN contacts c ON c.guid = v.contact_id
        WHERE v.guid = ?
        "#,
    )
    .bind(guid)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => {
            let genres_raw: String = row.get("genres");
            let contact_id: String = row.get("contact_id");

            let venue = Venue {
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

            Ok(Some((venue, contact)))
        }
        None => Ok(None),
    }
}

/// All venues with city/state and upcoming-show counts, ordered so the
/// handler can group consecutive rows by (state, city)
pub async fn list_venues(pool: &SqlitePool, now: &str) -> Result<Vec<VenueListing>> {
    let rows = sqlx::query(
        r#"
        SELECT v.guid, v.name, c.city, c.state,
               (SELECT COUNT(*) FROM shows s
                WHERE s.venue_id = v.guid AND s.starts_at >= ?) AS upcoming_count
        FROM venues v
        JOIN contacts c ON c.guid = v.contact_id
        ORDER BY c.state, c.city, v.name
        "#,
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| VenueListing {
            guid: row.get("guid"),
            name: row.get("name"),
            city: row.get("city"),
            state: row.get("state"),
            upcoming_count: row.get("upcoming_count"),
        })
        .collect())
}

/// Venues whose name contains the search term (case-insensitive)
pub async fn search_venues(pool: &SqlitePool, term: &str, now: &str) -> Result<Vec<VenueMatch>> {
    let pattern = format!("%{}%", term);

    let rows = sqlx::query(
        r#"
        SELECT v.guid, v.name,
               (SELECT COUNT(*) FROM shows s
                WHERE s.venue_id = v.guid AND s.starts_at >= ?) AS upcoming_count
        FROM venues v
        WHERE v.name LIKE ?
        ORDER BY v.name
        "#,
    )
    .bind(now)
    .bind(&pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| VenueMatch {
            guid: row.get("guid"),
            name: row.get("name"),
            upcoming_count: row.get("upcoming_count"),
        })
        .collect())
}

/// A venue's shows with artist details, ordered by start time
pub async fn venue_shows(pool: &SqlitePool, venue_guid: &str) -> Result<Vec<VenueShow>> {
    let rows = sqlx::query(
        r#"
        SELECT s.artist_id, a.name AS artist_name, c.image_link, s.starts_at
        FROM shows s
        JOIN artists a ON a.guid = s.artist_id
        JOIN contacts c ON c.guid = a.contact_id
        WHERE s.venue_id = ?
        ORDER BY s.starts_at
        "#,
    )
    .bind(venue_guid)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| VenueShow {
            artist_id: row.get("artist_id"),
            artist_name: row.get("artist_name"),
            artist_image_link: row.get("image_link"),
            starts_at: row.get("starts_at"),
        })
        .collect())
}

/// Delete a venue, its shows, and its contact record in one transaction.
/// Returns false when no such venue exists.
pub async fn delete_venue(pool: &SqlitePool, guid: &str) -> Result<bool> {
    let mut tx = pool.begin().await?;

    let contact_id: Option<String> =
        sqlx::query_scalar("SELECT contact_id FROM venues WHERE guid = ?")
            .bind(guid)
            .fetch_optional(&mut *tx)
            .await?;

    let Some(contact_id) = contact_id else {
        return Ok(false);
    };

    sqlx::query("DELETE FROM shows WHERE venue_id = ?")
        .bind(guid)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM venues WHERE guid = ?")
        .bind(guid)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM contacts WHERE guid = ?")
        .bind(&contact_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::test_pool;

    fn sample_venue(name: &str, city: &str, state: &str) -> (Contact, Venue) {
        let mut contact = Contact::new(city.to_string(), state.to_string());
        contact.address = Some("100 Main St".to_string());
        let venue = Venue::new(
            name.to_string(),
            vec!["Jazz".to_string()],
            contact.guid.clone(),
        );
        (contact, venue)
    }

    #[tokio::test]
    async fn test_create_and_load_venue() {
        let pool = test_pool().await;
        let (contact, venue) = sample_venue("The Dusty Owl", "Boise", "ID");

        create_venue(&pool, &contact, &venue)
            .await
            .expect("Failed to save venue");

        let (loaded_venue, loaded_contact) = load_venue(&pool, &venue.guid)
            .await
            .expect("Failed to load venue")
            .expect("Venue not found");

        assert_eq!(loaded_venue.name, "The Dusty Owl");
        assert_eq!(loaded_venue.genres, vec!["Jazz".to_string()]);
        assert_eq!(loaded_contact.city, "Boise");
        assert_eq!(loaded_contact.address.as_deref(), Some("100 Main St"));
    }

    #[tokio::test]
    async fn test_load_missing_venue_is_none() {
        let pool = test_pool().await;
        let found = load_venue(&pool, "no-such-guid").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_list_venues_ordered_by_region() {
        let pool = test_pool().await;

        let (c1, v1) = sample_venue("Zenith Hall", "Boise", "ID");
        let (c2, v2) = sample_venue("Attic Stage", "Boise", "ID");
        let (c3, v3) = sample_venue("Crocodile", "Seattle", "WA");
        create_venue(&pool, &c1, &v1).await.unwrap();
        create_venue(&pool, &c2, &v2).await.unwrap();
        create_venue(&pool, &c3, &v3).await.unwrap();

        let listings = list_venues(&pool, "2026-01-01 00:00:00").await.unwrap();
        let names: Vec<&str> = listings.iter().map(|l| l.name.as_str()).collect();

        // ID before WA, names alphabetical within a city
        assert_eq!(names, vec!["Attic Stage", "Zenith Hall", "Crocodile"]);
        assert!(listings.iter().all(|l| l.upcoming_count == 0));
    }

    #[tokio::test]
    async fn test_search_matches_substring() {
        let pool = test_pool().await;
        let (contact, venue) = sample_venue("The Dusty Owl", "Boise", "ID");
        create_venue(&pool, &contact, &venue).await.unwrap();

        let hits = search_venues(&pool, "dusty", "2026-01-01 00:00:00").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "The Dusty Owl");

        let misses = search_venues(&pool, "cavern", "2026-01-01 00:00:00").await.unwrap();
        assert!(misses.is_empty());
    }

    #[tokio::test]
    async fn test_update_venue_changes_both_rows() {
        let pool = test_pool().await;
        let (contact, venue) = sample_venue("Old Name", "Boise", "ID");
        create_venue(&pool, &contact, &venue).await.unwrap();

        let mut updated_venue = venue.clone();
        updated_venue.name = "New Name".to_string();
        updated_venue.genres = vec!["Soul".to_string()];
        let mut updated_contact = contact.clone();
        updated_contact.city = "Nampa".to_string();

        update_venue(&pool, &updated_venue, &updated_contact)
            .await
            .unwrap();

        let (loaded_venue, loaded_contact) =
            load_venue(&pool, &venue.guid).await.unwrap().unwrap();
        assert_eq!(loaded_venue.name, "New Name");
        assert_eq!(loaded_venue.genres, vec!["Soul".to_string()]);
        assert_eq!(loaded_contact.city, "Nampa");
    }

    #[tokio::test]
    async fn test_delete_venue_removes_contact_and_shows() {
        let pool = test_pool().await;
        let (contact, venue) = sample_venue("Doomed", "Boise", "ID");
        create_venue(&pool, &contact, &venue).await.unwrap();

        // Artist + show against the venue
        let artist_contact = Contact::new("Seattle".to_string(), "WA".to_string());
        let artist = gigboard_common::db::models::Artist::new(
            "Nightjar".to_string(),
            vec!["Folk".to_string()],
            artist_contact.guid.clone(),
        );
        crate::db::artists::create_artist(&pool, &artist_contact, &artist)
            .await
            .unwrap();
        let show = gigboard_common::db::models::Show::new(
            artist.guid.clone(),
            venue.guid.clone(),
            "2026-08-01 20:00:00".to_string(),
        );
        crate::db::shows::create_show(&pool, &show).await.unwrap();

        assert!(delete_venue(&pool, &venue.guid).await.unwrap());

        assert!(load_venue(&pool, &venue.guid).await.unwrap().is_none());
        let show_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shows")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(show_count, 0);
        let contact_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM contacts WHERE guid = ?")
                .bind(&contact.guid)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(contact_count, 0);
    }

    #[tokio::test]
    async fn test_delete_missing_venue_reports_false() {
        let pool = test_pool().await;
        assert!(!delete_venue(&pool, "no-such-guid").await.unwrap());
    }
}
