//! Database models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shared contact record for venues and artists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub guid: String,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
}

impl Contact {
    pub fn new(city: String, state: String) -> Self {
        Self {
            guid: Uuid::new_v4().to_string(),
            address: None,
            city,
            state,
            phone: None,
            website_link: None,
            facebook_link: None,
            image_link: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub guid: String,
    pub name: String,
    pub genres: Vec<String>,
    pub contact_id: String,
}

impl Venue {
    pub fn new(name: String, genres: Vec<String>, contact_id: String) -> Self {
        Self {
            guid: Uuid::new_v4().to_string(),
            name,
            genres,
            contact_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub guid: String,
    pub name: String,
    pub genres: Vec<String>,
    pub contact_id: String,
}

impl Artist {
    pub fn new(name: String, genres: Vec<String>, contact_id: String) -> Self {
        Self {
            guid: Uuid::new_v4().to_string(),
            name,
            genres,
            contact_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    pub guid: String,
    pub artist_id: String,
    pub venue_id: String,
    /// Canonical `YYYY-MM-DD HH:MM:SS` text
    pub starts_at: String,
}

impl Show {
    pub fn new(artist_id: String, venue_id: String, starts_at: String) -> Self {
        Self {
            guid: Uuid::new_v4().to_string(),
            artist_id,
            venue_id,
            starts_at,
        }
    }
}

/// Encode a genre list for the TEXT column.
///
/// Falls back to `[]` only if serialization of a string vector ever fails,
/// which serde_json does not do for UTF-8 strings.
pub fn genres_to_json(genres: &[String]) -> String {
    serde_json::to_string(genres).unwrap_or_else(|_| "[]".to_string())
}

/// Decode the genres TEXT column. Unparseable values read as empty.
pub fn genres_from_json(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genres_round_trip() {
        let genres = vec!["Jazz".to_string(), "Rock n Roll".to_string()];
        let encoded = genres_to_json(&genres);
        assert_eq!(genres_from_json(&encoded), genres);
    }

    #[test]
    fn test_genres_bad_column_reads_empty() {
        assert!(genres_from_json("not json").is_empty());
        assert!(genres_from_json("").is_empty());
    }

    #[test]
    fn test_new_models_get_distinct_guids() {
        let a = Contact::new("Boise".to_string(), "ID".to_string());
        let b = Contact::new("Boise".to_string(), "ID".to_string());
        assert_ne!(a.guid, b.guid);
    }
}
