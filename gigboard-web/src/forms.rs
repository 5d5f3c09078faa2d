//! Form deserialization and validation
//!
//! Mutating endpoints deserialize into typed form structs via the form
//! extractor; `validate()` collects every field problem so a re-rendered
//! form can show the full list at once.

use serde::Deserialize;

/// US state and district postal codes accepted by the state select
pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH",
    "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Genre labels accepted by the genres field
pub const GENRES: &[&str] = &[
    "Alternative", "Blues", "Classical", "Country", "Electronic", "Folk", "Funk", "Hip-Hop",
    "Heavy Metal", "Instrumental", "Jazz", "Musical Theatre", "Pop", "Punk", "R&B", "Reggae",
    "Rock n Roll", "Soul", "Other",
];

const MAX_NAME_LEN: usize = 120;
const MAX_LINK_LEN: usize = 500;

/// Venue create/edit form fields
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub website_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub image_link: String,
}

impl VenueForm {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        validate_name(&self.name, &mut errors);
        validate_city_state(&self.city, &self.state, &mut errors);
        if self.address.trim().is_empty() {
            errors.push("Address is required".to_string());
        }
        validate_phone(&self.phone, &mut errors);
        validate_genres(&self.genres, &mut errors);
        validate_link("Website link", &self.website_link, &mut errors);
        validate_link("Facebook link", &self.facebook_link, &mut errors);
        validate_link("Image link", &self.image_link, &mut errors);

        errors
    }

    /// Parsed genre tokens (valid only after `validate` passes)
    pub fn genre_list(&self) -> Vec<String> {
        split_genres(&self.genres)
    }
}

/// Artist create/edit form fields (no street address)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub website_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub image_link: String,
}

impl ArtistForm {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        validate_name(&self.name, &mut errors);
        validate_city_state(&self.city, &self.state, &mut errors);
        validate_phone(&self.phone, &mut errors);
        validate_genres(&self.genres, &mut errors);
        validate_link("Website link", &self.website_link, &mut errors);
        validate_link("Facebook link", &self.facebook_link, &mut errors);
        validate_link("Image link", &self.image_link, &mut errors);

        errors
    }

    pub fn genre_list(&self) -> Vec<String> {
        split_genres(&self.genres)
    }
}

/// Show create form fields
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShowForm {
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub venue_id: String,
    #[serde(default)]
    pub starts_at: String,
}

impl ShowForm {
    /// Static field checks; existence of the referenced rows is checked
    /// against the database by the handler.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if uuid::Uuid::parse_str(self.artist_id.trim()).is_err() {
            errors.push("Artist ID must be a valid identifier".to_string());
        }
        if uuid::Uuid::parse_str(self.venue_id.trim()).is_err() {
            errors.push("Venue ID must be a valid identifier".to_string());
        }
        if gigboard_common::datetime::parse_start_time(&self.starts_at).is_none() {
            errors.push("Start time must be a valid date and time".to_string());
        }

        errors
    }
}

/// Search box field, shared by the venue and artist search posts
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// Trimmed value as an optional column: empty input stores NULL
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn validate_name(name: &str, errors: &mut Vec<String>) {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        errors.push("Name is required".to_string());
    } else if trimmed.len() > MAX_NAME_LEN {
        errors.push(format!("Name must be at most {} characters", MAX_NAME_LEN));
    }
}

fn validate_city_state(city: &str, state: &str, errors: &mut Vec<String>) {
    if city.trim().is_empty() {
        errors.push("City is required".to_string());
    }
    let state = state.trim();
    if state.is_empty() {
        errors.push("State is required".to_string());
    } else if !STATES.contains(&state) {
        errors.push(format!("Unknown state: {}", state));
    }
}

fn validate_phone(phone: &str, errors: &mut Vec<String>) {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return;
    }
    let valid = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'));
    if !valid || !trimmed.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Phone may contain only digits, spaces, and + - ( )".to_string());
    }
}

fn validate_genres(genres: &str, errors: &mut Vec<String>) {
    let tokens = split_genres(genres);
    if tokens.is_empty() {
        errors.push("At least one genre is required".to_string());
        return;
    }
    for token in &tokens {
        if !GENRES.contains(&token.as_str()) {
            errors.push(format!("Unknown genre: {}", token));
        }
    }
}

fn validate_link(label: &str, link: &str, errors: &mut Vec<String>) {
    let trimmed = link.trim();
    if trimmed.is_empty() {
        return;
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        errors.push(format!("{} must start with http:// or https://", label));
    } else if trimmed.len() > MAX_LINK_LEN {
        errors.push(format!("{} must be at most {} characters", label, MAX_LINK_LEN));
    }
}

fn split_genres(genres: &str) -> Vec<String> {
    genres
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_venue_form() -> VenueForm {
        VenueForm {
            name: "The Dusty Owl".to_string(),
            city: "Boise".to_string(),
            state: "ID".to_string(),
            address: "100 Main St".to_string(),
            phone: "208-555-0101".to_string(),
            genres: "Jazz, Rock n Roll".to_string(),
            website_link: "https://dustyowl.example".to_string(),
            facebook_link: String::new(),
            image_link: String::new(),
        }
    }

    #[test]
    fn test_valid_venue_form_passes() {
        assert!(valid_venue_form().validate().is_empty());
    }

    #[test]
    fn test_missing_required_fields_all_reported() {
        let errors = VenueForm::default().validate();
        assert!(errors.iter().any(|e| e == "Name is required"));
        assert!(errors.iter().any(|e| e == "City is required"));
        assert!(errors.iter().any(|e| e == "State is required"));
        assert!(errors.iter().any(|e| e == "Address is required"));
        assert!(errors.iter().any(|e| e == "At least one genre is required"));
    }

    #[test]
    fn test_unknown_state_rejected() {
        let mut form = valid_venue_form();
        form.state = "ZZ".to_string();
        let errors = form.validate();
        assert!(errors.iter().any(|e| e.contains("Unknown state")));
    }

    #[test]
    fn test_unknown_genre_rejected() {
        let mut form = valid_venue_form();
        form.genres = "Jazz, Shoegaze".to_string();
        let errors = form.validate();
        assert!(errors.iter().any(|e| e == "Unknown genre: Shoegaze"));
    }

    #[test]
    fn test_phone_charset() {
        let mut form = valid_venue_form();
        form.phone = "call me maybe".to_string();
        assert!(!form.validate().is_empty());

        form.phone = "+1 (208) 555-0101".to_string();
        assert!(form.validate().is_empty());

        // Optional: empty phone is fine
        form.phone = String::new();
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_link_scheme_required() {
        let mut form = valid_venue_form();
        form.website_link = "dustyowl.example".to_string();
        let errors = form.validate();
        assert!(errors.iter().any(|e| e.contains("Website link")));
    }

    #[test]
    fn test_artist_form_has_no_address_requirement() {
        let form = ArtistForm {
            name: "Nightjar".to_string(),
            city: "Seattle".to_string(),
            state: "WA".to_string(),
            genres: "Folk".to_string(),
            ..ArtistForm::default()
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_show_form_validation() {
        let form = ShowForm {
            artist_id: uuid::Uuid::new_v4().to_string(),
            venue_id: uuid::Uuid::new_v4().to_string(),
            starts_at: "2026-09-01T20:00".to_string(),
        };
        assert!(form.validate().is_empty());

        let bad = ShowForm {
            artist_id: "nope".to_string(),
            venue_id: String::new(),
            starts_at: "whenever".to_string(),
        };
        assert_eq!(bad.validate().len(), 3);
    }

    #[test]
    fn test_genre_list_trims_tokens() {
        let mut form = valid_venue_form();
        form.genres = " Jazz ,  Soul ,".to_string();
        assert_eq!(form.genre_list(), vec!["Jazz".to_string(), "Soul".to_string()]);
    }

    #[test]
    fn test_optional_maps_blank_to_none() {
        assert_eq!(optional("  "), None);
        assert_eq!(optional(" x "), Some("x".to_string()));
    }
}
