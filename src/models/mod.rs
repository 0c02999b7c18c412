use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalized media item returned to the client.
///
/// Field values come verbatim from the provider; only the shape is ours.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaResult {
    /// Romanized title when available, English fallback otherwise.
    pub title: String,
    pub description: Option<String>,
    pub genres: Vec<String>,
    /// Large cover image variant.
    pub cover_image: Option<String>,
    pub site_url: Option<String>,
}

/// Persisted per-user record. The username is the document key; there is no
/// separate internal identifier in the API representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(default)]
    pub favorites: Vec<LibraryEntry>,
    #[serde(default)]
    pub watch_history: Vec<LibraryEntry>,
}

impl UserProfile {
    /// Creates a profile with empty, append-only lists.
    pub fn new(username: String, email: String, preferences: Vec<String>) -> Self {
        Self {
            username,
            email,
            preferences,
            favorites: Vec::new(),
            watch_history: Vec::new(),
        }
    }
}

/// One favorites or watch-history entry. Lists are append-only; the
/// timestamp is assigned server-side at append time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LibraryEntry {
    pub anime_id: i64,
    pub title: String,
    pub added_at: DateTime<Utc>,
}

impl LibraryEntry {
    pub fn new(anime_id: i64, title: String) -> Self {
        Self {
            anime_id,
            title,
            added_at: Utc::now(),
        }
    }
}

// ============================================================================
// AniList GraphQL API Types
// ============================================================================

/// Top-level GraphQL response envelope.
///
/// Every level is optional on purpose: a malformed or partial upstream body
/// must decode to "no results", never to a field-access failure.
#[derive(Debug, Default, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<GraphQlData>,
}

impl GraphQlResponse {
    /// Flattens `data.Page.media`, treating any missing level as empty.
    pub fn into_media(self) -> Vec<AniListMedia> {
        self.data
            .and_then(|data| data.page)
            .and_then(|page| page.media)
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphQlData {
    #[serde(rename = "Page", default)]
    pub page: Option<MediaPage>,
}

#[derive(Debug, Deserialize)]
pub struct MediaPage {
    #[serde(default)]
    pub media: Option<Vec<AniListMedia>>,
}

/// Raw media record from the AniList API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AniListMedia {
    #[serde(default)]
    pub title: Option<AniListTitle>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    #[serde(default)]
    pub cover_image: Option<AniListCoverImage>,
    #[serde(default)]
    pub site_url: Option<String>,
    #[serde(default)]
    pub average_score: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AniListTitle {
    #[serde(default)]
    pub romaji: Option<String>,
    #[serde(default)]
    pub english: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AniListCoverImage {
    #[serde(default)]
    pub large: Option<String>,
}

impl From<AniListMedia> for MediaResult {
    fn from(media: AniListMedia) -> Self {
        let title = media
            .title
            .map(|t| t.romaji.or(t.english).unwrap_or_default())
            .unwrap_or_default();

        MediaResult {
            title,
            description: media.description,
            genres: media.genres.unwrap_or_default(),
            cover_image: media.cover_image.and_then(|c| c.large),
            site_url: media.site_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_media_result_prefers_romaji_title() {
        let media: AniListMedia = serde_json::from_value(json!({
            "title": { "romaji": "Shingeki no Kyojin", "english": "Attack on Titan" },
            "description": "Humanity fights titans",
            "genres": ["Action", "Drama"],
            "coverImage": { "large": "https://img.example/aot.png" },
            "siteUrl": "https://anilist.co/anime/16498"
        }))
        .unwrap();

        let result = MediaResult::from(media);
        assert_eq!(result.title, "Shingeki no Kyojin");
        assert_eq!(result.genres, vec!["Action", "Drama"]);
        assert_eq!(
            result.cover_image.as_deref(),
            Some("https://img.example/aot.png")
        );
    }

    #[test]
    fn test_media_result_falls_back_to_english_title() {
        let media: AniListMedia = serde_json::from_value(json!({
            "title": { "romaji": null, "english": "Cowboy Bebop" }
        }))
        .unwrap();

        let result = MediaResult::from(media);
        assert_eq!(result.title, "Cowboy Bebop");
        assert_eq!(result.description, None);
        assert!(result.genres.is_empty());
    }

    #[test]
    fn test_media_result_tolerates_missing_fields() {
        let media: AniListMedia = serde_json::from_value(json!({})).unwrap();
        let result = MediaResult::from(media);
        assert_eq!(result.title, "");
        assert_eq!(result.cover_image, None);
        assert_eq!(result.site_url, None);
    }

    #[test]
    fn test_graphql_response_flattens_media() {
        let response: GraphQlResponse = serde_json::from_value(json!({
            "data": { "Page": { "media": [ { "siteUrl": "https://anilist.co/anime/1" } ] } }
        }))
        .unwrap();
        assert_eq!(response.into_media().len(), 1);
    }

    #[test]
    fn test_graphql_response_malformed_shapes_are_empty() {
        for body in [
            json!({}),
            json!({ "data": null }),
            json!({ "data": {} }),
            json!({ "data": { "Page": null } }),
            json!({ "data": { "Page": {} } }),
            json!({ "data": { "Page": { "media": null } } }),
        ] {
            let response: GraphQlResponse = serde_json::from_value(body).unwrap();
            assert!(response.into_media().is_empty());
        }
    }

    #[test]
    fn test_user_profile_serializes_without_internal_id() {
        let profile = UserProfile::new(
            "raphael".to_string(),
            "raphael@example.com".to_string(),
            vec!["Action".to_string()],
        );
        let value = serde_json::to_value(&profile).unwrap();
        let object = value.as_object().unwrap();
        for key in ["username", "email", "preferences", "favorites", "watch_history"] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("_id"));
    }

    #[test]
    fn test_library_entry_round_trips() {
        let entry = LibraryEntry::new(16498, "Shingeki no Kyojin".to_string());
        let json = serde_json::to_string(&entry).unwrap();
        let back: LibraryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
