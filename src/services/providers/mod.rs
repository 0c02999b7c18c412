/// Anime metadata provider abstraction
///
/// This module keeps the upstream metadata source pluggable. The production
/// implementation talks to the AniList GraphQL API; tests substitute
/// in-memory stubs. One logical request maps to one outbound call: no
/// fan-out, no batching, no caching of provider responses.
use crate::{error::AppResult, models::MediaResult};

pub mod anilist;

pub use anilist::AniListProvider;

/// Trait for anime metadata providers
///
/// Both operations normalize upstream records into [`MediaResult`] and
/// coerce an empty or malformed upstream response into an empty list.
/// Transport failures propagate as errors; there is no retry layer.
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch media filtered by genre, most popular first.
    ///
    /// Callers guarantee a non-empty genre list (the resolver substitutes a
    /// default pair before dispatch), so the provider never has to
    /// distinguish "no filter" from "no results".
    async fn recommend_by_genres(&self, genres: &[String]) -> AppResult<Vec<MediaResult>>;

    /// Fetch media matching a free-text phrase by title/description search.
    async fn search_by_phrase(&self, phrase: &str) -> AppResult<Vec<MediaResult>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
