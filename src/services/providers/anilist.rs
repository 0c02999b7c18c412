/// AniList GraphQL provider
///
/// Issues one POST per operation against the configured endpoint. Responses
/// are shape-validated through the typed structs in `models`; any missing
/// structure (non-2xx status, absent `data.Page.media`) becomes an empty
/// result list rather than an error. Transport failures propagate.
use reqwest::Client as HttpClient;
use serde_json::json;

use crate::{
    error::AppResult,
    models::{GraphQlResponse, MediaResult},
    services::providers::MetadataProvider,
};

const RECOMMEND_PAGE_SIZE: u32 = 10;
const SEARCH_PAGE_SIZE: u32 = 5;

const RECOMMEND_QUERY: &str = r#"
query ($genres: [String], $perPage: Int) {
    Page(page: 1, perPage: $perPage) {
        media (genre_in: $genres, type: ANIME, sort: POPULARITY_DESC) {
            title {
                romaji
                english
            }
            description
            genres
            coverImage {
                large
            }
            siteUrl
            averageScore
        }
    }
}
"#;

const SEARCH_QUERY: &str = r#"
query ($search: String, $perPage: Int) {
    Page(page: 1, perPage: $perPage) {
        media(search: $search, type: ANIME) {
            title {
                romaji
                english
            }
            description
            genres
            coverImage {
                large
            }
            siteUrl
            averageScore
        }
    }
}
"#;

#[derive(Clone)]
pub struct AniListProvider {
    http_client: HttpClient,
    api_url: String,
}

impl AniListProvider {
    pub fn new(api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
        }
    }

    /// Posts one media query and normalizes the page of results.
    async fn fetch_media(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> AppResult<Vec<MediaResult>> {
        let response = self
            .http_client
            .post(&self.api_url)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!(
                %status,
                provider = self.name(),
                "AniList returned non-success status, treating as no results"
            );
            return Ok(Vec::new());
        }

        let body = response.text().await?;
        let parsed: GraphQlResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(error) => {
                tracing::warn!(
                    %error,
                    provider = self.name(),
                    "Malformed AniList response body, treating as no results"
                );
                return Ok(Vec::new());
            }
        };

        Ok(parsed.into_media().into_iter().map(MediaResult::from).collect())
    }
}

#[async_trait::async_trait]
impl MetadataProvider for AniListProvider {
    async fn recommend_by_genres(&self, genres: &[String]) -> AppResult<Vec<MediaResult>> {
        let results = self
            .fetch_media(
                RECOMMEND_QUERY,
                json!({ "genres": genres, "perPage": RECOMMEND_PAGE_SIZE }),
            )
            .await?;

        tracing::info!(
            genres = ?genres,
            results = results.len(),
            provider = self.name(),
            "Recommendation fetch completed"
        );

        Ok(results)
    }

    async fn search_by_phrase(&self, phrase: &str) -> AppResult<Vec<MediaResult>> {
        let results = self
            .fetch_media(
                SEARCH_QUERY,
                json!({ "search": phrase, "perPage": SEARCH_PAGE_SIZE }),
            )
            .await?;

        tracing::info!(
            phrase = %phrase,
            results = results.len(),
            provider = self.name(),
            "Search fetch completed"
        );

        Ok(results)
    }

    fn name(&self) -> &'static str {
        "anilist"
    }
}
