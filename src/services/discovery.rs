//! The extraction → resolution → dispatch pipeline behind the discovery
//! endpoints.

use crate::{
    error::AppResult,
    models::MediaResult,
    nlp::Tagger,
    services::{lexicon::Lexicon, providers::MetadataProvider, resolver::resolve_genres},
};

/// Recommend mode: maps free text to genre labels, then fetches the most
/// popular media carrying those genres.
pub async fn recommend_by_text(
    tagger: &Tagger,
    lexicon: &Lexicon,
    provider: &dyn MetadataProvider,
    text: &str,
) -> AppResult<Vec<MediaResult>> {
    let keywords = tagger.extract(text);
    let genres: Vec<String> = resolve_genres(lexicon, keywords.resolution_order())
        .into_iter()
        .map(str::to_string)
        .collect();

    tracing::debug!(
        input = %text,
        adjectives = ?keywords.adjectives,
        nouns = ?keywords.nouns,
        genres = ?genres,
        "Resolved genre filter"
    );

    provider.recommend_by_genres(&genres).await
}

/// Search mode: builds the search phrase from the extracted nouns only and
/// fetches media matching it by title/description.
pub async fn search_by_text(
    tagger: &Tagger,
    provider: &dyn MetadataProvider,
    text: &str,
) -> AppResult<Vec<MediaResult>> {
    let keywords = tagger.extract(text);
    let phrase = keywords.search_phrase();

    tracing::debug!(input = %text, phrase = %phrase, "Built search phrase");

    provider.search_by_phrase(&phrase).await
}
