//! Keyword-to-genre resolution.

use crate::services::lexicon::{Lexicon, DEFAULT_GENRES};

/// Resolves an ordered keyword sequence into genre labels.
///
/// Each keyword that hits the lexicon appends its genre; duplicates are
/// permitted and never filtered. An empty result is replaced by the default
/// pair, so the returned sequence is never empty. Pure function: the same
/// keyword sequence always yields the same output.
pub fn resolve_genres<'a, I>(lexicon: &Lexicon, keywords: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut genres: Vec<&'static str> = keywords
        .into_iter()
        .filter_map(|keyword| lexicon.lookup(keyword))
        .collect();

    if genres.is_empty() {
        genres.extend(DEFAULT_GENRES);
    }

    genres
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_keyword_resolves_to_action() {
        let genres = resolve_genres(&Lexicon::new(), ["action"]);
        assert!(genres.contains(&"Action"));
    }

    #[test]
    fn test_no_match_falls_back_to_default_pair() {
        let genres = resolve_genres(&Lexicon::new(), ["xyzzy"]);
        assert_eq!(genres, vec!["Action", "Adventure"]);
    }

    #[test]
    fn test_empty_keywords_fall_back_to_default_pair() {
        let genres = resolve_genres(&Lexicon::new(), std::iter::empty());
        assert_eq!(genres, vec!["Action", "Adventure"]);
    }

    #[test]
    fn test_duplicates_are_preserved_in_order() {
        let genres = resolve_genres(&Lexicon::new(), ["science", "fiction", "magic"]);
        assert_eq!(genres, vec!["Sci-Fi", "Sci-Fi", "Magic"]);
    }

    #[test]
    fn test_unmatched_keywords_are_skipped() {
        let genres = resolve_genres(&Lexicon::new(), ["dark", "fantasy", "magic"]);
        assert_eq!(genres, vec!["Fantasy", "Magic"]);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let lexicon = Lexicon::new();
        let keywords = ["dark", "fantasy", "magic"];
        let first = resolve_genres(&lexicon, keywords);
        let second = resolve_genres(&lexicon, keywords);
        assert_eq!(first, second);
    }
}
