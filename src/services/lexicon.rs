//! Static keyword-to-genre lookup table.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Fallback pair used whenever no keyword resolves to a genre, so the
/// provider never receives an empty genre filter (which it would read as
/// "no constraint" rather than "no results").
pub const DEFAULT_GENRES: [&str; 2] = ["Action", "Adventure"];

/// Keyword → canonical genre label. Many-to-one: several keywords may name
/// the same genre. Keys are lowercase; lookups are exact-match only.
const ENTRIES: &[(&str, &str)] = &[
    ("action", "Action"),
    ("adventure", "Adventure"),
    ("comedy", "Comedy"),
    ("drama", "Drama"),
    ("fantasy", "Fantasy"),
    ("horror", "Horror"),
    ("romance", "Romance"),
    ("scifi", "Sci-Fi"),
    ("science", "Sci-Fi"),
    ("fiction", "Sci-Fi"),
    ("slice", "Slice of Life"),
    ("life", "Slice of Life"),
    ("sports", "Sports"),
    ("thriller", "Thriller"),
    ("mystery", "Mystery"),
    ("psychological", "Psychological"),
    ("supernatural", "Supernatural"),
    ("magic", "Magic"),
];

static KEYWORD_TO_GENRE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ENTRIES.iter().copied().collect());

/// Read-only genre lexicon, built once at startup and shared across
/// requests without locking.
#[derive(Debug, Clone, Default)]
pub struct Lexicon;

impl Lexicon {
    pub fn new() -> Self {
        Self
    }

    /// Exact-match lookup of a lowercase keyword. No stemming, no fuzzy
    /// matching, no multi-word phrases.
    pub fn lookup(&self, keyword: &str) -> Option<&'static str> {
        KEYWORD_TO_GENRE.get(keyword).copied()
    }
}
