//! Keyword extraction from free-text genre and search queries.
//!
//! The tagger classifies each token as adjective, noun or other, and the
//! extractor partitions the adjectives and nouns in input order. It is an
//! in-process component: loaded once at startup, shared read-only across
//! requests, and a load failure aborts the process before serving.

use std::collections::HashSet;

use regex::Regex;

mod wordlists;

use wordlists::{ADJECTIVES, ADJECTIVE_SUFFIXES, FUNCTION_WORDS};

/// Part-of-speech classification for a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Adjective,
    Noun,
    Other,
}

/// Adjectives and nouns extracted from one query, each in input order.
///
/// Tokens are lowercase-normalized and never deduplicated; everything tagged
/// `Other` has already been discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keywords {
    pub adjectives: Vec<String>,
    pub nouns: Vec<String>,
}

impl Keywords {
    /// Keywords in the order the genre resolver consumes them:
    /// all adjectives first, then all nouns.
    pub fn resolution_order(&self) -> impl Iterator<Item = &str> {
        self.adjectives
            .iter()
            .chain(self.nouns.iter())
            .map(String::as_str)
    }

    /// Free-text search phrase built from the nouns only.
    ///
    /// An adjective-only query therefore yields an empty phrase.
    pub fn search_phrase(&self) -> String {
        self.nouns.join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.adjectives.is_empty() && self.nouns.is_empty()
    }
}

/// Part-of-speech tagger backed by embedded word lists.
///
/// Classification policy: closed-class function words are `Other`, listed or
/// suffix-matched descriptive words are `Adjective`, and any remaining open
/// class token defaults to `Noun`. Unknown words ("xyzzy") tag as nouns and
/// simply fail the lexicon lookup downstream.
pub struct Tagger {
    token_pattern: Regex,
    function_words: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
}

impl Tagger {
    /// Builds the tagger from its embedded data.
    ///
    /// Fails only on malformed embedded data, which is a fatal startup
    /// condition rather than a per-request error.
    pub fn load() -> anyhow::Result<Self> {
        let token_pattern = Regex::new(r"[\p{L}][\p{L}']*")?;

        for word in FUNCTION_WORDS.iter().chain(ADJECTIVES.iter()) {
            if !word.chars().all(|c| c.is_ascii_lowercase() || c == '\'') {
                anyhow::bail!("malformed tagger word list entry: {word:?}");
            }
        }

        Ok(Self {
            token_pattern,
            function_words: FUNCTION_WORDS.iter().copied().collect(),
            adjectives: ADJECTIVES.iter().copied().collect(),
        })
    }

    /// Classifies a single lowercase token.
    pub fn tag(&self, token: &str) -> PosTag {
        if self.function_words.contains(token) {
            return PosTag::Other;
        }
        if self.adjectives.contains(token) {
            return PosTag::Adjective;
        }
        // Suffix rules only fire on words long enough to have a real stem.
        if ADJECTIVE_SUFFIXES
            .iter()
            .any(|suffix| token.len() > suffix.len() + 2 && token.ends_with(suffix))
        {
            return PosTag::Adjective;
        }
        PosTag::Noun
    }

    /// Extracts adjectives and nouns from arbitrary UTF-8 text.
    ///
    /// Empty input yields two empty sequences; that is not an error.
    pub fn extract(&self, text: &str) -> Keywords {
        let mut keywords = Keywords::default();

        for token_match in self.token_pattern.find_iter(text) {
            let token = token_match.as_str().to_lowercase();
            match self.tag(&token) {
                PosTag::Adjective => keywords.adjectives.push(token),
                PosTag::Noun => keywords.nouns.push(token),
                PosTag::Other => {}
            }
        }

        keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagger() -> Tagger {
        Tagger::load().expect("tagger loads from embedded data")
    }

    #[test]
    fn test_extract_partitions_adjectives_and_nouns() {
        let keywords = tagger().extract("dark fantasy magic");
        assert_eq!(keywords.adjectives, vec!["dark"]);
        assert_eq!(keywords.nouns, vec!["fantasy", "magic"]);
    }

    #[test]
    fn test_extract_preserves_input_order_without_dedup() {
        let keywords = tagger().extract("magic action magic");
        assert_eq!(keywords.nouns, vec!["magic", "action", "magic"]);
    }

    #[test]
    fn test_extract_lowercases_tokens() {
        let keywords = tagger().extract("Dark FANTASY");
        assert_eq!(keywords.adjectives, vec!["dark"]);
        assert_eq!(keywords.nouns, vec!["fantasy"]);
    }

    #[test]
    fn test_extract_discards_function_words() {
        let keywords = tagger().extract("the of and is very");
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_extract_empty_input_is_not_an_error() {
        let keywords = tagger().extract("");
        assert!(keywords.is_empty());
        assert_eq!(keywords.search_phrase(), "");
    }

    #[test]
    fn test_resolution_order_puts_adjectives_first() {
        let keywords = tagger().extract("fantasy with dark magic");
        let ordered: Vec<&str> = keywords.resolution_order().collect();
        assert_eq!(ordered, vec!["dark", "fantasy", "magic"]);
    }

    #[test]
    fn test_search_phrase_uses_nouns_only() {
        let keywords = tagger().extract("dark gritty thriller anime");
        assert_eq!(keywords.search_phrase(), "thriller anime");

        let adjectives_only = tagger().extract("dark gritty");
        assert_eq!(adjectives_only.search_phrase(), "");
    }

    #[test]
    fn test_suffix_rules_tag_adjectives() {
        let t = tagger();
        assert_eq!(t.tag("mysterious"), PosTag::Adjective);
        assert_eq!(t.tag("suspenseful"), PosTag::Adjective);
        // Short words never match a suffix rule.
        assert_eq!(t.tag("dish"), PosTag::Noun);
        assert_eq!(t.tag("table"), PosTag::Noun);
    }

    #[test]
    fn test_unknown_tokens_default_to_noun() {
        assert_eq!(tagger().tag("xyzzy"), PosTag::Noun);
    }
}
