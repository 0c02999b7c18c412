//! Embedded lexical data for the part-of-speech tagger.
//!
//! Closed-class function words are dropped outright; the adjective list and
//! suffix table separate descriptive tokens from the noun default. All
//! entries are lowercase ASCII; `Tagger::load` rejects anything else.

/// Closed-class words carrying no genre signal: articles, pronouns,
/// prepositions, conjunctions, auxiliaries and the common request verbs
/// that show up in free-text queries ("recommend me some...").
pub(crate) const FUNCTION_WORDS: &[&str] = &[
    // articles & determiners
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "every", "each", "no",
    // pronouns
    "i", "me", "my", "mine", "you", "your", "yours", "he", "him", "his", "she", "her", "hers",
    "it", "its", "we", "us", "our", "they", "them", "their", "something", "anything",
    "who", "whom", "whose", "what", "which",
    // prepositions
    "of", "in", "on", "at", "by", "for", "with", "about", "from", "to", "into", "over",
    "under", "between", "through", "after", "before", "without", "like",
    // conjunctions
    "and", "or", "but", "nor", "so", "yet", "if", "because", "while", "when", "where", "as",
    // auxiliaries & common verbs
    "is", "am", "are", "was", "were", "be", "been", "being", "do", "does", "did", "done",
    "have", "has", "had", "can", "could", "will", "would", "shall", "should", "may", "might",
    "must", "want", "wants", "wanted", "love", "loves", "loved", "enjoy", "enjoyed",
    "watch", "watched", "watching", "recommend", "recommended", "suggest", "show", "find",
    "give", "get", "got", "see", "seen", "need", "needs", "looking",
    // adverbs & particles
    "not", "very", "really", "too", "also", "just", "more", "most", "less", "please",
    "maybe", "perhaps", "quite", "pretty", "kind", "sort",
];

/// Descriptive adjectives common in genre requests. Keywords that double as
/// lexicon entries ("psychological", "supernatural") belong here so they
/// surface ahead of the nouns during resolution.
pub(crate) const ADJECTIVES: &[&str] = &[
    "dark", "light", "scary", "creepy", "spooky", "eerie", "funny", "hilarious", "sad",
    "happy", "romantic", "epic", "gritty", "grim", "bleak", "cute", "wholesome", "violent",
    "bloody", "emotional", "intense", "serious", "classic", "old", "new", "recent", "modern",
    "good", "great", "best", "cool", "weird", "strange", "psychological", "supernatural",
    "magical", "fantastical", "futuristic", "dystopian", "tragic", "comedic", "dramatic",
    "long", "short", "slow", "fast", "popular", "famous", "obscure", "underrated",
];

/// Suffixes that reliably mark adjectives. Deliberately short: broader rules
/// ("-y", "-ic", "-ive") misfile genre nouns such as "fantasy", "music" and
/// "detective".
pub(crate) const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "less", "ish", "able", "ible"];
