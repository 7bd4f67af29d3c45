use std::collections::HashSet;

use lazy_static::lazy_static;

/// Terms at or below this length are dropped
pub const MIN_TERM_LEN: usize = 2;

/// Common English function words excluded from scoring.
/// Membership is fixed; changing it changes every score.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he",
    "in", "is", "it", "its", "of", "on", "that", "the", "to", "was", "will", "with",
    "this", "but", "they", "have", "had", "what", "when", "where", "who",
    "which", "why", "how", "all", "each", "every", "both", "few", "more", "most",
    "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
    "than", "too", "very", "can", "just", "should", "now",
];

lazy_static! {
    static ref STOP_WORD_SET: HashSet<&'static str> = STOP_WORDS.iter().copied().collect();
}

/// Check whether a word is in the stop-word set
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Lowercase the text and turn everything except `[a-z0-9]` into single spaces
///
/// # Arguments
/// * `text` - raw text
///
/// # Returns
/// * `String` - words separated by exactly one space, no leading/trailing space
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }
    out
}

/// Split text into scoring terms
///
/// Keeps a word iff it is longer than two characters and not a stop word.
/// Empty input gives an empty sequence.
///
/// # Examples
/// ```
/// use lexical_fit::tokenize;
/// assert_eq!(tokenize("Rust, C++ & Go developer!"), vec!["rust", "developer"]);
/// assert!(tokenize("I am at it").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|word| word.len() > MIN_TERM_LEN && !is_stop_word(word))
        .map(str::to_string)
        .collect()
}
