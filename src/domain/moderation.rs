//! Profanity filter applied to chirp bodies before they are stored.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Replacement for every denylisted word.
pub const MASK: &str = "****";

/// Lower-case words that are masked out of chirps.
static DENYLIST: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HashSet::from(["kerfuffle", "sharbert", "fornax"]));

/// Masks denylisted words in `text`.
///
/// The input is split on runs of whitespace and rejoined with single spaces.
/// A token is masked only when its lower-cased form equals a denylisted word,
/// so a word with punctuation attached (`"fornax!"`) passes through unchanged.
///
/// # Example
///
/// ```
/// use chirpy::domain::moderation::censor;
///
/// assert_eq!(censor("what a Kerfuffle today"), "what a **** today");
/// ```
pub fn censor(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            if DENYLIST.contains(word.to_lowercase().as_str()) {
                MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
