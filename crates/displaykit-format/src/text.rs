//! Text case conversion, initials extraction, and orphan-word prevention.

use std::sync::LazyLock;

use regex::Regex;

/// Honorific titles stripped before initials extraction, matched as whole
/// words with an optional trailing period.
static HONORIFICS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(Mrs|Mr|Ms|Dr|Jr|Sr|Prof|Hon|Snr|Jnr|St)\b\.?")
        .expect("invalid honorifics regex")
});

/// Words never capitalized mid-title (Chicago Manual of Style).
const TITLE_EXCEPTIONS: [&str; 26] = [
    "a", "an", "to", "the", "for", "and", "nor", "but", "or", "yet", "so", "in", "is", "it",
    "than", "on", "at", "with", "under", "above", "from", "of", "although", "because", "since",
    "unless",
];

/// Stop-words dropped when extracting initials.
const INITIALS_STOP_WORDS: [&str; 2] = ["the", "third"];

/// Options for [`format_initials`].
#[derive(Debug, Clone, Copy)]
pub struct InitialsOptions {
    /// Maximum number of initials kept.
    pub length: usize,
}

impl Default for InitialsOptions {
    fn default() -> Self {
        Self { length: 2 }
    }
}

impl InitialsOptions {
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }
}

/// Extracts uppercase initials from a name, ignoring honorific titles and
/// the stop-words "the" and "third".
///
/// ```
/// use displaykit_format::{format_initials, InitialsOptions};
///
/// let opts = InitialsOptions::default();
/// assert_eq!(format_initials("Dr. Robotnik", &opts), "R");
/// assert_eq!(format_initials("ada lovelace", &opts), "AL");
/// assert_eq!(format_initials("", &opts), "");
/// ```
pub fn format_initials(text: &str, options: &InitialsOptions) -> String {
    if text.is_empty() {
        return String::new();
    }

    let stripped = HONORIFICS.replace_all(text, " ");
    stripped
        .split_whitespace()
        .filter(|word| !INITIALS_STOP_WORDS.contains(&word.to_lowercase().as_str()))
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(options.length)
        .collect()
}

/// Converts a string to title case following the Chicago Manual of Style:
/// every word is capitalized except a fixed set of short conjunctions,
/// prepositions, and articles, which are lowercased — unless they are the
/// first or last word.
///
/// Idempotent: applying it twice gives the same result as applying it once.
///
/// ```
/// use displaykit_format::format_title;
///
/// assert_eq!(
///     format_title("the quick brown fox jumps over the lazy dog"),
///     "The Quick Brown Fox Jumps Over the Lazy Dog"
/// );
/// ```
pub fn format_title(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let words: Vec<&str> = text.split(' ').collect();
    let last = words.len() - 1;

    words
        .iter()
        .enumerate()
        .map(|(index, word)| {
            let lower = word.to_lowercase();
            if index == 0 || index == last || !TITLE_EXCEPTIONS.contains(&lower.as_str()) {
                capitalize_first(word)
            } else {
                lower
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalizes the first character of each sentence, preserving paragraph
/// breaks (`"\n\n"`) and sentence separators (`". "`).
pub fn format_sentence_case(text: &str) -> String {
    text.split("\n\n")
        .map(|paragraph| {
            paragraph
                .split(". ")
                .map(capitalize_first)
                .collect::<Vec<_>>()
                .join(". ")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Replaces the last space with a `&nbsp;` entity so the final word is
/// never orphaned on its own line. No-op when there is no space.
pub fn format_text_wrap(text: &str) -> String {
    match text.rfind(' ') {
        Some(pos) => format!("{}&nbsp;{}", &text[..pos], &text[pos + 1..]),
        None => text.to_string(),
    }
}

/// Uppercases the first character, preserving the rest of the string.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
