use once_cell::sync::Lazy;
use regex::Regex;

static UNMATCHABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s.,]").expect("static regex"));

/// Matching form of a sentence: only ASCII letters, digits, whitespace,
/// periods and commas survive; whitespace is collapsed and the result is
/// lower-cased.
pub fn normalize_sentence(sentence: &str) -> String {
    let kept = UNMATCHABLE.replace_all(sentence, "");
    kept.split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
        .to_lowercase()
}
