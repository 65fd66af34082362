use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

pub const ABBREVIATIONS: [&str; 24] = [
    "e.g.", "i.e.", "etc.", "vs.", "cf.", "Dr.", "Mr.", "Ms.", "Mrs.", "Co.", "Inc.", "Ltd.",
    "Corp.", "Prof.", "Sr.", "Jr.", "A.M.", "P.M.", "St.", "no.", "No.", "E.g.", "Nos.", "v.",
];

static CONTROL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x00-\x1F\x7F-\x9F]").expect("static regex"));

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

static LIST_NUMBERING: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\.\s").expect("static regex"));

// A trailing run of initials such as `D.S.`, unless it is the `, J.` of a
// signature.
static TRAILING_INITIALS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[^,]\s)(?:[A-Z]\.)+$").expect("static regex"));

static JUDICIAL_SIGNATURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.*\b[A-Z]\.[A-Z]\.\s[A-Z][a-z]+,\s[JC]\.?$").expect("static regex")
});

/// Control characters become spaces, whitespace runs collapse, and list
/// markers of the form `12. ` are deleted.
pub fn clean_text(text: &str) -> String {
    let text = CONTROL_CHARS.replace_all(text, " ");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    LIST_NUMBERING.replace_all(&text, "").into_owned()
}

/// Splits on sentence boundaries. A boundary after initials followed by a
/// capitalised word is not a boundary, so `A.K. Sharma` stays whole.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences: Vec<String> = Vec::new();

    for piece in text
        .unicode_sentences()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
    {
        let continues_name = starts_capitalised(piece)
            && sentences
                .last()
                .is_some_and(|previous| ends_with_initials(previous));

        match sentences.last_mut() {
            Some(previous) if continues_name => {
                previous.push(' ');
                previous.push_str(piece);
            }
            _ => sentences.push(piece.to_string()),
        }
    }

    sentences
}

fn ends_with_initials(piece: &str) -> bool {
    TRAILING_INITIALS.is_match(piece)
}

fn starts_capitalised(piece: &str) -> bool {
    piece.chars().next().is_some_and(char::is_uppercase)
}

pub fn ends_with_abbreviation(sentence: &str) -> bool {
    ABBREVIATIONS.iter().any(|abbr| sentence.ends_with(abbr))
}

pub fn is_judicial_signature(sentence: &str) -> bool {
    JUDICIAL_SIGNATURE.is_match(sentence)
}

/// Re-joins candidates that end in a listed abbreviation or a judicial
/// signature with whatever follows them.
pub fn merge_over_splits<S: AsRef<str>>(candidates: &[S]) -> Vec<String> {
    let mut merged = Vec::with_capacity(candidates.len());
    let mut buffer = String::new();

    for candidate in candidates {
        let sentence = candidate.as_ref().trim();

        if ends_with_abbreviation(sentence) || is_judicial_signature(sentence) {
            buffer.push(' ');
            buffer.push_str(sentence);
        } else if !buffer.is_empty() {
            buffer.push(' ');
            buffer.push_str(sentence);
            merged.push(buffer.trim().to_string());
            buffer.clear();
        } else {
            merged.push(sentence.to_string());
        }
    }

    if !buffer.is_empty() {
        merged.push(buffer.trim().to_string());
    }

    merged
}

pub fn segment(text: &str) -> Vec<String> {
    let cleaned = clean_text(text);
    let candidates = split_sentences(&cleaned);
    merge_over_splits(&candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_replaces_controls_and_list_markers() {
        let raw = "1. The appellant\tfiled\r\n\r\nthe suit.\u{0085}2. The court heard it.";
        assert_eq!(
            clean_text(raw),
            "The appellant filed the suit. The court heard it."
        );
    }

    #[test]
    fn clean_text_eats_trailing_year_markers() {
        // A year that closes a sentence looks like a list marker.
        assert_eq!(
            clean_text("Decided in 2019. The appeal followed."),
            "Decided in The appeal followed."
        );
    }

    #[test]
    fn split_sentences_trims_pieces() {
        let sentences = split_sentences("The appellant filed the case. The weather was pleasant.");
        assert_eq!(
            sentences,
            vec!["The appellant filed the case.", "The weather was pleasant."]
        );
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn split_sentences_keeps_initials_with_the_following_name() {
        assert_eq!(
            split_sentences("The suit filed by A.K. Sharma was decreed. The appeal failed."),
            vec!["The suit filed by A.K. Sharma was decreed.", "The appeal failed."]
        );
        assert_eq!(
            split_sentences("Judgment delivered by D.S. Sinha, J. The appeal is allowed."),
            vec!["Judgment delivered by D.S. Sinha, J.", "The appeal is allowed."]
        );
    }

    #[test]
    fn split_sentences_still_breaks_after_lowercase_words() {
        assert_eq!(
            split_sentences("It named the appellant. The court agreed."),
            vec!["It named the appellant.", "The court agreed."]
        );
        assert!(!ends_with_initials("Sinha, J."));
        assert!(ends_with_initials("by D.S."));
        assert!(ends_with_initials("U.P."));
    }

    #[test]
    fn merge_joins_listed_abbreviations_with_successor() {
        let merged = merge_over_splits(&[
            "The suit was filed against Mr.",
            "Sharma in Delhi.",
            "It was dismissed.",
        ]);
        assert_eq!(
            merged,
            vec!["The suit was filed against Mr. Sharma in Delhi.", "It was dismissed."]
        );
    }

    #[test]
    fn merge_chains_consecutive_abbreviations() {
        let merged = merge_over_splits(&["See Smith v.", "Jones Co.", "Ltd. was the respondent."]);
        assert_eq!(merged, vec!["See Smith v. Jones Co. Ltd. was the respondent."]);
    }

    #[test]
    fn merge_joins_judicial_signature_with_successor() {
        assert!(is_judicial_signature("Judgment delivered by D.S. Sinha, J."));
        assert!(is_judicial_signature("Per A.K. Patnaik, C"));
        assert!(!is_judicial_signature("Sinha, J."));

        let merged = merge_over_splits(&[
            "Judgment delivered by D.S. Sinha, J.",
            "The appeal is allowed.",
        ]);
        assert_eq!(
            merged,
            vec!["Judgment delivered by D.S. Sinha, J. The appeal is allowed."]
        );
    }

    #[test]
    fn abbreviation_inside_open_buffer_is_appended_once() {
        let merged = merge_over_splits(&[
            "The suit against Mr.",
            "Rao and Co.",
            "Ltd. was filed.",
            "It was dismissed.",
        ]);
        assert_eq!(
            merged,
            vec!["The suit against Mr. Rao and Co. Ltd. was filed.", "It was dismissed."]
        );
        assert_eq!(merged[0].matches("Rao and Co.").count(), 1);
    }

    #[test]
    fn merge_flushes_residual_buffer() {
        let merged = merge_over_splits(&["The order concerns plot No."]);
        assert_eq!(merged, vec!["The order concerns plot No."]);
    }

    #[test]
    fn unlisted_abbreviation_does_not_merge() {
        let sentences = segment("The order was dated 4 Jan. The next sentence follows.");
        assert_eq!(
            sentences,
            vec!["The order was dated 4 Jan.", "The next sentence follows."]
        );
    }

    #[test]
    fn segment_merges_split_after_honorific() {
        let sentences = segment("The suit was filed against Mr. Sharma in Delhi. It was dismissed.");
        assert_eq!(
            sentences,
            vec!["The suit was filed against Mr. Sharma in Delhi.", "It was dismissed."]
        );
    }

    #[test]
    fn segment_joins_judicial_signature_with_successor() {
        assert_eq!(
            segment("Judgment delivered by D.S. Sinha, J. The appeal is allowed."),
            vec!["Judgment delivered by D.S. Sinha, J. The appeal is allowed."]
        );
        assert_eq!(
            segment("The appeal was heard by A.K. Patnaik, J. It was dismissed."),
            vec!["The appeal was heard by A.K. Patnaik, J. It was dismissed."]
        );
    }

    #[test]
    fn empty_input_has_no_sentences() {
        assert!(segment("").is_empty());
        assert!(segment(" \n\t ").is_empty());
    }
}
