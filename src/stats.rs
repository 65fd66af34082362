//! Per-document TF·IDF weights.
//!
//! The document's sentences are joined with single spaces and the joined text
//! is tokenised and re-split into sentences. For every distinct non-stop-word
//! token `w` (lower-cased):
//!
//! - `tf(w)` counts non-overlapping occurrences of `w` as a substring of the
//!   lower-cased joined text,
//! - `df(w)` counts re-split sentences containing `w` as a substring, with
//!   zero replaced by `0.5`,
//! - `weight(w) = tf(w) * ln(N / df(w))` where `N` is the re-split sentence
//!   count.
//!
//! Substring counting is intentional: `appeal` also counts inside `appeals`.

use std::collections::{BTreeSet, HashMap};

use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

use crate::segment::split_sentences;
use crate::stopwords::Stopwords;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentStats {
    weights: HashMap<String, f64>,
    sentence_count: usize,
}

impl DocumentStats {
    pub fn compute<S: AsRef<str>>(sentences: &[S], stopwords: &Stopwords) -> Self {
        let joined = sentences
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(" ");
        let lowered = joined.to_lowercase();
        let resplit = split_sentences(&joined)
            .into_iter()
            .map(|sentence| sentence.to_lowercase())
            .collect::<Vec<String>>();
        let sentence_count = resplit.len();

        let tokens = joined
            .unicode_words()
            .map(str::to_lowercase)
            .filter(|token| !stopwords.contains(token))
            .collect::<BTreeSet<String>>();

        let mut weights = HashMap::with_capacity(tokens.len());
        for token in tokens {
            let tf = lowered.matches(token.as_str()).count() as f64;
            let df = match resplit
                .iter()
                .filter(|sentence| sentence.contains(token.as_str()))
                .count()
            {
                0 => 0.5,
                count => count as f64,
            };
            let weight = tf * (sentence_count as f64 / df).ln();
            weights.insert(token, weight);
        }

        trace!(
            tokens = weights.len(),
            sentences = sentence_count,
            "computed document statistics"
        );

        Self {
            weights,
            sentence_count,
        }
    }

    pub fn weight(&self, token: &str) -> f64 {
        self.weights
            .get(&token.to_lowercase())
            .copied()
            .unwrap_or(0.0)
    }

    /// Sum of the weights of the whitespace-separated words of a sentence.
    pub fn sentence_mass(&self, sentence: &str) -> f64 {
        sentence.split_whitespace().map(|word| self.weight(word)).sum()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights
            .iter()
            .map(|(token, weight)| (token.as_str(), *weight))
    }
}
