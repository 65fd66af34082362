use serde::Serialize;
use tracing::debug;

use crate::categories::{CategoryRanking, budgeted_summary, rank_by_category, total_words};
use crate::corpus::CueCorpus;
use crate::emit::{SentenceRecord, render_grouped, render_tagged, select_role};
use crate::error::Result;
use crate::normalize::normalize_sentence;
use crate::scoring::{ScoreBreakdown, Scorer};
use crate::segment::segment;
use crate::stats::DocumentStats;
use crate::stopwords::Stopwords;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    pub threshold: f64,
    pub sentences: Vec<SentenceRecord>,
    pub tagged: String,
    pub grouped: String,
}

impl Extraction {
    pub fn accepted_count(&self) -> usize {
        self.sentences
            .iter()
            .filter(|record| record.is_accepted())
            .count()
    }
}

#[derive(Debug, Clone)]
pub struct PreparedDocument {
    pub sentences: Vec<String>,
    pub stats: DocumentStats,
}

#[derive(Debug, Clone, Copy)]
pub struct Extractor<'a> {
    corpus: &'a CueCorpus,
    stopwords: &'a Stopwords,
}

impl<'a> Extractor<'a> {
    pub fn new(corpus: &'a CueCorpus, stopwords: &'a Stopwords) -> Self {
        Self { corpus, stopwords }
    }

    pub fn builtin() -> Result<Extractor<'static>> {
        Ok(Extractor::new(CueCorpus::builtin(), Stopwords::english()?))
    }

    pub fn corpus(&self) -> &'a CueCorpus {
        self.corpus
    }

    pub fn prepare(&self, text: &str) -> PreparedDocument {
        let sentences = segment(text);
        let stats = DocumentStats::compute(&sentences, self.stopwords);
        PreparedDocument { sentences, stats }
    }

    pub fn run(&self, text: &str, threshold: f64) -> Extraction {
        self.run_prepared(&self.prepare(text), threshold)
    }

    pub fn run_prepared(&self, document: &PreparedDocument, threshold: f64) -> Extraction {
        let scorer = Scorer::new(self.corpus, &document.stats);

        let sentences = document
            .sentences
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let normalized = normalize_sentence(text);
                let scores = scorer.score(&normalized);
                let role = select_role(&scores, threshold);
                SentenceRecord {
                    index,
                    text: text.clone(),
                    normalized,
                    scores,
                    role,
                }
            })
            .collect::<Vec<SentenceRecord>>();

        let tagged = render_tagged(&sentences);
        let grouped = render_grouped(&sentences);

        let extraction = Extraction {
            threshold,
            sentences,
            tagged,
            grouped,
        };
        debug!(
            sentences = extraction.sentences.len(),
            accepted = extraction.accepted_count(),
            threshold,
            "extraction complete"
        );
        extraction
    }

    pub fn rank_categories(&self, document: &PreparedDocument) -> CategoryRanking {
        rank_by_category(&document.sentences, self.corpus, &document.stats)
    }

    pub fn category_summary(&self, document: &PreparedDocument) -> String {
        let ranking = self.rank_categories(document);
        budgeted_summary(&ranking, total_words(&document.sentences))
    }

    pub fn explain(&self, document: &PreparedDocument, index: usize) -> Option<ScoreBreakdown> {
        let sentence = document.sentences.get(index)?;
        let scorer = Scorer::new(self.corpus, &document.stats);
        Some(scorer.explain(&normalize_sentence(sentence)))
    }
}

/// Returns `(tagged_stream, grouped_block)` using the built-in corpus and the
/// English stop-word list.
pub fn extract(text: &str, threshold: f64) -> Result<(String, String)> {
    let extraction = Extractor::builtin()?.run(text, threshold);
    Ok((extraction.tagged, extraction.grouped))
}
