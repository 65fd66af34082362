use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::corpus::CueCorpus;
use crate::normalize::normalize_sentence;
use crate::role::{Category, Role};
use crate::scoring::Scorer;
use crate::segment::split_sentences;
use crate::stats::DocumentStats;

pub const MAX_SUMMARY_WORDS: usize = 4096;

pub const SUMMARY_PERCENT: usize = 34;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSentence {
    pub text: String,
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryRanking {
    lists: [Vec<RankedSentence>; 4],
}

#[derive(Debug, Serialize)]
pub struct CategoryDump<'a> {
    #[serde(rename = "Introduction")]
    introduction: Vec<&'a str>,
    #[serde(rename = "Context")]
    context: Vec<&'a str>,
    #[serde(rename = "Analysis")]
    analysis: Vec<&'a str>,
    #[serde(rename = "Conclusion")]
    conclusion: Vec<&'a str>,
}

impl CategoryRanking {
    pub fn get(&self, category: Category) -> &[RankedSentence] {
        &self.lists[slot(category)]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[RankedSentence])> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    pub fn dump(&self) -> CategoryDump<'_> {
        let texts = |category| {
            self.get(category)
                .iter()
                .map(|ranked| ranked.text.as_str())
                .collect::<Vec<&str>>()
        };
        CategoryDump {
            introduction: texts(Category::Introduction),
            context: texts(Category::Context),
            analysis: texts(Category::Analysis),
            conclusion: texts(Category::Conclusion),
        }
    }
}

fn slot(category: Category) -> usize {
    category as usize
}

pub fn rank_by_category<S: AsRef<str>>(
    sentences: &[S],
    corpus: &CueCorpus,
    stats: &DocumentStats,
) -> CategoryRanking {
    let scorer = Scorer::new(corpus, stats);
    let mut ranking = CategoryRanking::default();

    for piece in sentences
        .iter()
        .flat_map(|sentence| split_sentences(sentence.as_ref()))
    {
        let normalized = normalize_sentence(&piece);
        let counts = scorer.count_matches(&normalized);
        let mass = stats.sentence_mass(&normalized);

        let mut per_category = [0_usize; 4];
        for role in Role::ALL {
            per_category[slot(role.category())] += counts[role.index()];
        }

        for category in Category::ALL {
            ranking.lists[slot(category)].push(RankedSentence {
                text: piece.clone(),
                score: per_category[slot(category)] as f64 + mass,
            });
        }
    }

    for list in &mut ranking.lists {
        list.sort_by(|left, right| right.score.total_cmp(&left.score));
    }

    ranking
}

pub fn total_words<S: AsRef<str>>(sentences: &[S]) -> usize {
    sentences
        .iter()
        .map(|sentence| sentence.as_ref().split_whitespace().count())
        .sum()
}

pub fn summary_word_budget(total_words: usize) -> usize {
    (total_words * SUMMARY_PERCENT / 100).min(MAX_SUMMARY_WORDS)
}

/// Picks sentences category by category until each category's allotment of
/// the budget is reached. The running word count is shared across
/// categories and the check runs after a sentence is taken, so every
/// non-empty category contributes at least one unused sentence.
pub fn budgeted_summary(ranking: &CategoryRanking, total_words: usize) -> String {
    let budget = summary_word_budget(total_words);
    let mut summary: Vec<&str> = Vec::new();
    let mut used: HashSet<&str> = HashSet::new();
    let mut word_count = 0_usize;

    for (category, ranked) in ranking.iter() {
        let allotment = category.budget_percent() * budget / 100;

        for candidate in ranked {
            if !used.insert(candidate.text.as_str()) {
                continue;
            }
            summary.push(&candidate.text);
            word_count += candidate.text.split_whitespace().count();
            if word_count >= allotment {
                break;
            }
        }
    }

    debug!(
        budget,
        words = word_count,
        sentences = summary.len(),
        "budgeted summary assembled"
    );
    summary.join(" ")
}
