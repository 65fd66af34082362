//! Per-sentence role scoring.
//!
//! For every role, each cue phrase contained in the normalized sentence adds
//! `1 + weight(phrase)`. For each anchor contained in the sentence, every
//! follower found in the text after the anchor's first occurrence adds
//! `1 + weight(follower)`. Matching is substring containment, so a phrase
//! counts once however often it occurs.

use serde::Serialize;

use crate::corpus::CueCorpus;
use crate::role::Role;
use crate::stats::DocumentStats;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RoleScores([f64; Role::COUNT]);

impl RoleScores {
    pub fn get(&self, role: Role) -> f64 {
        self.0[role.index()]
    }

    pub fn add(&mut self, role: Role, amount: f64) {
        self.0[role.index()] += amount;
    }

    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(0.0, f64::max)
    }

    /// Arg-max role; ties go to the earliest role in canonical order.
    pub fn best(&self) -> (Role, f64) {
        let mut best = (Role::Fact, self.get(Role::Fact));
        for role in Role::ALL.into_iter().skip(1) {
            let score = self.get(role);
            if score > best.1 {
                best = (role, score);
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, f64)> + '_ {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CueMatch {
    Phrase {
        role: Role,
        phrase: String,
        contribution: f64,
    },
    Pair {
        role: Role,
        anchor: String,
        follower: String,
        contribution: f64,
    },
}

impl CueMatch {
    pub fn role(&self) -> Role {
        match self {
            Self::Phrase { role, .. } | Self::Pair { role, .. } => *role,
        }
    }

    pub fn contribution(&self) -> f64 {
        match self {
            Self::Phrase { contribution, .. } | Self::Pair { contribution, .. } => *contribution,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub scores: RoleScores,
    pub matches: Vec<CueMatch>,
}

#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    corpus: &'a CueCorpus,
    stats: &'a DocumentStats,
}

impl<'a> Scorer<'a> {
    pub fn new(corpus: &'a CueCorpus, stats: &'a DocumentStats) -> Self {
        Self { corpus, stats }
    }

    pub fn score(&self, normalized: &str) -> RoleScores {
        let mut scores = RoleScores::default();
        self.visit_matches(normalized, |role, matched| {
            scores.add(role, matched.contribution);
        });
        scores
    }

    pub fn explain(&self, normalized: &str) -> ScoreBreakdown {
        let mut scores = RoleScores::default();
        let mut matches = Vec::new();
        self.visit_matches(normalized, |role, matched| {
            scores.add(role, matched.contribution);
            matches.push(match matched.anchor {
                None => CueMatch::Phrase {
                    role,
                    phrase: matched.cue.to_string(),
                    contribution: matched.contribution,
                },
                Some(anchor) => CueMatch::Pair {
                    role,
                    anchor: anchor.to_string(),
                    follower: matched.cue.to_string(),
                    contribution: matched.contribution,
                },
            });
        });
        ScoreBreakdown { scores, matches }
    }

    /// Unweighted match counts per role (each phrase or follower counts 1).
    pub fn count_matches(&self, normalized: &str) -> [usize; Role::COUNT] {
        let mut counts = [0_usize; Role::COUNT];
        self.visit_matches(normalized, |role, _| counts[role.index()] += 1);
        counts
    }

    fn visit_matches<F>(&self, normalized: &str, mut visit: F)
    where
        F: FnMut(Role, MatchedCue<'_>),
    {
        for role in Role::ALL {
            for phrase in self.corpus.phrases(role) {
                if normalized.contains(phrase.as_str()) {
                    visit(
                        role,
                        MatchedCue {
                            anchor: None,
                            cue: phrase.as_str(),
                            contribution: 1.0 + self.stats.weight(phrase),
                        },
                    );
                }
            }

            for (anchor, followers) in self.corpus.pairs(role) {
                let Some(start) = normalized.find(anchor.as_str()) else {
                    continue;
                };
                let after_anchor = &normalized[start + anchor.len()..];

                for follower in followers {
                    if after_anchor.contains(follower.as_str()) {
                        visit(
                            role,
                            MatchedCue {
                                anchor: Some(anchor.as_str()),
                                cue: follower.as_str(),
                                contribution: 1.0 + self.stats.weight(follower),
                            },
                        );
                    }
                }
            }
        }
    }
}

struct MatchedCue<'c> {
    anchor: Option<&'c str>,
    cue: &'c str,
    contribution: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{CorpusSeed, PairSeed, RoleSeed};
    use crate::stopwords::Stopwords;

    fn corpus(roles: Vec<RoleSeed>) -> CueCorpus {
        CueCorpus::build(&CorpusSeed { roles }).expect("test seed should build")
    }

    fn role_seed(code: &str, phrases: &[&str], pairs: &[(&str, &[&str])]) -> RoleSeed {
        RoleSeed {
            role: code.to_string(),
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            pairs: pairs
                .iter()
                .map(|(anchor, followers)| PairSeed {
                    anchor: anchor.to_string(),
                    followers: followers.iter().map(|f| f.to_string()).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn repeated_phrase_counts_once() {
        let corpus = corpus(vec![role_seed("F", &["appellant"], &[])]);
        let stats = DocumentStats::default();
        let scores = Scorer::new(&corpus, &stats).score("the appellant and the appellant again");

        assert_eq!(scores.get(Role::Fact), 1.0);
        assert_eq!(scores.get(Role::Issue), 0.0);
    }

    #[test]
    fn anchor_without_follower_scores_nothing() {
        let corpus = corpus(vec![role_seed("SP", &[], &[("Court", &["held that"])])]);
        let stats = DocumentStats::default();
        let scorer = Scorer::new(&corpus, &stats);

        assert_eq!(scorer.score("the court adjourned").get(Role::Precedent), 0.0);
        assert_eq!(scorer.score("held that the court erred").get(Role::Precedent), 0.0);
        assert_eq!(scorer.score("the court held that it erred").get(Role::Precedent), 1.0);
    }

    #[test]
    fn followers_are_searched_after_first_anchor_occurrence() {
        let corpus = corpus(vec![role_seed(
            "R",
            &[],
            &[("appeal", &["dismissed", "with costs", "allowed"])],
        )]);
        let stats = DocumentStats::default();
        let scorer = Scorer::new(&corpus, &stats);

        let breakdown =
            scorer.explain("dismissed earlier, the appeal is now dismissed with costs, appeal");
        assert_eq!(breakdown.scores.get(Role::PresentCourtRuling), 2.0);
        assert_eq!(breakdown.matches.len(), 2);
        assert!(breakdown.matches.iter().all(|m| matches!(
            m,
            CueMatch::Pair { anchor, .. } if anchor == "appeal"
        )));
    }

    #[test]
    fn document_weights_boost_single_token_cues() {
        let corpus = corpus(vec![role_seed("F", &["appellant", "filed a"], &[])]);
        let stopwords = Stopwords::english().expect("english stop-words should load");
        let stats = DocumentStats::compute(
            &["The appellant filed a suit.", "The weather was pleasant."],
            stopwords,
        );
        let scores = Scorer::new(&corpus, &stats).score("the appellant filed a suit.");

        // `appellant` earns its weight, the multi-word cue only the base 1.
        let expected = 2.0 + stats.weight("appellant");
        assert!((scores.get(Role::Fact) - expected).abs() < 1e-12);
        assert!(stats.weight("appellant") > 0.0);
    }

    #[test]
    fn cues_shared_between_roles_score_for_each() {
        let corpus = corpus(vec![
            role_seed("LR", &["held that"], &[]),
            role_seed("SP", &["held that"], &[]),
        ]);
        let stats = DocumentStats::default();
        let scorer = Scorer::new(&corpus, &stats);
        let sentence = "it was held that the sale was void";
        let scores = scorer.score(sentence);

        assert_eq!(scores.get(Role::LowerCourtRuling), 1.0);
        assert_eq!(scores.get(Role::Precedent), 1.0);
        assert_eq!(scorer.count_matches(sentence)[Role::Precedent.index()], 1);
    }

    #[test]
    fn best_breaks_ties_in_canonical_order() {
        let mut scores = RoleScores::default();
        scores.add(Role::Precedent, 2.0);
        scores.add(Role::Issue, 2.0);
        scores.add(Role::PresentCourtRuling, 1.5);

        assert_eq!(scores.best(), (Role::Issue, 2.0));
        assert_eq!(scores.max(), 2.0);
        assert_eq!(RoleScores::default().best(), (Role::Fact, 0.0));
    }
}
