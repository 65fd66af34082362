//! Cue corpus: per-role cue phrases and two-part anchor/follower collocations.
//!
//! The corpus is built once from a literal seed and is immutable afterwards.
//! Every seed string is case-expanded into `{lowercase, Capitalized}` where
//! `Capitalized` upper-cases the first character and lower-cases the rest, so
//! acronyms such as `SCC` are stored as `scc` and `Scc`.
//!
//! Anchors fan out the same way: every case variant of an anchor maps to the
//! case-expanded follower set. When two seed anchors of one role expand to the
//! same key the later one replaces the earlier follower set.

mod seed;

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::role::Role;

pub type PhraseSet = BTreeSet<String>;
pub type PairTable = BTreeMap<String, BTreeSet<String>>;

static BUILTIN: Lazy<CueCorpus> = Lazy::new(|| {
    let corpus = CueCorpus::from_literals(seed::BUILTIN_SEED);
    debug!(
        phrases = corpus.phrase_count(),
        anchors = corpus.anchor_count(),
        "built-in cue corpus initialised"
    );
    corpus
});

pub(crate) struct SeedLiteral {
    role: Role,
    phrases: &'static [&'static str],
    pairs: &'static [(&'static str, &'static [&'static str])],
}

/// Owned, serialisable seed. Role keys are short codes (`F`, `LR`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusSeed {
    pub roles: Vec<RoleSeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSeed {
    pub role: String,
    #[serde(default)]
    pub phrases: Vec<String>,
    #[serde(default)]
    pub pairs: Vec<PairSeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSeed {
    pub anchor: String,
    pub followers: Vec<String>,
}

impl CorpusSeed {
    pub fn builtin() -> Self {
        let roles = seed::BUILTIN_SEED
            .iter()
            .map(|literal| RoleSeed {
                role: literal.role.code().to_string(),
                phrases: literal.phrases.iter().map(|p| p.to_string()).collect(),
                pairs: literal
                    .pairs
                    .iter()
                    .map(|(anchor, followers)| PairSeed {
                        anchor: anchor.to_string(),
                        followers: followers.iter().map(|f| f.to_string()).collect(),
                    })
                    .collect(),
            })
            .collect();

        Self { roles }
    }

    pub fn from_json_str(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&raw).map_err(|source| ExtractError::CorpusFormat {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueCorpus {
    phrases: [PhraseSet; Role::COUNT],
    pairs: [PairTable; Role::COUNT],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleCueCounts {
    pub role: Role,
    pub phrases: usize,
    pub anchors: usize,
    pub followers: usize,
}

impl CueCorpus {
    fn empty() -> Self {
        Self {
            phrases: std::array::from_fn(|_| PhraseSet::new()),
            pairs: std::array::from_fn(|_| PairTable::new()),
        }
    }

    pub fn builtin() -> &'static CueCorpus {
        &BUILTIN
    }

    pub(crate) fn from_literals(literals: &[SeedLiteral]) -> Self {
        let mut corpus = Self::empty();
        for literal in literals {
            corpus.insert_phrases(literal.role, literal.phrases.iter().copied());
            for (anchor, followers) in literal.pairs {
                corpus.insert_pair(literal.role, anchor, followers.iter().copied());
            }
        }
        corpus
    }

    pub fn build(seed: &CorpusSeed) -> Result<Self> {
        let mut corpus = Self::empty();
        for role_seed in &seed.roles {
            let role = Role::from_code(role_seed.role.trim())
                .ok_or_else(|| ExtractError::UnknownRoleCode(role_seed.role.clone()))?;

            corpus.insert_phrases(role, role_seed.phrases.iter().map(String::as_str));
            for pair in &role_seed.pairs {
                corpus.insert_pair(role, &pair.anchor, pair.followers.iter().map(String::as_str));
            }
        }
        Ok(corpus)
    }

    fn insert_phrases<'s>(&mut self, role: Role, phrases: impl IntoIterator<Item = &'s str>) {
        self.phrases[role.index()].extend(expand_case(phrases));
    }

    fn insert_pair<'s>(
        &mut self,
        role: Role,
        anchor: &str,
        followers: impl IntoIterator<Item = &'s str>,
    ) {
        let followers = expand_case(followers);
        let table = &mut self.pairs[role.index()];
        for variant in case_variants(anchor) {
            table.insert(variant, followers.clone());
        }
    }

    pub fn phrases(&self, role: Role) -> &PhraseSet {
        &self.phrases[role.index()]
    }

    pub fn pairs(&self, role: Role) -> &PairTable {
        &self.pairs[role.index()]
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.iter().map(BTreeSet::len).sum()
    }

    pub fn anchor_count(&self) -> usize {
        self.pairs.iter().map(BTreeMap::len).sum()
    }

    pub fn counts(&self) -> Vec<RoleCueCounts> {
        Role::ALL
            .iter()
            .map(|&role| RoleCueCounts {
                role,
                phrases: self.phrases(role).len(),
                anchors: self.pairs(role).len(),
                followers: self.pairs(role).values().map(BTreeSet::len).sum(),
            })
            .collect()
    }
}

pub fn capitalize_first(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn case_variants(phrase: &str) -> [String; 2] {
    [phrase.to_lowercase(), capitalize_first(phrase)]
}

pub fn expand_case<'s>(phrases: impl IntoIterator<Item = &'s str>) -> PhraseSet {
    phrases.into_iter().flat_map(case_variants).collect()
}
