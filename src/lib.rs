//! Rule-based rhetorical-role extraction for legal judgments.
//!
//! A judgment is segmented into sentences, each sentence is scored against a
//! cue corpus of phrases and anchor/follower collocations for seven roles,
//! boosted by per-document TF·IDF weights, and sentences whose best score
//! clears a threshold are rendered inline with role tags and as role-grouped
//! blocks for a downstream summariser.

pub mod categories;
pub mod config;
pub mod corpus;
pub mod dataset;
pub mod emit;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod prompt;
pub mod role;
pub mod scoring;
pub mod segment;
pub mod stats;
pub mod stopwords;

pub use config::{ExtractConfig, ModelKey, Resources};
pub use corpus::{CorpusSeed, CueCorpus};
pub use dataset::{Dataset, DocumentRow};
pub use error::{ExtractError, Result};
pub use extract::{Extraction, Extractor, extract};
pub use prompt::PromptRegime;
pub use role::{Category, Role};
