use std::collections::BTreeMap;

use serde::Serialize;

use judgment_roles::emit::SentenceRecord;
use judgment_roles::prompt::ChatMessage;
use judgment_roles::scoring::{CueMatch, RoleScores};

#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub source: String,
    pub sha256: String,
    pub dataset: Option<String>,
    pub threshold: f64,
    pub sentence_count: usize,
    pub accepted_count: usize,
    pub sentences: Vec<SentenceRecord>,
    pub tagged: String,
    pub grouped: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchDocumentEntry {
    pub id: String,
    pub sha256: String,
    pub sentence_count: usize,
    pub accepted_count: usize,
    pub role_counts: BTreeMap<String, usize>,
    pub tagged: String,
    pub grouped: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budgeted_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_summary: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub dataset: String,
    pub threshold: f64,
    pub source: String,
    pub document_count: usize,
    pub accepted_sentence_total: usize,
    pub documents: Vec<BatchDocumentEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExplainReport {
    pub source: String,
    pub sentence_index: usize,
    pub sentence_count: usize,
    pub sentence: String,
    pub normalized: String,
    pub scores: RoleScores,
    pub best_role: String,
    pub best_score: f64,
    pub matches: Vec<CueMatch>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptChunk {
    pub index: usize,
    pub word_count: usize,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptReport {
    pub dataset: String,
    pub dataset_source: String,
    pub model: String,
    pub repo_id: String,
    pub max_seq_len: usize,
    pub max_new_tokens: usize,
    pub regime: String,
    pub threshold: f64,
    pub chunks: Vec<PromptChunk>,
}
