use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::corpus::{CorpusSeed, CueCorpus};
use crate::dataset::Dataset;
use crate::error::{ExtractError, Result};
use crate::extract::Extractor;
use crate::stopwords::Stopwords;

/// Generation cap handed to the abstractive collaborator.
pub const MAX_NEW_TOKENS: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ModelKey {
    #[serde(rename = "phi-4")]
    Phi4,
    #[serde(rename = "llama3.2-1b")]
    Llama32_1b,
    #[serde(rename = "llama3.2-3b")]
    Llama32_3b,
    #[serde(rename = "qwen2.5-7b")]
    Qwen25_7b,
}

impl ModelKey {
    pub const ALL: [ModelKey; 4] = [
        ModelKey::Phi4,
        ModelKey::Llama32_1b,
        ModelKey::Llama32_3b,
        ModelKey::Qwen25_7b,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Phi4 => "phi-4",
            Self::Llama32_1b => "llama3.2-1b",
            Self::Llama32_3b => "llama3.2-3b",
            Self::Qwen25_7b => "qwen2.5-7b",
        }
    }

    pub fn repo_id(self) -> &'static str {
        match self {
            Self::Phi4 => "unsloth/phi-4-unsloth-bnb-4bit",
            Self::Llama32_1b => "unsloth/Llama-3.2-1B-Instruct-unsloth-bnb-4bit",
            Self::Llama32_3b => "unsloth/Llama-3.2-3B-Instruct-unsloth-bnb-4bit",
            Self::Qwen25_7b => "unsloth/Qwen2.5-7B-Instruct-bnb-4bit",
        }
    }

    pub fn max_seq_len(self) -> usize {
        match self {
            Self::Phi4 => 16_000,
            Self::Llama32_1b | Self::Llama32_3b | Self::Qwen25_7b => 128_000,
        }
    }
}

impl FromStr for ModelKey {
    type Err = ExtractError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|model| model.key() == wanted)
            .ok_or_else(|| ExtractError::UnknownModel(raw.to_string()))
    }
}

impl fmt::Display for ModelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractConfig {
    pub dataset: Option<Dataset>,
    pub threshold: Option<f64>,
    pub corpus_path: Option<PathBuf>,
    pub stopwords_path: Option<PathBuf>,
}

impl ExtractConfig {
    pub fn threshold(&self) -> Result<f64> {
        self.threshold
            .or_else(|| self.dataset.map(Dataset::threshold))
            .ok_or(ExtractError::MissingThreshold)
    }

    pub fn load_resources(&self) -> Result<Resources> {
        let corpus = match &self.corpus_path {
            Some(path) => {
                let corpus = CueCorpus::build(&CorpusSeed::load(path)?)?;
                debug!(
                    path = %path.display(),
                    phrases = corpus.phrase_count(),
                    anchors = corpus.anchor_count(),
                    "loaded cue corpus seed"
                );
                Some(corpus)
            }
            None => None,
        };

        let stopwords = match &self.stopwords_path {
            Some(path) => {
                let stopwords = Stopwords::load(path)?;
                debug!(path = %path.display(), words = stopwords.len(), "loaded stop-words");
                Some(stopwords)
            }
            None => None,
        };

        Ok(Resources { corpus, stopwords })
    }
}

/// Cue corpus and stop-words for a run; built-ins fill whatever was not
/// loaded from disk.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    corpus: Option<CueCorpus>,
    stopwords: Option<Stopwords>,
}

impl Resources {
    pub fn corpus(&self) -> &CueCorpus {
        match &self.corpus {
            Some(corpus) => corpus,
            None => CueCorpus::builtin(),
        }
    }

    pub fn stopwords(&self) -> Result<&Stopwords> {
        match &self.stopwords {
            Some(stopwords) => Ok(stopwords),
            None => Stopwords::english(),
        }
    }

    pub fn extractor(&self) -> Result<Extractor<'_>> {
        Ok(Extractor::new(self.corpus(), self.stopwords()?))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::role::Role;

    #[test]
    fn explicit_threshold_overrides_dataset_default() {
        let config = ExtractConfig {
            dataset: Some(Dataset::Ilc),
            threshold: Some(3.5),
            ..ExtractConfig::default()
        };
        assert_eq!(config.threshold().expect("threshold"), 3.5);

        let config = ExtractConfig {
            dataset: Some(Dataset::CivilSum),
            ..ExtractConfig::default()
        };
        assert_eq!(config.threshold().expect("threshold"), 15.0);
    }

    #[test]
    fn missing_threshold_is_an_error() {
        let err = ExtractConfig::default()
            .threshold()
            .expect_err("no dataset and no threshold");
        assert!(matches!(err, ExtractError::MissingThreshold));
    }

    #[test]
    fn model_keys_carry_repo_and_context_length() {
        let phi = "phi-4".parse::<ModelKey>().expect("phi-4");
        assert_eq!(phi.repo_id(), "unsloth/phi-4-unsloth-bnb-4bit");
        assert_eq!(phi.max_seq_len(), 16_000);

        let qwen = "Qwen2.5-7B".parse::<ModelKey>().expect("qwen2.5-7b");
        assert_eq!(qwen, ModelKey::Qwen25_7b);
        assert_eq!(qwen.max_seq_len(), 128_000);

        let err = "gpt-4".parse::<ModelKey>().expect_err("unknown model");
        assert!(matches!(err, ExtractError::UnknownModel(_)));
    }

    #[test]
    fn default_resources_are_the_builtins() {
        let resources = ExtractConfig::default()
            .load_resources()
            .expect("built-ins should load");

        assert_eq!(resources.corpus(), CueCorpus::builtin());
        assert!(resources.stopwords().expect("english").contains("the"));
    }

    #[test]
    fn replacement_files_are_loaded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let corpus_path = dir.path().join("seed.json");
        let stopwords_path = dir.path().join("stopwords.txt");
        fs::write(
            &corpus_path,
            r#"{"roles":[{"role":"R","phrases":["dismissed"]}]}"#,
        )
        .expect("write seed");
        fs::write(&stopwords_path, "the\nis\n").expect("write stop-words");

        let config = ExtractConfig {
            threshold: Some(0.0),
            corpus_path: Some(corpus_path),
            stopwords_path: Some(stopwords_path),
            ..ExtractConfig::default()
        };
        let resources = config.load_resources().expect("resources should load");
        let extraction = resources
            .extractor()
            .expect("extractor")
            .run("The appeal is dismissed.", 0.0);

        assert_eq!(resources.corpus().phrase_count(), 2);
        assert_eq!(extraction.sentences[0].role, Some(Role::PresentCourtRuling));
        assert_eq!(resources.stopwords().expect("custom").len(), 2);
    }

    #[test]
    fn unreadable_corpus_file_reports_its_path() {
        let config = ExtractConfig {
            corpus_path: Some(PathBuf::from("/nonexistent/seed.json")),
            ..ExtractConfig::default()
        };
        let err = config.load_resources().expect_err("missing file");
        assert!(matches!(err, ExtractError::Io { ref path, .. } if path.ends_with("seed.json")));
    }
}
