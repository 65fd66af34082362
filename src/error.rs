use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unknown dataset: {0} (expected one of: ilc, civilsum, inabs)")]
    UnknownDataset(String),

    #[error("unknown model key: {0} (expected one of: phi-4, llama3.2-1b, llama3.2-3b, qwen2.5-7b)")]
    UnknownModel(String),

    #[error("unknown prompt regime: {0} (expected one of: eea, ea, abstract)")]
    UnknownRegime(String),

    #[error("unknown role code in cue corpus: {0}")]
    UnknownRoleCode(String),

    #[error("stop-word list unavailable: {0}")]
    StopwordsUnavailable(String),

    #[error("no acceptance threshold: pass a dataset profile or an explicit threshold")]
    MissingThreshold,

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed cue corpus seed {path}")]
    CorpusFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = ExtractError> = std::result::Result<T, E>;
