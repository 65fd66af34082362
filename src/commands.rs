pub mod batch;
pub mod clean;
pub mod corpus;
pub mod explain;
pub mod extract;
pub mod prompt;

use anyhow::{Context, Result};

use judgment_roles::{Dataset, ExtractConfig};

use crate::cli::ResourceArgs;

pub fn extract_config(args: &ResourceArgs) -> Result<ExtractConfig> {
    let dataset = args
        .dataset
        .as_deref()
        .map(str::parse::<Dataset>)
        .transpose()?;

    Ok(ExtractConfig {
        dataset,
        threshold: args.threshold,
        corpus_path: args.corpus.clone(),
        stopwords_path: args.stopwords.clone(),
    })
}

pub fn require_dataset(config: &ExtractConfig, command: &str) -> Result<Dataset> {
    config
        .dataset
        .with_context(|| format!("{command} requires --dataset (ilc, civilsum or inabs)"))
}
