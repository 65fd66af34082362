use anyhow::Result;
use tracing::{info, warn};

use judgment_roles::config::MAX_NEW_TOKENS;
use judgment_roles::prompt::{build_prompt, chunk_by_word_limit, prompt_source};
use judgment_roles::{ModelKey, PromptRegime};

use crate::cli::PromptArgs;
use crate::commands::{extract_config, require_dataset};
use crate::model::{PromptChunk, PromptReport};
use crate::util::{read_text, write_json_stdout};

pub fn run(args: PromptArgs) -> Result<()> {
    let config = extract_config(&args.resources)?;
    let dataset = require_dataset(&config, "prompt")?;
    let model = args.model.parse::<ModelKey>()?;
    let regime = args.regime.parse::<PromptRegime>()?;
    let threshold = config.threshold()?;
    let resources = config.load_resources()?;
    let extractor = resources.extractor()?;

    let text = read_text(&args.input)?;
    let extraction = extractor.run(&text, threshold);
    let source = prompt_source(regime, &text, &extraction.grouped);

    if source.trim().is_empty() {
        warn!(
            regime = %regime,
            threshold,
            "summariser input is empty; no sentence passed the threshold"
        );
    }

    let chunks = chunk_by_word_limit(source, model.max_seq_len())
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| PromptChunk {
            index,
            word_count: chunk.split_whitespace().count(),
            messages: build_prompt(regime, &chunk, dataset),
        })
        .collect::<Vec<PromptChunk>>();

    info!(
        dataset = %dataset,
        model = %model,
        regime = %regime,
        chunks = chunks.len(),
        "prepared summariser prompts"
    );

    write_json_stdout(&PromptReport {
        dataset: dataset.key().to_string(),
        dataset_source: dataset.source().to_string(),
        model: model.key().to_string(),
        repo_id: model.repo_id().to_string(),
        max_seq_len: model.max_seq_len(),
        max_new_tokens: MAX_NEW_TOKENS,
        regime: regime.key().to_string(),
        threshold,
        chunks,
    })
}
