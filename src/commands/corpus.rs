use anyhow::Result;
use tracing::info;

use judgment_roles::{CorpusSeed, CueCorpus};

use crate::cli::CorpusArgs;
use crate::util::write_json_pretty;

pub fn run(args: CorpusArgs) -> Result<()> {
    let seed = match &args.corpus {
        Some(path) => CorpusSeed::load(path)?,
        None => CorpusSeed::builtin(),
    };
    let corpus = CueCorpus::build(&seed)?;

    for counts in corpus.counts() {
        info!(
            role = counts.role.code(),
            role_name = counts.role.long_name(),
            phrases = counts.phrases,
            anchors = counts.anchors,
            followers = counts.followers,
            "cue table"
        );
    }
    info!(
        phrases = corpus.phrase_count(),
        anchors = corpus.anchor_count(),
        source = %args
            .corpus
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "built-in".to_string()),
        "cue corpus loaded"
    );

    if let Some(path) = &args.dump {
        write_json_pretty(path, &seed)?;
        info!(path = %path.display(), roles = seed.roles.len(), "wrote corpus seed");
    }

    Ok(())
}
