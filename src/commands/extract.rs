use std::io::{self, Write};

use anyhow::Result;
use tracing::info;

use crate::cli::ExtractArgs;
use crate::commands::extract_config;
use crate::model::DocumentReport;
use crate::util::{read_text, sha256_hex, write_json_pretty, write_json_stdout};

pub fn run(args: ExtractArgs) -> Result<()> {
    let config = extract_config(&args.resources)?;
    let threshold = config.threshold()?;
    let resources = config.load_resources()?;
    let extractor = resources.extractor()?;

    let text = read_text(&args.input)?;
    let document = extractor.prepare(&text);
    let extraction = extractor.run_prepared(&document, threshold);

    info!(
        path = %args.input.display(),
        sentences = extraction.sentences.len(),
        accepted = extraction.accepted_count(),
        threshold,
        "extraction complete"
    );

    if let Some(path) = &args.categories_out {
        write_json_pretty(path, &extractor.rank_categories(&document).dump())?;
        info!(path = %path.display(), "wrote category ranking");
    }

    if args.json {
        let report = DocumentReport {
            source: args.input.display().to_string(),
            sha256: sha256_hex(text.as_bytes()),
            dataset: config.dataset.map(|dataset| dataset.key().to_string()),
            threshold,
            sentence_count: extraction.sentences.len(),
            accepted_count: extraction.accepted_count(),
            sentences: extraction.sentences,
            tagged: extraction.tagged,
            grouped: extraction.grouped,
        };
        return write_json_stdout(&report);
    }

    let mut output = io::BufWriter::new(io::stdout().lock());
    writeln!(output, "{}", extraction.tagged)?;
    writeln!(output)?;
    writeln!(output, "{}", extraction.grouped)?;
    output.flush()?;
    Ok(())
}
