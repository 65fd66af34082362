use std::io::{self, Write};

use anyhow::{Result, bail};
use tracing::info;

use judgment_roles::normalize::normalize_sentence;
use judgment_roles::scoring::CueMatch;

use crate::cli::ExplainArgs;
use crate::commands::extract_config;
use crate::model::ExplainReport;
use crate::util::{read_text, write_json_stdout};

pub fn run(args: ExplainArgs) -> Result<()> {
    let config = extract_config(&args.resources)?;
    let resources = config.load_resources()?;
    let extractor = resources.extractor()?;

    let text = read_text(&args.input)?;
    let document = extractor.prepare(&text);
    let Some(breakdown) = extractor.explain(&document, args.sentence) else {
        bail!(
            "sentence index {} out of range: {} has {} sentences",
            args.sentence,
            args.input.display(),
            document.sentences.len()
        );
    };

    let sentence = document.sentences[args.sentence].clone();
    let (best_role, best_score) = breakdown.scores.best();
    info!(
        index = args.sentence,
        matches = breakdown.matches.len(),
        best_role = %best_role,
        best_score,
        "explained sentence"
    );

    let report = ExplainReport {
        source: args.input.display().to_string(),
        sentence_index: args.sentence,
        sentence_count: document.sentences.len(),
        normalized: normalize_sentence(&sentence),
        sentence,
        scores: breakdown.scores,
        best_role: best_role.long_name().to_string(),
        best_score,
        matches: breakdown.matches,
    };

    if args.json {
        return write_json_stdout(&report);
    }

    write_text_report(&report)
}

fn write_text_report(report: &ExplainReport) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());

    writeln!(
        output,
        "Sentence {} of {}: {}",
        report.sentence_index + 1,
        report.sentence_count,
        report.sentence
    )?;
    writeln!(output, "Normalized: {}", report.normalized)?;
    writeln!(output, "Scores:")?;
    for (role, score) in report.scores.iter() {
        writeln!(output, "  {:<3} {:<24} {score:.4}", role.code(), role.long_name())?;
    }
    writeln!(output, "Best: {} ({:.4})", report.best_role, report.best_score)?;
    writeln!(output, "Matches: {}", report.matches.len())?;
    for cue in &report.matches {
        match cue {
            CueMatch::Phrase {
                role,
                phrase,
                contribution,
            } => writeln!(output, "  {:<3} phrase {phrase:?} +{contribution:.4}", role.code())?,
            CueMatch::Pair {
                role,
                anchor,
                follower,
                contribution,
            } => writeln!(
                output,
                "  {:<3} pair {anchor:?} -> {follower:?} +{contribution:.4}",
                role.code()
            )?,
        }
    }

    output.flush()?;
    Ok(())
}
