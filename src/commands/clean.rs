use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use judgment_roles::prompt::strip_generation_preamble;

use crate::cli::CleanArgs;
use crate::util::{ensure_directory, read_text};

pub fn run(args: CleanArgs) -> Result<()> {
    let generated = read_text(&args.input)?;
    let summary = strip_generation_preamble(&generated);

    if summary.is_empty() {
        warn!(path = %args.input.display(), "generated summary is empty after cleaning");
    }
    info!(
        path = %args.input.display(),
        raw_words = generated.split_whitespace().count(),
        summary_words = summary.split_whitespace().count(),
        "cleaned generated summary"
    );

    match &args.output {
        Some(path) => write_summary(path, summary),
        None => {
            let mut output = io::BufWriter::new(io::stdout().lock());
            writeln!(output, "{summary}")?;
            output.flush()?;
            Ok(())
        }
    }
}

fn write_summary(path: &Path, summary: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }
    std::fs::write(path, format!("{summary}\n"))
        .with_context(|| format!("failed to write summary: {}", path.display()))
}
