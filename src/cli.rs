use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "judgment-roles",
    version,
    about = "Rhetorical-role extraction for legal judgments"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tag one document and print the inline stream and grouped block.
    Extract(ExtractArgs),
    /// Tag every document of a directory or JSONL file into a run manifest.
    Batch(BatchArgs),
    /// Show the cue matches behind one sentence's scores.
    Explain(ExplainArgs),
    /// Report cue-corpus sizes or dump the seed.
    Corpus(CorpusArgs),
    /// Print the chat prompts a summariser would receive.
    Prompt(PromptArgs),
    /// Strip the chat-template preamble from a generated summary.
    Clean(CleanArgs),
}

/// Options shared by every command that runs the extractor.
#[derive(Args, Debug, Clone)]
pub struct ResourceArgs {
    /// Dataset profile (ilc, civilsum, inabs) supplying the default threshold.
    #[arg(long)]
    pub dataset: Option<String>,

    /// Acceptance threshold; overrides the dataset default.
    #[arg(long)]
    pub threshold: Option<f64>,

    /// JSON cue-corpus seed replacing the built-in corpus.
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Newline-separated stop-word list replacing the English list.
    #[arg(long)]
    pub stopwords: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub resources: ResourceArgs,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Also write the coarse-category ranking as JSON.
    #[arg(long)]
    pub categories_out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Directory of `*.txt` judgments.
    #[arg(long, conflicts_with = "input_jsonl", required_unless_present = "input_jsonl")]
    pub input_dir: Option<PathBuf>,

    /// JSON-lines records read with the dataset's column names.
    #[arg(long)]
    pub input_jsonl: Option<PathBuf>,

    #[command(flatten)]
    pub resources: ResourceArgs,

    #[arg(long)]
    pub output: PathBuf,

    /// Include the budgeted category summary for each document.
    #[arg(long, default_value_t = false)]
    pub with_summary: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExplainArgs {
    #[arg(long)]
    pub input: PathBuf,

    /// Zero-based index into the segmented sentences.
    #[arg(long)]
    pub sentence: usize,

    #[command(flatten)]
    pub resources: ResourceArgs,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Corpus seed to inspect instead of the built-in one.
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Write the seed as JSON to this path.
    #[arg(long)]
    pub dump: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct PromptArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub resources: ResourceArgs,

    #[arg(long, default_value = "phi-4")]
    pub model: String,

    #[arg(long, default_value = "eea")]
    pub regime: String,
}

#[derive(Args, Debug, Clone)]
pub struct CleanArgs {
    /// Raw decoded output of the summariser.
    #[arg(long)]
    pub input: PathBuf,

    /// Write the summary here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}
