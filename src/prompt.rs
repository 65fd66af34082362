use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::ExtractError;
use crate::segment::split_sentences;

pub const SYSTEM_PROMPT: &str =
    "You are a proficient legal assistant specializing in summarizing legal texts.";

const ROLE_STRUCTURED_INSTRUCTIONS: &str = "You are a proficient legal assistant. Your goal is to generate a clear, concise, and accurate summary that logically flows from the facts through to the ruling. Follow the steps below:

1. **Key Facts**: Start by summarizing the key facts, emphasizing their relevance to the issues at hand. Identify the most critical facts that shape the case.
2. **Issues**: Identify the legal issues involved. Clearly explain the relationship between these issues and the facts presented.
3. **Arguments**: Summarize the key arguments, highlighting how they connect to the facts and issues. Include both sides of the argument where relevant.
4. **Lower Court Rulings**: Explain the ruling of the lower court, linking it to the arguments and the relevant statutes or legal principles.
5. **Statutes**: Clarify the statutes that underpin the case, explaining how they are applied in this context.
6. **Precedents**: Discuss any relevant precedents, explaining how they support or influence the case at hand.
7. **Present Court\u{2019}s Ruling**: Finally, explain the ruling by the present court, summarizing how it integrates the facts, issues, arguments, and precedents.

Your summary should present a unified narrative that integrates these categories in a logical and coherent way, ensuring that each element supports the others.
";

static GENERATION_PREAMBLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)summary:assistant\s*(.*)").expect("static regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRegime {
    Eea,
    Ea,
    Abstract,
}

impl PromptRegime {
    pub const ALL: [PromptRegime; 3] = [PromptRegime::Eea, PromptRegime::Ea, PromptRegime::Abstract];

    pub fn key(self) -> &'static str {
        match self {
            Self::Eea => "eea",
            Self::Ea => "ea",
            Self::Abstract => "abstract",
        }
    }
}

impl FromStr for PromptRegime {
    type Err = ExtractError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|regime| regime.key() == wanted)
            .ok_or_else(|| ExtractError::UnknownRegime(raw.to_string()))
    }
}

impl fmt::Display for PromptRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    fn system(content: &str) -> Self {
        Self {
            role: "system",
            content: content.to_string(),
        }
    }

    fn user(content: String) -> Self {
        Self {
            role: "user",
            content,
        }
    }
}

pub fn build_prompt(regime: PromptRegime, text: &str, dataset: Dataset) -> Vec<ChatMessage> {
    let user = match (regime, dataset) {
        (PromptRegime::Eea, _) => format!("{ROLE_STRUCTURED_INSTRUCTIONS}\n {text}"),
        (_, Dataset::CivilSum) => format!(
            "{SYSTEM_PROMPT} Summarize the following judgement in 4-5 sentences or less. \n text: {text} \n summary:"
        ),
        _ => format!(
            "{SYSTEM_PROMPT} Summarize the following entire following text in 4-5 sentences or less as a single paragraph. \n text: {text} \n summary:"
        ),
    };

    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user)]
}

/// Text a regime summarises: the grouped block, or the raw document for
/// `abstract`.
pub fn prompt_source<'t>(regime: PromptRegime, document: &'t str, grouped: &'t str) -> &'t str {
    match regime {
        PromptRegime::Eea | PromptRegime::Ea => grouped,
        PromptRegime::Abstract => document,
    }
}

/// Packs whole sentences into chunks of at most `word_limit` whitespace
/// words. A sentence longer than the limit forms a chunk of its own.
pub fn chunk_by_word_limit(text: &str, word_limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_words = 0_usize;

    for sentence in split_sentences(text) {
        let words = sentence.split_whitespace().count();
        if current_words + words > word_limit && !current.is_empty() {
            chunks.push(current.join(" "));
            current.clear();
            current_words = 0;
        }
        current.push(sentence);
        current_words += words;
    }

    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    chunks
}

/// Drops everything up to a `summary:assistant` marker left by chat
/// templates.
pub fn strip_generation_preamble(generated: &str) -> &str {
    match GENERATION_PREAMBLE.captures(generated).and_then(|caps| caps.get(1)) {
        Some(summary) => summary.as_str().trim(),
        None => generated.trim(),
    }
}
