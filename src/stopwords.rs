use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::OnceCell;
use stop_words::{LANGUAGE, get};

use crate::error::{ExtractError, Result};

static ENGLISH: OnceCell<Stopwords> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    pub fn english() -> Result<&'static Stopwords> {
        ENGLISH.get_or_try_init(|| {
            let words = get(LANGUAGE::English)
                .iter()
                .map(|word| word.to_string())
                .collect::<Vec<String>>();
            Self::from_words(words.iter().map(String::as_str))
        })
    }

    /// Fails when no non-blank entry remains.
    pub fn from_words<'w>(words: impl IntoIterator<Item = &'w str>) -> Result<Self> {
        let words = words
            .into_iter()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_lowercase)
            .collect::<HashSet<String>>();

        if words.is_empty() {
            return Err(ExtractError::StopwordsUnavailable(
                "stop-word list is empty".to_string(),
            ));
        }

        Ok(Self { words })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_words(raw.lines()).map_err(|_| {
            ExtractError::StopwordsUnavailable(format!("no entries in {}", path.display()))
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
