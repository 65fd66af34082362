use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ExtractError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Ilc,
    CivilSum,
    InAbs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRow {
    pub id: String,
    pub document: String,
    pub reference_summary: Option<String>,
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [Dataset::Ilc, Dataset::CivilSum, Dataset::InAbs];

    pub fn key(self) -> &'static str {
        match self {
            Self::Ilc => "ilc",
            Self::CivilSum => "civilsum",
            Self::InAbs => "inabs",
        }
    }

    pub fn source(self) -> &'static str {
        match self {
            Self::Ilc => "d0r1h/ILC",
            Self::CivilSum => "civilsum",
            Self::InAbs => "Ashreen/dataset-IN-Abs",
        }
    }

    pub fn threshold(self) -> f64 {
        match self {
            Self::Ilc => 20.0,
            Self::CivilSum => 15.0,
            Self::InAbs => 5.0,
        }
    }

    pub fn id_column(self) -> &'static str {
        match self {
            Self::Ilc => "Title",
            Self::CivilSum => "doc_id",
            Self::InAbs => "index",
        }
    }

    pub fn document_column(self) -> &'static str {
        match self {
            Self::Ilc => "Case",
            Self::CivilSum => "text",
            Self::InAbs => "document",
        }
    }

    pub fn summary_column(self) -> &'static str {
        match self {
            Self::Ilc => "Summary",
            Self::CivilSum | Self::InAbs => "summary",
        }
    }

    /// Reads a record using this dataset's column names. Returns `None`
    /// when the id or document column is missing or the document is not a
    /// string; non-string ids (IN-Abs uses integers) are stringified.
    pub fn document_row(self, record: &Map<String, Value>) -> Option<DocumentRow> {
        let id = match record.get(self.id_column())? {
            Value::String(id) => id.clone(),
            Value::Null => return None,
            other => other.to_string(),
        };
        let document = record.get(self.document_column())?.as_str()?.to_string();
        let reference_summary = record
            .get(self.summary_column())
            .and_then(Value::as_str)
            .map(ToOwned::to_owned);

        Some(DocumentRow {
            id,
            document,
            reference_summary,
        })
    }
}

impl FromStr for Dataset {
    type Err = ExtractError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ilc" => Ok(Self::Ilc),
            "civilsum" => Ok(Self::CivilSum),
            "inabs" | "in-abs" => Ok(Self::InAbs),
            _ => Err(ExtractError::UnknownDataset(raw.to_string())),
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
