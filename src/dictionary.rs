use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::DictionaryError;
use crate::file_utils::FileManager;

// @module: Dictionary corpus model and YAML loading

/// A single definition of a dictionary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    /// Definition text, usually English with embedded Kannada
    pub entry: String,

    /// Grammatical category (e.g. "noun"), stored under `type` in the corpus
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Definition {
    pub fn new(entry: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            kind: None,
        }
    }
}

/// One structured dictionary record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    // @field: Headword
    pub entry: String,

    // @field: Phonetic transcription
    pub phone: String,

    // @field: Ordered definitions
    #[serde(default)]
    pub defs: Vec<Definition>,

    // @field: Index heading the entry is filed under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,

    // @field: Etymology
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    // @field: Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl DictionaryEntry {
    /// Creates an entry with the fields the document uses - used by tests and external consumers
    pub fn new(entry: impl Into<String>, phone: impl Into<String>, defs: Vec<Definition>) -> Self {
        Self {
            entry: entry.into(),
            phone: phone.into(),
            defs,
            head: None,
            origin: None,
            info: None,
        }
    }

    pub fn definition_count(&self) -> usize {
        self.defs.len()
    }
}

/// Total number of definitions across `entries`
pub fn count_definitions(entries: &[DictionaryEntry]) -> usize {
    entries.iter().map(DictionaryEntry::definition_count).sum()
}

/// Parse a YAML document holding a sequence of entries
///
/// A blank or comment-only document yields no entries. Missing `entry` or
/// `phone` keys are reported as errors rather than skipped.
pub fn parse_entries(content: &str) -> Result<Vec<DictionaryEntry>, DictionaryError> {
    let entries: Vec<DictionaryEntry> = if content.trim().is_empty() {
        Vec::new()
    } else {
        serde_yaml::from_str::<Option<Vec<DictionaryEntry>>>(content)?.unwrap_or_default()
    };

    if entries.is_empty() {
        warn!("Dictionary document is empty");
    } else {
        debug!("Parsed {} dictionary entries", entries.len());
    }

    Ok(entries)
}

/// Read and parse a YAML dictionary file
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<DictionaryEntry>> {
    let path = path.as_ref();
    let content = FileManager::read_to_string(path)?;

    parse_entries(&content)
        .with_context(|| format!("Failed to load dictionary: {}", path.display()))
}
