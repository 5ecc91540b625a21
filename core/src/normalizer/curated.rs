use crate::error::{LabelError, LabelResult};
use crate::storage::files::read_text;
use crate::text::{squash_whitespace, strip_required_marker};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

static RE_KEBAB_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid key regex"));

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CuratedEntry {
    /// Normalized label text, marker included. Matched exactly.
    #[serde(rename = "match")]
    pub match_text: String,
    pub key: String,
    /// Display label; defaults to `match_text` without the marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl CuratedEntry {
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(l) => squash_whitespace(l),
            None => strip_required_marker(&self.match_text),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CuratedTableFile {
    table_version: String,
    entries: Vec<CuratedEntry>,
}

/// Hand-maintained mapping from normalized label text to stable field key.
/// The only authority on what counts as a known required field.
#[derive(Debug, Clone)]
pub struct CuratedTable {
    pub table_version: String,
    entries: Vec<CuratedEntry>,
    by_text: HashMap<String, usize>,
}

impl CuratedTable {
    pub fn from_json(json: &str) -> LabelResult<Self> {
        let file: CuratedTableFile = serde_json::from_str(json)
            .map_err(|e| LabelError::InvalidConfig(format!("curated table: {}", e)))?;
        Self::from_entries(file.table_version, file.entries)
    }

    /// Match text is squashed on the way in since candidates always are.
    pub fn from_entries(table_version: String, entries: Vec<CuratedEntry>) -> LabelResult<Self> {
        let mut out = Vec::with_capacity(entries.len());
        let mut by_text = HashMap::new();
        for mut entry in entries {
            entry.match_text = squash_whitespace(&entry.match_text);
            if entry.match_text.is_empty() {
                return Err(LabelError::InvalidConfig(format!(
                    "curated entry for key {:?} has empty match text",
                    entry.key
                )));
            }
            if !RE_KEBAB_KEY.is_match(&entry.key) {
                return Err(LabelError::InvalidConfig(format!(
                    "curated key {:?} is not kebab-case",
                    entry.key
                )));
            }
            if by_text.insert(entry.match_text.clone(), out.len()).is_some() {
                return Err(LabelError::InvalidConfig(format!(
                    "curated match text {:?} appears more than once",
                    entry.match_text
                )));
            }
            out.push(entry);
        }
        Ok(Self {
            table_version,
            entries: out,
            by_text,
        })
    }

    pub fn load(path: &Path) -> LabelResult<Self> {
        Self::from_json(&read_text(path)?)
    }

    pub fn load_or_default(path: Option<&Path>) -> LabelResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => default_curated_table(),
        }
    }

    pub fn lookup(&self, normalized: &str) -> Option<&CuratedEntry> {
        self.by_text.get(normalized).map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> &[CuratedEntry] {
        &self.entries
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn default_curated_table() -> LabelResult<CuratedTable> {
    CuratedTable::from_json(include_str!("curated_table_v1.json"))
}
