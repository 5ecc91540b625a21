use serde::{Deserialize, Serialize};

/// One record of the generated field list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalFieldEntry {
    pub key: String,
    pub label: String,
    pub required: bool,
}

/// A candidate with no curated match; goes to the review list only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnmappedEntry {
    pub raw: String,
    pub normalized: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Canonicalized {
    /// Sorted by key.
    pub normalized: Vec<CanonicalFieldEntry>,
    /// In candidate order.
    pub unmapped: Vec<UnmappedEntry>,
}
