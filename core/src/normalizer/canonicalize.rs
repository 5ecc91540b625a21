use super::curated::CuratedTable;
use super::model::{CanonicalFieldEntry, Canonicalized, UnmappedEntry};
use super::repairs::{normalize_label, RepairRules};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Normalizes every candidate and splits the result into curated fields and
/// leftovers for review.
pub fn canonicalize(labels: &[String], rules: &RepairRules, table: &CuratedTable) -> Canonicalized {
    let mut out = Canonicalized::default();
    let mut seen_text = HashSet::new();
    let mut seen_keys = HashSet::new();

    for raw in labels {
        let normalized = normalize_label(rules, raw);
        if normalized.is_empty() || !seen_text.insert(normalized.clone()) {
            continue;
        }

        match table.lookup(&normalized) {
            Some(entry) => {
                if !seen_keys.insert(entry.key.clone()) {
                    debug!(key = %entry.key, label = %normalized, "key already emitted");
                    continue;
                }
                out.normalized.push(CanonicalFieldEntry {
                    key: entry.key.clone(),
                    label: entry.display_label(),
                    required: true,
                });
            }
            None => {
                warn!(raw = %raw, normalized = %normalized, "unmapped required label");
                out.unmapped.push(UnmappedEntry {
                    raw: raw.clone(),
                    normalized,
                });
            }
        }
    }

    out.normalized.sort_by(|a, b| a.key.cmp(&b.key));
    out
}
