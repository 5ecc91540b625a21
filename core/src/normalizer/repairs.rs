//! Ordered literal rewrites that undo known text-dump accidents.
//!
//! Rules run top to bottom over the whole label, each seeing the output of the
//! previous one, so a later rule may finish what an earlier one started.

use crate::error::{LabelError, LabelResult};
use crate::storage::files::read_text;
use crate::text::{squash_whitespace, strip_inline_example, strip_required_marker};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

// Leaked tail of the previous sentence: starts lowercase, runs to the last ". ".
static RE_LEADING_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z].+\.\s+").expect("valid fragment regex"));

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RepairRule {
    /// Replace every occurrence of `find` with `with`.
    Replace { find: String, with: String },
    /// `fragment` is the wrapped tail of `label`; expand it unless the text
    /// already carries the full label.
    Complete { fragment: String, label: String },
}

impl RepairRule {
    pub fn apply(&self, s: &str) -> String {
        match self {
            RepairRule::Replace { find, with } => s.replace(find.as_str(), with),
            RepairRule::Complete { fragment, label } => {
                if s.contains(label.as_str()) {
                    s.to_string()
                } else {
                    s.replace(fragment.as_str(), label)
                }
            }
        }
    }

    fn pattern(&self) -> &str {
        match self {
            RepairRule::Replace { find, .. } => find,
            RepairRule::Complete { fragment, .. } => fragment,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepairRules {
    pub rules_version: String,
    pub rules: Vec<RepairRule>,
}

impl RepairRules {
    pub fn from_json(json: &str) -> LabelResult<Self> {
        let rules: Self = serde_json::from_str(json)
            .map_err(|e| LabelError::InvalidConfig(format!("repair rules: {}", e)))?;
        if let Some(bad) = rules.rules.iter().position(|r| r.pattern().is_empty()) {
            return Err(LabelError::InvalidConfig(format!(
                "repair rule #{} has an empty pattern",
                bad + 1
            )));
        }
        Ok(rules)
    }

    pub fn load(path: &Path) -> LabelResult<Self> {
        Self::from_json(&read_text(path)?)
    }

    pub fn load_or_default(path: Option<&Path>) -> LabelResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => default_repair_rules(),
        }
    }

    pub fn apply(&self, s: &str) -> String {
        let mut out = s.to_string();
        for rule in &self.rules {
            let next = rule.apply(&out);
            if next != out {
                debug!(before = %out, after = %next, "repair rule applied");
                out = next;
            }
        }
        out
    }
}

pub fn default_repair_rules() -> LabelResult<RepairRules> {
    RepairRules::from_json(include_str!("repair_rules_v1.json"))
}

/// Candidate text → lookup text for the curated table.
pub fn normalize_label(rules: &RepairRules, raw: &str) -> String {
    let s = strip_inline_example(&squash_whitespace(raw));
    let s = rules.apply(&s);
    let s = strip_leading_fragment(&s);
    squash_whitespace(&s)
}

/// Drops a leaked lowercase sentence tail in front of the label. A label that
/// is itself such a fragment (`the dog. *`) is left alone.
pub fn strip_leading_fragment(s: &str) -> String {
    match RE_LEADING_FRAGMENT.find(s) {
        Some(m) if !strip_required_marker(&s[m.end()..]).is_empty() => s[m.end()..].to_string(),
        _ => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> RepairRules {
        default_repair_rules().unwrap()
    }

    #[test]
    fn vet_fragment_expands_once() {
        let rules = defaults();
        let full = "Veterinarian's name (to obtain vet records) *";
        assert_eq!(normalize_label(&rules, "vet records) *"), full);
        assert_eq!(normalize_label(&rules, "records) *"), full);
        assert_eq!(normalize_label(&rules, full), full);
    }

    #[test]
    fn joined_pair_collapses_to_second_label() {
        let rules = defaults();
        assert_eq!(
            normalize_label(&rules, "records) * Veterinary office address *"),
            "Veterinary office address *"
        );
        assert_eq!(
            normalize_label(&rules, "First Name Last Name Owner's E-mail *"),
            "Owner's Name *"
        );
        assert_eq!(
            normalize_label(&rules, "Dog's Weight * Color of Dog *"),
            "Dog's Weight *"
        );
    }

    #[test]
    fn later_rule_sees_earlier_output() {
        let rules = RepairRules {
            rules_version: "t".to_string(),
            rules: vec![
                RepairRule::Replace {
                    find: "a".to_string(),
                    with: "b".to_string(),
                },
                RepairRule::Replace {
                    find: "bb".to_string(),
                    with: "c".to_string(),
                },
            ],
        };
        assert_eq!(rules.apply("ab"), "c");
    }

    #[test]
    fn completed_question_is_not_expanded_again() {
        let rules = defaults();
        let full = "Is this dog currently on heartworm prevention? *";
        assert_eq!(normalize_label(&rules, "heartworm prevention? *"), full);
        assert_eq!(normalize_label(&rules, full), full);
    }

    #[test]
    fn leading_fragment_is_stripped() {
        let rules = defaults();
        assert_eq!(
            normalize_label(&rules, "references. Dog's Weight *"),
            "Dog's Weight *"
        );
        assert_eq!(
            strip_leading_fragment("please list all. Where did you acquire the dog? *"),
            "Where did you acquire the dog? *"
        );
    }

    #[test]
    fn whole_label_fragment_survives() {
        assert_eq!(strip_leading_fragment("the dog. *"), "the dog. *");
        assert_eq!(strip_leading_fragment("e.org. *"), "e.org. *");
        assert_eq!(
            strip_leading_fragment("depending on the circumstances, but we try our best. *"),
            "depending on the circumstances, but we try our best. *"
        );
    }

    #[test]
    fn inline_example_is_dropped_before_lookup() {
        let rules = defaults();
        assert_eq!(
            normalize_label(&rules, "Owner's E-mail * ex: myname@example.com"),
            "Owner's E-mail *"
        );
    }

    #[test]
    fn empty_pattern_is_rejected() {
        let err = RepairRules::from_json(
            r#"{"rules_version":"x","rules":[{"kind":"replace","find":"","with":"y"}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("empty pattern"));
    }
}
