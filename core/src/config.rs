use crate::error::{LabelError, LabelResult};
use crate::storage::files::read_text;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldListFormat {
    #[default]
    Typescript,
    Json,
}

/// Every path and name the two stages touch. Nothing in the library reads a
/// path from anywhere else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub source_path: PathBuf,
    pub report_path: PathBuf,
    pub field_list_path: PathBuf,
    /// Curated label table; the embedded default is used when unset.
    pub curated_table_path: Option<PathBuf>,
    /// Ordered repair rules; the embedded default is used when unset.
    pub repair_rules_path: Option<PathBuf>,
    pub form_title: String,
    pub field_type_name: String,
    pub field_list_const: String,
    pub field_list_format: FieldListFormat,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("_ref/forms-txt/RMGDRI Owner Surrender (2).txt"),
            report_path: PathBuf::from("_ref/forms-txt/owner-surrender-required-labels.report.md"),
            field_list_path: PathBuf::from("src/lib/forms/owner-surrender/field-map.ts"),
            curated_table_path: None,
            repair_rules_path: None,
            form_title: "Owner Surrender".to_string(),
            field_type_name: "OwnerSurrenderField".to_string(),
            field_list_const: "OWNER_SURRENDER_REQUIRED_FIELDS".to_string(),
            field_list_format: FieldListFormat::Typescript,
        }
    }
}

impl PipelineConfig {
    pub fn load(path: &Path) -> LabelResult<Self> {
        let raw = read_text(path)?;
        let cfg: Self = serde_json::from_str(&raw).map_err(|e| {
            LabelError::InvalidConfig(format!("{}: {}", path.display(), e))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Names end up as identifiers in generated TypeScript.
    pub fn validate(&self) -> LabelResult<()> {
        for (field, value) in [
            ("field_type_name", &self.field_type_name),
            ("field_list_const", &self.field_list_const),
        ] {
            if !is_identifier(value) {
                return Err(LabelError::InvalidConfig(format!(
                    "{} must be an identifier, got {:?}",
                    field, value
                )));
            }
        }
        if self.form_title.trim().is_empty() {
            return Err(LabelError::InvalidConfig(
                "form_title must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
