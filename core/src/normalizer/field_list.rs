use super::model::CanonicalFieldEntry;
use crate::config::{FieldListFormat, PipelineConfig};
use crate::error::LabelResult;

/// Serializes the sorted field list in the configured format. String values
/// go through JSON escaping, which is also valid TypeScript.
pub fn render_field_list(
    entries: &[CanonicalFieldEntry],
    cfg: &PipelineConfig,
    table_version: &str,
) -> LabelResult<String> {
    match cfg.field_list_format {
        FieldListFormat::Typescript => render_typescript(entries, cfg, table_version),
        FieldListFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(entries)?)),
    }
}

fn render_typescript(
    entries: &[CanonicalFieldEntry],
    cfg: &PipelineConfig,
    table_version: &str,
) -> LabelResult<String> {
    let mut out = Vec::new();
    out.push(format!(
        "// Canonical field map for {} (required fields, {})",
        cfg.form_title, table_version
    ));
    out.push("// Auto-generated by normalize_labels. Do not edit by hand.".to_string());
    out.push(format!("export type {} = {{", cfg.field_type_name));
    out.push("  key: string;".to_string());
    out.push("  label: string;".to_string());
    out.push("  required: boolean;".to_string());
    out.push("};".to_string());
    out.push("".to_string());
    out.push(format!(
        "export const {}: {}[] = [",
        cfg.field_list_const, cfg.field_type_name
    ));
    for e in entries {
        out.push(format!(
            "  {{ key: {}, label: {}, required: {} }},",
            serde_json::to_string(&e.key)?,
            serde_json::to_string(&e.label)?,
            e.required
        ));
    }
    out.push("];".to_string());
    out.push("".to_string());
    Ok(out.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<CanonicalFieldEntry> {
        vec![
            CanonicalFieldEntry {
                key: "dog-sex".to_string(),
                label: "Gender".to_string(),
                required: true,
            },
            CanonicalFieldEntry {
                key: "nickname".to_string(),
                label: "Dog's \"call\" name \\ alias".to_string(),
                required: true,
            },
        ]
    }

    #[test]
    fn typescript_declares_type_and_const() {
        let ts = render_field_list(&entries(), &PipelineConfig::default(), "v1").unwrap();
        assert!(ts.starts_with("// Canonical field map for Owner Surrender (required fields, v1)\n"));
        assert!(ts.contains("export type OwnerSurrenderField = {\n  key: string;"));
        assert!(ts.contains("export const OWNER_SURRENDER_REQUIRED_FIELDS: OwnerSurrenderField[] = [\n"));
        assert!(ts.contains("  { key: \"dog-sex\", label: \"Gender\", required: true },\n"));
        assert!(ts.ends_with("];\n"));
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        let ts = render_field_list(&entries(), &PipelineConfig::default(), "v1").unwrap();
        assert!(ts.contains(r#"label: "Dog's \"call\" name \\ alias""#));
    }

    #[test]
    fn json_format_round_trips() {
        let cfg = PipelineConfig {
            field_list_format: FieldListFormat::Json,
            ..PipelineConfig::default()
        };
        let json = render_field_list(&entries(), &cfg, "v1").unwrap();
        let back: Vec<CanonicalFieldEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entries());
    }
}
