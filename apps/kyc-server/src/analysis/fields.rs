//! `Field: Value` table parsing for structured KYC text.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KycField {
    pub field: String,
    pub value: String,
}

/// One row per line containing `": "`, split at the first separator.
///
/// Markdown emphasis and list bullets around the field name are stripped,
/// since the structuring stage often answers `- **Name:** Jane Doe`.
pub fn parse_fields(text: &str) -> Vec<KycField> {
    text.lines()
        .filter_map(|line| {
            let line = line.replace("**", "");
            let (field, value) = line.split_once(": ")?;
            Some(KycField {
                field: clean(field),
                value: clean(value),
            })
        })
        .filter(|row| !row.field.is_empty())
        .collect()
}

fn clean(part: &str) -> String {
    part.trim()
        .trim_start_matches(['-', '*', '•'])
        .trim()
        .to_string()
}
