use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::{CompanyField, CompanyInfo, NOT_FOUND};

/// One line-anchored, case-insensitive pattern per label. Leading list bullets
/// and markdown bold around the label are tolerated.
static FIELD_PATTERNS: Lazy<Vec<(CompanyField, Regex)>> = Lazy::new(|| {
    CompanyField::ALL
        .iter()
        .map(|field| {
            let pattern = format!(
                r"(?im)^[ \t]*(?:[-*•][ \t]*)?(?:\*\*)?{}(?:\*\*)?[ \t]*:(?:\*\*)?[ \t]*(.*)$",
                regex::escape(field.label())
            );
            let regex = Regex::new(&pattern).expect("escaped label is a valid regex pattern");
            (*field, regex)
        })
        .collect()
});

/// Extracts the labeled fields from a model reply. Never fails: fields that
/// cannot be found are set to "Not found".
pub fn parse_response(text: &str) -> CompanyInfo {
    CompanyInfo::from_fields(|field| extract_field(text, field))
}

fn extract_field(text: &str, field: CompanyField) -> String {
    FIELD_PATTERNS
        .iter()
        .find(|(f, _)| *f == field)
        .and_then(|(_, regex)| regex.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().trim_end_matches("**").trim())
        // An empty value counts as missing, so every field is either text or the sentinel.
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| NOT_FOUND.to_string())
}
