use std::collections::HashMap;

use crate::{
    errors::{AppError, AppResult},
    models::domain::CompanyField,
};

/// True when `verified_on_website` mentions `field_key`, ignoring case.
pub fn is_verified(field_key: &str, verified_on_website: &str) -> bool {
    verified_on_website
        .to_lowercase()
        .contains(&field_key.to_lowercase())
}

/// Fields that carry a "verified on website" indicator.
pub const VERIFIABLE_FIELDS: [CompanyField; 4] = [
    CompanyField::CompanyName,
    CompanyField::RegistryNumber,
    CompanyField::Location,
    CompanyField::Country,
];

/// Keys that count as a mention of a field in the model's
/// "Verified On Website" answer. Not exhaustive; overridable from config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationAliases {
    aliases: HashMap<CompanyField, Vec<String>>,
}

impl Default for VerificationAliases {
    fn default() -> Self {
        let defaults: [(CompanyField, &[&str]); 4] = [
            (CompanyField::CompanyName, &["Company Name", "Legal Name", "Entity Name"]),
            (
                CompanyField::RegistryNumber,
                &["Registry Number", "Registration Number", "Company Number"],
            ),
            (CompanyField::Location, &["Location", "Address"]),
            (CompanyField::Country, &["Country"]),
        ];

        Self {
            aliases: defaults
                .iter()
                .map(|(field, keys)| (*field, keys.iter().map(|k| k.to_string()).collect()))
                .collect(),
        }
    }
}

impl VerificationAliases {
    /// Parses `Field=alias|alias;Field=alias`, replacing the defaults of
    /// every field it names. Field names are reply labels, e.g. `Location`.
    pub fn parse(value: &str) -> AppResult<Self> {
        let mut result = Self::default();

        for entry in value.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, keys) = entry.split_once('=').ok_or_else(|| {
                AppError::Configuration(format!(
                    "VERIFIED_ALIASES entry '{}' is missing '='",
                    entry
                ))
            })?;

            let field = VERIFIABLE_FIELDS
                .iter()
                .copied()
                .find(|f| f.label().eq_ignore_ascii_case(name.trim()))
                .ok_or_else(|| {
                    AppError::Configuration(format!(
                        "VERIFIED_ALIASES names unknown field '{}'",
                        name.trim()
                    ))
                })?;

            let keys: Vec<String> = keys
                .split('|')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect();
            if keys.is_empty() {
                return Err(AppError::Configuration(format!(
                    "VERIFIED_ALIASES gives no aliases for '{}'",
                    field.label()
                )));
            }

            result.aliases.insert(field, keys);
        }

        Ok(result)
    }

    pub fn keys_for(&self, field: CompanyField) -> &[String] {
        self.aliases.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_field_verified(&self, field: CompanyField, verified_on_website: &str) -> bool {
        self.keys_for(field)
            .iter()
            .any(|key| is_verified(key, verified_on_website))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_verified_substring_match() {
        let text = "Company Name, Location";
        assert!(is_verified("Company Name", text));
        assert!(!is_verified("Registry Number", text));
    }

    #[test]
    fn test_is_verified_ignores_case() {
        assert!(is_verified("company name", "COMPANY NAME and country"));
        assert!(is_verified("Country", "company name and country"));
    }

    #[test]
    fn test_location_matches_address_alias() {
        let aliases = VerificationAliases::default();
        assert!(aliases.is_field_verified(CompanyField::Location, "Street address, Country"));
        assert!(aliases.is_field_verified(CompanyField::Country, "Street address, Country"));
        assert!(!aliases.is_field_verified(CompanyField::RegistryNumber, "Street address, Country"));
    }

    #[test]
    fn test_non_verifiable_field_has_no_keys() {
        let aliases = VerificationAliases::default();
        assert!(aliases.keys_for(CompanyField::Website).is_empty());
        assert!(!aliases.is_field_verified(CompanyField::Website, "Website"));
    }

    #[test]
    fn test_parse_overrides_only_named_fields() {
        let aliases = VerificationAliases::parse("location=Premises | HQ ;").unwrap();
        assert_eq!(
            aliases.keys_for(CompanyField::Location),
            &["Premises".to_string(), "HQ".to_string()]
        );
        assert_eq!(
            aliases.keys_for(CompanyField::Country),
            VerificationAliases::default().keys_for(CompanyField::Country)
        );
    }

    #[test]
    fn test_parse_rejects_bad_entries() {
        assert!(VerificationAliases::parse("Location").is_err());
        assert!(VerificationAliases::parse("Website=Domain").is_err());
        assert!(VerificationAliases::parse("Country=").is_err());
    }
}
