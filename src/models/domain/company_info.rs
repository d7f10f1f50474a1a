use serde::{Deserialize, Serialize};

/// Value used for any field the model did not report.
pub const NOT_FOUND: &str = "Not found";

/// A labeled field of the model reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompanyField {
    CompanyName,
    RegistryNumber,
    Location,
    Country,
    Website,
    WebsiteSummary,
    ParentCompany,
    ParentCompanySource,
    Subsidiaries,
    SubsidiariesSource,
    VerifiedOnWebsite,
    VerifiedOfficers,
    ConfidenceLevel,
    Justification,
    KeyExecutives,
    RecentNewsSummary,
    BusinessActivities,
}

impl CompanyField {
    /// Order in which labels are requested from the model.
    pub const ALL: [CompanyField; 17] = [
        CompanyField::CompanyName,
        CompanyField::RegistryNumber,
        CompanyField::Location,
        CompanyField::Country,
        CompanyField::Website,
        CompanyField::WebsiteSummary,
        CompanyField::ParentCompany,
        CompanyField::ParentCompanySource,
        CompanyField::Subsidiaries,
        CompanyField::SubsidiariesSource,
        CompanyField::VerifiedOnWebsite,
        CompanyField::VerifiedOfficers,
        CompanyField::ConfidenceLevel,
        CompanyField::Justification,
        CompanyField::KeyExecutives,
        CompanyField::RecentNewsSummary,
        CompanyField::BusinessActivities,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CompanyField::CompanyName => "Company Name",
            CompanyField::RegistryNumber => "Registry Number",
            CompanyField::Location => "Location",
            CompanyField::Country => "Country",
            CompanyField::Website => "Website",
            CompanyField::WebsiteSummary => "Website Summary",
            CompanyField::ParentCompany => "Parent Company",
            CompanyField::ParentCompanySource => "Parent Company Source",
            CompanyField::Subsidiaries => "Subsidiaries",
            CompanyField::SubsidiariesSource => "Subsidiaries Source",
            CompanyField::VerifiedOnWebsite => "Verified On Website",
            CompanyField::VerifiedOfficers => "Verified Officers",
            CompanyField::ConfidenceLevel => "Confidence Level",
            CompanyField::Justification => "Justification",
            CompanyField::KeyExecutives => "Key Executives",
            CompanyField::RecentNewsSummary => "Recent News Summary",
            CompanyField::BusinessActivities => "Business Activities",
        }
    }

    /// Placeholder shown to the model next to the label in the output block.
    pub fn hint(&self) -> &'static str {
        match self {
            CompanyField::CompanyName => "[Official legal name]",
            CompanyField::RegistryNumber => "[Company registry / registration number]",
            CompanyField::Location => "[Full registered address]",
            CompanyField::Country => "[Country]",
            CompanyField::Website => "[Official website URL]",
            CompanyField::WebsiteSummary => "[One or two sentences describing what the website says the company does]",
            CompanyField::ParentCompany => "[Parent company name, or \"None\"]",
            CompanyField::ParentCompanySource => "[URL proving the parent relationship]",
            CompanyField::Subsidiaries => "[Comma-separated list of notable subsidiaries, or \"None\"]",
            CompanyField::SubsidiariesSource => "[URL proving the subsidiaries]",
            CompanyField::VerifiedOnWebsite => "[Comma-separated list of the fields above confirmed on the website]",
            CompanyField::VerifiedOfficers => "[Officers from the filing also named on the website, with their source]",
            CompanyField::ConfidenceLevel => "[Selected Confidence Level from the options above]",
            CompanyField::Justification => "[A brief sentence explaining why this result and confidence level were chosen, based on the sources]",
            CompanyField::KeyExecutives => "[Name - Title - one-line background, for each executive]",
            CompanyField::RecentNewsSummary => "[Two or three sentences on news from the last 12 months]",
            CompanyField::BusinessActivities => "[Products, services, markets and industry classification]",
        }
    }

    /// Fields requested only when deep search is enabled.
    pub fn is_deep_search_only(&self) -> bool {
        matches!(
            self,
            CompanyField::KeyExecutives
                | CompanyField::RecentNewsSummary
                | CompanyField::BusinessActivities
        )
    }
}

/// Result record for one query. Every field is always populated, either with
/// the extracted value or with [`NOT_FOUND`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub company_name: String,
    pub registry_number: String,
    pub location: String,
    pub country: String,
    pub website: String,
    pub parent_company: String,
    pub parent_company_source: String,
    pub subsidiaries: String,
    pub subsidiaries_source: String,
    pub website_summary: String,
    pub confidence_level: String,
    pub justification: String,
    pub verified_on_website: String,
    pub verified_officers: String,
    pub key_executives: String,
    pub recent_news_summary: String,
    pub business_activities: String,
}

impl CompanyInfo {
    pub fn not_found() -> Self {
        Self::from_fields(|_| NOT_FOUND.to_string())
    }

    /// Builds a record by asking `value_of` for each field.
    pub fn from_fields<F>(mut value_of: F) -> Self
    where
        F: FnMut(CompanyField) -> String,
    {
        CompanyInfo {
            company_name: value_of(CompanyField::CompanyName),
            registry_number: value_of(CompanyField::RegistryNumber),
            location: value_of(CompanyField::Location),
            country: value_of(CompanyField::Country),
            website: value_of(CompanyField::Website),
            parent_company: value_of(CompanyField::ParentCompany),
            parent_company_source: value_of(CompanyField::ParentCompanySource),
            subsidiaries: value_of(CompanyField::Subsidiaries),
            subsidiaries_source: value_of(CompanyField::SubsidiariesSource),
            website_summary: value_of(CompanyField::WebsiteSummary),
            confidence_level: value_of(CompanyField::ConfidenceLevel),
            justification: value_of(CompanyField::Justification),
            verified_on_website: value_of(CompanyField::VerifiedOnWebsite),
            verified_officers: value_of(CompanyField::VerifiedOfficers),
            key_executives: value_of(CompanyField::KeyExecutives),
            recent_news_summary: value_of(CompanyField::RecentNewsSummary),
            business_activities: value_of(CompanyField::BusinessActivities),
        }
    }

    pub fn get(&self, field: CompanyField) -> &str {
        match field {
            CompanyField::CompanyName => &self.company_name,
            CompanyField::RegistryNumber => &self.registry_number,
            CompanyField::Location => &self.location,
            CompanyField::Country => &self.country,
            CompanyField::Website => &self.website,
            CompanyField::WebsiteSummary => &self.website_summary,
            CompanyField::ParentCompany => &self.parent_company,
            CompanyField::ParentCompanySource => &self.parent_company_source,
            CompanyField::Subsidiaries => &self.subsidiaries,
            CompanyField::SubsidiariesSource => &self.subsidiaries_source,
            CompanyField::VerifiedOnWebsite => &self.verified_on_website,
            CompanyField::VerifiedOfficers => &self.verified_officers,
            CompanyField::ConfidenceLevel => &self.confidence_level,
            CompanyField::Justification => &self.justification,
            CompanyField::KeyExecutives => &self.key_executives,
            CompanyField::RecentNewsSummary => &self.recent_news_summary,
            CompanyField::BusinessActivities => &self.business_activities,
        }
    }

    pub fn is_found(&self, field: CompanyField) -> bool {
        is_found(self.get(field))
    }
}

pub fn is_found(value: &str) -> bool {
    !value.trim().eq_ignore_ascii_case(NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_populates_every_field() {
        let info = CompanyInfo::not_found();
        for field in CompanyField::ALL {
            assert_eq!(info.get(field), NOT_FOUND, "{:?}", field);
        }
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<&str> = CompanyField::ALL.iter().map(|f| f.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), CompanyField::ALL.len());
    }

    #[test]
    fn test_deep_search_fields_are_last() {
        let deep: Vec<CompanyField> = CompanyField::ALL
            .iter()
            .copied()
            .filter(|f| f.is_deep_search_only())
            .collect();
        assert_eq!(deep, CompanyField::ALL[14..].to_vec());
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(CompanyInfo::not_found()).unwrap();
        assert_eq!(value["companyName"], NOT_FOUND);
        assert_eq!(value["parentCompanySource"], NOT_FOUND);
        assert_eq!(value.as_object().unwrap().len(), 17);
    }

    #[test]
    fn test_is_found() {
        assert!(!is_found("Not found"));
        assert!(!is_found(" not found "));
        assert!(is_found("Acme Corp"));
    }
}
