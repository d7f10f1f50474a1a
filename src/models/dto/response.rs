use serde::Serialize;

use crate::{
    models::domain::{
        company_info::is_found, CompanyField, CompanyInfo, ConfidenceEntry, ConfidenceLevel,
        GroundingChunk, SearchResult,
    },
    services::{source_links::extract_clean_url, verification::VerificationAliases},
};

/// A search result projected into what the UI renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub id: String,
    pub query: String,
    pub deep_search: bool,
    pub company_info: CompanyInfo,
    pub sources: Vec<GroundingChunk>,
    pub citations: Vec<CitationView>,
    pub links: LinksView,
    pub verified: VerifiedView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<ConfidenceView>,
    pub retrieved_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CitationView {
    pub uri: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinksView {
    pub website: String,
    pub parent_company_source: String,
    pub subsidiaries_source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedView {
    pub company_name: bool,
    pub registry_number: bool,
    pub location: bool,
    pub country: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceView {
    #[serde(flatten)]
    pub entry: ConfidenceEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

impl ResultView {
    pub fn new(result: &SearchResult, aliases: &VerificationAliases) -> Self {
        let info = &result.company_info;

        ResultView {
            id: result.id.clone(),
            query: result.query.clone(),
            deep_search: result.deep_search,
            company_info: info.clone(),
            sources: result.sources.clone(),
            citations: citations(&result.sources),
            links: LinksView {
                website: extract_clean_url(&info.website),
                parent_company_source: extract_clean_url(&info.parent_company_source),
                subsidiaries_source: extract_clean_url(&info.subsidiaries_source),
            },
            verified: VerifiedView::new(info, aliases),
            confidence: ConfidenceView::new(info),
            retrieved_at: result.retrieved_at.to_rfc3339(),
        }
    }
}

/// Web citations in reply order; map-only chunks are skipped.
pub fn citations(sources: &[GroundingChunk]) -> Vec<CitationView> {
    sources
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .filter_map(|web| {
            let uri = web.uri.clone().filter(|u| !u.is_empty())?;
            let title = web
                .title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| uri.clone());
            Some(CitationView { uri, title })
        })
        .collect()
}

impl VerifiedView {
    pub fn new(info: &CompanyInfo, aliases: &VerificationAliases) -> Self {
        let text = &info.verified_on_website;
        let check = |field| is_found(text) && aliases.is_field_verified(field, text);

        VerifiedView {
            company_name: check(CompanyField::CompanyName),
            registry_number: check(CompanyField::RegistryNumber),
            location: check(CompanyField::Location),
            country: check(CompanyField::Country),
        }
    }
}

impl ConfidenceView {
    /// `None` when the model reported no confidence level at all.
    pub fn new(info: &CompanyInfo) -> Option<Self> {
        if !info.is_found(CompanyField::ConfidenceLevel) {
            return None;
        }

        Some(ConfidenceView {
            entry: ConfidenceLevel::classify(&info.confidence_level).entry(),
            justification: Some(info.justification.clone()).filter(|j| is_found(j)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{GroundingSource, NOT_FOUND};

    fn result_with(info: CompanyInfo, sources: Vec<GroundingChunk>) -> SearchResult {
        SearchResult::new("Acme Corp", false, info, sources)
    }

    #[test]
    fn test_citations_skip_maps_and_fall_back_to_uri() {
        let sources = vec![
            GroundingChunk::web("https://acme.com", "Acme"),
            GroundingChunk {
                web: None,
                maps: Some(GroundingSource {
                    uri: Some("https://maps.example/acme".to_string()),
                    title: Some("Acme HQ".to_string()),
                }),
            },
            GroundingChunk {
                web: Some(GroundingSource {
                    uri: Some("https://sec.gov/acme".to_string()),
                    title: None,
                }),
                maps: None,
            },
        ];

        assert_eq!(
            citations(&sources),
            vec![
                CitationView {
                    uri: "https://acme.com".to_string(),
                    title: "Acme".to_string()
                },
                CitationView {
                    uri: "https://sec.gov/acme".to_string(),
                    title: "https://sec.gov/acme".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_links_are_cleaned() {
        let info = CompanyInfo {
            website: "acme.com".to_string(),
            parent_company_source: "See https://sec.gov/globex, 2021".to_string(),
            ..CompanyInfo::not_found()
        };
        let view = ResultView::new(&result_with(info, vec![]), &VerificationAliases::default());

        assert_eq!(view.links.website, "https://acme.com");
        assert_eq!(view.links.parent_company_source, "https://sec.gov/globex");
        assert_eq!(view.links.subsidiaries_source, "#");
    }

    #[test]
    fn test_verified_flags_use_aliases() {
        let info = CompanyInfo {
            verified_on_website: "Company name and street address".to_string(),
            ..CompanyInfo::not_found()
        };
        let verified = VerifiedView::new(&info, &VerificationAliases::default());

        assert_eq!(
            verified,
            VerifiedView {
                company_name: true,
                registry_number: false,
                location: true,
                country: false,
            }
        );
    }

    #[test]
    fn test_sentinel_verification_text_verifies_nothing() {
        let verified = VerifiedView::new(&CompanyInfo::not_found(), &VerificationAliases::default());
        assert!(!verified.company_name && !verified.location && !verified.country);
    }

    #[test]
    fn test_confidence_absent_when_not_reported() {
        assert!(ConfidenceView::new(&CompanyInfo::not_found()).is_none());
    }

    #[test]
    fn test_confidence_classified_with_justification() {
        let info = CompanyInfo {
            confidence_level: "Match – High Confidence".to_string(),
            justification: "Registry number shown in the site footer.".to_string(),
            ..CompanyInfo::not_found()
        };
        let view = ConfidenceView::new(&info).unwrap();

        assert_eq!(view.entry, ConfidenceLevel::HighConfidenceMatch.entry());
        assert_eq!(
            view.justification.as_deref(),
            Some("Registry number shown in the site footer.")
        );
    }

    #[test]
    fn test_unrecognised_confidence_shows_no_match() {
        let info = CompanyInfo {
            confidence_level: "Probably".to_string(),
            justification: NOT_FOUND.to_string(),
            ..CompanyInfo::not_found()
        };
        let view = ConfidenceView::new(&info).unwrap();

        assert_eq!(view.entry.level, "No Match");
        assert!(view.justification.is_none());
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = ResultView::new(
            &result_with(CompanyInfo::not_found(), vec![]),
            &VerificationAliases::default(),
        );
        let value = serde_json::to_value(&view).unwrap();

        assert_eq!(value["companyInfo"]["companyName"], NOT_FOUND);
        assert_eq!(value["links"]["website"], "#");
        assert_eq!(value["verified"]["registryNumber"], false);
        assert!(value.get("confidence").is_none());
    }
}
