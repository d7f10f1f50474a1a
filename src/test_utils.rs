#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{CompanyField, GroundingChunk, GroundingSource};

    /// Value used for every label in [`full_reply`].
    pub fn full_reply_values() -> Vec<(CompanyField, &'static str)> {
        vec![
            (CompanyField::CompanyName, "Acme Corporation"),
            (CompanyField::RegistryNumber, "C0123456"),
            (CompanyField::Location, "1 Road Runner Way, Phoenix, AZ 85001"),
            (CompanyField::Country, "USA"),
            (CompanyField::Website, "www.acme.com"),
            (CompanyField::WebsiteSummary, "Acme manufactures anvils and rocket skates."),
            (CompanyField::ParentCompany, "Acme Holdings Inc."),
            (CompanyField::ParentCompanySource, "https://sec.gov/acme-holdings (10-K, 2023)"),
            (CompanyField::Subsidiaries, "Acme Rockets LLC, Acme Anvils Ltd"),
            (CompanyField::SubsidiariesSource, "acme.com/brands."),
            (CompanyField::VerifiedOnWebsite, "Company Name, Registry Number, Address"),
            (CompanyField::VerifiedOfficers, "Wile E. Coyote (CEO) - acme.com/team"),
            (CompanyField::ConfidenceLevel, "Match – High Confidence"),
            (CompanyField::Justification, "The registry number is printed in the site footer."),
            (CompanyField::KeyExecutives, "Wile E. Coyote - CEO - Former engineer"),
            (CompanyField::RecentNewsSummary, "Acme opened a new plant in 2024."),
            (CompanyField::BusinessActivities, "Industrial tools and consumer gadgets."),
        ]
    }

    /// A reply that uses every label, with some markdown noise around it.
    pub fn full_reply() -> String {
        let mut reply = String::from("Here is what I found about the company.\n\n");
        for (field, value) in full_reply_values() {
            reply.push_str(&format!("- **{}:** {}  \n", field.label(), value));
        }
        reply.push_str("\nLet me know if you need anything else.");
        reply
    }

    /// Two web citations and one map citation.
    pub fn grounding_chunks() -> Vec<GroundingChunk> {
        vec![
            GroundingChunk::web("https://www.acme.com/about", "acme.com"),
            GroundingChunk {
                web: None,
                maps: Some(GroundingSource {
                    uri: Some("https://maps.example/acme".to_string()),
                    title: Some("Acme HQ".to_string()),
                }),
            },
            GroundingChunk::web("https://sec.gov/acme-holdings", "sec.gov"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::CompanyField;

    #[test]
    fn test_fixture_covers_every_field() {
        let values = full_reply_values();
        assert_eq!(values.len(), CompanyField::ALL.len());
        for field in CompanyField::ALL {
            assert!(values.iter().any(|(f, _)| *f == field), "{:?}", field);
        }
    }

    #[test]
    fn test_fixture_reply_contains_labels() {
        let reply = full_reply();
        for field in CompanyField::ALL {
            assert!(reply.contains(&format!("**{}:**", field.label())));
        }
    }
}
