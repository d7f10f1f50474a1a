use serde::{Deserialize, Serialize};

/// How strongly the identified web domain matches the target company.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    #[serde(rename = "Match – High Confidence")]
    HighConfidenceMatch,
    #[serde(rename = "Match – Medium Confidence")]
    MediumConfidenceMatch,
    #[serde(rename = "Match – Low Confidence")]
    LowConfidenceMatch,
    #[serde(rename = "Non-Investable")]
    NonInvestable,
    #[serde(rename = "No Match")]
    NoMatch,
}

/// Display entry of the confidence table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceEntry {
    pub level: &'static str,
    pub description: &'static str,
    pub color_class: &'static str,
    pub is_match: bool,
}

impl ConfidenceLevel {
    pub const ALL: [ConfidenceLevel; 5] = [
        ConfidenceLevel::HighConfidenceMatch,
        ConfidenceLevel::MediumConfidenceMatch,
        ConfidenceLevel::LowConfidenceMatch,
        ConfidenceLevel::NonInvestable,
        ConfidenceLevel::NoMatch,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::HighConfidenceMatch => "Match – High Confidence",
            ConfidenceLevel::MediumConfidenceMatch => "Match – Medium Confidence",
            ConfidenceLevel::LowConfidenceMatch => "Match – Low Confidence",
            ConfidenceLevel::NonInvestable => "Non-Investable",
            ConfidenceLevel::NoMatch => "No Match",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConfidenceLevel::HighConfidenceMatch => "The registry number appears on the website. -OR- The legal entity name, street address, and at least one officer/executive name matches.",
            ConfidenceLevel::MediumConfidenceMatch => "The legal entity name, city, and/or industry match, but there is no confirmed match of a street address or officer/executive.",
            ConfidenceLevel::LowConfidenceMatch => "Domain matches casual/DBA names and general locations/industries, but there is no confirmed match between legal names, people, or street address.",
            ConfidenceLevel::NonInvestable => "The matching domain is for a holding company or shell company and does not actually operate as an investable business.",
            ConfidenceLevel::NoMatch => "A domain could not be identified that meets any of the match criteria. If there is a suspected domain, add it to the Notes column.",
        }
    }

    pub fn color_class(&self) -> &'static str {
        match self {
            ConfidenceLevel::HighConfidenceMatch => "confidence-high",
            ConfidenceLevel::MediumConfidenceMatch => "confidence-medium",
            ConfidenceLevel::LowConfidenceMatch => "confidence-low",
            ConfidenceLevel::NonInvestable => "confidence-non-investable",
            ConfidenceLevel::NoMatch => "confidence-no-match",
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(
            self,
            ConfidenceLevel::HighConfidenceMatch
                | ConfidenceLevel::MediumConfidenceMatch
                | ConfidenceLevel::LowConfidenceMatch
        )
    }

    pub fn entry(&self) -> ConfidenceEntry {
        ConfidenceEntry {
            level: self.label(),
            description: self.description(),
            color_class: self.color_class(),
            is_match: self.is_match(),
        }
    }

    pub fn table() -> Vec<ConfidenceEntry> {
        Self::ALL.iter().map(|level| level.entry()).collect()
    }

    /// Picks the first level, in table order, whose label occurs in `text`.
    /// Falls back to `NoMatch`. Dash variants and case are ignored since the
    /// model does not reliably reproduce the en dash.
    pub fn classify(text: &str) -> ConfidenceLevel {
        let haystack = normalize(text);
        Self::ALL
            .iter()
            .copied()
            .find(|level| haystack.contains(&normalize(level.label())))
            .unwrap_or(ConfidenceLevel::NoMatch)
    }
}

fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '–' | '—' | '‑' | '−' => '-',
            other => other,
        })
        .collect::<String>()
        .to_lowercase()
}
