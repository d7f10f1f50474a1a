use crate::{
    constants::prompts::{
        BUSINESS_RULES, DEEP_SEARCH_INSTRUCTIONS, OUTPUT_FORMAT_INTRO, OUTPUT_FORMAT_OUTRO,
        ROLE_FRAMING, SOURCING_RULES, STEP_CONFIDENCE_ASSESSMENT, STEP_CORE_INFO, STEP_DEEP_DIVE,
        STEP_WEBSITE_CROSS_CHECK,
    },
    models::domain::{CompanyField, ConfidenceLevel},
};

/// Builds the research instruction sent to the model.
///
/// The query is embedded verbatim. The output depends only on the arguments,
/// and the deep search variant only ever adds lines to the standard one.
pub fn build_prompt(query: &str, deep_search: bool) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(ROLE_FRAMING.to_string());
    lines.push(String::new());
    lines.push(format!("Company query: \"{}\"", query));
    lines.push(String::new());

    lines.push("Business rules:".to_string());
    for (i, rule) in BUSINESS_RULES.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, rule));
    }
    lines.push(String::new());

    lines.push("Strict sourcing rules:".to_string());
    for rule in SOURCING_RULES {
        lines.push(format!("- {}", rule));
    }
    lines.push(String::new());

    lines.push("Procedure:".to_string());
    lines.push(STEP_CORE_INFO.to_string());
    lines.push(STEP_WEBSITE_CROSS_CHECK.to_string());
    lines.push(STEP_CONFIDENCE_ASSESSMENT.to_string());
    for level in ConfidenceLevel::ALL {
        lines.push(format!("- {}: {}", level.label(), level.description()));
    }
    lines.push(STEP_DEEP_DIVE.to_string());
    lines.push(String::new());

    if deep_search {
        lines.extend(DEEP_SEARCH_INSTRUCTIONS.iter().map(|l| l.to_string()));
        lines.push(String::new());
    }

    lines.push(OUTPUT_FORMAT_INTRO.to_string());
    lines.extend(
        CompanyField::ALL
            .iter()
            .filter(|field| deep_search || !field.is_deep_search_only())
            .map(|field| format!("{}: {}", field.label(), field.hint())),
    );
    lines.push(String::new());
    lines.push(OUTPUT_FORMAT_OUTRO.to_string());

    lines.join("\n")
}
