use once_cell::sync::Lazy;
use regex::Regex;

/// Href used when a field holds no usable link.
pub const NO_LINK: &str = "#";

// A match stops at whitespace, a comma, or a closing bracket so trailing
// citation text is not swallowed.
static HTTP_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://[^\s,)\]]+").expect("HTTP_URL is a valid regex"));
static WWW_HOST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)www\.[^\s,)\]]+").expect("WWW_HOST is a valid regex"));
static BARE_DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[a-z0-9](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9-]+)*\.[a-z]{2,}(?:/[^\s,)\]]*)?")
        .expect("BARE_DOMAIN is a valid regex")
});

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ')', '>', ']'];

/// Pulls a clickable URL out of a free-text source field.
///
/// Best effort: returns either an `http(s)` link or [`NO_LINK`], never fails.
pub fn extract_clean_url(value: &str) -> String {
    let value = value.trim();
    if value.is_empty()
        || value.eq_ignore_ascii_case(crate::models::domain::NOT_FOUND)
        || value.eq_ignore_ascii_case("none")
    {
        return NO_LINK.to_string();
    }

    let Some(found) = [&*HTTP_URL, &*WWW_HOST, &*BARE_DOMAIN]
        .iter()
        .find_map(|regex| regex.find(value))
    else {
        return NO_LINK.to_string();
    };

    let cleaned = found.as_str().trim_end_matches(TRAILING_PUNCTUATION);
    if !cleaned.contains('.') {
        return NO_LINK.to_string();
    }

    if cleaned.to_ascii_lowercase().starts_with("http") {
        cleaned.to_string()
    } else {
        format!("https://{}", cleaned)
    }
}
