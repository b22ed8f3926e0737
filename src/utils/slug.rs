//! Category slugs and keyword-based category inference.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid character class regex"));
static DASH_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("valid dash regex"));

/// Slug used when an admin creates a category without one: the trimmed name,
/// lowercased, with whitespace runs replaced by `-`.
pub fn default_slug(name: &str) -> String {
    WHITESPACE
        .replace_all(&name.trim().to_lowercase(), "-")
        .into_owned()
}

/// Strict slug: lowercase ASCII letters, digits and single dashes.
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lowered, "");
    let dashed = WHITESPACE.replace_all(stripped.trim(), "-");
    DASH_RUNS.replace_all(&dashed, "-").into_owned()
}

/// Default categories as `(name, sort_order)`.
pub const DEFAULT_CATEGORIES: [(&str, i32); 5] = [
    ("Haircuts", 0),
    ("Beard Care", 1),
    ("Shaves", 2),
    ("Color", 3),
    ("Other Services", 99),
];

const FALLBACK_CATEGORY: &str = "Other Services";

const KEYWORDS: [(&[&str], &str); 4] = [
    (&["cut", "fade"], "Haircuts"),
    (&["beard", "mustache"], "Beard Care"),
    (&["shave"], "Shaves"),
    (&["color", "tint"], "Color"),
];

/// Picks a default category name for a service from keywords in its name.
pub fn infer_category(service_name: &str) -> &'static str {
    let name = service_name.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(words, _)| words.iter().any(|w| name.contains(w)))
        .map(|(_, category)| *category)
        .unwrap_or(FALLBACK_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slug() {
        assert_eq!(default_slug("Beard Care"), "beard-care");
        assert_eq!(default_slug("  Hot   Towel Shave "), "hot-towel-shave");
        assert_eq!(default_slug("Color & Tint"), "color-&-tint");
    }

    #[test]
    fn test_slugify_strips_symbols() {
        assert_eq!(slugify("Color & Tint"), "color-tint");
        assert_eq!(slugify("Other Services"), "other-services");
        assert_eq!(slugify("  Kids -- Cuts! "), "kids-cuts");
    }

    #[test]
    fn test_infer_category_by_keyword() {
        assert_eq!(infer_category("Skin Fade"), "Haircuts");
        assert_eq!(infer_category("Classic Cut"), "Haircuts");
        assert_eq!(infer_category("Beard Trim"), "Beard Care");
        assert_eq!(infer_category("Mustache Styling"), "Beard Care");
        assert_eq!(infer_category("Hot Towel Shave"), "Shaves");
        assert_eq!(infer_category("Grey Tint"), "Color");
        assert_eq!(infer_category("Scalp Massage"), "Other Services");
    }

    #[test]
    fn test_default_categories_have_slugs() {
        let slugs: Vec<String> = DEFAULT_CATEGORIES.iter().map(|(n, _)| slugify(n)).collect();
        assert_eq!(
            slugs,
            ["haircuts", "beard-care", "shaves", "color", "other-services"]
        );
    }
}
