//! Category normalization and the canonical display table.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

/// Bucket used when an expense carries no usable category.
pub const GENERAL_CATEGORY: &str = "general";

static CATEGORY_LABELS: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        ("general", "General"),
        ("rent", "Rent"),
        ("food", "Food"),
        ("bills", "Bills"),
        ("transport", "Transport"),
        ("shopping", "Shopping"),
        ("entertainment", "Entertainment"),
        ("other", "Other"),
    ])
});

/// Trims and lowercases a category; empty input falls back to
/// [`GENERAL_CATEGORY`]. Unknown categories stay free-form.
pub fn normalize_category(raw: &str) -> String {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        GENERAL_CATEGORY.to_string()
    } else {
        normalized
    }
}

/// Human label for a normalized category key.
pub fn canonical_label(category: &str) -> &str {
    CATEGORY_LABELS.get(category).copied().unwrap_or(category)
}
