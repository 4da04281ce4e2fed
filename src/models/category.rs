/// Category labels a transaction may carry. Matching is case-sensitive.
pub const ALLOWED_CATEGORIES: [&str; 5] = ["food", "travel", "bills", "entertainment", "other"];

/// Returns the allowed label equal to `name`, if any.
pub fn find_allowed(name: &str) -> Option<&'static str> {
    ALLOWED_CATEGORIES.iter().copied().find(|c| *c == name)
}

/// Comma-separated list of the allowed labels, for usage and error messages.
pub fn allowed_list() -> String {
    ALLOWED_CATEGORIES.join(", ")
}
