//! Null-tolerant string predicates.

/// `None`, `""`, or whitespace only.
pub fn is_blank(s: Option<&str>) -> bool {
    s.map_or(true, |v| v.trim().is_empty())
}

/// `None` or `""`. Whitespace counts as content.
pub fn is_empty(s: Option<&str>) -> bool {
    s.map_or(true, str::is_empty)
}

/// Case-insensitive name equality, folding the same way name sets are lower-cased.
pub fn same_name(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
