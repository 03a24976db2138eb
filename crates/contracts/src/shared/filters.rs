/// A filter set that can be flattened into query-string pairs.
///
/// Pairs are yielded in a fixed order with their wire key. Absent values are
/// yielded as `None`; the query builder drops them together with empty strings.
pub trait QueryFilters {
    fn query_pairs(&self) -> Vec<(&'static str, Option<&str>)>;
}

/// Normalizes free-text input from a form field: trimmed, `None` when empty.
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
