//! Pure presence and membership predicates shared by the config resolvers
//! and planners.

/// Drops empty strings so that "unset" and "set to empty" read the same.
#[must_use]
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Returns `true` if any item in `items` equals `needle`.
pub fn contains<'a, I>(items: I, needle: &str) -> bool
where
    I: IntoIterator<Item = &'a String>,
{
    items.into_iter().any(|item| item == needle)
}
