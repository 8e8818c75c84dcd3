/// Flattens a free-text field onto one line.
///
/// Newlines and carriage returns become spaces, whitespace runs collapse to a
/// single space and the result is trimmed.
pub fn normalize(field: &str) -> String {
    field
        .replace(['\n', '\r'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Joins the non-blank name parts in first, middle, last order.
///
/// An empty result means the contact has no usable name.
pub fn combine_name(first: &str, middle: &str, last: &str) -> String {
    [first, middle, last]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
