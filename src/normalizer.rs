// Free-text cleanup applied to model cells before clustering.

/// Normalizes a raw model cell for matching: lowercase, `-`, `_`, `.` and
/// `,` become spaces, whitespace runs collapse to a single space, edges are
/// trimmed. Missing or blank input maps to the empty string. Total, never
/// fails.
pub fn normalize(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let mut text = raw.to_lowercase();
    for sep in ['-', '_', '.', ','] {
        text = text.replace(sep, " ");
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
