/// Truncate `value` to `max` characters, appending an ellipsis when it was
/// longer. Counted in characters, not bytes, so multibyte titles never split
/// a code point.
pub fn truncate_with_ellipsis(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let mut out: String = value.chars().take(max).collect();
        out.push_str("...");
        out
    } else {
        value.to_string()
    }
}
