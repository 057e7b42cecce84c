/// Normalize a user-typed country name: trim, collapse runs of whitespace,
/// upper-case the first letter of each word and lower-case the rest.
///
/// `"  new   zealand "` becomes `"New Zealand"`.
pub fn normalize_name(input: &str) -> String {
    input
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Render a list as `[a, b, c]`.
pub fn bracket_list<S: AsRef<str>>(items: &[S]) -> String {
    let joined = items.iter().map(|s| s.as_ref()).collect::<Vec<_>>().join(", ");
    format!("[{}]", joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("peru"), "Peru");
        assert_eq!(normalize_name("  new   zealand "), "New Zealand");
        assert_eq!(normalize_name("EASTERN united STATES"), "Eastern United States");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn test_bracket_list() {
        assert_eq!(bracket_list(&["A", "B"]), "[A, B]");
        let empty: [&str; 0] = [];
        assert_eq!(bracket_list(&empty), "[]");
    }
}
