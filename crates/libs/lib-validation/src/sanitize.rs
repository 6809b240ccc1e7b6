//! # Input Transforms
//!
//! Sanitizers and display formatters. These never reject input, they only
//! reshape it; validation is a separate concern (see [`crate::validators`]).

/// Strip `<`, `>`, `"` and `'`, then collapse whitespace runs to single
/// spaces and trim the ends. Applying it twice gives the same answer as
/// applying it once.
pub fn sanitize_input(input: &str) -> String {
    let stripped: String = input
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '"' | '\''))
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render a raw phone value as `(XXX) XXX-XXXX`.
///
/// Non-digits are stripped first; anything other than exactly ten digits
/// comes back unchanged.
pub fn format_phone(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();

    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        input.to_string()
    }
}

/// Lower-case the whole string, then capitalize the first letter of each
/// whitespace-separated word, re-joined with single spaces.
pub fn capitalize_words(input: &str) -> String {
    input
        .to_lowercase()
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_and_collapses() {
        assert_eq!(sanitize_input("  hello   world  "), "hello world");
        assert_eq!(sanitize_input("<script>\"quoted\"</script>"), "scriptquoted/script");
        assert_eq!(sanitize_input("O'Brien"), "OBrien");
        assert_eq!(sanitize_input(""), "");
        assert_eq!(sanitize_input("   "), "");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let inputs = [
            "  hello   world  ",
            "a <",
            "< > \" '",
            "tabs\tand\nnewlines",
            "already clean",
            "",
        ];
        for input in inputs {
            let once = sanitize_input(input);
            assert_eq!(sanitize_input(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("5551234567"), "(555) 123-4567");
        assert_eq!(format_phone("555-123-4567"), "(555) 123-4567");
        assert_eq!(format_phone("123"), "123");
        assert_eq!(format_phone("555123456789"), "555123456789");
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("john smith"), "John Smith");
        assert_eq!(capitalize_words("JOHN SMITH"), "John Smith");
        assert_eq!(capitalize_words("  mary   jane  "), "Mary Jane");
        assert_eq!(capitalize_words(""), "");
    }
}
