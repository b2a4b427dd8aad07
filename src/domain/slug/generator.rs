// src/domain/slug/generator.rs
use regex::Regex;
use std::sync::LazyLock;

// Word characters are ASCII only; accented letters are dropped, not transliterated.
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_\s-]").expect("valid slug character class"));
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("valid slug separator class"));

/// Normalise a title into a base slug.
///
/// Lowercases, trims, drops everything that is not `[a-z0-9_]`, whitespace or
/// a hyphen, collapses separator runs into a single `-` and strips hyphens
/// from both ends. Empty input yields an empty string; callers creating
/// records must treat that as a validation failure.
pub fn generate_slug(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let lowered = input.to_lowercase();
    let cleaned = DISALLOWED.replace_all(lowered.trim(), "");
    let joined = SEPARATORS.replace_all(&cleaned, "-");
    joined.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::generate_slug;

    #[test]
    fn empty_input_yields_empty_slug() {
        assert_eq!(generate_slug(""), "");
        assert_eq!(generate_slug("   "), "");
        assert_eq!(generate_slug("!!!"), "");
    }

    #[test]
    fn punctuation_is_dropped() {
        assert_eq!(generate_slug("Hello, World!"), "hello-world");
    }

    #[test]
    fn separator_runs_collapse() {
        assert_eq!(
            generate_slug("  Multiple   spaces_and-hyphens  "),
            "multiple-spaces-and-hyphens"
        );
        assert_eq!(generate_slug("a -_- b"), "a-b");
    }

    #[test]
    fn non_ascii_letters_are_removed() {
        assert_eq!(generate_slug("Ça c'est déjà vu"), "a-cest-dj-vu");
        assert_eq!(generate_slug("Amélie"), "amlie");
        assert_eq!(generate_slug("東京 Story"), "story");
    }

    #[test]
    fn leading_and_trailing_hyphens_are_stripped() {
        assert_eq!(generate_slug("--The Matrix--"), "the-matrix");
        assert_eq!(generate_slug("(500) Days of Summer"), "500-days-of-summer");
    }

    #[test]
    fn reapplying_is_a_no_op() {
        for input in ["the-matrix", "a-1", "2001-a-space-odyssey", "x", "dune-part-2"] {
            let once = generate_slug(input);
            assert_eq!(generate_slug(&once), once);
            assert_eq!(once, input);
        }
        let once = generate_slug("  Spirited   Away (2001) ");
        assert_eq!(generate_slug(&once), once);
    }

    #[test]
    fn output_only_contains_slug_characters() {
        let slug = generate_slug("Mad Max: Fury Road — Black & Chrome Edition");
        assert_eq!(slug, "mad-max-fury-road-black-chrome-edition");
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        );
        assert!(!slug.contains("--"));
    }
}
