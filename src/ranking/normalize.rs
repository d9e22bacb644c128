//! Text normalization shared by queries and candidate fields.
//!
//! Lowercase, turn anything that is not `[a-z0-9]` or whitespace into a space,
//! collapse whitespace, then drop the filler words that appear in most school
//! names so "University of California" and "california" compare equal.

/// Tokens removed from both sides before comparing
pub const STOPWORDS: &[&str] = &[
    "the", "of", "at", "and", "college", "university", "state",
];

#[inline]
fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Lowercase, strip punctuation and collapse whitespace (no stopword removal)
pub fn clean(text: &str) -> String {
    let mapped: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Full normalization: [`clean`] followed by stopword removal.
///
/// The result is always ASCII, so byte length equals character length.
pub fn normalize(text: &str) -> String {
    clean(text)
        .split(' ')
        .filter(|t| !t.is_empty() && !is_stopword(t))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_punctuation_and_spacing() {
        assert_eq!(clean("  Texas A&M--Commerce "), "texas a m commerce");
        assert_eq!(clean("St. John's\tUniversity"), "st john s university");
    }

    #[test]
    fn test_clean_non_ascii_letters_become_spaces() {
        assert_eq!(clean("Université Laval"), "universit laval");
    }

    #[test]
    fn test_normalize_removes_stopwords() {
        assert_eq!(normalize("University of California"), "california");
        assert_eq!(normalize("The College at Brockport"), "brockport");
        assert_eq!(normalize("Ohio State University"), "ohio");
    }

    #[test]
    fn test_normalize_keeps_stopword_substrings() {
        assert_eq!(normalize("Stateline Collegeville"), "stateline collegeville");
    }

    #[test]
    fn test_normalize_only_stopwords_is_empty() {
        assert_eq!(normalize("The University"), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn test_normalize_domain() {
        assert_eq!(normalize("osu.edu"), "osu edu");
    }

    #[test]
    fn test_unicode_spaces_separate_tokens() {
        assert_eq!(normalize("Ohio\u{85}Wesleyan"), "ohio wesleyan");
        assert_eq!(normalize("\u{feff}Ohio\u{feff}Wesleyan"), "ohio wesleyan");
        assert_eq!(normalize("Ohio\u{3000}State"), "ohio");
    }
}
