use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Strip a leading `http://`/`https://` and then a leading `www.`
pub fn domain_from_url(url: &str) -> String {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.strip_prefix("www.").unwrap_or(rest).to_string()
}

/// Parse free-form enrollment text ("12,345", "~5000 students") into a count.
///
/// Every non-digit character is discarded. Returns `None` when no digit is
/// left or the number does not fit in a `u64`.
pub fn parse_enrollment(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u64>().ok()
}

/// A school candidate as loaded from the dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct School {
    /// Display name (never empty)
    pub name: String,

    /// Homepage URL, if the dataset has one
    #[serde(default)]
    pub url: Option<String>,

    /// `url` without protocol and `www.`; empty when `url` is absent
    #[serde(default)]
    pub domain: String,

    /// Undergraduate enrollment
    #[serde(default)]
    pub enrollment: Option<u64>,
}

impl School {
    /// Create a new School with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            domain: String::new(),
            enrollment: None,
        }
    }

    /// Set the URL and derive the domain from it.
    ///
    /// Blank URLs are treated as absent.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        let url = url.trim();
        if url.is_empty() {
            self.url = None;
            self.domain.clear();
        } else {
            self.domain = domain_from_url(url);
            self.url = Some(url.to_string());
        }
        self
    }

    pub fn with_enrollment(mut self, enrollment: Option<u64>) -> Self {
        self.enrollment = enrollment;
        self
    }

    pub fn has_enrollment(&self) -> bool {
        self.enrollment.is_some()
    }

    /// Get display name (for logging/UI)
    pub fn display_name(&self) -> String {
        if self.domain.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.domain)
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_strips_protocol_and_www() {
        assert_eq!(domain_from_url("https://www.ucla.edu"), "ucla.edu");
        assert_eq!(domain_from_url("http://osu.edu/"), "osu.edu/");
        assert_eq!(domain_from_url("www.mit.edu"), "mit.edu");
        assert_eq!(domain_from_url("stanford.edu"), "stanford.edu");
    }

    #[test]
    fn test_domain_only_strips_leading_www() {
        assert_eq!(domain_from_url("https://cs.www.example.edu"), "cs.www.example.edu");
    }

    #[test]
    fn test_parse_enrollment() {
        assert_eq!(parse_enrollment("12,345"), Some(12345));
        assert_eq!(parse_enrollment("  ~5000 students "), Some(5000));
        assert_eq!(parse_enrollment("0"), Some(0));
        assert_eq!(parse_enrollment("N/A"), None);
        assert_eq!(parse_enrollment(""), None);
    }

    #[test]
    fn test_parse_enrollment_overflow_is_absent() {
        assert_eq!(parse_enrollment("99999999999999999999999999"), None);
    }

    #[test]
    fn test_with_url_derives_domain() {
        let school = School::new("UCLA").with_url(" https://www.ucla.edu ");
        assert_eq!(school.url.as_deref(), Some("https://www.ucla.edu"));
        assert_eq!(school.domain, "ucla.edu");
        assert_eq!(school.display_name(), "UCLA (ucla.edu)");
    }

    #[test]
    fn test_blank_url_is_absent() {
        let school = School::new("Nowhere College").with_url("   ");
        assert_eq!(school.url, None);
        assert!(school.domain.is_empty());
        assert_eq!(school.display_name(), "Nowhere College");
    }

    #[test]
    fn test_serialization() {
        let school = School::new("Ohio State University")
            .with_url("https://www.osu.edu")
            .with_enrollment(Some(45000));
        let json = school.to_json().unwrap();
        let deserialized = School::from_json(&json).unwrap();
        assert_eq!(school, deserialized);
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = School::from_json("{\"name\": 42}").unwrap_err();
        assert!(matches!(err, crate::error::AutocompleteError::Json(_)));
    }
}
