use serde::{Deserialize, Serialize};
use crate::core::School;

/// Candidate paired with its relevance score (0 - 100)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub school: School,
    pub score: u8,
}

impl MatchResult {
    pub fn new(school: School, score: u8) -> Self {
        Self { school, score }
    }
}

/// Ranked suggestions for a single query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestions {
    /// Raw query text as typed
    pub query: String,

    /// Ordered matches, best first
    #[serde(default)]
    pub matches: Vec<MatchResult>,

    /// Ranking time in milliseconds
    pub latency_ms: f64,

    /// Ranking method used
    pub ranking_method: String,
}

impl Suggestions {
    /// Suggestions with no matches
    pub fn empty(query: impl Into<String>, ranking_method: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            matches: Vec::new(),
            latency_ms: 0.0,
            ranking_method: ranking_method.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// First `limit` matches, for list rendering
    pub fn visible(&self, limit: usize) -> &[MatchResult] {
        &self.matches[..self.matches.len().min(limit)]
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        match self.matches.first() {
            Some(best) => format!(
                "{:?} -> {} ({}) +{} more [{}] {:.2}ms",
                self.query,
                best.school.name,
                best.score,
                self.matches.len() - 1,
                self.ranking_method,
                self.latency_ms
            ),
            None => format!("{:?} -> no matches [{}]", self.query, self.ranking_method),
        }
    }
}
