use std::cmp::Ordering;

use crate::core::{MatchResult, School};
use crate::ranking::collate::locale_cmp;
use crate::ranking::normalize::normalize;
use crate::ranking::Ranker;

/// Score for a field that contains the query somewhere other than the start
pub const CONTAINS_SCORE: u8 = 40;

/// Score for a field equal to the query
pub const EXACT_SCORE: u8 = 100;

/// Result cap applied after partitioning
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Score two already-normalized strings
fn score_normalized(field: &str, query: &str) -> u8 {
    if query.is_empty() {
        return 0;
    }

    if field.starts_with(query) {
        // Tighter prefixes score higher; never below 1
        let extra = field.len().saturating_sub(query.len()).min(99);
        return EXACT_SCORE - extra as u8;
    }

    if field.contains(query) {
        return CONTAINS_SCORE;
    }

    0
}

/// Relevance of `field` for `query` in `0..=100`, after normalizing both
pub fn score(field: &str, query: &str) -> u8 {
    score_normalized(&normalize(field), &normalize(query))
}

/// Known enrollment first, larger first, then name
fn tie_break(a: &School, b: &School) -> Ordering {
    match (a.enrollment, b.enrollment) {
        (Some(x), Some(y)) if x != y => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        _ => locale_cmp(&a.name, &b.name),
    }
}

/// Prefix/contains ranker over school names and domains
#[derive(Debug, Clone)]
pub struct PrefixRanker {
    max_results: usize,
}

impl PrefixRanker {
    pub fn new() -> Self {
        Self::with_max_results(DEFAULT_MAX_RESULTS)
    }

    pub fn with_max_results(max_results: usize) -> Self {
        Self { max_results }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Aggregate score: best of name and domain
    fn score_school(school: &School, query: &str) -> u8 {
        let name_score = score_normalized(&normalize(&school.name), query);
        let domain_score = score_normalized(&normalize(&school.domain), query);
        name_score.max(domain_score)
    }
}

impl Default for PrefixRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker for PrefixRanker {
    fn rank(&self, query: &str, candidates: &[School]) -> Vec<MatchResult> {
        let query = normalize(query);
        if query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(&School, u8)> = candidates
            .iter()
            .map(|school| (school, Self::score_school(school, &query)))
            .filter(|(_, score)| *score > 0)
            .collect();

        scored.sort_by(|(a, sa), (b, sb)| sb.cmp(sa).then_with(|| tie_break(a, b)));

        // Known enrollment ahead of unknown regardless of score; order kept within each group
        let (known, unknown): (Vec<_>, Vec<_>) =
            scored.into_iter().partition(|(school, _)| school.has_enrollment());

        known
            .into_iter()
            .chain(unknown)
            .take(self.max_results)
            .map(|(school, score)| MatchResult::new(school.clone(), score))
            .collect()
    }

    fn name(&self) -> &str {
        "prefix"
    }
}
