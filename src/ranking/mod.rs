pub mod collate;
pub mod normalize;
pub mod prefix;

use crate::core::{MatchResult, School};

pub use collate::locale_cmp;
pub use normalize::{normalize, STOPWORDS};
pub use prefix::{score, PrefixRanker, CONTAINS_SCORE, DEFAULT_MAX_RESULTS};

/// Trait for ranking implementations
pub trait Ranker: Send + Sync {
    /// Rank candidates against query, best first.
    ///
    /// Only matching candidates are returned; an empty query matches nothing.
    fn rank(&self, query: &str, candidates: &[School]) -> Vec<MatchResult>;

    /// Get ranker name for logging
    fn name(&self) -> &str;
}
