pub mod school;
pub mod match_result;

pub use school::School;
pub use match_result::{MatchResult, Suggestions};
