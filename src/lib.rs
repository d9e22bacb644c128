//! # School Autocomplete
//!
//! Search-as-you-type over a CSV dataset of schools:
//! - Prefix/contains scoring on names and domains, stopword resilient
//! - Deterministic tie-breaking (known enrollment, larger enrollment, name)
//! - Load-once catalog fetched over HTTP or from disk
//! - Keyboard selection contract for result lists
//! - Multiple interfaces: Rust library, HTTP API, CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use school_autocomplete::{Autocomplete, AutocompleteConfig, loader::HttpSource};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AutocompleteConfig::from_env();
//!     let source = HttpSource::new(&config.dataset_url, config.request_timeout_secs)?;
//!
//!     let engine = Autocomplete::new(config);
//!     engine.load(&source).await?;
//!
//!     for m in engine.suggest("ohio").matches {
//!         println!("{} - {}", m.school.name, m.score);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod loader;
pub mod presentation;
pub mod ranking;
pub mod selection;

// Re-export primary types
pub use crate::core::{MatchResult, School, Suggestions};
pub use config::AutocompleteConfig;
pub use engine::{Autocomplete, Catalog, LoadState, Session, SessionEvent};
pub use error::{AutocompleteError, Result};
pub use ranking::{PrefixRanker, Ranker};
pub use selection::Key;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
