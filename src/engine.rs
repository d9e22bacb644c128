use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, OnceLock};
use std::time::Instant;
use tokio::sync::{watch, Mutex};

use crate::config::AutocompleteConfig;
use crate::core::{MatchResult, School, Suggestions};
use crate::error::{AutocompleteError, Result};
use crate::loader::{self, DatasetSource};
use crate::ranking::{PrefixRanker, Ranker};
use crate::selection::{self, Highlight, Key};

/// Candidate list loaded once per session
#[derive(Debug, Clone)]
pub struct Catalog {
    pub schools: Vec<School>,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
}

/// Dataset load progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LoadState {
    Loading,
    Ready { schools: usize },
    Failed { message: String },
}

/// Autocomplete orchestrator: write-once catalog plus ranker
pub struct Autocomplete {
    config: AutocompleteConfig,
    ranker: Arc<dyn Ranker>,
    catalog: OnceLock<Catalog>,
    state: watch::Sender<LoadState>,
    load_lock: Mutex<()>,
}

impl Autocomplete {
    /// Create an engine with the default prefix ranker
    pub fn new(config: AutocompleteConfig) -> Self {
        let ranker = Arc::new(PrefixRanker::with_max_results(config.max_results));
        Self::with_ranker(config, ranker)
    }

    pub fn with_ranker(config: AutocompleteConfig, ranker: Arc<dyn Ranker>) -> Self {
        let (state, _rx) = watch::channel(LoadState::Loading);
        Self {
            config,
            ranker,
            catalog: OnceLock::new(),
            state,
            load_lock: Mutex::new(()),
        }
    }

    /// Engine over an already built candidate list
    pub fn from_schools(config: AutocompleteConfig, schools: Vec<School>) -> Self {
        let engine = Self::new(config);
        engine.install(schools, "memory".to_string());
        engine
    }

    fn install(&self, schools: Vec<School>, source: String) -> usize {
        let count = schools.len();
        let loaded_at = Utc::now();
        tracing::info!("Loaded {} schools from {} at {}", count, source, loaded_at.to_rfc3339());
        let catalog = Catalog {
            schools,
            source,
            loaded_at,
        };
        if self.catalog.set(catalog).is_err() {
            tracing::warn!("Catalog already installed, ignoring new list");
        }
        self.state.send_replace(LoadState::Ready { schools: count });
        count
    }

    /// Fetch and parse the dataset once.
    ///
    /// Later calls after a successful load return the existing count without
    /// fetching again. Failures are not retried.
    pub async fn load(&self, source: &dyn DatasetSource) -> Result<usize> {
        let _guard = self.load_lock.lock().await;

        if let Some(catalog) = self.catalog.get() {
            return Ok(catalog.schools.len());
        }

        self.state.send_replace(LoadState::Loading);

        match loader::load_schools(source).await {
            Ok(schools) => Ok(self.install(schools, source.describe())),
            Err(e) => {
                tracing::warn!("Dataset load from {} failed: {}", source.describe(), e);
                self.state.send_replace(LoadState::Failed {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    pub fn config(&self) -> &AutocompleteConfig {
        &self.config
    }

    pub fn ranker_name(&self) -> &str {
        self.ranker.name()
    }

    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Watch load progress
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.get()
    }

    /// When the catalog was installed
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.catalog.get().map(|c| c.loaded_at)
    }

    pub fn require_catalog(&self) -> Result<&Catalog> {
        self.catalog.get().ok_or(AutocompleteError::NotLoaded)
    }

    /// Loaded candidates; empty while loading
    pub fn schools(&self) -> &[School] {
        self.catalog.get().map(|c| c.schools.as_slice()).unwrap_or(&[])
    }

    /// Rank the catalog for a query
    pub fn suggest(&self, query: &str) -> Suggestions {
        let start = Instant::now();
        let matches = self.ranker.rank(query, self.schools());
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        let suggestions = Suggestions {
            query: query.to_string(),
            matches,
            latency_ms,
            ranking_method: self.ranker.name().to_string(),
        };
        tracing::debug!("{}", suggestions.display());
        suggestions
    }

    /// Suggest and apply the Enter-key selection rule
    pub fn commit(&self, query: &str, highlighted: Option<usize>) -> Option<School> {
        let suggestions = self.suggest(query);
        selection::commit(&suggestions.matches, highlighted).map(|m| m.school.clone())
    }

    /// Interactive search box state bound to this engine
    pub fn session(&self) -> Session<'_> {
        Session::new(self)
    }
}

/// What a key press did to a [`Session`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Moved(usize),
    Picked(School),
    Cleared,
    Ignored,
}

/// One search box: query, current matches, highlight and last pick
pub struct Session<'a> {
    engine: &'a Autocomplete,
    query: String,
    suggestions: Suggestions,
    highlight: Highlight,
    picked: Option<School>,
}

impl<'a> Session<'a> {
    fn new(engine: &'a Autocomplete) -> Self {
        Self {
            engine,
            query: String::new(),
            suggestions: Suggestions::empty("", engine.ranker_name()),
            highlight: Highlight::new(),
            picked: None,
        }
    }

    /// Replace the query text and re-rank
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.suggestions = self.engine.suggest(&self.query);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[MatchResult] {
        &self.suggestions.matches
    }

    /// Rows to render, capped at the configured display limit
    pub fn visible(&self) -> &[MatchResult] {
        self.suggestions.visible(self.engine.config.display_limit)
    }

    pub fn highlighted(&self) -> usize {
        self.highlight.index()
    }

    pub fn picked(&self) -> Option<&School> {
        self.picked.as_ref()
    }

    pub fn handle_key(&mut self, key: Key) -> SessionEvent {
        match key {
            Key::Down => {
                let count = self.matches().len();
                SessionEvent::Moved(self.highlight.down(count))
            }
            Key::Up => SessionEvent::Moved(self.highlight.up()),
            Key::Enter => {
                let chosen = selection::commit(self.matches(), Some(self.highlight.index()))
                    .map(|m| m.school.clone());
                match chosen {
                    Some(school) => self.select(school),
                    None => SessionEvent::Ignored,
                }
            }
            Key::Escape => {
                self.set_query("");
                SessionEvent::Cleared
            }
        }
    }

    /// Pointer hover over a row
    pub fn hover(&mut self, index: usize) {
        self.highlight.hover(index);
    }

    /// Pointer click on a row
    pub fn click(&mut self, index: usize) -> SessionEvent {
        match self.matches().get(index).map(|m| m.school.clone()) {
            Some(school) => self.select(school),
            None => SessionEvent::Ignored,
        }
    }

    fn select(&mut self, school: School) -> SessionEvent {
        tracing::info!("Selected {}", school.display_name());
        self.picked = Some(school.clone());
        self.set_query("");
        SessionEvent::Picked(school)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Autocomplete {
        Autocomplete::from_schools(
            AutocompleteConfig::default(),
            vec![
                School::new("Ohio State University").with_enrollment(Some(45000)),
                School::new("Ohio Wesleyan University"),
                School::new("Ohio University").with_enrollment(Some(20000)),
            ],
        )
    }

    #[test]
    fn test_suggest_while_loading_is_empty() {
        let engine = Autocomplete::new(AutocompleteConfig::default());
        assert_eq!(engine.state(), LoadState::Loading);
        assert!(engine.suggest("ohio").is_empty());
        assert!(matches!(engine.require_catalog(), Err(AutocompleteError::NotLoaded)));
        assert!(engine.loaded_at().is_none());
    }

    #[test]
    fn test_from_schools_is_ready() {
        let engine = engine();
        assert_eq!(engine.state(), LoadState::Ready { schools: 3 });
        assert_eq!(engine.catalog().unwrap().source, "memory");

        let loaded_at = engine.loaded_at().unwrap();
        assert!(loaded_at <= Utc::now());
    }

    #[test]
    fn test_suggest() {
        let suggestions = engine().suggest("ohio");
        let names: Vec<_> = suggestions.matches.iter().map(|m| m.school.name.as_str()).collect();

        // Both known enrollments score 100; larger first
        assert_eq!(
            names,
            vec!["Ohio State University", "Ohio University", "Ohio Wesleyan University"]
        );
        assert_eq!(suggestions.ranking_method, "prefix");
    }

    #[test]
    fn test_commit() {
        let engine = engine();
        assert_eq!(engine.commit("ohio", Some(1)).unwrap().name, "Ohio University");
        assert_eq!(engine.commit("ohio", Some(9)).unwrap().name, "Ohio State University");
        assert!(engine.commit("", None).is_none());
    }

    #[test]
    fn test_session_keyboard_flow() {
        let engine = engine();
        let mut session = engine.session();
        session.set_query("ohio");

        assert_eq!(session.handle_key(Key::Down), SessionEvent::Moved(1));
        assert_eq!(session.handle_key(Key::Down), SessionEvent::Moved(2));
        assert_eq!(session.handle_key(Key::Down), SessionEvent::Moved(2));
        assert_eq!(session.handle_key(Key::Up), SessionEvent::Moved(1));

        match session.handle_key(Key::Enter) {
            SessionEvent::Picked(school) => assert_eq!(school.name, "Ohio University"),
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(session.query(), "");
        assert!(session.matches().is_empty());
        assert_eq!(session.picked().unwrap().name, "Ohio University");
    }

    #[test]
    fn test_session_single_match_ignores_highlight() {
        let engine = engine();
        let mut session = engine.session();
        session.set_query("ohio");
        session.hover(2);
        session.set_query("wesleyan");

        assert_eq!(session.matches().len(), 1);
        match session.handle_key(Key::Enter) {
            SessionEvent::Picked(school) => assert_eq!(school.name, "Ohio Wesleyan University"),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_session_down_after_far_hover() {
        let engine = engine();
        let mut session = engine.session();
        session.set_query("ohio");
        session.hover(usize::MAX);

        assert_eq!(session.handle_key(Key::Down), SessionEvent::Moved(2));
        match session.handle_key(Key::Enter) {
            SessionEvent::Picked(school) => assert_eq!(school.name, "Ohio Wesleyan University"),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_session_escape_and_empty_enter() {
        let engine = engine();
        let mut session = engine.session();
        session.set_query("ohio");

        assert_eq!(session.handle_key(Key::Escape), SessionEvent::Cleared);
        assert!(session.matches().is_empty());
        assert_eq!(session.handle_key(Key::Enter), SessionEvent::Ignored);
    }

    #[test]
    fn test_session_click() {
        let engine = engine();
        let mut session = engine.session();
        session.set_query("ohio");

        assert_eq!(session.click(7), SessionEvent::Ignored);
        match session.click(2) {
            SessionEvent::Picked(school) => assert_eq!(school.name, "Ohio Wesleyan University"),
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
