//! Keyboard/pointer selection over a ranked match list.
//!
//! The highlighted index never wraps: `Down` stops at the last match, `Up`
//! stops at the first. Committing prefers the only match, then the
//! highlighted one, then the first.

use crate::core::MatchResult;

/// Keys the result list reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Down,
    Up,
    Enter,
    Escape,
}

/// Next index when moving down a list of `count` matches
pub fn move_down(index: usize, count: usize) -> usize {
    index.saturating_add(1).min(count.saturating_sub(1))
}

/// Next index when moving up
pub fn move_up(index: usize) -> usize {
    index.saturating_sub(1)
}

/// Match committed by Enter for the given highlighted index
pub fn commit(matches: &[MatchResult], highlighted: Option<usize>) -> Option<&MatchResult> {
    if matches.len() == 1 {
        return matches.first();
    }

    highlighted
        .and_then(|i| matches.get(i))
        .or_else(|| matches.first())
}

/// Highlighted row of a result list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlight {
    index: usize,
}

impl Highlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn down(&mut self, count: usize) -> usize {
        self.index = move_down(self.index, count);
        self.index
    }

    pub fn up(&mut self) -> usize {
        self.index = move_up(self.index);
        self.index
    }

    /// Pointer hover moves the highlight without clamping
    pub fn hover(&mut self, index: usize) {
        self.index = index;
    }
}
