//! Driver search inputs and published state

use std::sync::Arc;

use crate::types::Driver;

/// Latest value of both search inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    /// Free-text query as typed
    pub query: String,
    /// Season filter; `None` searches across all seasons server-side
    pub year: Option<i32>,
}

impl SearchInput {
    /// Input with the query trimmed, which is what the pipeline compares
    pub fn trimmed(self) -> Self {
        let query = self.query.trim();
        if query.len() == self.query.len() {
            return self;
        }
        Self { query: query.to_string(), year: self.year }
    }

    /// Whether the query is long enough to search (counted in characters)
    pub fn qualifies(&self, min_query_len: usize) -> bool {
        self.query.chars().count() >= min_query_len
    }
}

/// Where the search currently is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SearchPhase {
    /// No query, or a query below the minimum length
    #[default]
    Idle,
    /// A fetch for the latest qualifying input is in flight
    Searching,
    /// Results for the latest qualifying input are available (possibly empty)
    Resulted,
}

/// Snapshot published to subscribers; always replaced as a whole
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub phase: SearchPhase,
    pub results: Arc<[Driver]>,
    /// True once a qualifying query was submitted, reset when it drops below the minimum
    pub has_searched: bool,
}

impl SearchState {
    /// Nothing searched yet
    pub fn idle() -> Self {
        Self::default()
    }

    /// Fetch in flight; previous results stay visible until replaced
    pub fn searching(previous: &SearchState) -> Self {
        Self { phase: SearchPhase::Searching, results: Arc::clone(&previous.results), has_searched: true }
    }

    /// Results for the latest qualifying input
    pub fn resulted(results: Vec<Driver>) -> Self {
        Self { phase: SearchPhase::Resulted, results: results.into(), has_searched: true }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Searching
    }

    /// Text for the empty-results placeholder
    pub fn empty_message(&self, input: &SearchInput, min_query_len: usize) -> &'static str {
        if !self.has_searched {
            "No data available"
        } else if input.year.is_some() && input.clone().trimmed().qualifies(min_query_len) {
            "The driver did not take part in this season."
        } else {
            "No drivers found with that name."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(query: &str, year: Option<i32>) -> SearchInput {
        SearchInput { query: query.to_string(), year }
    }

    #[test]
    fn trimming_and_length_gate() {
        let trimmed = input("  ham ", None).trimmed();
        assert_eq!(trimmed.query, "ham");
        assert!(trimmed.qualifies(3));
        assert!(!input("ha", None).qualifies(3));
        // Characters, not bytes
        assert!(!input("é", None).qualifies(2));
        assert!(input("Pérez", None).qualifies(5));
    }

    #[test]
    fn searching_keeps_previous_results() {
        let previous = SearchState::resulted(vec![Driver { id: "alonso".into(), ..Default::default() }]);
        let searching = SearchState::searching(&previous);
        assert!(searching.is_loading());
        assert!(searching.has_searched);
        assert_eq!(searching.results.len(), 1);
    }

    #[test]
    fn empty_messages() {
        let idle = SearchState::idle();
        assert_eq!(idle.empty_message(&input("", None), 3), "No data available");

        let done = SearchState::resulted(Vec::new());
        assert_eq!(
            done.empty_message(&input("senna", Some(2023)), 3),
            "The driver did not take part in this season."
        );
        assert_eq!(done.empty_message(&input("zzz", None), 3), "No drivers found with that name.");
    }
}
