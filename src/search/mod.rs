//! # Driver Search
//!
//! A long-lived task that turns two independently changing inputs, a free-text
//! query and an optional season, into at most one committed search result per
//! settled input.
//!
//! ## Pipeline
//!
//! ```text
//! set_query / set_year
//!        │
//!        ▼
//!  watch<SearchInput> ──► trim ──► debounce ──► distinct ──► length gate
//!                                                               │
//!                          ┌────────────── below minimum ◄──────┤
//!                          ▼                                    ▼
//!                    Idle, results []          abort previous fetch, spawn new:
//!                                              year  → season drivers + local filter
//!                                              none  → server-side search
//!                                                               │
//!                                                               ▼
//!                                              watch<SearchState> (Resulted)
//! ```
//!
//! Only the most recent qualifying input's fetch can commit: a newer input
//! aborts the previous fetch task before spawning its own, so a slow response
//! never overwrites a newer one. Fetch failures resolve to an empty result and
//! a notification; nothing escapes the task.
//!
//! ## Example
//!
//! ```rust,no_run
//! use paddock::{DriverSearch, F1Api, PaddockConfig, SearchPhase};
//!
//! #[tokio::main]
//! async fn main() -> paddock::Result<()> {
//!     let config = PaddockConfig::default();
//!     let api = F1Api::from_config(&config.api)?;
//!     let search = DriverSearch::spawn(api, config.search);
//!
//!     search.set_year(Some(2023));
//!     search.set_query("ver");
//!
//!     let mut state = search.subscribe();
//!     let state = state.wait_for(|s| s.phase == SearchPhase::Resulted).await.unwrap().clone();
//!     for driver in state.results.iter() {
//!         println!("{} {}", driver.name, driver.surname);
//!     }
//!     Ok(())
//! }
//! ```

mod pipeline;
mod state;

pub use state::{SearchInput, SearchPhase, SearchState};

use futures::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::client::F1Api;
use crate::config::SearchConfig;
use crate::fetcher::Fetcher;

/// Handle to a running driver search
///
/// Dropping the handle stops the search task.
pub struct DriverSearch {
    inputs: watch::Sender<SearchInput>,
    state: watch::Receiver<SearchState>,
    config: SearchConfig,
    cancel: CancellationToken,
}

impl DriverSearch {
    /// Spawn the search task on the current tokio runtime
    pub fn spawn<F: Fetcher>(api: F1Api<F>, config: SearchConfig) -> Self {
        let (input_tx, input_rx) = watch::channel(SearchInput::default());
        let (state_tx, state_rx) = watch::channel(SearchState::idle());
        let cancel = CancellationToken::new();

        tokio::spawn(pipeline::run(api, config.clone(), input_rx, state_tx, cancel.clone()));

        Self { inputs: input_tx, state: state_rx, config, cancel }
    }

    /// Replace the text query (typically on every keystroke)
    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.inputs.send_modify(|input| input.query = query);
    }

    /// Replace the season filter
    pub fn set_year(&self, year: Option<i32>) {
        self.inputs.send_modify(|input| input.year = year);
    }

    /// Current raw inputs
    pub fn input(&self) -> SearchInput {
        self.inputs.borrow().clone()
    }

    /// Current state snapshot
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Receiver for state changes
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.clone()
    }

    /// State changes as a stream, starting with the current state
    pub fn updates(&self) -> impl Stream<Item = SearchState> + 'static {
        WatchStream::new(self.state.clone())
    }

    /// Placeholder text for the current state and inputs
    pub fn empty_message(&self) -> &'static str {
        self.state.borrow().empty_message(&self.inputs.borrow(), self.config.min_query_len)
    }

    /// Stop the search task; pending fetches are aborted
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

impl Drop for DriverSearch {
    fn drop(&mut self) {
        debug!("Dropping driver search");
        self.cancel.cancel();
    }
}
