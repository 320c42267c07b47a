//! Search task: combine, debounce, de-duplicate, gate, switch to latest

use futures::StreamExt;
use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tokio_stream::wrappers::WatchStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, trace};

use super::state::{SearchInput, SearchState};
use crate::client::F1Api;
use crate::config::SearchConfig;
use crate::fetcher::Fetcher;
use crate::stream::{DebounceExt, DistinctExt};
use crate::types::Driver;

/// User-facing message when a search fails outside the per-branch recovery
pub(crate) const SEARCH_FAILED: &str = "Search failed";

/// Fetch currently allowed to commit its result
struct InFlight {
    input: SearchInput,
    handle: JoinHandle<Vec<Driver>>,
}

/// Wait for the in-flight fetch, or forever when there is none
async fn join_in_flight(in_flight: &mut Option<InFlight>) -> Result<Vec<Driver>, JoinError> {
    match in_flight {
        Some(fetch) => (&mut fetch.handle).await,
        None => std::future::pending().await,
    }
}

/// Run one fetch branch; failures resolve to an empty list
async fn fetch_branch<F: Fetcher>(api: F1Api<F>, input: SearchInput) -> Vec<Driver> {
    match input.year {
        Some(year) => {
            let result = api.drivers(Some(year)).await.map(|drivers| {
                drivers.into_iter().filter(|driver| driver.matches(&input.query)).collect()
            });
            api.or_fallback("search drivers", result, Vec::new())
        }
        None => {
            let result = api.search_drivers(&input.query, None).await;
            api.or_fallback("search drivers", result, Vec::new())
        }
    }
}

/// Search task body; owns all mutable search state
pub(crate) async fn run<F: Fetcher>(
    api: F1Api<F>,
    config: SearchConfig,
    inputs: watch::Receiver<SearchInput>,
    state_tx: watch::Sender<SearchState>,
    cancel: CancellationToken,
) {
    info!(debounce_ms = config.debounce_ms, min_query_len = config.min_query_len, "Driver search started");

    // The watch channel yields the current input first, then the latest
    // value of both fields whenever either changes
    let mut inputs = WatchStream::new(inputs)
        .map(SearchInput::trimmed)
        .debounce(config.debounce())
        .distinct_until_changed()
        .boxed();

    let mut in_flight: Option<InFlight> = None;
    let mut committed = 0u64;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                info!("Driver search cancelled");
                break;
            }
            next = inputs.next() => {
                let Some(input) = next else {
                    debug!("Search inputs closed");
                    break;
                };

                // Switch to latest: a superseded fetch never commits
                if let Some(previous) = in_flight.take() {
                    debug!(query = %previous.input.query, "Aborting superseded search");
                    previous.handle.abort();
                }

                if !input.qualifies(config.min_query_len) {
                    trace!(query = %input.query, "Query below minimum length");
                    state_tx.send_replace(SearchState::idle());
                    continue;
                }

                debug!(query = %input.query, year = ?input.year, "Searching drivers");
                let searching = SearchState::searching(&state_tx.borrow());
                state_tx.send_replace(searching);

                let handle = tokio::spawn(fetch_branch(api.clone(), input.clone()));
                in_flight = Some(InFlight { input, handle });
            }
            joined = join_in_flight(&mut in_flight) => {
                let Some(finished) = in_flight.take() else { continue };
                match joined {
                    Ok(drivers) => {
                        committed += 1;
                        debug!(query = %finished.input.query, results = drivers.len(), "Search resolved");
                        state_tx.send_replace(SearchState::resulted(drivers));
                    }
                    Err(e) => {
                        error!("Search task failed: {}", e);
                        api.notifier().error(SEARCH_FAILED);
                        state_tx.send_replace(SearchState::resulted(Vec::new()));
                    }
                }
            }
        }
    }

    if let Some(fetch) = in_flight.take() {
        fetch.handle.abort();
    }

    info!("Driver search ended ({} searches committed)", committed);
}
