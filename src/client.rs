//! Endpoint catalogue for the F1 statistics API
//!
//! [`F1Api`] builds endpoint paths, fetches through a [`Fetcher`], unwraps the
//! response envelope and normalizes every record. Methods return `Result` so
//! callers can tell "no data" from "request failed"; [`F1Api::or_fallback`]
//! turns a failure into a logged, user-notified fallback value.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::{ApiConfig, Endpoints};
use crate::fetcher::Fetcher;
use crate::fetchers::HttpFetcher;
use crate::normalize::{
    self, CONSTRUCTORS_CHAMPIONSHIP_KEYS, DRIVER_LIST_KEYS, DRIVERS_CHAMPIONSHIP_KEYS, TEAM_KEYS,
    TEAM_LIST_KEYS,
};
use crate::notify::{Notifier, TracingNotifier};
use crate::types::{ConstructorsChampionship, Driver, DriversChampionship, Team};
use crate::{PaddockError, Result};

/// Typed client over a [`Fetcher`]
pub struct F1Api<F> {
    fetcher: Arc<F>,
    endpoints: Arc<Endpoints>,
    notifier: Arc<dyn Notifier>,
}

impl<F> Clone for F1Api<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            endpoints: Arc::clone(&self.endpoints),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl F1Api<HttpFetcher> {
    /// HTTP client for the configured API
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(config)?;
        Ok(Self::new(fetcher, config.endpoints.clone()))
    }
}

impl<F: Fetcher> F1Api<F> {
    /// Create a client owning `fetcher`
    pub fn new(fetcher: F, endpoints: Endpoints) -> Self {
        Self::with_shared(Arc::new(fetcher), endpoints)
    }

    /// Create a client over a fetcher that is shared with other owners
    pub fn with_shared(fetcher: Arc<F>, endpoints: Endpoints) -> Self {
        Self { fetcher, endpoints: Arc::new(endpoints), notifier: Arc::new(TracingNotifier) }
    }

    /// Replace the notifier used by [`F1Api::or_fallback`]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Notifier receiving user-facing failure messages
    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    /// Endpoint paths in use
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Resolve a failed call to `fallback`, logging it and notifying the user
    pub fn or_fallback<T>(&self, operation: &str, result: Result<T>, fallback: T) -> T {
        match result {
            Ok(value) => value,
            Err(err) => {
                warn!(operation, error = %err, "Request failed, using fallback");
                self.notifier.error(&err.user_message(operation));
                fallback
            }
        }
    }

    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<serde_json::Value> {
        debug!(path, "Fetching");
        self.fetcher.fetch(path, params).await
    }

    async fn get_drivers(&self, path: &str, params: &[(&str, String)]) -> Result<Vec<Driver>> {
        let root = self.get(path, params).await?;
        Ok(normalize::unwrap_sequence(&root, DRIVER_LIST_KEYS)
            .iter()
            .map(normalize::map_driver)
            .collect())
    }

    async fn get_teams(&self, path: &str) -> Result<Vec<Team>> {
        let root = self.get(path, &[]).await?;
        Ok(normalize::unwrap_sequence(&root, TEAM_LIST_KEYS).iter().map(normalize::map_team).collect())
    }

    /// All teams, optionally for one season
    pub async fn teams(&self, year: Option<i32>) -> Result<Vec<Team>> {
        self.get_teams(&scoped(year, &self.endpoints.teams)).await
    }

    /// Teams of the current season
    pub async fn current_teams(&self) -> Result<Vec<Team>> {
        self.get_teams(&self.endpoints.current_teams).await
    }

    /// A single team; `Ok(None)` when the API has no such team
    pub async fn team(&self, team_id: &str, year: Option<i32>) -> Result<Option<Team>> {
        let path = scoped(year, &format!("{}/{}", self.endpoints.teams, team_id));
        let root = match self.get(&path, &[]).await {
            Err(PaddockError::Http { status: 404, .. }) => return Ok(None),
            other => other?,
        };
        Ok(normalize::unwrap_single(&root, TEAM_KEYS).map(|raw| normalize::map_team(&raw)))
    }

    /// Drivers of a team, for a season or the current one
    pub async fn team_drivers(&self, team_id: &str, year: Option<i32>) -> Result<Vec<Driver>> {
        let path = match year {
            Some(year) => {
                format!("{year}/{}/{team_id}/{}", self.endpoints.teams, self.endpoints.drivers)
            }
            None => {
                format!("{}/{team_id}/{}", self.endpoints.current_teams, self.endpoints.drivers)
            }
        };
        self.get_drivers(&path, &[]).await
    }

    /// All drivers, optionally for one season
    pub async fn drivers(&self, year: Option<i32>) -> Result<Vec<Driver>> {
        self.get_drivers(&scoped(year, &self.endpoints.drivers), &[]).await
    }

    /// Server-side driver search by free text
    pub async fn search_drivers(&self, query: &str, year: Option<i32>) -> Result<Vec<Driver>> {
        let mut params = vec![("q", query.to_string())];
        if let Some(year) = year {
            params.push(("year", year.to_string()));
        }
        self.get_drivers(&self.endpoints.drivers_search, &params).await
    }

    /// Drivers' championship standings for a season
    pub async fn drivers_championship(&self, year: i32) -> Result<DriversChampionship> {
        let root = self.get(&scoped(Some(year), &self.endpoints.drivers_championship), &[]).await?;
        let standings = normalize::unwrap_sequence(&root, DRIVERS_CHAMPIONSHIP_KEYS)
            .iter()
            .map(normalize::map_driver_standing)
            .collect();
        Ok(DriversChampionship { year, standings })
    }

    /// Constructors' championship standings for a season
    pub async fn constructors_championship(&self, year: i32) -> Result<ConstructorsChampionship> {
        let path = scoped(Some(year), &self.endpoints.constructors_championship);
        let root = self.get(&path, &[]).await?;
        let standings = normalize::unwrap_sequence(&root, CONSTRUCTORS_CHAMPIONSHIP_KEYS)
            .iter()
            .map(normalize::map_constructor_standing)
            .collect();
        Ok(ConstructorsChampionship { year, standings })
    }
}

/// Prefix `path` with the season when one is given
fn scoped(year: Option<i32>, path: &str) -> String {
    match year {
        Some(year) => format!("{year}/{path}"),
        None => path.to_string(),
    }
}
