//! Typed client and reactive driver search for the f1api.dev Formula 1 API.
//!
//! Paddock fetches teams, drivers and championship standings, normalizes the
//! API's inconsistent payloads into stable view models, and runs a debounced,
//! cancel-on-newer driver search that a UI can drive keystroke by keystroke.
//!
//! # Features
//!
//! - **Tolerant normalization**: ordered candidate keys, lenient numbers, no NaN
//! - **Reactive search**: debounce, de-duplication, length gate, switch-to-latest
//! - **Graceful failures**: typed errors plus user-facing fallback notifications
//! - **Presentation helpers**: asset paths, initials, dates, chart series
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use paddock::{Paddock, PaddockConfig};
//!
//! #[tokio::main]
//! async fn main() -> paddock::Result<()> {
//!     paddock::init_logging();
//!
//!     let config = PaddockConfig::default().with_env_overrides()?;
//!     let paddock = Paddock::connect(config)?;
//!
//!     let chart = paddock.drivers_points_chart(2023).await;
//!     for (label, points) in chart.labels.iter().zip(&chart.values) {
//!         println!("{label}: {points}");
//!     }
//!     Ok(())
//! }
//! ```

// Core types and error handling
mod error;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod config;
pub mod normalize;
pub mod notify;
pub mod types;

// Data access
pub mod client;
pub mod fetcher;
pub mod fetchers;

// Reactive search
pub mod search;
pub mod stream;

// Presentation
pub mod charts;
pub mod display;

// Core exports
pub use error::*;
pub use types::*;

pub use charts::ChartSeries;
pub use client::F1Api;
pub use config::{ApiConfig, DisplayConfig, Endpoints, PaddockConfig, SearchConfig};
pub use fetcher::Fetcher;
pub use fetchers::HttpFetcher;
pub use notify::{NoticeLevel, Notifier, TracingNotifier};
pub use search::{DriverSearch, SearchInput, SearchPhase, SearchState};

use tracing::info;

/// Install a `tracing` subscriber honouring `RUST_LOG` (default `info`).
///
/// Does nothing if a global subscriber is already set.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Unified entry point: an API client plus the configuration of every view.
///
/// The view-level methods never fail. A failed request is logged, reported
/// through the client's [`Notifier`], and replaced by an empty value, which is
/// how the pages of a dashboard want it.
///
/// # Examples
///
/// ```rust,no_run
/// use paddock::{Paddock, PaddockConfig};
///
/// # #[tokio::main]
/// # async fn main() -> paddock::Result<()> {
/// let paddock = Paddock::connect(PaddockConfig::default())?;
/// let search = paddock.driver_search();
/// search.set_query("hamilton");
/// # Ok(())
/// # }
/// ```
pub struct Paddock<F = HttpFetcher> {
    api: F1Api<F>,
    config: PaddockConfig,
}

impl Paddock<HttpFetcher> {
    /// Connect to the configured REST API over HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built. No request is made here.
    pub fn connect(config: PaddockConfig) -> Result<Self> {
        config.validate()?;
        let api = F1Api::from_config(&config.api)?;
        info!(base_url = %config.api.base_url, "Paddock connected");
        Ok(Self { api, config })
    }
}

impl<F: Fetcher> Paddock<F> {
    /// Wrap an existing client
    pub fn new(api: F1Api<F>, config: PaddockConfig) -> Self {
        Self { api, config }
    }

    pub fn api(&self) -> &F1Api<F> {
        &self.api
    }

    pub fn config(&self) -> &PaddockConfig {
        &self.config
    }

    /// Start a driver search task using the configured tuning
    pub fn driver_search(&self) -> DriverSearch {
        DriverSearch::spawn(self.api.clone(), self.config.search.clone())
    }

    /// Seasons offered by year selectors, newest first
    pub fn season_years(&self) -> Vec<i32> {
        display::season_years(display::current_season(), self.config.display.years_range)
    }

    /// Teams of a season, or of the current one
    pub async fn teams(&self, year: Option<i32>) -> Vec<Team> {
        let result = match year {
            Some(year) => self.api.teams(Some(year)).await,
            None => self.api.current_teams().await,
        };
        self.api.or_fallback("load teams", result, Vec::new())
    }

    /// Team detail with its active line-up
    ///
    /// Reserve and test drivers listed in
    /// [`DisplayConfig::excluded_driver_ids`] are removed from the line-up.
    pub async fn team_detail(&self, team_id: &str, year: Option<i32>) -> (Option<Team>, Vec<Driver>) {
        let (team, drivers) =
            tokio::join!(self.api.team(team_id, year), self.api.team_drivers(team_id, year));
        let team = self.api.or_fallback("load team", team, None);
        let drivers = self.api.or_fallback("load team drivers", drivers, Vec::new());
        (team, charts::active_drivers(drivers, &self.config.display.excluded_driver_ids))
    }

    /// Points chart of the top drivers of a season
    ///
    /// An empty chart is reported to the notifier at info level.
    pub async fn drivers_points_chart(&self, year: i32) -> ChartSeries {
        let result = self.api.drivers_championship(year).await;
        let championship =
            self.api.or_fallback("load drivers championship", result, DriversChampionship::empty(year));
        let series = charts::top_drivers(&championship, self.config.display.top_drivers);
        if series.is_empty() {
            self.api.notifier().info(&format!("No driver data for {year}"));
        }
        series
    }

    /// Points chart of the top constructors of a season
    ///
    /// An empty chart is reported to the notifier at info level.
    pub async fn constructors_points_chart(&self, year: i32) -> ChartSeries {
        let result = self.api.constructors_championship(year).await;
        let championship = self.api.or_fallback(
            "load constructors championship",
            result,
            ConstructorsChampionship::empty(year),
        );
        let series = charts::top_constructors(&championship, self.config.display.top_constructors);
        if series.is_empty() {
            self.api.notifier().info(&format!("No constructor data for {year}"));
        }
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockFetcher, RecordingNotifier, drivers_championship_response};
    use serde_json::json;
    use std::sync::Arc;

    fn harness(
        mock: &Arc<MockFetcher>,
        config: PaddockConfig,
    ) -> (Paddock<MockFetcher>, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let api = F1Api::with_shared(Arc::clone(mock), config.api.endpoints.clone())
            .with_notifier(notifier.clone());
        (Paddock::new(api, config), notifier)
    }

    #[tokio::test]
    async fn team_detail_filters_excluded_drivers() {
        let mock = Arc::new(MockFetcher::new());
        mock.respond("teams/alpine", json!({"team": [{"teamId": "alpine", "teamName": "Alpine F1 Team"}]}));
        mock.respond(
            "current/teams/alpine/drivers",
            json!({"drivers": [{"driverId": "gasly"}, {"driverId": "doohan"}, {"driverId": "colapinto"}]}),
        );
        let mut config = PaddockConfig::default();
        config.display.excluded_driver_ids = vec!["doohan".to_string()];
        let (paddock, notifier) = harness(&mock, config);

        let (team, drivers) = paddock.team_detail("alpine", None).await;
        assert_eq!(team.map(|t| t.name).as_deref(), Some("Alpine F1 Team"));
        let ids: Vec<&str> = drivers.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["gasly", "colapinto"]);
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn charts_use_configured_top_n() {
        let mock = Arc::new(MockFetcher::new());
        mock.respond("2024/drivers-championship", drivers_championship_response(20));
        let mut config = PaddockConfig::default();
        config.display.top_drivers = 5;
        let (paddock, notifier) = harness(&mock, config);

        let chart = paddock.drivers_points_chart(2024).await;
        assert_eq!(chart.label, "Points 2024");
        assert_eq!(chart.labels, ["Surname0", "Surname1", "Surname2", "Surname3", "Surname4"]);
        assert_eq!(chart.values[0], 400.0);
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn failed_views_fall_back_and_notify() {
        let mock = Arc::new(MockFetcher::new());
        mock.fail("current/teams", 503);
        let (paddock, notifier) = harness(&mock, PaddockConfig::default());

        assert!(paddock.teams(None).await.is_empty());
        assert!(paddock.constructors_points_chart(2010).await.is_empty());

        let messages = notifier.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].1, "Resource not found while trying to load constructors championship.");
        // The fallback chart is empty, so the info notice follows the error
        assert_eq!(messages[2], (NoticeLevel::Info, "No constructor data for 2010".to_string()));
    }

    #[tokio::test]
    async fn empty_season_charts_notify_info() {
        let mock = Arc::new(MockFetcher::new());
        mock.respond("2030/drivers-championship", json!({"drivers_championship": []}));
        mock.respond("2030/constructors-championship", json!({"constructors_championship": []}));
        let (paddock, notifier) = harness(&mock, PaddockConfig::default());

        assert!(paddock.drivers_points_chart(2030).await.is_empty());
        assert!(paddock.constructors_points_chart(2030).await.is_empty());
        assert_eq!(
            notifier.messages(),
            vec![
                (NoticeLevel::Info, "No driver data for 2030".to_string()),
                (NoticeLevel::Info, "No constructor data for 2030".to_string()),
            ]
        );
    }

    #[test]
    fn season_years_follow_display_config() {
        let mock = Arc::new(MockFetcher::new());
        let mut config = PaddockConfig::default();
        config.display.years_range = 4;
        let (paddock, _) = harness(&mock, config);

        let years = paddock.season_years();
        assert_eq!(years.len(), 4);
        assert_eq!(years[0] - years[3], 3);
    }

    #[test]
    fn connect_rejects_invalid_config() {
        let mut config = PaddockConfig::default();
        config.api.base_url = "ftp://f1api.dev".to_string();
        assert!(matches!(Paddock::connect(config), Err(PaddockError::Config { .. })));
    }
}
