//! Test utilities: a scriptable fetcher, a recording notifier and payload fixtures
//!
//! These are shared by unit tests, integration tests and benchmarks.

#![cfg(any(test, feature = "benchmark"))]

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::fetcher::Fetcher;
use crate::notify::{NoticeLevel, Notifier};
use crate::{PaddockError, Result};

/// One request observed by [`MockFetcher`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCall {
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl FetchCall {
    /// Value of a query parameter, if sent
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }
}

/// Scripted outcome for a route
#[derive(Debug, Clone)]
pub enum MockResponse {
    Json(Value),
    Status(u16),
    Panic,
}

#[derive(Debug, Clone)]
struct Route {
    response: MockResponse,
    delay: Duration,
}

/// In-memory [`Fetcher`] answering from scripted routes
///
/// Routes are keyed by path, optionally narrowed by the `q` parameter
/// (`respond_query`). Unknown routes answer with HTTP 404.
#[derive(Debug, Default)]
pub struct MockFetcher {
    routes: Mutex<HashMap<String, Route>>,
    calls: Mutex<Vec<FetchCall>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn route(&self, key: String, response: MockResponse, delay: Duration) {
        self.routes.lock().unwrap().insert(key, Route { response, delay });
    }

    /// Answer `path` with `body`
    pub fn respond(&self, path: &str, body: Value) {
        self.route(path.to_string(), MockResponse::Json(body), Duration::ZERO);
    }

    /// Answer `path` with `body` after `delay`
    pub fn respond_after(&self, path: &str, delay: Duration, body: Value) {
        self.route(path.to_string(), MockResponse::Json(body), delay);
    }

    /// Answer `path` with `q=query` with `body` after `delay`
    pub fn respond_query(&self, path: &str, query: &str, delay: Duration, body: Value) {
        self.route(format!("{path}?q={query}"), MockResponse::Json(body), delay);
    }

    /// Answer `path` with an HTTP error status
    pub fn fail(&self, path: &str, status: u16) {
        self.route(path.to_string(), MockResponse::Status(status), Duration::ZERO);
    }

    /// Panic while serving `path`
    pub fn panic_on(&self, path: &str) {
        self.route(path.to_string(), MockResponse::Panic, Duration::ZERO);
    }

    /// Every request received, in order
    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Paths of every request received, in order
    pub fn paths(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.path).collect()
    }

    /// Requests received for `path`
    pub fn calls_to(&self, path: &str) -> Vec<FetchCall> {
        self.calls().into_iter().filter(|call| call.path == path).collect()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        let call = FetchCall {
            path: path.to_string(),
            params: params.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
        };

        let route = {
            let routes = self.routes.lock().unwrap();
            call.param("q")
                .and_then(|q| routes.get(&format!("{path}?q={q}")))
                .or_else(|| routes.get(path))
                .cloned()
        };
        self.calls.lock().unwrap().push(call);

        let Some(route) = route else {
            return Err(PaddockError::http(404, path));
        };

        if !route.delay.is_zero() {
            tokio::time::sleep(route.delay).await;
        }

        match route.response {
            MockResponse::Json(body) => Ok(body),
            MockResponse::Status(status) => Err(PaddockError::http(status, path)),
            MockResponse::Panic => panic!("mock fetcher asked to panic on {path}"),
        }
    }
}

/// [`Notifier`] that keeps every message
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(NoticeLevel, String)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(NoticeLevel, String)> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.messages.lock().unwrap().push((level, message.to_string()));
    }
}

/// Raw driver record in the f1api.dev shape
pub fn raw_driver(id: &str, name: &str, surname: &str, number: Value) -> Value {
    json!({
        "driverId": id,
        "name": name,
        "surname": surname,
        "nationality": "Unknown",
        "birthday": "01/01/2000",
        "number": number,
        "shortName": surname.chars().take(3).collect::<String>().to_uppercase(),
        "url": format!("https://en.wikipedia.org/wiki/{name}_{surname}"),
    })
}

/// Drivers list response with a handful of 2023 drivers
pub fn drivers_2023_response() -> Value {
    json!({
        "season": 2023,
        "total": 4,
        "drivers": [
            raw_driver("max_verstappen", "Max", "Verstappen", json!(1)),
            raw_driver("hamilton", "Lewis", "Hamilton", json!("44")),
            raw_driver("bearman", "Oliver", "Bearman", json!("38")),
            raw_driver("leclerc", "Charles", "Leclerc", json!(16)),
        ],
    })
}

/// Drivers' championship response with `rows` entries
pub fn drivers_championship_response(rows: usize) -> Value {
    let standings: Vec<Value> = (0..rows)
        .map(|i| {
            json!({
                "classificationId": i,
                "driverId": format!("driver_{i}"),
                "position": i + 1,
                "points": format!("{}", 400.0 - i as f64 * 12.5),
                "wins": if i < 3 { json!(5 - i) } else { Value::Null },
                "driver": {"name": format!("Name{i}"), "surname": format!("Surname{i}")},
            })
        })
        .collect();
    json!({"season": 2024, "drivers_championship": standings})
}
