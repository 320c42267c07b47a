//! Chart series for the season points charts and team line-up filtering

use serde::{Deserialize, Serialize};

use crate::types::{ConstructorsChampionship, Driver, DriversChampionship};

/// One bar chart dataset: parallel `labels` and `values`
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct ChartSeries {
    /// Dataset legend, e.g. "Points 2023"
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    fn for_year(year: i32) -> Self {
        Self { label: format!("Points {year}"), ..Default::default() }
    }

    fn push(&mut self, label: String, value: f64) {
        self.labels.push(label);
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// First `n` drivers in standings order, labelled by surname (name when missing)
pub fn top_drivers(championship: &DriversChampionship, n: usize) -> ChartSeries {
    let mut series = ChartSeries::for_year(championship.year);
    for row in championship.standings.iter().take(n) {
        let label = if row.driver.surname.is_empty() { &row.driver.name } else { &row.driver.surname };
        series.push(label.clone(), row.points);
    }
    series
}

/// First `n` constructors in standings order, labelled by team name
pub fn top_constructors(championship: &ConstructorsChampionship, n: usize) -> ChartSeries {
    let mut series = ChartSeries::for_year(championship.year);
    for row in championship.standings.iter().take(n) {
        series.push(row.team.name.clone(), row.points);
    }
    series
}

/// Team line-up without reserve or test drivers
pub fn active_drivers<S: AsRef<str>>(drivers: Vec<Driver>, excluded_ids: &[S]) -> Vec<Driver> {
    drivers
        .into_iter()
        .filter(|driver| !excluded_ids.iter().any(|id| id.as_ref() == driver.id))
        .collect()
}
