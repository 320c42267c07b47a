//! Championship standings view models

use serde::{Deserialize, Serialize};

use super::{DriverRef, TeamRef};

/// One row of the drivers' championship
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(default)]
pub struct DriverStandingItem {
    /// Classified position (0 when unknown)
    pub position: u32,
    /// Points scored (0 when unknown)
    pub points: f64,
    /// Race wins; `None` means the API had no data, not zero wins
    pub wins: Option<u32>,
    pub driver: DriverRef,
}

/// One row of the constructors' championship
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(default)]
pub struct ConstructorStandingItem {
    /// Classified position (0 when unknown)
    pub position: u32,
    /// Points scored (0 when unknown)
    pub points: f64,
    /// Race wins; `None` means the API had no data, not zero wins
    pub wins: Option<u32>,
    pub team: TeamRef,
}

/// Drivers' championship for a season, in API ranking order
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct DriversChampionship {
    pub year: i32,
    pub standings: Vec<DriverStandingItem>,
}

/// Constructors' championship for a season, in API ranking order
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct ConstructorsChampionship {
    pub year: i32,
    pub standings: Vec<ConstructorStandingItem>,
}

impl DriversChampionship {
    /// Empty table for `year`, used as the fallback when loading fails
    pub fn empty(year: i32) -> Self {
        Self { year, standings: Vec::new() }
    }
}

impl ConstructorsChampionship {
    /// Empty table for `year`, used as the fallback when loading fails
    pub fn empty(year: i32) -> Self {
        Self { year, standings: Vec::new() }
    }
}
