//! Team view model

use serde::{Deserialize, Serialize};

/// Normalized constructor/team record
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct Team {
    /// API identifier (empty when the payload had none)
    pub id: String,
    /// Team name (empty when the payload had none)
    pub name: String,
    /// Team nationality
    pub country: Option<String>,
    /// Constructors' championships won
    pub championships: Option<u32>,
    /// Drivers' championships won with this team
    pub drivers_championships: Option<u32>,
    /// Wikipedia URL
    pub wikipedia: Option<String>,
    /// Headquarters location
    pub base: Option<String>,
    /// Team principal
    pub principal: Option<String>,
    /// Logo URL or identifier
    pub logo: Option<String>,
}

/// Minimal team reference embedded in constructor standings
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(default)]
pub struct TeamRef {
    pub id: String,
    pub name: String,
}
