//! Driver view model

use serde::{Deserialize, Serialize};

/// Normalized driver record
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct Driver {
    /// API identifier (empty when the payload had none)
    pub id: String,
    /// Given name
    pub name: String,
    /// Family name
    pub surname: String,
    /// Three-letter timing code (e.g. "VER")
    pub code: Option<String>,
    /// Permanent car number
    pub number: Option<i64>,
    /// Nationality
    pub nationality: Option<String>,
    /// Date of birth exactly as the API sent it
    pub date_of_birth: Option<String>,
    /// Wikipedia URL
    pub wikipedia: Option<String>,
}

impl Driver {
    /// "{name} {surname}", the string driver searches match against
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    /// Case-insensitive substring match on the full name
    pub fn matches(&self, query: &str) -> bool {
        self.full_name().to_lowercase().contains(&query.to_lowercase())
    }
}

/// Minimal driver reference embedded in driver standings
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(default)]
pub struct DriverRef {
    pub id: String,
    pub name: String,
    pub surname: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(name: &str, surname: &str) -> Driver {
        Driver { name: name.to_string(), surname: surname.to_string(), ..Default::default() }
    }

    #[test]
    fn matches_across_name_boundary() {
        let max = driver("Max", "Verstappen");
        assert!(max.matches("ver"));
        assert!(max.matches("X VER"));
        assert!(!max.matches("hamilton"));
    }

    #[test]
    fn full_name_with_missing_parts() {
        assert_eq!(driver("", "Senna").full_name(), " Senna");
    }
}
