//! Raw team records → [`Team`]

use serde_json::Value;

use super::fields::{Candidates, count};
use crate::types::Team;

pub(crate) const ID: Candidates = Candidates::new(&["teamId", "team_id", "id"]);
pub(crate) const NAME: Candidates = Candidates::new(&["teamName", "team_name", "name"]);
const COUNTRY: Candidates = Candidates::new(&["teamNationality", "country", "nationality"]);
const CHAMPIONSHIPS: Candidates =
    Candidates::new(&["constructorsChampionships", "championships"]);
const DRIVERS_CHAMPIONSHIPS: Candidates = Candidates::new(&["driversChampionships"]);
const WIKIPEDIA: Candidates = Candidates::new(&["url", "wikipedia"]);
const BASE: Candidates = Candidates::new(&["base"]);
const PRINCIPAL: Candidates = Candidates::new(&["principal", "teamPrincipal"]);
const LOGO: Candidates = Candidates::new(&["logo"]);

/// Map a raw team record; never fails
pub fn map_team(raw: &Value) -> Team {
    Team {
        id: ID.text_or_empty(raw),
        name: NAME.text_or_empty(raw),
        country: COUNTRY.text(raw),
        championships: CHAMPIONSHIPS.resolve(raw, count),
        drivers_championships: DRIVERS_CHAMPIONSHIPS.resolve(raw, count),
        wikipedia: WIKIPEDIA.text(raw),
        base: BASE.text(raw),
        principal: PRINCIPAL.text(raw),
        logo: LOGO.text(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_record() {
        let raw = json!({
            "teamId": "ferrari",
            "teamName": "Scuderia Ferrari",
            "teamNationality": "Italy",
            "firstAppeareance": 1950,
            "constructorsChampionships": 16,
            "driversChampionships": 15,
            "url": "https://en.wikipedia.org/wiki/Scuderia_Ferrari",
        });
        let team = map_team(&raw);
        assert_eq!(team.id, "ferrari");
        assert_eq!(team.name, "Scuderia Ferrari");
        assert_eq!(team.country.as_deref(), Some("Italy"));
        assert_eq!(team.championships, Some(16));
        assert_eq!(team.drivers_championships, Some(15));
        assert_eq!(team.wikipedia.as_deref(), Some("https://en.wikipedia.org/wiki/Scuderia_Ferrari"));
        assert_eq!(team.base, None);
    }

    #[test]
    fn empty_record_defaults() {
        let team = map_team(&json!({}));
        assert_eq!(team, Team::default());
        assert_eq!(team.id, "");
        assert_eq!(team.name, "");
    }

    #[test]
    fn alternate_keys() {
        let raw = json!({
            "id": "williams",
            "name": "Williams Racing",
            "country": "United Kingdom",
            "championships": "9",
            "teamPrincipal": "James Vowles",
            "base": "Grove",
        });
        let team = map_team(&raw);
        assert_eq!(team.id, "williams");
        assert_eq!(team.name, "Williams Racing");
        assert_eq!(team.country.as_deref(), Some("United Kingdom"));
        assert_eq!(team.championships, Some(9));
        assert_eq!(team.principal.as_deref(), Some("James Vowles"));
        assert_eq!(team.base.as_deref(), Some("Grove"));
    }

    #[test]
    fn non_object_input() {
        assert_eq!(map_team(&json!(null)), Team::default());
        assert_eq!(map_team(&json!([1, 2, 3])), Team::default());
    }
}
