//! Raw standing rows → [`DriverStandingItem`] / [`ConstructorStandingItem`]
//!
//! The embedded driver or team may sit under one of several keys (case
//! variants included) or be reduced to a flat sibling id. Id resolution order:
//! nested object's id → nested object's alternate ids → flat sibling id → `""`.

use serde_json::Value;

use super::fields::{Candidates, count, number};
use super::{driver, team};
use crate::types::{ConstructorStandingItem, DriverRef, DriverStandingItem, TeamRef};

const POSITION: Candidates = Candidates::new(&["position"]);
const POINTS: Candidates = Candidates::new(&["points"]);
const WINS: Candidates = Candidates::new(&["wins"]);

const NESTED_DRIVER: Candidates = Candidates::new(&["driver", "Driver"]);
const FLAT_DRIVER_ID: Candidates = Candidates::new(&["driverId", "driver_id"]);

const NESTED_TEAM: Candidates = Candidates::new(&["team", "Team", "constructor", "Constructor"]);
const FLAT_TEAM_ID: Candidates = Candidates::new(&["teamId", "team_id", "constructorId"]);

/// Position as a non-negative integer, 0 when unknown
fn position(raw: &Value) -> u32 {
    POSITION
        .resolve(raw, number)
        .filter(|p| *p >= 0.0)
        .map(|p| p.min(u32::MAX as f64) as u32)
        .unwrap_or(0)
}

/// Points as a non-negative float, 0 when unknown
fn points(raw: &Value) -> f64 {
    POINTS.resolve(raw, number).filter(|p| *p >= 0.0).unwrap_or(0.0)
}

/// Wins stay `None` when the API had no data
fn wins(raw: &Value) -> Option<u32> {
    WINS.resolve(raw, count)
}

fn nested_id(nested: Option<&Value>, ids: Candidates, raw: &Value, flat: Candidates) -> String {
    nested.and_then(|n| ids.text(n)).or_else(|| flat.text(raw)).unwrap_or_default()
}

/// Map a raw drivers' championship row; never fails
pub fn map_driver_standing(raw: &Value) -> DriverStandingItem {
    let nested = NESTED_DRIVER.object(raw);

    DriverStandingItem {
        position: position(raw),
        points: points(raw),
        wins: wins(raw),
        driver: DriverRef {
            id: nested_id(nested, driver::ID, raw, FLAT_DRIVER_ID),
            name: nested.map(|n| driver::NAME.text_or_empty(n)).unwrap_or_default(),
            surname: nested.map(|n| driver::SURNAME.text_or_empty(n)).unwrap_or_default(),
        },
    }
}

/// Map a raw constructors' championship row; never fails
pub fn map_constructor_standing(raw: &Value) -> ConstructorStandingItem {
    let nested = NESTED_TEAM.object(raw);

    ConstructorStandingItem {
        position: position(raw),
        points: points(raw),
        wins: wins(raw),
        team: TeamRef {
            id: nested_id(nested, team::ID, raw, FLAT_TEAM_ID),
            name: nested.map(|n| team::NAME.text_or_empty(n)).unwrap_or_default(),
        },
    }
}
