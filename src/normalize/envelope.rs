//! Root response unwrapping
//!
//! Endpoints wrap their payload under `results`, `data`, `standings` or a
//! domain-specific key, or return the array bare. Unwrapping checks those in a
//! fixed order and never fails: an unexpected shape yields an empty result.

use serde_json::Value;
use tracing::trace;

/// Generic envelope keys, checked before any domain key
pub const ENVELOPE_KEYS: [&str; 3] = ["results", "data", "standings"];

/// Domain keys for team list endpoints
pub const TEAM_LIST_KEYS: &[&str] = &["teams"];
/// Domain keys for single-team endpoints
pub const TEAM_KEYS: &[&str] = &["team", "teams"];
/// Domain keys for driver list endpoints
pub const DRIVER_LIST_KEYS: &[&str] = &["drivers"];
/// Domain keys for the drivers' championship
pub const DRIVERS_CHAMPIONSHIP_KEYS: &[&str] = &["drivers_championship", "driversChampionship"];
/// Domain keys for the constructors' championship
pub const CONSTRUCTORS_CHAMPIONSHIP_KEYS: &[&str] =
    &["constructors_championship", "constructorsChampionship"];

/// Payload candidate, in priority order
///
/// Any array candidate beats every mapping candidate, so a metadata object
/// under `data` does not shadow the list under a domain key.
fn payload<'a>(root: &'a Value, domain_keys: &[&str]) -> Option<&'a Value> {
    if root.is_array() {
        return Some(root);
    }

    let first_where = |accept: fn(&Value) -> bool| {
        ENVELOPE_KEYS.iter().chain(domain_keys).find_map(|key| {
            root.get(*key).filter(|value| accept(*value)).inspect(|_| {
                trace!(key, "Resolved response payload");
            })
        })
    };
    first_where(Value::is_array).or_else(|| first_where(Value::is_object))
}

/// Unwrap a list payload
///
/// A payload that is already a single mapping becomes a one-element list.
pub fn unwrap_sequence(root: &Value, domain_keys: &[&str]) -> Vec<Value> {
    match payload(root, domain_keys) {
        Some(Value::Array(items)) => items.clone(),
        Some(single @ Value::Object(_)) => vec![single.clone()],
        _ => Vec::new(),
    }
}

/// Unwrap a single-entity payload
///
/// A list payload yields its first element; an empty list means "not found".
pub fn unwrap_single(root: &Value, domain_keys: &[&str]) -> Option<Value> {
    match payload(root, domain_keys)? {
        Value::Array(items) => items.first().cloned(),
        other => Some(other.clone()),
    }
}
