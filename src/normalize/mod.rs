//! # Response Normalization
//!
//! Pure functions turning loosely typed API payloads into the view models in
//! [`crate::types`]. The upstream API is inconsistent across versions and
//! mirrors, so every attribute is resolved through an explicit ordered list of
//! candidate keys ([`Candidates`]) and every numeric field is coerced leniently.
//!
//! ## Guarantees
//!
//! - **Total**: no mapping function fails or panics, whatever the input shape
//! - **Defaulted**: required strings become `""`, required numbers `0`
//! - **No NaN**: unparsable or non-finite numbers become `None` or `0`
//! - **Pure**: same input, same output; nothing keeps a reference to the raw value
//!
//! ## Example
//!
//! ```rust
//! use paddock::normalize::{map_driver, unwrap_sequence, DRIVER_LIST_KEYS};
//! use serde_json::json;
//!
//! let response = json!({"total": 1, "drivers": [{"driverId": "leclerc", "number": "16"}]});
//! let drivers: Vec<_> = unwrap_sequence(&response, DRIVER_LIST_KEYS).iter().map(map_driver).collect();
//!
//! assert_eq!(drivers[0].id, "leclerc");
//! assert_eq!(drivers[0].number, Some(16));
//! assert_eq!(drivers[0].name, "");
//! ```

mod driver;
mod envelope;
mod fields;
mod standings;
mod team;

pub use driver::map_driver;
pub use envelope::{
    CONSTRUCTORS_CHAMPIONSHIP_KEYS, DRIVER_LIST_KEYS, DRIVERS_CHAMPIONSHIP_KEYS, ENVELOPE_KEYS,
    TEAM_KEYS, TEAM_LIST_KEYS, unwrap_sequence, unwrap_single,
};
pub use fields::{Candidates, count, integer, number, text};
pub use standings::{map_constructor_standing, map_driver_standing};
pub use team::map_team;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{Value, json};

    // Arbitrary JSON up to a small depth
    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            any::<f64>().prop_map(|f| serde_json::Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)),
            ".{0,12}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 32, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map(
                    prop::sample::select(vec![
                        "teamId", "teamName", "driverId", "name", "surname", "number",
                        "position", "points", "wins", "driver", "Driver", "team", "Team",
                        "results", "data", "standings", "teams", "drivers",
                    ]),
                    inner,
                    0..6,
                )
                .prop_map(|map| {
                    Value::Object(map.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
                }),
            ]
        })
    }

    proptest! {
        #[test]
        fn mappers_are_total_and_never_nan(raw in arb_json()) {
            let team = map_team(&raw);
            let driver = map_driver(&raw);
            let standing = map_driver_standing(&raw);
            let constructor = map_constructor_standing(&raw);

            prop_assert!(standing.points.is_finite() && standing.points >= 0.0);
            prop_assert!(constructor.points.is_finite() && constructor.points >= 0.0);

            // Pure: mapping twice gives the same result
            prop_assert_eq!(team, map_team(&raw));
            prop_assert_eq!(driver, map_driver(&raw));
            prop_assert_eq!(standing, map_driver_standing(&raw));
            prop_assert_eq!(constructor, map_constructor_standing(&raw));
        }

        #[test]
        fn single_agrees_with_sequence_head(raw in arb_json()) {
            let items = unwrap_sequence(&raw, TEAM_LIST_KEYS);
            let single = unwrap_single(&raw, TEAM_LIST_KEYS);
            prop_assert_eq!(single, items.first().cloned());
        }

        #[test]
        fn numeric_driver_numbers_survive(n in 0i64..100_000) {
            prop_assert_eq!(map_driver(&json!({"number": n})).number, Some(n));
            prop_assert_eq!(map_driver(&json!({"number": n.to_string()})).number, Some(n));
        }
    }

    #[test]
    fn each_envelope_yields_the_same_team() {
        let x = json!({"teamId": "red_bull", "teamName": "Red Bull Racing"});
        let expected = map_team(&x);

        for root in [json!({"results": [x]}), json!({"data": [x]}), json!({"standings": [x]})] {
            let teams: Vec<_> = unwrap_sequence(&root, TEAM_LIST_KEYS).iter().map(map_team).collect();
            assert_eq!(teams, vec![expected.clone()]);
        }

        assert!(unwrap_sequence(&json!({}), TEAM_LIST_KEYS).is_empty());
    }

    #[test]
    fn championship_order_is_preserved() {
        let root = json!({
            "season": 2023,
            "drivers_championship": [
                {"position": 2, "driverId": "perez", "points": 285},
                {"position": 1, "driverId": "max_verstappen", "points": 575},
            ],
        });
        let ids: Vec<_> = unwrap_sequence(&root, DRIVERS_CHAMPIONSHIP_KEYS)
            .iter()
            .map(map_driver_standing)
            .map(|row| row.driver.id)
            .collect();
        assert_eq!(ids, ["perez", "max_verstappen"]);
    }
}
