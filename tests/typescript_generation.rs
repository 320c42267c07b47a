//! TypeScript Generation Tests
//!
//! Validates that paddock view models can be exported to TypeScript when the
//! tauri feature is enabled.

#[cfg(feature = "tauri")]
#[test]
fn test_view_models_implement_specta_type() {
    use specta::Type;

    // If this compiles, every view model is configured for TypeScript export.
    fn assert_type<T: Type>() {}

    assert_type::<paddock::Team>();
    assert_type::<paddock::TeamRef>();
    assert_type::<paddock::Driver>();
    assert_type::<paddock::DriverRef>();
    assert_type::<paddock::DriverStandingItem>();
    assert_type::<paddock::ConstructorStandingItem>();
    assert_type::<paddock::DriversChampionship>();
    assert_type::<paddock::ConstructorsChampionship>();
    assert_type::<paddock::ChartSeries>();
}

#[cfg(not(feature = "tauri"))]
#[test]
fn test_tauri_feature_disabled() {
    // View models still serialize without specta
    let driver = paddock::Driver { id: "leclerc".to_string(), ..Default::default() };
    let json = serde_json::to_value(&driver).unwrap();
    assert_eq!(json["id"], "leclerc");
    assert!(json.get("dateOfBirth").is_some());
}
