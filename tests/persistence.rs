use std::path::PathBuf;

use twinscope::persistence::{load_settings, save_settings, PersistenceError};
use twinscope::ScopeSettings;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("twinscope_{}_{}.json", name, std::process::id()))
}

#[test]
fn settings_round_trip() {
    let mut settings = ScopeSettings::default();
    settings.set_voltage_scale(0.5).unwrap();
    settings.set_timebase(25.0).unwrap();
    settings.set_trigger_level(-1.25).unwrap();
    settings.set_grid_divisions(12, 10).unwrap();

    let path = temp_path("round_trip");
    save_settings(&path, &settings).unwrap();
    let restored = load_settings(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(restored, settings);
}

#[test]
fn load_rejects_invalid_stored_scale() {
    let path = temp_path("invalid_scale");
    std::fs::write(
        &path,
        r#"{"voltage_scale":0.0,"timebase":10.0,"trigger_level":0.0,"grid_divisions":[10,8]}"#,
    )
    .unwrap();
    let result = load_settings(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(PersistenceError::Settings(_))));
}

#[test]
fn load_missing_file_is_an_io_error() {
    let result = load_settings(temp_path("does_not_exist"));
    assert!(matches!(result, Err(PersistenceError::Io(_))));
}

#[test]
fn load_garbage_is_a_json_error() {
    let path = temp_path("garbage");
    std::fs::write(&path, "not json").unwrap();
    let result = load_settings(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(PersistenceError::Json(_))));
}
