pub mod common;

use onstep_config::preset::{
    self, decode_object, decode_tabular, encode_tabular, read_preset_file, to_json, write_preset_file,
};
use onstep_config::{ConfigError, OptionStore, PresetFormat, merge};

use crate::common::edited_store;

#[test]
fn json_round_trip() {
    let edited = edited_store();
    let json = to_json(&edited).unwrap();

    let mut store = OptionStore::seeded();
    merge(&mut store, decode_object(json.as_bytes()).unwrap());
    assert_eq!(store.snapshot(), edited.snapshot());
}

#[test]
fn csv_round_trip() {
    let edited = edited_store();
    let csv = encode_tabular(&edited).unwrap();

    let mut store = OptionStore::seeded();
    merge(&mut store, decode_tabular(&csv).unwrap());
    assert_eq!(store.snapshot(), edited.snapshot());
}

#[test]
fn unknown_keys_leave_store_untouched() {
    let mut store = OptionStore::seeded();
    let before = store.snapshot();

    let patch = decode_object(br#"{"FOO": "BAR"}"#).unwrap();
    assert!(patch.is_empty());
    merge(&mut store, patch);
    assert_eq!(store.snapshot(), before);
    assert!(store.get("FOO").is_err());
}

#[test]
fn missing_keys_keep_prior_values() {
    let mut store = OptionStore::seeded();
    store.set("PINMAP", "CNC3");
    store.set("AXIS2_LIMIT_MAX", "85");

    let patch = decode_object(br#"{"MOUNT_TYPE": "FORK", "AXIS2_LIMIT_MIN": -85}"#).unwrap();
    assert_eq!(merge(&mut store, patch), 2);

    assert_eq!(store.get("PINMAP"), Ok("CNC3"));
    assert_eq!(store.get("AXIS2_LIMIT_MAX"), Ok("85"));
    assert_eq!(store.get("MOUNT_TYPE"), Ok("FORK"));
    assert_eq!(store.get("AXIS2_LIMIT_MIN"), Ok("-85"));
}

#[test]
fn malformed_presets_fail_before_merge() {
    let store = OptionStore::seeded();
    let before = store.snapshot();

    let err = preset::decode(b"{\"PINMAP\": ", PresetFormat::Json).unwrap_err();
    assert!(matches!(err, ConfigError::DecodeFailed { format: PresetFormat::Json, .. }));

    let err = preset::decode(b"PINMAP\n\xff\xfe\n", PresetFormat::Csv).unwrap_err();
    assert!(matches!(err, ConfigError::DecodeFailed { format: PresetFormat::Csv, .. }));

    assert_eq!(store.snapshot(), before);
}

#[test]
fn csv_extra_rows_are_ignored() {
    let mut store = OptionStore::seeded();
    let patch = decode_tabular(b"PINMAP,WEATHER\r\nCNC3,BME280\r\nMaxESP3,BMP280\r\n").unwrap();
    merge(&mut store, patch);
    assert_eq!(store.get("PINMAP"), Ok("CNC3"));
    assert_eq!(store.get("WEATHER"), Ok("BME280"));
}

#[test]
fn preset_files_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let edited = edited_store();

    for name in ["scope.json", "scope.csv"] {
        let path = dir.path().join(name);
        write_preset_file(&edited, &path).unwrap();

        let mut store = OptionStore::seeded();
        merge(&mut store, read_preset_file(&path).unwrap());
        assert_eq!(store.snapshot(), edited.snapshot(), "{name} did not round trip");
    }
}

#[test]
fn preset_file_errors() {
    let dir = tempfile::tempdir().unwrap();

    let err = write_preset_file(&OptionStore::seeded(), dir.path().join("scope.txt")).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));

    let err = read_preset_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ConfigError::FileRead { .. }));
}

#[test]
fn reads_presets_saved_by_the_desktop_tool() {
    // Same layout as a preset written with Python's json.dump
    let saved = br#"{"PINMAP": "MiniPCB2", "SERIAL_A_BAUD_DEFAULT": "9600", "AXIS1_DRIVER_MODEL": "TMC2209", "FEATURE1_NAME": "Heater"}"#;
    let mut store = OptionStore::seeded();
    merge(&mut store, decode_object(saved).unwrap());
    assert_eq!(store.get("PINMAP"), Ok("MiniPCB2"));
    assert_eq!(store.get("AXIS1_DRIVER_MODEL"), Ok("TMC2209"));
    assert_eq!(store.get("FEATURE1_NAME"), Ok("Heater"));
}
