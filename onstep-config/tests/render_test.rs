pub mod common;

use std::collections::HashSet;

use onstep_config::render::{render, render_text, template_keys};
use onstep_config::{OptionStore, schema};

const DEFAULT_CONFIG: &str = include_str!("fixtures/default_config.h");
const MAXPCB2_CONFIG: &str = include_str!("fixtures/maxpcb2_config.h");

#[test]
fn default_render_matches_reference() {
    let text = render_text(&OptionStore::seeded()).unwrap();
    assert_eq!(text, DEFAULT_CONFIG);
}

#[test]
fn edited_render_matches_reference() {
    let mut store = OptionStore::seeded();
    store.set("PINMAP", "MaxPCB2");
    store.set("FEATURE3_NAME", "DewHeater");
    store.set("FEATURE3_PURPOSE", "DEW_HEATER");
    store.set("AXIS1_STEPS_PER_DEGREE", "12800");

    assert_eq!(render_text(&store).unwrap(), MAXPCB2_CONFIG);
}

#[test]
fn pinmap_edit_changes_one_line() {
    let mut store = OptionStore::seeded();
    store.set("PINMAP", "MaxPCB2");

    let lines = render(&store).unwrap();
    let defaults = render(&OptionStore::seeded()).unwrap();
    assert!(lines.contains(&"#define PINMAP                        MaxPCB2".to_string()));
    assert!(lines.contains(&"#define AXIS1_DRIVER_MODEL            TMC2130".to_string()));

    let changed: Vec<(&String, &String)> = lines.iter().zip(&defaults).filter(|(a, b)| a != b).collect();
    assert_eq!(changed.len(), 1);
}

#[test]
fn feature_name_is_quoted() {
    let mut store = OptionStore::seeded();
    store.set("FEATURE3_NAME", "DewHeater");

    let lines = render(&store).unwrap();
    assert!(lines.contains(&"#define FEATURE3_NAME              \"DewHeater\"".to_string()));
}

#[test]
fn one_directive_per_template_key() {
    let lines = render(&OptionStore::seeded()).unwrap();
    for key in template_keys() {
        let prefix = format!("#define {key} ");
        let count = lines.iter().filter(|line| line.starts_with(&prefix)).count();
        assert_eq!(count, 1, "{key} must be rendered exactly once");
    }
    let directives = lines.iter().filter(|line| line.starts_with("#define ")).count();
    // every option plus FileVersionConfig
    assert_eq!(directives, template_keys().count() + 1);
}

#[test]
fn template_and_schema_agree() {
    let template: HashSet<&str> = template_keys().collect();
    let schema: HashSet<&str> = schema::definitions().iter().map(|def| def.key.as_str()).collect();
    assert_eq!(template.len(), template_keys().count(), "template keys must be unique");
    assert_eq!(template, schema);
}

#[test]
fn extra_store_keys_are_not_rendered() {
    let mut store = OptionStore::seeded();
    store.set("FOO", "BAR");
    let text = render_text(&store).unwrap();
    assert!(!text.contains("FOO"));
    assert_eq!(text, DEFAULT_CONFIG);
}

#[test]
fn values_are_not_validated() {
    let mut store = OptionStore::seeded();
    store.set("AXIS1_LIMIT_MIN", "200");
    store.set("AXIS1_LIMIT_MAX", "-200");
    store.set("MOUNT_TYPE", "NOT_A_MOUNT");

    let lines = render(&store).unwrap();
    assert!(lines.contains(&"#define AXIS1_LIMIT_MIN              200".to_string()));
    assert!(lines.contains(&"#define MOUNT_TYPE                    NOT_A_MOUNT".to_string()));
}
