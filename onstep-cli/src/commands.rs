use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use onstep_config::preset::{read_preset_file, write_preset_file};
use onstep_config::{OptionStore, Section, merge, render_text, schema};
use onstep_host::{HostSettings, PresetFetcher};

use crate::cli::Edits;

/// Write one option, warning about values the form would not offer
pub fn apply_set(store: &mut OptionStore, key: &str, value: &str) {
    match schema::lookup(key) {
        Some(definition) if !definition.accepts(value) => warn!(
            "'{}' is not one of the values offered for {}: {}",
            value,
            key,
            definition.kind.allowed().join(", ")
        ),
        Some(_) => {}
        None => warn!("'{}' is not a known option and will not be rendered", key),
    }
    store.set(key, value);
}

/// Seeded store with presets merged in order, then single writes
pub fn build_store(edits: &Edits) -> Result<OptionStore> {
    let mut store = OptionStore::seeded();
    for path in &edits.presets {
        let patch = read_preset_file(path)?;
        let written = merge(&mut store, patch);
        info!("Applied {} options from {}", written, path.display());
    }
    for (key, value) in &edits.sets {
        apply_set(&mut store, key, value);
    }
    Ok(store)
}

/// Print the rendered block, or write it to `output`
pub fn emit(store: &OptionStore, output: Option<&Path>) -> Result<()> {
    let text = render_text(store)?;
    match output {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Configuration written to {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

pub fn options(section: Option<Section>) {
    let sections: Vec<Section> = match section {
        Some(section) => vec![section],
        None => Section::ALL.to_vec(),
    };
    for section in sections {
        println!("[{}]", section);
        for definition in schema::in_section(section) {
            println!(
                "  {:<32} {:<7} {}",
                definition.key,
                definition.kind.name(),
                definition.default
            );
            let allowed = definition.kind.allowed();
            if !allowed.is_empty() {
                println!("  {:<32} one of: {}", "", allowed.join(", "));
            }
        }
    }
}

pub fn render(edits: &Edits, output: Option<&Path>) -> Result<()> {
    let store = build_store(edits)?;
    emit(&store, output)
}

pub fn export(edits: &Edits, output: &Path) -> Result<()> {
    let store = build_store(edits)?;
    write_preset_file(&store, output)?;
    Ok(())
}

pub fn remote_list(settings: &HostSettings) -> Result<()> {
    let fetcher = PresetFetcher::from_settings(settings);
    let presets = fetcher.list_presets()?;
    if presets.is_empty() {
        warn!(
            "No configuration files found in {}",
            fetcher.source().listing_url()
        );
        return Ok(());
    }
    for preset in presets {
        println!("{}", preset);
    }
    Ok(())
}

pub fn remote_fetch(
    settings: &HostSettings,
    name: &str,
    sets: &[(String, String)],
    output: Option<&Path>,
    save: Option<&Path>,
) -> Result<()> {
    let fetcher = PresetFetcher::from_settings(settings);
    let mut store = OptionStore::seeded();
    fetcher
        .load_into(&mut store, name)
        .with_context(|| format!("Failed to load remote preset {}", name))?;
    for (key, value) in sets {
        apply_set(&mut store, key, value);
    }

    if let Some(path) = save {
        write_preset_file(&store, path)?;
        if output.is_none() {
            return Ok(());
        }
    }
    emit(&store, output)
}

pub fn settings(settings: &HostSettings) -> Result<()> {
    print!("{}", settings.to_toml()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn presets_then_sets() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.csv");
        fs::write(&first, r#"{"PINMAP": "CNC3", "MOUNT_TYPE": "FORK"}"#).unwrap();
        fs::write(&second, "PINMAP\r\nMaxPCB2\r\n").unwrap();

        let edits = Edits {
            presets: vec![first, second],
            sets: vec![("MOUNT_TYPE".to_string(), "ALTAZM".to_string())],
        };
        let store = build_store(&edits).unwrap();
        assert_eq!(store.get("PINMAP"), Ok("MaxPCB2"));
        assert_eq!(store.get("MOUNT_TYPE"), Ok("ALTAZM"));
    }

    #[test]
    fn out_of_set_values_are_applied() {
        let mut store = OptionStore::seeded();
        apply_set(&mut store, "MOUNT_TYPE", "DOBSONIAN");
        assert_eq!(store.get("MOUNT_TYPE"), Ok("DOBSONIAN"));
    }

    #[test]
    fn missing_preset_file_fails() {
        let edits = Edits {
            presets: vec![PathBuf::from("/nonexistent/preset.json")],
            sets: Vec::new(),
        };
        assert!(build_store(&edits).is_err());
    }

    #[test]
    fn export_then_render() {
        let dir = tempfile::tempdir().unwrap();
        let preset = dir.path().join("scope.csv");
        let config = dir.path().join("Config.h");

        let edits = Edits {
            presets: Vec::new(),
            sets: vec![("PINMAP".to_string(), "MaxPCB2".to_string())],
        };
        export(&edits, &preset).unwrap();

        let edits = Edits {
            presets: vec![preset],
            sets: Vec::new(),
        };
        render(&edits, Some(&config)).unwrap();
        let text = fs::read_to_string(&config).unwrap();
        assert!(text.contains("#define PINMAP                        MaxPCB2"));
        assert!(!text.ends_with('\n'));
    }
}
