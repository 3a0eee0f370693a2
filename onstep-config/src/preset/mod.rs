//! Preset codec
//!
//! A preset is a saved snapshot of option values in one of two shapes: a flat
//! JSON object, or a CSV file with a header row of keys and a single row of
//! values. Decoding always goes into a [`PresetPatch`] first, so a malformed
//! preset never touches the store; [`merge`] then applies the patch in one step.

use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use log::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::store::OptionStore;

mod object;
mod tabular;

pub use object::{decode_object, encode_object, to_json};
pub use tabular::{decode_tabular, encode_tabular};

/// External shape of a preset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresetFormat {
    Json,
    Csv,
}

impl PresetFormat {
    /// Pick the format from a file name suffix
    pub fn from_name(name: &str) -> ConfigResult<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".json") {
            Ok(PresetFormat::Json)
        } else if lower.ends_with(".csv") {
            Ok(PresetFormat::Csv)
        } else {
            Err(ConfigError::UnsupportedFormat { name: name.to_string() })
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            PresetFormat::Json => "json",
            PresetFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for PresetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetFormat::Json => f.write_str("JSON"),
            PresetFormat::Csv => f.write_str("CSV"),
        }
    }
}

/// Values staged from a decoded preset, restricted to known option keys
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PresetPatch {
    values: IndexMap<String, String>,
}

impl PresetPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn stage(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for PresetPatch {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

/// Encode the whole store in the given shape
pub fn encode(store: &OptionStore, format: PresetFormat) -> ConfigResult<Vec<u8>> {
    match format {
        PresetFormat::Json => to_json(store).map(String::into_bytes),
        PresetFormat::Csv => encode_tabular(store),
    }
}

pub fn decode(bytes: &[u8], format: PresetFormat) -> ConfigResult<PresetPatch> {
    match format {
        PresetFormat::Json => decode_object(bytes),
        PresetFormat::Csv => decode_tabular(bytes),
    }
}

/// Apply a decoded preset to the store.
///
/// Keys in the patch overwrite their current value, or are added when the
/// store lacks them. Keys absent from the patch keep their value. Returns the
/// number of keys applied.
pub fn merge(store: &mut OptionStore, patch: PresetPatch) -> usize {
    let applied = patch.len();
    let mut staged = store.snapshot();
    staged.extend(patch);
    store.replace_all(staged);
    debug!("Merged {} preset values", applied);
    applied
}

/// Read and decode a local preset file, choosing the shape from its suffix
pub fn read_preset_file(path: impl AsRef<Path>) -> ConfigResult<PresetPatch> {
    let path = path.as_ref();
    let format = PresetFormat::from_name(&path.to_string_lossy())?;
    let bytes = fs::read(path).map_err(|e| ConfigError::FileRead {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let patch = decode(&bytes, format)?;
    info!("Loaded {} values from {}", patch.len(), path.display());
    Ok(patch)
}

/// Encode the store and write it to `path`, choosing the shape from its suffix
pub fn write_preset_file(store: &OptionStore, path: impl AsRef<Path>) -> ConfigResult<()> {
    let path = path.as_ref();
    let format = PresetFormat::from_name(&path.to_string_lossy())?;
    let bytes = encode(store, format)?;
    fs::write(path, bytes).map_err(|e| ConfigError::FileWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    info!("Saved {} preset to {}", format, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_name() {
        assert_eq!(PresetFormat::from_name("eq6.json"), Ok(PresetFormat::Json));
        assert_eq!(PresetFormat::from_name("EQ6.CSV"), Ok(PresetFormat::Csv));
        assert!(matches!(
            PresetFormat::from_name("eq6.txt"),
            Err(ConfigError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn merge_overwrites_and_adds() {
        let mut store = OptionStore::seeded();
        let mut patch = PresetPatch::new();
        patch.stage("PINMAP", "MaxESP3");
        patch.stage("EXTRA_KEY", "1");

        assert_eq!(merge(&mut store, patch), 2);
        assert_eq!(store.get("PINMAP"), Ok("MaxESP3"));
        assert_eq!(store.get("EXTRA_KEY"), Ok("1"));
        assert_eq!(store.get("MOUNT_TYPE"), Ok("GEM"));
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut store = OptionStore::seeded();
        let before = store.snapshot();
        assert_eq!(merge(&mut store, PresetPatch::new()), 0);
        assert_eq!(store.snapshot(), before);
    }
}
