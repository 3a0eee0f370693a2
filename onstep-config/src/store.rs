use indexmap::IndexMap;

use crate::error::{ConfigError, ConfigResult};
use crate::schema;

/// Ordered key to value pairs, the shape presets are encoded from
pub type Snapshot = IndexMap<String, String>;

/// Current value of every option in an editing session.
///
/// All values are opaque text, whatever the option's kind. Entries are never
/// removed; a merge may add keys the schema does not know, which are kept but
/// never rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionStore {
    values: Snapshot,
}

impl OptionStore {
    /// Store holding every schema default, in schema order
    pub fn seeded() -> Self {
        let values = schema::definitions()
            .iter()
            .map(|def| (def.key.clone(), def.default.clone()))
            .collect();
        Self { values }
    }

    pub fn get(&self, key: &str) -> ConfigResult<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::UnknownKey { key: key.to_string() })
    }

    /// Overwrite (or add) a value. No check against the schema's allowed values.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Restore the schema default of `key`
    pub fn reset(&mut self, key: &str) -> ConfigResult<()> {
        let def = schema::lookup(key).ok_or_else(|| ConfigError::UnknownKey { key: key.to_string() })?;
        self.values.insert(def.key.clone(), def.default.clone());
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
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

    /// Copy of every key and value currently held
    pub fn snapshot(&self) -> Snapshot {
        self.values.clone()
    }

    /// Replace the whole content in one step
    pub(crate) fn replace_all(&mut self, values: Snapshot) {
        self.values = values;
    }
}

impl Default for OptionStore {
    fn default() -> Self {
        Self::seeded()
    }
}
