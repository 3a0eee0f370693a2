use log::debug;
use serde_json::{Map, Value};

use super::{PresetFormat, PresetPatch};
use crate::error::{ConfigError, ConfigResult};
use crate::schema;
use crate::store::OptionStore;

fn decode_error(message: impl Into<String>) -> ConfigError {
    ConfigError::DecodeFailed {
        format: PresetFormat::Json,
        message: message.into(),
    }
}

/// The store as a flat JSON object, in store order
pub fn encode_object(store: &OptionStore) -> Map<String, Value> {
    store
        .iter()
        .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
        .collect()
}

pub fn to_json(store: &OptionStore) -> ConfigResult<String> {
    serde_json::to_string(&encode_object(store)).map_err(|e| ConfigError::EncodeFailed {
        format: PresetFormat::Json,
        message: e.to_string(),
    })
}

/// Stage every known key of a flat JSON object.
///
/// Strings are taken verbatim and numbers by their JSON text. Any other value
/// type is rejected, as is a document that is not an object. Unknown keys are
/// dropped.
pub fn decode_object(bytes: &[u8]) -> ConfigResult<PresetPatch> {
    let document: Value = serde_json::from_slice(bytes).map_err(|e| decode_error(e.to_string()))?;
    let Value::Object(entries) = document else {
        return Err(decode_error("expected a top-level object"));
    };

    let mut patch = PresetPatch::new();
    for (key, value) in entries {
        if !schema::is_known(&key) {
            debug!("Ignoring unknown option '{}'", key);
            continue;
        }
        let text = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            other => {
                return Err(decode_error(format!(
                    "value of '{}' must be a string or a number, got {}",
                    key, other
                )));
            }
        };
        patch.stage(key, text);
    }
    Ok(patch)
}
