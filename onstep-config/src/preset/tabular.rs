use csv::{ReaderBuilder, Terminator, WriterBuilder};
use log::{debug, warn};

use super::{PresetFormat, PresetPatch};
use crate::error::{ConfigError, ConfigResult};
use crate::schema;
use crate::store::OptionStore;

fn decode_error(message: impl Into<String>) -> ConfigError {
    ConfigError::DecodeFailed {
        format: PresetFormat::Csv,
        message: message.into(),
    }
}

fn encode_error(message: impl Into<String>) -> ConfigError {
    ConfigError::EncodeFailed {
        format: PresetFormat::Csv,
        message: message.into(),
    }
}

/// Header row of store keys followed by one row of values
pub fn encode_tabular(store: &OptionStore) -> ConfigResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());
    writer
        .write_record(store.iter().map(|(key, _)| key))
        .map_err(|e| encode_error(e.to_string()))?;
    writer
        .write_record(store.iter().map(|(_, value)| value))
        .map_err(|e| encode_error(e.to_string()))?;
    writer.into_inner().map_err(|e| encode_error(e.to_string()))
}

/// Stage every known column of the first data row.
///
/// Only the first data row is read; later rows are ignored. A row shorter than
/// the header stages only the columns it has, and a header-only file stages
/// nothing.
pub fn decode_tabular(bytes: &[u8]) -> ConfigResult<PresetPatch> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);
    let headers = reader.headers().map_err(|e| decode_error(e.to_string()))?.clone();

    let mut records = reader.records();
    let Some(first) = records.next() else {
        debug!("CSV preset has no data row");
        return Ok(PresetPatch::new());
    };
    let first = first.map_err(|e| decode_error(e.to_string()))?;

    let ignored = records.count();
    if ignored > 0 {
        warn!("CSV preset has {} extra rows, only the first one is used", ignored);
    }

    let mut patch = PresetPatch::new();
    for (key, value) in headers.iter().zip(first.iter()) {
        if schema::is_known(key) {
            patch.stage(key, value);
        } else {
            debug!("Ignoring unknown option '{}'", key);
        }
    }
    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_header_and_one_row() {
        let mut store = OptionStore::seeded();
        store.set("FEATURE1_NAME", "Dew, heater");
        let bytes = encode_tabular(&store).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let lines: Vec<&str> = text.split("\r\n").filter(|line| !line.is_empty()).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("PINMAP,SERIAL_A_BAUD_DEFAULT,"));
        assert!(lines[1].starts_with("BTT_SKR_PRO,9600,"));
        assert!(lines[1].contains("\"Dew, heater\""));
    }

    #[test]
    fn first_row_wins() {
        let patch = decode_tabular(b"PINMAP,MOUNT_TYPE\nCNC3,FORK\nMaxPCB2,ALTAZM\n").unwrap();
        assert_eq!(patch.get("PINMAP"), Some("CNC3"));
        assert_eq!(patch.get("MOUNT_TYPE"), Some("FORK"));
    }

    #[test]
    fn short_row_and_unknown_columns() {
        let patch = decode_tabular(b"FOO,PINMAP,MOUNT_TYPE\nBAR,CNC3\n").unwrap();
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.get("PINMAP"), Some("CNC3"));
        assert_eq!(patch.get("MOUNT_TYPE"), None);
    }

    #[test]
    fn header_only_stages_nothing() {
        assert!(decode_tabular(b"PINMAP,MOUNT_TYPE\n").unwrap().is_empty());
        assert!(decode_tabular(b"").unwrap().is_empty());
    }

    #[test]
    fn quoted_values() {
        let patch = decode_tabular(b"FEATURE2_NAME\r\n\"Focus \"\"A\"\", main\"\r\n").unwrap();
        assert_eq!(patch.get("FEATURE2_NAME"), Some("Focus \"A\", main"));
    }
}
