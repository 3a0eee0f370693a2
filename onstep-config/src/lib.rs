//! Option schema, preset codec and `Config.h` renderer for OnStepX.
//!
//! An editing session seeds an [`OptionStore`] from the [`schema`], edits it
//! directly or through presets ([`preset`]), and finally renders it with
//! [`render::render`].

pub mod error;
pub mod preset;
pub mod render;
pub mod schema;
pub mod store;
pub mod values;

pub use error::{ConfigError, ConfigResult};
pub use preset::{PresetFormat, PresetPatch, merge};
pub use render::{render, render_text};
pub use schema::{OptionDefinition, OptionKind, Section};
pub use store::{OptionStore, Snapshot};
