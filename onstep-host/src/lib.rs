//! Host side of the OnStepX configurator: remote presets and settings.

pub mod error;
pub mod remote;
pub mod settings;

pub use error::{HostError, HostResult};
pub use remote::{PresetFetcher, RemotePreset, RemoteSource, Transport, UreqTransport};
pub use settings::{HostSettings, HttpSettings};
