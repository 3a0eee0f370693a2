// Host settings: embedded defaults layered with an optional user file

use std::path::Path;
use std::time::Duration;

use config::{Config, File, FileFormat};
use log::debug;
use serde_derive::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;

use crate::error::HostResult;
use crate::remote::RemoteSource;

const DEFAULT_SETTINGS: &str = include_str!("default_settings.toml");

/// HTTP client settings
#[serde_inline_default]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HttpSettings {
    /// Global timeout for one request, in seconds
    #[serde_inline_default(30)]
    pub timeout_secs: u64,
    /// Sent as `User-Agent`, the GitHub API rejects requests without one
    #[serde_inline_default("onstep-configurator".to_string())]
    pub user_agent: String,
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: "onstep-configurator".to_string(),
        }
    }
}

/// Effective host settings
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HostSettings {
    #[serde(default)]
    pub remote: RemoteSource,
    #[serde(default)]
    pub http: HttpSettings,
}

impl HostSettings {
    /// Load the embedded defaults, then overlay `user_path` if given.
    ///
    /// The user file must exist when a path is passed; keys it leaves out keep
    /// their default.
    pub fn load(user_path: Option<&Path>) -> HostResult<Self> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml));
        if let Some(path) = user_path {
            debug!("Loading host settings from {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Effective settings as a TOML document
    pub fn to_toml(&self) -> HostResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
