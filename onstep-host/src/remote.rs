//! Preset repository access.
//!
//! Presets live in one folder of a GitHub repository. The folder is listed
//! through the contents API and single files are downloaded from the raw host.

use std::fmt;

use log::{debug, info};
use onstep_config::preset::{self, PresetFormat};
use onstep_config::{OptionStore, merge};
use serde_derive::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;

use crate::error::{HostError, HostResult};
use crate::settings::{HostSettings, HttpSettings};

/// Location of the preset folder
#[serde_inline_default]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteSource {
    #[serde_inline_default("Mr-Royce".to_string())]
    pub owner: String,
    #[serde_inline_default("onstep-configurator".to_string())]
    pub repo: String,
    #[serde_inline_default("main".to_string())]
    pub branch: String,
    #[serde_inline_default("presets".to_string())]
    pub folder: String,
}

impl Default for RemoteSource {
    fn default() -> Self {
        Self {
            owner: "Mr-Royce".to_string(),
            repo: "onstep-configurator".to_string(),
            branch: "main".to_string(),
            folder: "presets".to_string(),
        }
    }
}

impl RemoteSource {
    /// Contents API URL of the preset folder
    pub fn listing_url(&self) -> String {
        format!(
            "https://api.github.com/repos/{}/{}/contents/{}",
            self.owner, self.repo, self.folder
        )
    }

    /// Raw download URL of one preset file
    pub fn file_url(&self, name: &str) -> String {
        format!(
            "https://raw.githubusercontent.com/{}/{}/{}/{}/{}",
            self.owner, self.repo, self.branch, self.folder, name
        )
    }
}

/// Blocking HTTP GET returning the response body.
///
/// A non-success status is an error.
pub trait Transport {
    fn get(&self, url: &str) -> HostResult<Vec<u8>>;
}

/// [`Transport`] backed by a `ureq` agent
pub struct UreqTransport {
    agent: ureq::Agent,
    user_agent: String,
}

impl UreqTransport {
    pub fn new(http: &HttpSettings) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(http.timeout()))
            .build();
        Self {
            agent: config.into(),
            user_agent: http.user_agent.clone(),
        }
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> HostResult<Vec<u8>> {
        let fetch_failed = |e: ureq::Error| HostError::FetchFailed {
            url: url.to_string(),
            message: e.to_string(),
        };
        debug!("GET {}", url);
        let mut response = self
            .agent
            .get(url)
            .header("User-Agent", self.user_agent.as_str())
            .call()
            .map_err(fetch_failed)?;
        response.body_mut().read_to_vec().map_err(fetch_failed)
    }
}

/// A preset file offered by the repository
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemotePreset {
    pub name: String,
    pub format: PresetFormat,
}

impl fmt::Display for RemotePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.format)
    }
}

#[derive(Deserialize)]
struct ListingEntry {
    name: String,
}

pub struct PresetFetcher<T: Transport> {
    source: RemoteSource,
    transport: T,
}

impl PresetFetcher<UreqTransport> {
    pub fn from_settings(settings: &HostSettings) -> Self {
        Self::new(settings.remote.clone(), UreqTransport::new(&settings.http))
    }
}

impl<T: Transport> PresetFetcher<T> {
    pub fn new(source: RemoteSource, transport: T) -> Self {
        Self { source, transport }
    }

    pub fn source(&self) -> &RemoteSource {
        &self.source
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Preset files of the folder, in listing order.
    ///
    /// Entries without a `.json` or `.csv` suffix are skipped. An empty result
    /// means the folder offers no presets.
    pub fn list_presets(&self) -> HostResult<Vec<RemotePreset>> {
        let url = self.source.listing_url();
        let body = self.transport.get(&url)?;
        let entries: Vec<ListingEntry> =
            serde_json::from_slice(&body).map_err(|e| HostError::UnexpectedListing(e.to_string()))?;

        let presets: Vec<RemotePreset> = entries
            .into_iter()
            .filter_map(|entry| {
                let format = PresetFormat::from_name(&entry.name).ok()?;
                Some(RemotePreset {
                    name: entry.name,
                    format,
                })
            })
            .collect();
        info!("{} lists {} presets", url, presets.len());
        Ok(presets)
    }

    /// Raw bytes of one preset file
    pub fn fetch_preset(&self, name: &str) -> HostResult<Vec<u8>> {
        self.transport.get(&self.source.file_url(name))
    }

    /// Fetch `name`, decode it by suffix and merge it into `store`.
    ///
    /// Returns the number of options written. On any error the store is left
    /// untouched.
    pub fn load_into(&self, store: &mut OptionStore, name: &str) -> HostResult<usize> {
        let format = PresetFormat::from_name(name)?;
        let bytes = self.fetch_preset(name)?;
        let patch = preset::decode(&bytes, format)?;
        let written = merge(store, patch);
        info!("Loaded {} options from remote preset {}", written, name);
        Ok(written)
    }
}
