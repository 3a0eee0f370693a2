use thiserror::Error;

/// Errors raised while talking to the preset repository or loading host settings
#[derive(Debug, Error)]
pub enum HostError {
    /// Network failure or non-success HTTP status
    #[error("Failed to fetch {url}: {message}")]
    FetchFailed { url: String, message: String },

    /// The directory listing is not an array of entries with a `name`
    #[error("Unexpected preset listing: {0}")]
    UnexpectedListing(String),

    /// The fetched preset could not be decoded
    #[error(transparent)]
    Config(#[from] onstep_config::ConfigError),

    #[error("Invalid host settings: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Failed to serialize host settings: {0}")]
    SettingsFormat(#[from] toml::ser::Error),
}

pub type HostResult<T> = Result<T, HostError>;
