use std::path::PathBuf;

use thiserror::Error;

/// Errors raised outside the resolution engine: reading artifacts and
/// configuration, and writing documentation pages.
#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {source} (path: {})", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid artifact: {source} (path: {})", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {source} (path: {})", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("invalid template: {message} (path: {})", .path.display())]
    InvalidTemplate { message: String, path: PathBuf },

    #[error("failed to serialize ABI: {0}")]
    Abi(#[from] serde_json::Error),
}

/// Convenience alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
