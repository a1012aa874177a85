use displaydoc::Display;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with the startup configuration.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    /// Unable to read {path:?}: {source}
    Read { path: PathBuf, source: io::Error },
    /// Invalid settings in {path:?}: {source}
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// {0}
    Settings(#[from] conway::Error),
}
