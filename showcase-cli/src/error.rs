//! Error type for the command-line front end.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between reading config and writing the page.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// An id (from `--open`, config `open`, or `snippet`) is not in the catalog
    #[error("unknown showcase entry '{id}' (known: {known})")]
    UnknownEntry { id: String, known: String },

    /// `--config` pointed at a file that does not exist
    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Config file exists but could not be read
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::config::ShowcaseConfig`]
    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Output could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ShowcaseError {
    /// Build an [`ShowcaseError::UnknownEntry`] listing the valid ids.
    pub fn unknown_entry(id: impl Into<String>) -> Self {
        let known = liquid_showcase::catalog::ids()
            .collect::<Vec<_>>()
            .join(", ");
        ShowcaseError::UnknownEntry {
            id: id.into(),
            known,
        }
    }
}
