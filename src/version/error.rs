use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Malformed version: {0}")]
    Malformed(String),

    #[error("The tag '{tag}' is different from the version '{version}' in the build configuration")]
    Mismatch { tag: String, version: String },

    #[error("Version '{0}' has already been released")]
    AlreadyReleased(String),

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
