use std::path::PathBuf;

use thiserror::Error;

use crate::vcs::error::SourceControlError;
use crate::version::error::VersionError;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Expected documentation input not found at {0:?}")]
    MissingContent(PathBuf),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    SourceControl(#[from] SourceControlError),
}

impl PublishError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| PublishError::Io { path, source }
    }
}
