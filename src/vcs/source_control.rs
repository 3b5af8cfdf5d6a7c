//! Capability trait for the source control operations a release needs

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::vcs::error::SourceControlError;

/// Narrow interface over the repository operations used by release tooling
///
/// Every call is atomic from the caller's point of view; failures are
/// reported, never retried.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait SourceControl: Send + Sync {
    /// Clones a single branch of `url` into `dest`
    async fn clone_branch(
        &self,
        branch: &str,
        url: &str,
        dest: &Path,
    ) -> Result<(), SourceControlError>;

    /// Fetches all tags from the default remote
    async fn fetch_tags(&self) -> Result<(), SourceControlError>;

    /// Returns true if the tag `name` exists locally
    async fn tag_exists(&self, name: &str) -> Result<bool, SourceControlError>;
}
