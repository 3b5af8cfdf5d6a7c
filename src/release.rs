//! Release version consistency checks
//!
//! - Release mode: the pushed tag must match the configured version.
//! - Snapshot mode: the configured version must not have been tagged yet.

use tracing::info;

use crate::vcs::error::SourceControlError;
use crate::vcs::source_control::SourceControl;
use crate::version::error::VersionError;
use crate::version::types::Version;

/// Check that `tag` is exactly the rendered release of `version`
///
/// The snapshot marker of the configured version is ignored since tags only
/// ever name released builds. The tag text is compared as is, so it also names
/// the published documentation directory.
pub fn check_release_tag(version: &Version, tag: &str) -> Result<(), VersionError> {
    let expected = version.release();
    info!("Input tag: '{}'", tag);

    if tag != expected.to_string() {
        return Err(VersionError::Mismatch {
            tag: tag.to_string(),
            version: expected.to_string(),
        });
    }

    info!(
        "Version consistency check passed: tag '{}' matches version '{}'",
        tag, expected
    );
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    SourceControl(#[from] SourceControlError),
}

/// Check that the release of `version` has not been tagged yet
pub async fn check_unreleased<S: SourceControl + ?Sized>(
    source_control: &S,
    version: &Version,
) -> Result<(), CheckError> {
    let release = version.release().to_string();

    source_control.fetch_tags().await?;
    if source_control.tag_exists(&release).await? {
        return Err(VersionError::AlreadyReleased(release).into());
    }

    info!("Version '{}' has not been released yet", release);
    Ok(())
}
