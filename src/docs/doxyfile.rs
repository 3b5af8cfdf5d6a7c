//! Doxyfile version patching

use std::path::Path;

use tracing::{info, warn};

use crate::docs::error::PublishError;
use crate::version::types::Version;

/// Placeholder replaced with the rendered version
pub const VERSION_PLACEHOLDER: &str = "%PROJECT_VERSION%";

/// Replace every version placeholder in the Doxyfile at `path`
///
/// Returns the number of replaced placeholders.
pub fn patch_doxyfile(path: &Path, version: &Version) -> Result<usize, PublishError> {
    if !path.is_file() {
        return Err(PublishError::MissingContent(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(PublishError::io(path))?;
    let count = content.matches(VERSION_PLACEHOLDER).count();
    if count == 0 {
        warn!("No {} placeholder found in {:?}", VERSION_PLACEHOLDER, path);
        return Ok(0);
    }

    let updated = content.replace(VERSION_PLACEHOLDER, &version.to_string());
    std::fs::write(path, updated).map_err(PublishError::io(path))?;

    info!("Updated {:?} with version {}", path, version);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::parser::parse_literal;
    use tempfile::TempDir;

    #[test]
    fn patch_doxyfile_replaces_every_placeholder() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Doxyfile");
        std::fs::write(
            &path,
            "PROJECT_NAME = libocpp\nPROJECT_NUMBER = %PROJECT_VERSION%\nALIASES = v=%PROJECT_VERSION%\n",
        )
        .unwrap();

        let count = patch_doxyfile(&path, &parse_literal("2.1.0-rc1-SNAPSHOT").unwrap()).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "PROJECT_NAME = libocpp\nPROJECT_NUMBER = 2.1.0-rc1-SNAPSHOT\nALIASES = v=2.1.0-rc1-SNAPSHOT\n"
        );
    }

    #[test]
    fn patch_doxyfile_without_placeholder_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Doxyfile");
        std::fs::write(&path, "PROJECT_NUMBER = 1.0.0\n").unwrap();

        let count = patch_doxyfile(&path, &parse_literal("2.0.0").unwrap()).unwrap();

        assert_eq!(count, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "PROJECT_NUMBER = 1.0.0\n");
    }

    #[test]
    fn patch_doxyfile_missing_file_is_missing_content() {
        let dir = TempDir::new().unwrap();

        let result = patch_doxyfile(&dir.path().join("Doxyfile"), &parse_literal("2.0.0").unwrap());

        assert!(matches!(result, Err(PublishError::MissingContent(_))));
    }
}
