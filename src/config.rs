use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// Defaults
// =============================================================================

/// Branch holding the published documentation
pub const DEFAULT_DOCS_BRANCH: &str = "gh-pages";

/// Build configuration the version is read from
pub const DEFAULT_CMAKE_PATH: &str = "CMakeLists.txt";

/// Doxygen configuration patched with the version
pub const DEFAULT_DOXYFILE_PATH: &str = ".github/doxygen/Doxyfile";

/// Generated HTML documentation copied into the versioned directory
pub const DEFAULT_DOCS_SOURCE: &str = ".github/doxygen/out/html";

/// Timeout for a single git invocation in seconds (5 minutes)
pub const DEFAULT_GIT_TIMEOUT_SECS: u64 = 300;

/// Alias pointing at the newest stable release
pub const LATEST_ALIAS: &str = "latest";

/// Generated index of available versions
pub const VERSIONS_INDEX_FILE: &str = "list_versions.md";

pub const ROBOTS_FILE: &str = "robots.txt";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Release tooling configuration
///
/// Every field has a default so a partial JSON file is enough.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ReleaseConfig {
    pub project: ProjectConfig,
    pub docs: DocsConfig,
    pub git: GitConfig,
}

/// Where the project keeps its version and Doxygen files
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectConfig {
    pub cmake_path: PathBuf,
    pub doxyfile_path: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            cmake_path: PathBuf::from(DEFAULT_CMAKE_PATH),
            doxyfile_path: PathBuf::from(DEFAULT_DOXYFILE_PATH),
        }
    }
}

/// Documentation publishing settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DocsConfig {
    pub github_org: Option<String>,
    pub repo_name: Option<String>,
    pub branch: String,
    pub source: PathBuf,
    /// Directory the documentation branch is cloned under
    pub work_dir: PathBuf,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            github_org: None,
            repo_name: None,
            branch: DEFAULT_DOCS_BRANCH.to_string(),
            source: PathBuf::from(DEFAULT_DOCS_SOURCE),
            work_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GitConfig {
    pub timeout_secs: u64,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_GIT_TIMEOUT_SECS,
        }
    }
}

impl ReleaseConfig {
    /// Loads the config from `path`, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// HTTPS clone URL of a GitHub repository
pub fn github_repo_url(org: &str, repo: &str) -> String {
    format!("https://github.com/{org}/{repo}.git")
}
