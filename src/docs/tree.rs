//! Versioned documentation tree
//!
//! The documentation branch holds one directory per published version
//! (`2.1.0`, `2.1.0-rc1`, `2.2.0-SNAPSHOT`, ...), a `latest` alias pointing at
//! the newest stable release and a generated index.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::LATEST_ALIAS;
use crate::docs::error::PublishError;
use crate::version::ordering::sort_labels_most_recent_first;
use crate::version::parser::{is_version_literal, parse_literal};
use crate::version::types::Version;

/// A published version directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDirectory {
    pub name: String,
    pub path: PathBuf,
    pub version: Version,
}

/// Snapshot of the version directories found under a tree root
#[derive(Debug, Default)]
pub struct VersionTree {
    pub directories: Vec<VersionDirectory>,
    /// Names shaped like versions whose numbers could not be parsed
    pub unparsable: Vec<String>,
    pub has_latest: bool,
}

impl VersionTree {
    pub fn scan(root: &Path) -> Result<Self, PublishError> {
        let mut tree = VersionTree {
            has_latest: root.join(LATEST_ALIAS).exists(),
            ..Default::default()
        };

        let entries = std::fs::read_dir(root).map_err(PublishError::io(root))?;
        for entry in entries {
            let entry = entry.map_err(PublishError::io(root))?;
            let path = entry.path();
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if !path.is_dir() {
                continue;
            }
            if !is_version_literal(&name) {
                debug!("Skipping non-version directory: {}", name);
                continue;
            }

            match parse_literal(&name) {
                Ok(version) => {
                    debug!("Found version directory: {}", name);
                    tree.directories.push(VersionDirectory {
                        name,
                        path,
                        version,
                    });
                }
                Err(e) => {
                    warn!("Version directory {} cannot be ordered: {}", name, e);
                    tree.unparsable.push(name);
                }
            }
        }

        tree.directories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tree)
    }

    /// All version labels, most recent first, unparsable labels last
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .directories
            .iter()
            .map(|d| d.name.clone())
            .chain(self.unparsable.iter().cloned())
            .collect();
        sort_labels_most_recent_first(&mut labels);
        labels
    }
}

/// Changes to apply to the tree before publishing a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub to_delete: Vec<VersionDirectory>,
    pub publish_as: PathBuf,
}

/// Decide which directories a publish of `incoming` makes obsolete
///
/// Publishing a snapshot never deletes anything. Publishing a candidate or a
/// final release deletes only the snapshot of that exact version:
/// `2.1.0-rc1` removes `2.1.0-rc1-SNAPSHOT` but keeps `2.1.0-rc2-SNAPSHOT`,
/// and `2.1.0` removes `2.1.0-SNAPSHOT` only.
pub fn reconcile(
    existing: &[VersionDirectory],
    incoming: &Version,
    root: &Path,
) -> Reconciliation {
    let to_delete = if incoming.is_snapshot {
        Vec::new()
    } else {
        let obsolete = incoming.snapshot();
        existing
            .iter()
            .filter(|dir| dir.version == obsolete)
            .cloned()
            .collect()
    };

    Reconciliation {
        to_delete,
        publish_as: root.join(incoming.to_string()),
    }
}

/// Update of the `latest` alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestAlias {
    pub target: String,
    pub replaces_existing: bool,
}

/// `latest` moves only for final releases, never for candidates or snapshots
pub fn promote_latest(has_latest: bool, incoming: &Version) -> Option<LatestAlias> {
    incoming.is_final().then(|| LatestAlias {
        target: incoming.to_string(),
        replaces_existing: has_latest,
    })
}
