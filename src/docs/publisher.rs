//! Publishing generated API documentation into the versioned tree
//!
//! One publish runs these steps against a fresh checkout of the documentation
//! branch:
//!
//! 1. Check that the generated documentation exists
//! 2. Clone the documentation branch
//! 3. Delete directories made obsolete by the incoming version
//! 4. Copy the documentation into the version's directory
//! 5. Re-point `latest` and write `robots.txt` for final releases
//! 6. Regenerate the versions index
//!
//! Nothing is rolled back on failure. Running the same publish again is safe.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{LATEST_ALIAS, ROBOTS_FILE, VERSIONS_INDEX_FILE};
use crate::docs::error::PublishError;
use crate::docs::index::render_index_labels;
use crate::docs::tree::{LatestAlias, VersionTree, promote_latest, reconcile};
use crate::vcs::source_control::SourceControl;
use crate::version::types::Version;

/// Only the latest release and the version index are meant to be crawled
pub const ROBOTS_TXT: &str = "User-agent: *\nAllow: /\nAllow: /latest/\nDisallow: /*/[0-9]*/\n";

/// Inputs of one publish operation
#[derive(Debug, Clone)]
pub struct PublicationRequest {
    pub version: Version,
    /// Generated documentation, copied read-only
    pub content_root: PathBuf,
    /// Checkout of the documentation branch
    pub tree_root: PathBuf,
}

/// What a publish changed in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub deleted: Vec<String>,
    pub published: PathBuf,
    pub latest: Option<LatestAlias>,
    pub index: String,
}

/// Publishes documentation to a branch of a remote repository
pub struct DocsPublisher<S: SourceControl> {
    source_control: S,
    repo_url: String,
    branch: String,
}

impl<S: SourceControl> DocsPublisher<S> {
    pub fn new(source_control: S, repo_url: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            source_control,
            repo_url: repo_url.into(),
            branch: branch.into(),
        }
    }

    pub fn source_control(&self) -> &S {
        &self.source_control
    }

    pub async fn publish(&self, request: &PublicationRequest) -> Result<PublishReport, PublishError> {
        info!("Using version: {}", request.version);
        ensure_content(&request.content_root)?;

        if request.tree_root.exists() {
            debug!("Removing stale checkout {:?}", request.tree_root);
            std::fs::remove_dir_all(&request.tree_root).map_err(PublishError::io(&request.tree_root))?;
        }
        self.source_control
            .clone_branch(&self.branch, &self.repo_url, &request.tree_root)
            .await?;

        update_tree(request)
    }
}

fn ensure_content(content_root: &Path) -> Result<(), PublishError> {
    if content_root.is_dir() {
        Ok(())
    } else {
        Err(PublishError::MissingContent(content_root.to_path_buf()))
    }
}

/// Apply a publish to an already checked out documentation tree
pub fn update_tree(request: &PublicationRequest) -> Result<PublishReport, PublishError> {
    let root = &request.tree_root;
    let version = &request.version;
    ensure_content(&request.content_root)?;

    let tree = VersionTree::scan(root)?;
    let plan = reconcile(&tree.directories, version, root);

    let mut deleted = Vec::with_capacity(plan.to_delete.len());
    for dir in &plan.to_delete {
        info!("Removing SNAPSHOT directory: {:?}", dir.path);
        std::fs::remove_dir_all(&dir.path).map_err(PublishError::io(&dir.path))?;
        deleted.push(dir.name.clone());
    }

    info!("Create target directory {}...", version);
    if plan.publish_as.exists() {
        std::fs::remove_dir_all(&plan.publish_as).map_err(PublishError::io(&plan.publish_as))?;
    }
    copy_dir_all(&request.content_root, &plan.publish_as)?;

    let latest = promote_latest(tree.has_latest, version);
    if let Some(alias) = &latest {
        info!("Pointing {} at {}", LATEST_ALIAS, alias.target);
        point_latest(root, &alias.target)?;

        let robots = root.join(ROBOTS_FILE);
        std::fs::write(&robots, ROBOTS_TXT).map_err(PublishError::io(&robots))?;
    }

    let tree = VersionTree::scan(root)?;
    let index = render_index_labels(tree.labels(), tree.has_latest);
    let index_path = root.join(VERSIONS_INDEX_FILE);
    std::fs::write(&index_path, &index).map_err(PublishError::io(&index_path))?;
    info!("Generated versions list:\n{}", index);

    Ok(PublishReport {
        deleted,
        published: plan.publish_as,
        latest,
        index,
    })
}

/// Recursive copy; symlinks are recreated, never followed
fn copy_dir_all(src: &Path, dst: &Path) -> Result<(), PublishError> {
    std::fs::create_dir_all(dst).map_err(PublishError::io(dst))?;

    for entry in std::fs::read_dir(src).map_err(PublishError::io(src))? {
        let entry = entry.map_err(PublishError::io(src))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        let file_type = entry.file_type().map_err(PublishError::io(&from))?;

        if file_type.is_symlink() {
            copy_symlink(&from, &to)?;
        } else if file_type.is_dir() {
            copy_dir_all(&from, &to)?;
        } else {
            std::fs::copy(&from, &to).map_err(PublishError::io(&from))?;
        }
    }
    Ok(())
}

fn copy_symlink(from: &Path, to: &Path) -> Result<(), PublishError> {
    let target = std::fs::read_link(from).map_err(PublishError::io(from))?;
    debug!("Recreating symlink {:?} -> {:?}", to, target);

    #[cfg(windows)]
    let created = if from.is_dir() {
        symlink_dir(&target, to)
    } else {
        symlink_file(&target, to)
    };
    #[cfg(unix)]
    let created = symlink_file(&target, to);

    created.map_err(PublishError::io(to))
}

/// Replace the `latest` alias with a relative symlink to `target`
fn point_latest(root: &Path, target: &str) -> Result<(), PublishError> {
    let link = root.join(LATEST_ALIAS);

    if let Ok(meta) = std::fs::symlink_metadata(&link) {
        let removed = if meta.is_dir() {
            std::fs::remove_dir_all(&link)
        } else {
            std::fs::remove_file(&link)
        };
        removed.map_err(PublishError::io(&link))?;
    }

    symlink_dir(Path::new(target), &link).map_err(PublishError::io(&link))
}

#[cfg(unix)]
fn symlink_dir(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink_dir(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

#[cfg(unix)]
fn symlink_file(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink_file(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
