//! Source control test double

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use doc_release::vcs::error::SourceControlError;
use doc_release::vcs::source_control::SourceControl;

/// Fake source control backed by a local directory standing in for the remote branch
pub struct FakeSourceControl {
    remote: PathBuf,
    tags: HashSet<String>,
    clones: Mutex<Vec<(String, String, PathBuf)>>,
}

impl FakeSourceControl {
    pub fn new(remote: &Path) -> Self {
        Self {
            remote: remote.to_path_buf(),
            tags: HashSet::new(),
            clones: Mutex::new(Vec::new()),
        }
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags.extend(tags.iter().map(|t| t.to_string()));
        self
    }

    /// Recorded `(branch, url, dest)` of every clone
    pub fn clones(&self) -> Vec<(String, String, PathBuf)> {
        self.clones.lock().unwrap().clone()
    }
}

fn copy_tree(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let to = dst.join(entry.file_name());
        let file_type = entry.file_type()?;
        if file_type.is_symlink() {
            #[cfg(unix)]
            std::os::unix::fs::symlink(std::fs::read_link(entry.path())?, &to)?;
        } else if file_type.is_dir() {
            copy_tree(&entry.path(), &to)?;
        } else {
            std::fs::copy(entry.path(), &to)?;
        }
    }
    Ok(())
}

#[async_trait]
impl SourceControl for FakeSourceControl {
    async fn clone_branch(
        &self,
        branch: &str,
        url: &str,
        dest: &Path,
    ) -> Result<(), SourceControlError> {
        self.clones.lock().unwrap().push((
            branch.to_string(),
            url.to_string(),
            dest.to_path_buf(),
        ));
        copy_tree(&self.remote, dest)?;
        Ok(())
    }

    async fn fetch_tags(&self) -> Result<(), SourceControlError> {
        Ok(())
    }

    async fn tag_exists(&self, name: &str) -> Result<bool, SourceControlError> {
        Ok(self.tags.contains(name))
    }
}
