//! `git` command line implementation of [`SourceControl`]

use std::path::{Path, PathBuf};
use std::process::Output;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, info};

use crate::config::DEFAULT_GIT_TIMEOUT_SECS;
use crate::vcs::error::SourceControlError;
use crate::vcs::source_control::SourceControl;

/// Runs `git` as a child process inside a working repository
pub struct GitCli {
    /// Repository the tag operations run in
    repo_dir: PathBuf,
    /// Upper bound for every git invocation
    timeout: Duration,
}

impl GitCli {
    pub fn new(repo_dir: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            repo_dir: repo_dir.into(),
            timeout,
        }
    }

    async fn run(&self, cwd: &Path, args: &[&str]) -> Result<Output, SourceControlError> {
        let command = format!("git {}", args.join(" "));
        debug!("Running `{}` in {:?}", command, cwd);

        let mut git = Command::new("git");
        git.args(args).current_dir(cwd).kill_on_drop(true);

        let output = tokio::time::timeout(self.timeout, git.output())
            .await
            .map_err(|_| SourceControlError::TimedOut {
                command: command.clone(),
                timeout_secs: self.timeout.as_secs(),
            })??;

        if output.status.success() {
            Ok(output)
        } else {
            Err(SourceControlError::CommandFailed {
                command,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new(".", Duration::from_secs(DEFAULT_GIT_TIMEOUT_SECS))
    }
}

#[async_trait::async_trait]
impl SourceControl for GitCli {
    async fn clone_branch(
        &self,
        branch: &str,
        url: &str,
        dest: &Path,
    ) -> Result<(), SourceControlError> {
        info!("Cloning branch {} of {} into {:?}", branch, url, dest);
        let dest = dest.to_string_lossy();
        self.run(&self.repo_dir, &["clone", "-b", branch, url, &dest])
            .await?;
        Ok(())
    }

    async fn fetch_tags(&self) -> Result<(), SourceControlError> {
        info!("Fetching existing tags");
        self.run(&self.repo_dir, &["fetch", "--tags"]).await?;
        Ok(())
    }

    async fn tag_exists(&self, name: &str) -> Result<bool, SourceControlError> {
        let output = self.run(&self.repo_dir, &["tag", "-l", name]).await?;
        Ok(!String::from_utf8_lossy(&output.stdout).trim().is_empty())
    }
}
