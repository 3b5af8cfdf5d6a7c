use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use doc_release::config::{ReleaseConfig, github_repo_url};
use doc_release::docs::doxyfile::patch_doxyfile;
use doc_release::docs::{DocsPublisher, PublicationRequest};
use doc_release::logging;
use doc_release::release::{check_release_tag, check_unreleased};
use doc_release::vcs::GitCli;
use doc_release::version::{Version, VersionParser, parse_literal};

#[derive(Parser)]
#[command(name = "doc-release")]
#[command(version, about = "Release helpers for versioned API documentation")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ProjectArgs {
    /// Build configuration the version is read from
    #[arg(long)]
    cmake: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Check the configured version against a release tag, or that it is not released yet
    CheckVersion {
        /// Release tag; snapshot mode when omitted
        tag: Option<String>,
        #[command(flatten)]
        project: ProjectArgs,
    },
    /// Write the version into the Doxyfile
    PatchDoxyfile {
        /// Version to set instead of the configured one
        version: Option<String>,
        #[command(flatten)]
        project: ProjectArgs,
        #[arg(long)]
        doxyfile: Option<PathBuf>,
    },
    /// Publish generated documentation onto the documentation branch
    PrepareDocs {
        #[arg(long)]
        github_org: Option<String>,
        #[arg(long)]
        repo_name: Option<String>,
        /// Version to publish instead of the configured one
        #[arg(long)]
        version: Option<String>,
        #[command(flatten)]
        project: ProjectArgs,
        /// Generated documentation directory
        #[arg(long)]
        docs_source: Option<PathBuf>,
        #[arg(long)]
        branch: Option<String>,
        /// Directory the documentation branch is cloned under
        #[arg(long)]
        work_dir: Option<PathBuf>,
        /// Timeout for git operations in seconds
        #[arg(long)]
        clone_timeout: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.verbose, cli.log_file.as_deref())?;
    let config = ReleaseConfig::load(cli.config.as_deref())?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli.command, config))
}

async fn run(command: Command, mut config: ReleaseConfig) -> anyhow::Result<()> {
    let timeout = |config: &ReleaseConfig| Duration::from_secs(config.git.timeout_secs);

    match command {
        Command::CheckVersion { tag, project } => {
            let cmake = project.cmake.unwrap_or_else(|| config.project.cmake_path.clone());
            let version = configured_version(&cmake)?;
            info!("Version in {:?}: '{}'", cmake, version);

            match tag {
                Some(tag) => {
                    info!("Release mode: check version consistency...");
                    check_release_tag(&version, &tag)?;
                }
                None => {
                    info!("Snapshot mode: fetch existing tags...");
                    let git = GitCli::new(".", timeout(&config));
                    check_unreleased(&git, &version).await?;
                }
            }
        }
        Command::PatchDoxyfile {
            version,
            project,
            doxyfile,
        } => {
            let cmake = project.cmake.unwrap_or_else(|| config.project.cmake_path.clone());
            let version = resolve_version(version.as_deref(), &cmake)?;
            info!("Computed current API version: {}", version);

            let doxyfile = doxyfile.unwrap_or_else(|| config.project.doxyfile_path.clone());
            patch_doxyfile(&doxyfile, &version)?;
        }
        Command::PrepareDocs {
            github_org,
            repo_name,
            version,
            project,
            docs_source,
            branch,
            work_dir,
            clone_timeout,
        } => {
            let docs = &mut config.docs;
            docs.github_org = github_org.or(docs.github_org.take());
            docs.repo_name = repo_name.or(docs.repo_name.take());
            if let Some(branch) = branch {
                docs.branch = branch;
            }
            if let Some(source) = docs_source {
                docs.source = source;
            }
            if let Some(work_dir) = work_dir {
                docs.work_dir = work_dir;
            }
            if let Some(secs) = clone_timeout {
                config.git.timeout_secs = secs;
            }

            let docs = &config.docs;
            let org = docs
                .github_org
                .as_deref()
                .context("--github-org is required")?;
            let repo = docs
                .repo_name
                .as_deref()
                .context("--repo-name is required")?;

            let cmake = project.cmake.unwrap_or_else(|| config.project.cmake_path.clone());
            let version = resolve_version(version.as_deref(), &cmake)?;

            let request = PublicationRequest {
                version,
                content_root: docs.source.clone(),
                tree_root: docs.work_dir.join(repo),
            };
            let git = GitCli::new(".", timeout(&config));
            let publisher = DocsPublisher::new(git, github_repo_url(org, repo), &docs.branch);
            let report = publisher.publish(&request).await?;
            info!("Published {:?}", report.published);
        }
    }

    Ok(())
}

fn configured_version(cmake: &Path) -> anyhow::Result<Version> {
    VersionParser::new()
        .parse_file(cmake)
        .with_context(|| format!("failed to compute version from {:?}", cmake))
}

/// Explicit version argument, falling back to the build configuration
fn resolve_version(explicit: Option<&str>, cmake: &Path) -> anyhow::Result<Version> {
    match explicit {
        Some(text) => Ok(parse_literal(text)?),
        None => configured_version(cmake),
    }
}
