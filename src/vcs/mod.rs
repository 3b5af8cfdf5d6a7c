//! Source control layer
//!
//! - [`source_control`]: `SourceControl` capability trait
//! - [`git`]: `git` command line implementation
//! - [`error`]: Error type for source control operations

pub mod error;
pub mod git;
pub mod source_control;

pub use error::SourceControlError;
pub use git::GitCli;
pub use source_control::SourceControl;
