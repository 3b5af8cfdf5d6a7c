pub mod config;
pub mod docs;
pub mod logging;
pub mod release;
pub mod vcs;
pub mod version;
