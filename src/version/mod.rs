//! Project version model
//!
//! ```text
//! ┌────────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ CMakeLists.txt │────▶│   Parser    │────▶│   Version    │
//! │  / git tag     │     │ (regex)     │     │ (value, Ord) │
//! └────────────────┘     └─────────────┘     └──────────────┘
//!                                                    │
//!                                                    ▼
//!                                            ┌──────────────┐
//!                                            │   Ordering   │
//!                                            │ (recency key)│
//!                                            └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`parser`]: Build configuration and literal parsing
//! - [`ordering`]: Most-recent-first ordering of versions and labels
//! - [`types`]: `Version` and its release `Category`
//! - [`error`]: Error type for version operations

pub mod error;
pub mod ordering;
pub mod parser;
pub mod types;

pub use error::VersionError;
pub use parser::{VersionParser, parse_literal};
pub use types::{Category, Version};
