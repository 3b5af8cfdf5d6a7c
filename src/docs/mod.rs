//! Versioned API documentation layer
//!
//! # Modules
//!
//! - [`tree`]: Version directories, reconciliation and the `latest` alias
//! - [`index`]: Markdown index of published versions
//! - [`doxyfile`]: Doxyfile version patching
//! - [`publisher`]: End-to-end publish onto the documentation branch
//! - [`error`]: Error type for publish operations

pub mod doxyfile;
pub mod error;
pub mod index;
pub mod publisher;
pub mod tree;

pub use error::PublishError;
pub use publisher::{DocsPublisher, PublicationRequest, PublishReport};
