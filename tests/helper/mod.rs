//! Shared test utilities

#![allow(dead_code)]

pub mod source_control;
pub mod tree;

pub use source_control::FakeSourceControl;
pub use tree::{create_content_dir, create_remote_tree, listed_versions};
