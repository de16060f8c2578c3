//! Core types for srcount.
//!
//! This crate provides the data structures shared by the scanner and the
//! binary: the per-directory scan node, the scan tree container, scan
//! configuration, error types, and the tree-shaped report writer.

mod config;
mod error;
mod extension;
mod node;
mod report;
mod tree;

pub use config::{DEFAULT_MAX_DEPTH, ScanConfig, ScanConfigBuilder};
pub use error::{ScanError, ScanWarning, WarningKind};
pub use extension::{SOURCE_EXTENSIONS, is_source_file};
pub use node::ScanNode;
pub use report::{write_node, write_report, write_summary};
pub use tree::ScanTree;
