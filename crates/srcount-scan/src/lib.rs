//! Directory scanning engine for srcount.
//!
//! This crate walks a directory tree with jwalk, measures every recognized
//! source file, and builds the [`ScanNode`] tree consumed by the report.
//!
//! # Overview
//!
//! - **Serial traversal** via jwalk on the calling thread
//! - **Depth budget** per directory, with a one-shot warning when it runs out
//! - **Abort on first error**: an unlistable directory or unopenable file
//!   fails the whole scan
//!
//! # Example
//!
//! ```rust,no_run
//! use srcount_scan::{LineScanner, ScanConfig};
//!
//! let config = ScanConfig::new("./");
//! let tree = LineScanner::new().scan(&config).unwrap();
//!
//! println!("{} files, {} lines", tree.total_files(), tree.total_lines());
//! ```

mod measure;
mod scanner;

pub use measure::{count_file_lines, count_lines_in};
pub use scanner::LineScanner;

// Re-export core types for convenience
pub use srcount_core::{
    DEFAULT_MAX_DEPTH, ScanConfig, ScanError, ScanNode, ScanTree, ScanWarning, WarningKind,
    is_source_file,
};
