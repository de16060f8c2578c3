//! Scan tree container.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use crate::config::ScanConfig;
use crate::error::ScanWarning;
use crate::node::ScanNode;

/// Complete scan result with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanTree {
    /// Root node of the tree.
    pub root: ScanNode,

    /// Root path that was scanned.
    pub root_path: PathBuf,

    /// When this scan was performed.
    pub scanned_at: SystemTime,

    /// Duration of the scan.
    pub scan_duration: Duration,

    /// Scan configuration used.
    pub config: ScanConfig,

    /// Warnings encountered during scan.
    pub warnings: Vec<ScanWarning>,
}

impl ScanTree {
    /// Create a new scan tree.
    pub fn new(
        root: ScanNode,
        config: ScanConfig,
        scan_duration: Duration,
        warnings: Vec<ScanWarning>,
    ) -> Self {
        Self {
            root,
            root_path: config.root.clone(),
            scanned_at: SystemTime::now(),
            scan_duration,
            config,
            warnings,
        }
    }

    /// Total recognized files in the tree.
    pub fn total_files(&self) -> u64 {
        self.root.count_files()
    }

    /// Total lines across all recognized files.
    pub fn total_lines(&self) -> u64 {
        self.root.count_lines()
    }

    /// Check if there were any warnings during scanning.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
