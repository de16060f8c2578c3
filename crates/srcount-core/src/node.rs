//! Per-directory scan node.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One scanned directory and everything counted beneath it.
///
/// A node owns its children and its file map outright; the tree is built
/// once by the scanner and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanNode {
    /// Directory path, as reached from the scan root.
    pub path: PathBuf,

    /// Line counts of the recognized source files directly in this directory.
    pub files: BTreeMap<PathBuf, u64>,

    /// Visited subdirectories, in traversal order.
    pub children: Vec<ScanNode>,

    /// Depth budget available when this node was created.
    pub remaining_depth: u32,
}

impl ScanNode {
    /// Create an empty node for a directory.
    pub fn new(path: impl Into<PathBuf>, remaining_depth: u32) -> Self {
        Self {
            path: path.into(),
            files: BTreeMap::new(),
            children: Vec::new(),
            remaining_depth,
        }
    }

    /// Record a measured source file.
    pub fn add_file(&mut self, path: impl Into<PathBuf>, lines: u64) {
        self.files.insert(path.into(), lines);
    }

    /// Attach a scanned subdirectory.
    pub fn add_child(&mut self, child: ScanNode) {
        self.children.push(child);
    }

    /// Total lines in this subtree.
    pub fn count_lines(&self) -> u64 {
        let own: u64 = self.files.values().sum();
        own + self
            .children
            .iter()
            .map(ScanNode::count_lines)
            .sum::<u64>()
    }

    /// Total recognized files in this subtree.
    pub fn count_files(&self) -> u64 {
        self.files.len() as u64
            + self
                .children
                .iter()
                .map(ScanNode::count_files)
                .sum::<u64>()
    }

    /// True when no recognized file exists anywhere in this subtree.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.children.iter().all(ScanNode::is_empty)
    }
}
