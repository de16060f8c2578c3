//! JWalk-based directory scanner.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use jwalk::{Parallelism, WalkDir};
use tracing::{debug, info, trace};

use srcount_core::{ScanConfig, ScanError, ScanNode, ScanTree, ScanWarning, is_source_file};

use crate::measure::count_file_lines;

/// Callback invoked as soon as a warning is raised.
type WarningHandler = Box<dyn Fn(&ScanWarning)>;

/// Scanner that walks a directory tree and measures source files.
///
/// The walk runs serially on the calling thread. Entries are collected
/// first, then the [`ScanNode`] tree is built top-down from them, measuring
/// each recognized file as its directory is built.
#[derive(Default)]
pub struct LineScanner {
    warning_handler: Option<WarningHandler>,
}

impl LineScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner that reports each warning the moment it is raised.
    ///
    /// Warnings are still collected into [`ScanTree::warnings`] when the
    /// scan succeeds; the handler also sees those raised before a fatal error.
    pub fn with_warning_handler(handler: impl Fn(&ScanWarning) + 'static) -> Self {
        Self {
            warning_handler: Some(Box::new(handler)),
        }
    }

    /// Scan with a fresh depth-warning flag.
    pub fn scan(&self, config: &ScanConfig) -> Result<ScanTree, ScanError> {
        let mut depth_warned = false;
        self.scan_with(config, &mut depth_warned)
    }

    /// Scan, sharing the one-shot depth-warning flag with the caller.
    ///
    /// At most one [`ScanWarning`] is produced across every scan that uses
    /// the same flag. The flag is only ever set, never cleared.
    pub fn scan_with(
        &self,
        config: &ScanConfig,
        depth_warned: &mut bool,
    ) -> Result<ScanTree, ScanError> {
        let start = Instant::now();
        let root_path = config.root.as_path();

        if root_path.as_os_str().is_empty() {
            return Err(ScanError::InvalidConfig {
                message: "Root path cannot be empty".to_string(),
            });
        }

        // Verify root is a directory
        let root_metadata = std::fs::metadata(root_path).map_err(|e| ScanError::io(root_path, e))?;
        if !root_metadata.is_dir() {
            return Err(ScanError::NotADirectory {
                path: root_path.to_path_buf(),
            });
        }

        let mut entries = self.collect_entries(root_path, config.max_depth)?;

        let mut warnings = Vec::new();
        let root = self.build_node(
            root_path,
            config.max_depth,
            &mut entries,
            depth_warned,
            &mut warnings,
        )?;

        let scan_duration = start.elapsed();
        info!(
            root = %root_path.display(),
            files = root.count_files(),
            lines = root.count_lines(),
            elapsed_ms = scan_duration.as_millis() as u64,
            "scan complete"
        );

        Ok(ScanTree::new(root, config.clone(), scan_duration, warnings))
    }

    /// Collect directory and regular-file entries, grouped by parent.
    ///
    /// The walk reaches one level past the depth budget so that directories
    /// sitting exactly at the limit are seen (and warned about) without being
    /// listed.
    fn collect_entries(
        &self,
        root_path: &Path,
        max_depth: u32,
    ) -> Result<HashMap<PathBuf, Vec<EntryInfo>>, ScanError> {
        let walk_depth = (max_depth as usize).saturating_add(1);
        let walker = WalkDir::new(root_path)
            .parallelism(Parallelism::Serial)
            .skip_hidden(false)
            .follow_links(false)
            .sort(true)
            .min_depth(0)
            .max_depth(walk_depth);

        let mut entries_by_parent: HashMap<PathBuf, Vec<EntryInfo>> = HashMap::new();

        for entry_result in walker {
            let mut entry = match entry_result {
                Ok(e) => e,
                Err(err) => return Err(walk_error(err, root_path)),
            };

            // A directory that could not be listed comes back as an Ok entry
            // carrying the failure; the root is no exception.
            if let Some(err) = entry.read_children_error.take() {
                return Err(walk_error(err, &entry.path()));
            }

            if entry.depth() == 0 {
                continue;
            }

            let file_type = entry.file_type();
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                // Symlinks, sockets, devices
                continue;
            };

            let path = entry.path();
            if let Some(parent) = path.parent() {
                entries_by_parent
                    .entry(parent.to_path_buf())
                    .or_default()
                    .push(EntryInfo { path, kind });
            }
        }

        Ok(entries_by_parent)
    }

    /// Recursively build a node and its children.
    fn build_node(
        &self,
        path: &Path,
        remaining_depth: u32,
        entries_by_parent: &mut HashMap<PathBuf, Vec<EntryInfo>>,
        depth_warned: &mut bool,
        warnings: &mut Vec<ScanWarning>,
    ) -> Result<ScanNode, ScanError> {
        debug!(path = %path.display(), remaining_depth, "building directory node");

        let mut node = ScanNode::new(path, remaining_depth);
        let children_entries = entries_by_parent.remove(path).unwrap_or_default();

        for entry in children_entries {
            match entry.kind {
                EntryKind::Directory if remaining_depth > 0 => {
                    let child = self.build_node(
                        &entry.path,
                        remaining_depth - 1,
                        entries_by_parent,
                        depth_warned,
                        warnings,
                    )?;
                    node.add_child(child);
                }
                EntryKind::Directory => {
                    if !*depth_warned {
                        *depth_warned = true;
                        debug!(path = %entry.path.display(), "depth budget exhausted");
                        let warning = ScanWarning::max_depth(&entry.path);
                        if let Some(handler) = &self.warning_handler {
                            handler(&warning);
                        }
                        warnings.push(warning);
                    }
                }
                EntryKind::File if is_source_file(&entry.path) => {
                    let lines = count_file_lines(&entry.path)?;
                    trace!(path = %entry.path.display(), lines, "measured file");
                    node.add_file(entry.path, lines);
                }
                EntryKind::File => {}
            }
        }

        Ok(node)
    }
}

impl std::fmt::Debug for LineScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineScanner")
            .field("warning_handler", &self.warning_handler.is_some())
            .finish()
    }
}

/// Convert a walker failure into a scan error, keeping the cause.
fn walk_error(err: jwalk::Error, fallback: &Path) -> ScanError {
    let path = err
        .path()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| fallback.to_path_buf());
    ScanError::Walk {
        path,
        source: std::io::Error::other(err),
    }
}

/// Temporary struct for collected entries.
struct EntryInfo {
    path: PathBuf,
    kind: EntryKind,
}

#[derive(Clone, Copy)]
enum EntryKind {
    Directory,
    File,
}
