//! Recognized source-file extensions.

use std::path::Path;

/// Extensions counted as source files, leading dot included.
///
/// Matching is exact and case-sensitive, so `main.CPP` is not a source file.
pub const SOURCE_EXTENSIONS: &[&str] = &[
    ".c", ".h", //
    ".cpp", ".cc", ".cxx", ".hpp", ".ii", ".ixx", ".ipp", ".txx", ".tpp", ".tpl", //
    ".py", ".pyw", ".pyx",
];

/// Check whether a path names a recognized source file.
///
/// Only the final extension is considered. Names without an extension
/// (including dotfiles such as `.c`) never match.
pub fn is_source_file(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    SOURCE_EXTENSIONS
        .iter()
        .any(|known| known.strip_prefix('.') == Some(ext))
}
