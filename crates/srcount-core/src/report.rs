//! Tree-shaped text report.
//!
//! Output looks like:
//!
//! ```text
//! |-- ./main.c 12
//! | |-- ./lib/util.c 30
//! | | |-- ./lib/inner/x.h 4
//! total 3 files, 46 lines
//! ```

use std::io::{self, Write};

use crate::node::ScanNode;

const FILE_MARKER: &str = "|-- ";
const INDENT: &str = "| ";

/// Write the full report for a tree: every node, then the summary line.
pub fn write_report<W: Write>(root: &ScanNode, out: &mut W) -> io::Result<()> {
    write_node(root, "", out)?;
    write_summary(root, out)
}

/// Write one node's files, then its children one indent level deeper.
pub fn write_node<W: Write>(node: &ScanNode, prefix: &str, out: &mut W) -> io::Result<()> {
    for (path, lines) in &node.files {
        writeln!(out, "{prefix}{FILE_MARKER}{} {lines}", path.display())?;
    }

    let child_prefix = format!("{prefix}{INDENT}");
    for child in &node.children {
        write_node(child, &child_prefix, out)?;
    }
    Ok(())
}

/// Write the `total N files, M lines` line.
pub fn write_summary<W: Write>(root: &ScanNode, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "total {} files, {} lines",
        root.count_files(),
        root.count_lines()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(node: &ScanNode) -> String {
        let mut buf = Vec::new();
        write_report(node, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(render(&ScanNode::new("d", 20)), "total 0 files, 0 lines\n");
    }

    #[test]
    fn test_files_before_children() {
        let mut sub = ScanNode::new("d/sub", 19);
        sub.add_file("d/sub/x.py", 1);

        let mut root = ScanNode::new("d", 20);
        root.add_child(sub);
        root.add_file("d/b.c", 3);
        root.add_file("d/a.c", 2);

        assert_eq!(
            render(&root),
            "|-- d/a.c 2\n\
             |-- d/b.c 3\n\
             | |-- d/sub/x.py 1\n\
             total 3 files, 6 lines\n"
        );
    }

    #[test]
    fn test_prefix_grows_per_level() {
        let mut deepest = ScanNode::new("r/a/b", 18);
        deepest.add_file("r/a/b/z.h", 7);
        let mut mid = ScanNode::new("r/a", 19);
        mid.add_child(deepest);
        let mut root = ScanNode::new("r", 20);
        root.add_child(mid);

        let mut buf = Vec::new();
        write_node(&root, "", &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "| | |-- r/a/b/z.h 7\n");
    }

    #[test]
    fn test_children_keep_stored_order() {
        let mut root = ScanNode::new("r", 20);
        for name in ["r/zeta", "r/alpha"] {
            let mut child = ScanNode::new(name, 19);
            child.add_file(format!("{name}/f.c"), 1);
            root.add_child(child);
        }

        let out = render(&root);
        let zeta = out.find("r/zeta/f.c").unwrap();
        let alpha = out.find("r/alpha/f.c").unwrap();
        assert!(zeta < alpha);
    }
}
