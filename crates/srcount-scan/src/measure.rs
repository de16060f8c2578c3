//! Line measuring.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use srcount_core::ScanError;

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Count the lines of a file on disk.
///
/// The handle is dropped before returning on every path.
pub fn count_file_lines(path: &Path) -> Result<u64, ScanError> {
    let file = File::open(path).map_err(|e| ScanError::open(path, e))?;
    count_lines_in(file).map_err(|e| ScanError::io(path, e))
}

/// Count lines in a byte stream.
///
/// Every `\n` byte ends a line. A non-empty stream whose last byte is not
/// `\n` has one more, unterminated, line. Carriage returns and encodings
/// get no special treatment.
pub fn count_lines_in<R: Read>(reader: R) -> io::Result<u64> {
    let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, reader);
    let mut lines: u64 = 0;
    let mut last_byte = None;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        lines += buf.iter().filter(|&&b| b == b'\n').count() as u64;
        last_byte = buf.last().copied();

        let consumed = buf.len();
        reader.consume(consumed);
    }

    if last_byte.is_some_and(|b| b != b'\n') {
        lines += 1;
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn count(bytes: &[u8]) -> u64 {
        count_lines_in(bytes).unwrap()
    }

    #[test]
    fn test_edge_cases() {
        assert_eq!(count(b""), 0);
        assert_eq!(count(b"\n"), 1);
        assert_eq!(count(b"a"), 1);
        assert_eq!(count(b"a\n"), 1);
        assert_eq!(count(b"a\nb"), 2);
    }

    #[test]
    fn test_trailing_newline_counts_newlines() {
        assert_eq!(count(b"one\ntwo\nthree\n"), 3);
        assert_eq!(count(b"\n\n\n\n"), 4);
    }

    #[test]
    fn test_unterminated_last_line_adds_one() {
        assert_eq!(count(b"one\ntwo\nthree"), 3);
        assert_eq!(count(b"\n\nx"), 3);
    }

    #[test]
    fn test_carriage_returns_are_plain_bytes() {
        assert_eq!(count(b"a\r\nb\r\n"), 2);
        assert_eq!(count(b"a\rb\rc"), 1);
        assert_eq!(count(b"a\r\n\r"), 2);
    }

    #[test]
    fn test_binary_content() {
        assert_eq!(count(&[0x00, 0xff, b'\n', 0x80]), 2);
    }

    #[test]
    fn test_stream_larger_than_buffer() {
        let mut data = "x\n".repeat(READ_BUFFER_SIZE);
        data.push_str("tail");
        assert_eq!(count(data.as_bytes()), READ_BUFFER_SIZE as u64 + 1);
    }

    #[test]
    fn test_newline_on_buffer_boundary() {
        let mut data = vec![b'a'; READ_BUFFER_SIZE - 1];
        data.push(b'\n');
        assert_eq!(count(&data), 1);
    }

    #[test]
    fn test_count_file_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.cpp");
        fs::write(&path, "line1\nline2\n").unwrap();

        assert_eq!(count_file_lines(&path).unwrap(), 2);
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gone.c");

        let err = count_file_lines(&path).unwrap_err();
        assert!(matches!(err, ScanError::Open { .. }));
        assert!(err.to_string().contains("gone.c"));
    }
}
