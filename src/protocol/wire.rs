//! Wire-level scanning for the header-delimited frame format.
//!
//! One frame on the wire is a header block of `Name: Value` lines, each
//! terminated by `\r\n`, followed by a blank separator line and exactly
//! `Content-Length` body bytes:
//!
//! ```text
//! Content-length: 5\r\n
//! \r\n
//! hello
//! ```
//!
//! Everything here is a pure function over byte slices; all state lives in
//! [`MessageBuffer`](super::MessageBuffer).

/// Header line terminator.
pub const CRLF: &[u8] = b"\r\n";

/// Blank-line terminator ending a header block.
pub const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Canonical spelling of the length header as written by the frame writer.
/// Matched case-insensitively on read.
pub const CONTENT_LENGTH: &str = "Content-length";

/// Find the first `\r\n` in `buf` at or after `from`.
///
/// Returns the index of the `\r`.
pub fn find_crlf(buf: &[u8], from: usize) -> Option<usize> {
    if buf.len() < CRLF.len() {
        return None;
    }
    (from..=buf.len() - CRLF.len()).find(|&i| &buf[i..i + CRLF.len()] == CRLF)
}

/// Find the first `\r\n\r\n` in `buf` at or after `from`.
///
/// Returns the index where the terminator starts.
pub fn find_header_terminator(buf: &[u8], from: usize) -> Option<usize> {
    if buf.len() < HEADER_TERMINATOR.len() {
        return None;
    }
    (from..=buf.len() - HEADER_TERMINATOR.len())
        .find(|&i| &buf[i..i + HEADER_TERMINATOR.len()] == HEADER_TERMINATOR)
}

/// Split one header line (without its `\r\n`) at the first `:`.
///
/// Name and value are UTF-8 decoded and trimmed of surrounding whitespace.
/// Returns `None` for a line with no colon; the parser skips such lines.
pub fn split_header_line(line: &[u8]) -> Option<(String, String)> {
    let colon = line.iter().position(|&b| b == b':')?;
    let name = String::from_utf8_lossy(&line[..colon]).trim().to_string();
    let value = String::from_utf8_lossy(&line[colon + 1..]).trim().to_string();
    Some((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_crlf() {
        assert_eq!(find_crlf(b"abc\r\ndef", 0), Some(3));
        assert_eq!(find_crlf(b"abc\r\ndef", 4), None);
        assert_eq!(find_crlf(b"\r\n", 0), Some(0));
        assert_eq!(find_crlf(b"", 0), None);
        assert_eq!(find_crlf(b"\r", 0), None);
        assert_eq!(find_crlf(b"no terminator", 0), None);
    }

    #[test]
    fn test_find_crlf_after_offset() {
        let buf = b"a\r\nb\r\nc";
        assert_eq!(find_crlf(buf, 0), Some(1));
        assert_eq!(find_crlf(buf, 2), Some(4));
        assert_eq!(find_crlf(buf, 5), None);
    }

    #[test]
    fn test_find_header_terminator() {
        assert_eq!(find_header_terminator(b"a: b\r\n\r\nxyz", 0), Some(4));
        assert_eq!(find_header_terminator(b"\r\n\r\n", 0), Some(0));
        assert_eq!(find_header_terminator(b"a: b\r\n", 0), None);
        assert_eq!(find_header_terminator(b"\r\n\r", 0), None);
    }

    #[test]
    fn test_split_header_line() {
        assert_eq!(
            split_header_line(b"Content-length: 42"),
            Some(("Content-length".to_string(), "42".to_string()))
        );
    }

    #[test]
    fn test_split_header_line_trims_whitespace() {
        assert_eq!(
            split_header_line(b"  Name  :  value with spaces  "),
            Some(("Name".to_string(), "value with spaces".to_string()))
        );
    }

    #[test]
    fn test_split_header_line_no_colon() {
        assert_eq!(split_header_line(b"not a header"), None);
    }

    #[test]
    fn test_split_header_line_value_keeps_later_colons() {
        assert_eq!(
            split_header_line(b"Host: 127.0.0.1:5858"),
            Some(("Host".to_string(), "127.0.0.1:5858".to_string()))
        );
    }

    #[test]
    fn test_split_header_line_empty_value() {
        assert_eq!(
            split_header_line(b"Name:"),
            Some(("Name".to_string(), String::new()))
        );
    }
}
