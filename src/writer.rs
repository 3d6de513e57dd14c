//! Frame writer - the outbound direction.
//!
//! Serializes one textual payload per call: a `Content-length` preamble
//! followed by the UTF-8 payload bytes, written synchronously to the
//! stream. The writer is stateless per call and independent of the reader;
//! it may run on any thread, including concurrently with the reader on the
//! other direction of the same duplex stream. Concurrent *writers* must
//! coordinate among themselves - no internal lock is provided.

use std::io::Write;

use serde::Serialize;

use crate::codec::JsonCodec;
use crate::error::Result;
use crate::protocol::wire::CONTENT_LENGTH;

/// Encode one payload into its on-wire representation.
///
/// The receiver-side reader, given exactly these bytes, reconstructs a
/// header map containing `Content-length` and a body equal to `payload`.
///
/// # Example
///
/// ```
/// use framewire::writer::encode_frame;
///
/// let bytes = encode_frame("hello");
/// assert_eq!(bytes, b"Content-length: 5\r\n\r\nhello");
/// ```
pub fn encode_frame(payload: &str) -> Vec<u8> {
    let mut bytes = format!("{}: {}\r\n\r\n", CONTENT_LENGTH, payload.len()).into_bytes();
    bytes.extend_from_slice(payload.as_bytes());
    bytes
}

/// Synchronous writer for one outbound stream direction.
pub struct FrameWriter<W: Write> {
    stream: W,
}

impl<W: Write> FrameWriter<W> {
    /// Wrap the write half of a stream.
    pub fn new(stream: W) -> Self {
        Self { stream }
    }

    /// Frame and send one payload: preamble first, then the payload bytes.
    pub fn send(&mut self, payload: &str) -> Result<()> {
        let preamble = format!("{}: {}\r\n\r\n", CONTENT_LENGTH, payload.len());
        self.stream.write_all(preamble.as_bytes())?;
        self.stream.write_all(payload.as_bytes())?;
        self.stream.flush()?;
        Ok(())
    }

    /// JSON-encode `value` and send it as one frame.
    pub fn send_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        self.send(&JsonCodec::encode(value)?)
    }

    /// Consume the writer and return the underlying stream.
    pub fn into_inner(self) -> W {
        self.stream
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::MessageBuffer;

    #[test]
    fn test_encode_frame_format() {
        let bytes = encode_frame("hello");
        assert_eq!(bytes, b"Content-length: 5\r\n\r\nhello");
    }

    #[test]
    fn test_encode_frame_empty_payload() {
        let bytes = encode_frame("");
        assert_eq!(bytes, b"Content-length: 0\r\n\r\n");
    }

    #[test]
    fn test_encode_frame_counts_utf8_bytes() {
        let payload = "\u{1F980}"; // 4 bytes in UTF-8
        let bytes = encode_frame(payload);
        assert!(bytes.starts_with(b"Content-length: 4\r\n\r\n"));
    }

    #[test]
    fn test_send_writes_preamble_then_payload() {
        let mut writer = FrameWriter::new(Vec::new());
        writer.send("hello").unwrap();
        writer.send("bye").unwrap();

        assert_eq!(
            writer.into_inner(),
            b"Content-length: 5\r\n\r\nhelloContent-length: 3\r\n\r\nbye"
        );
    }

    #[test]
    fn test_writer_reader_roundtrip() {
        let mut writer = FrameWriter::new(Vec::new());
        for payload in ["", "hello", "héllo wörld \u{1F980}", "{\"a\":1}"] {
            writer.send(payload).unwrap();
        }
        let stream = writer.into_inner();

        let mut buffer = MessageBuffer::new();
        let messages = buffer.push(&stream).unwrap();

        let bodies: Vec<&str> = messages.iter().map(|m| m.body()).collect();
        assert_eq!(bodies, vec!["", "hello", "héllo wörld \u{1F980}", "{\"a\":1}"]);
    }

    #[test]
    fn test_send_value_json() {
        let mut writer = FrameWriter::new(Vec::new());
        writer
            .send_value(&serde_json::json!({"command": "version", "seq": 1}))
            .unwrap();
        let stream = writer.into_inner();

        let mut buffer = MessageBuffer::new();
        let messages = buffer.push(&stream).unwrap();
        assert_eq!(messages.len(), 1);

        let value: serde_json::Value = serde_json::from_str(messages[0].body()).unwrap();
        assert_eq!(value["command"], "version");
        assert_eq!(value["seq"], 1);
    }
}
