//! Message buffer for accumulating partial reads.
//!
//! Uses `bytes::BytesMut` for buffer management. Implements a state machine
//! that is resumable across arbitrarily fragmented socket reads:
//! - `Headers`: consuming `Name: Value` lines until the blank separator
//! - `Body`: header block done, need N more body bytes
//!
//! # Example
//!
//! ```
//! use framewire::protocol::MessageBuffer;
//!
//! let mut buffer = MessageBuffer::new();
//!
//! // Data arrives in chunks from the socket
//! let messages = buffer.push(b"Content-length: 5\r\n\r\nhello").unwrap();
//!
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].body(), "hello");
//! ```

use bytes::BytesMut;

use super::headers::HeaderMap;
use super::message::Message;
use super::wire::{find_crlf, split_header_line, CONTENT_LENGTH};
use crate::error::{FramewireError, Result};

/// Initial capacity of the accumulation buffer.
const INITIAL_CAPACITY: usize = 64 * 1024;

/// State machine for message parsing.
#[derive(Debug)]
enum State {
    /// Consuming header lines; holds headers parsed so far for this frame.
    Headers { headers: HeaderMap },
    /// Header block complete, waiting for `remaining` body bytes.
    Body { headers: HeaderMap, remaining: usize },
}

impl State {
    fn start() -> Self {
        State::Headers {
            headers: HeaderMap::new(),
        }
    }
}

/// Buffer for accumulating incoming bytes and extracting complete messages.
///
/// Consumed bytes are released from the front of the buffer as they are
/// parsed; partial header lines and partial bodies stay buffered until the
/// next push, so no byte is dropped or double-counted regardless of how
/// the stream is fragmented.
pub struct MessageBuffer {
    /// Accumulated bytes from socket reads.
    buffer: BytesMut,
    /// Current parsing state.
    state: State,
    /// Optional cap on the declared body length. `None` keeps the
    /// protocol's unbounded default.
    max_body_size: Option<usize>,
}

impl MessageBuffer {
    /// Create a new message buffer with no body-size limit.
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::with_capacity(INITIAL_CAPACITY),
            state: State::start(),
            max_body_size: None,
        }
    }

    /// Create a new message buffer that rejects frames whose declared body
    /// length exceeds `max_body_size`.
    pub fn with_max_body_size(max_body_size: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(INITIAL_CAPACITY),
            state: State::start(),
            max_body_size: Some(max_body_size),
        }
    }

    /// Push data into the buffer and extract all complete messages.
    ///
    /// This is the main API for processing incoming data from the socket.
    /// Returns every message completed by this chunk, in wire order. If
    /// data is fragmented, partial data is buffered internally for the
    /// next push.
    ///
    /// # Errors
    ///
    /// Returns an error if a `Content-Length` value is not a valid
    /// non-negative integer, or if it exceeds the configured maximum.
    /// After an error the buffer contents are undefined; the connection
    /// should be torn down.
    pub fn push(&mut self, data: &[u8]) -> Result<Vec<Message>> {
        self.buffer.extend_from_slice(data);

        let mut messages = Vec::new();

        // Extract as many complete messages as possible
        while let Some(message) = self.try_extract_one()? {
            messages.push(message);
        }

        Ok(messages)
    }

    /// Try to extract a single message from the buffer.
    ///
    /// Returns:
    /// - `Ok(Some(message))` if a complete message was extracted
    /// - `Ok(None)` if more data is needed
    /// - `Err(...)` on an unusable length header
    fn try_extract_one(&mut self) -> Result<Option<Message>> {
        loop {
            match &mut self.state {
                State::Headers { headers } => {
                    let eol = match find_crlf(&self.buffer, 0) {
                        Some(eol) => eol,
                        // No full line buffered yet
                        None => return Ok(None),
                    };

                    let line = self.buffer.split_to(eol + 2);
                    let line = &line[..eol];

                    if line.is_empty() {
                        // Blank separator: the header block is complete.
                        // A leading blank line yields a headerless frame
                        // with an empty body rather than looping.
                        let headers = std::mem::take(headers);
                        let remaining = declared_body_length(&headers, self.max_body_size)?;

                        if remaining == 0 {
                            self.state = State::start();
                            return Ok(Some(Message::new(headers, String::new())));
                        }

                        self.state = State::Body { headers, remaining };
                    } else if let Some((name, value)) = split_header_line(line) {
                        headers.insert(&name, value);
                    } else {
                        // Leniency: a line with no colon is consumed but
                        // never enters the header map.
                        tracing::trace!("skipping header line without a colon");
                    }
                }

                State::Body { headers, remaining } => {
                    if self.buffer.len() < *remaining {
                        return Ok(None);
                    }

                    let body_bytes = self.buffer.split_to(*remaining);
                    // Invalid sequences become replacement characters; the
                    // decode itself never fails.
                    let body = String::from_utf8_lossy(&body_bytes).into_owned();
                    let headers = std::mem::take(headers);

                    // Reset state for the next message
                    self.state = State::start();

                    return Ok(Some(Message::new(headers, body)));
                }
            }
        }
    }

    /// Get the number of buffered, not-yet-consumed bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Clear the buffer and reset parsing state.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.state = State::start();
    }

    /// Get the current state for debugging.
    #[cfg(test)]
    fn state_name(&self) -> &'static str {
        match &self.state {
            State::Headers { .. } => "Headers",
            State::Body { .. } => "Body",
        }
    }
}

impl Default for MessageBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Body length for a completed header block.
///
/// A missing length header means an empty body; an unparsable one is a
/// protocol error.
fn declared_body_length(headers: &HeaderMap, max: Option<usize>) -> Result<usize> {
    let raw = match headers.get(CONTENT_LENGTH) {
        Some(raw) => raw,
        None => return Ok(0),
    };

    let length: usize = raw.trim().parse().map_err(|_| {
        FramewireError::Protocol(format!("invalid {} value: {:?}", CONTENT_LENGTH, raw))
    })?;

    if let Some(max) = max {
        if length > max {
            return Err(FramewireError::Protocol(format!(
                "body length {} exceeds maximum {}",
                length, max
            )));
        }
    }

    Ok(length)
}
