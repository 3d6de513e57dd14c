//! Protocol module - wire scanning, header map, and incremental framing.
//!
//! This module implements the textual framing format:
//! - byte-level scanning utilities for header lines
//! - the case-insensitive [`HeaderMap`]
//! - [`MessageBuffer`], the state machine that accumulates partial reads
//!   and emits complete [`Message`]s

mod headers;
mod message;
mod message_buffer;
pub mod wire;

pub use headers::HeaderMap;
pub use message::Message;
pub use message_buffer::MessageBuffer;
