//! # framewire
//!
//! Blocking Content-Length framing engine for JSON-over-socket channels,
//! such as the communication link between an IDE and an out-of-process
//! debugger or REPL proxy.
//!
//! A frame is a header block of `Name: Value` lines ending in a blank
//! line, followed by exactly `Content-Length` body bytes:
//!
//! ```text
//! Content-length: 5\r\n
//! \r\n
//! hello
//! ```
//!
//! Header names match case-insensitively. Frames are sent back-to-back on
//! the stream with no extra framing between them. A frame with no length
//! header carries an empty body.
//!
//! ## Architecture
//!
//! - **Reader**: one dedicated thread per connection blocks on socket
//!   receives and dispatches completed messages to a
//!   [`MessageHandler`](handler::MessageHandler), in wire order.
//! - **Writer**: a synchronous one-way push, independent of the reader
//!   and safe to use concurrently with it on the other direction of the
//!   same duplex stream.
//!
//! ## Example
//!
//! ```no_run
//! use framewire::handler::FnHandler;
//! use framewire::transport::connect;
//! use framewire::{spawn_reader_default, Result};
//!
//! fn main() -> Result<()> {
//!     let (transport, mut writer) = connect("127.0.0.1:5858")?;
//!
//!     let handler = FnHandler::new(
//!         |message| {
//!             println!("<- {}", message.body());
//!             Ok(())
//!         },
//!         || println!("disconnected"),
//!     );
//!
//!     let reader = spawn_reader_default(transport, handler);
//!     writer.send(r#"{"command":"version","seq":1}"#)?;
//!     reader.close();
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod error;
pub mod handler;
pub mod protocol;
pub mod transport;
pub mod writer;

mod reader;

pub use error::{FramewireError, Result};
pub use handler::{FnHandler, MessageHandler};
pub use protocol::{HeaderMap, Message, MessageBuffer};
pub use reader::{
    spawn_reader, spawn_reader_default, ReaderConfig, ReaderHandle, DEFAULT_RECV_BUFFER_SIZE,
};
pub use writer::{encode_frame, FrameWriter};
