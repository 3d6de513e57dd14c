//! Transport module - blocking byte-stream abstraction.
//!
//! The frame reader and writer operate on any duplex byte stream. TCP is
//! provided in [`tcp`]; tests substitute in-memory transports.

mod tcp;

pub use tcp::{connect, split, TcpShutdown, TcpTransport};

use std::io;

/// A blocking byte stream consumed by the frame reader.
///
/// One reader thread owns the transport exclusively; the only cross-thread
/// interaction is through the [`TransportShutdown`] handle, which unblocks
/// an in-flight `recv` during teardown.
pub trait Transport: Send + 'static {
    /// Thread-safe handle able to force a blocked `recv` to return.
    type Shutdown: TransportShutdown;

    /// Blocking receive into `buf`. Returns the number of bytes read;
    /// 0 means the remote end closed the stream.
    fn recv(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Blocking send of the full slice.
    fn send(&mut self, data: &[u8]) -> io::Result<()>;

    /// Best-effort teardown of the underlying stream. Called once when the
    /// read loop exits; errors are ignored.
    fn disconnect(&mut self);

    /// Obtain a shutdown handle usable from other threads.
    fn shutdown_handle(&self) -> Self::Shutdown;
}

/// Cross-thread teardown handle for a [`Transport`].
pub trait TransportShutdown: Send + Sync + 'static {
    /// Shut the stream down so a blocked `recv` fails promptly.
    fn shutdown(&self);
}
