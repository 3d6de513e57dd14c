//! TCP transport over `std::net::TcpStream`.

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};

use super::{Transport, TransportShutdown};
use crate::error::Result;
use crate::writer::FrameWriter;

/// Read-side transport over a connected TCP stream.
pub struct TcpTransport {
    stream: TcpStream,
}

impl TcpTransport {
    /// Wrap a connected stream.
    pub fn new(stream: TcpStream) -> Self {
        Self { stream }
    }
}

impl Transport for TcpTransport {
    type Shutdown = TcpShutdown;

    fn recv(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stream.read(buf)
    }

    fn send(&mut self, data: &[u8]) -> io::Result<()> {
        self.stream.write_all(data)?;
        self.stream.flush()
    }

    fn disconnect(&mut self) {
        let _ = self.stream.shutdown(Shutdown::Both);
    }

    fn shutdown_handle(&self) -> TcpShutdown {
        TcpShutdown {
            stream: self.stream.try_clone().ok(),
        }
    }
}

/// Shutdown handle backed by a cloned stream handle.
///
/// If cloning the handle failed at spawn time, `shutdown` degrades to a
/// no-op and teardown waits for the current receive to return.
pub struct TcpShutdown {
    stream: Option<TcpStream>,
}

impl TransportShutdown for TcpShutdown {
    fn shutdown(&self) {
        if let Some(stream) = &self.stream {
            let _ = stream.shutdown(Shutdown::Both);
        }
    }
}

/// Split one connected stream into its two duplex directions: a read-side
/// transport for the frame reader, and a frame writer over a cloned handle.
pub fn split(stream: TcpStream) -> Result<(TcpTransport, FrameWriter<TcpStream>)> {
    let write_half = stream.try_clone()?;
    Ok((TcpTransport::new(stream), FrameWriter::new(write_half)))
}

/// Connect to `addr` and split the stream.
pub fn connect<A: ToSocketAddrs>(addr: A) -> Result<(TcpTransport, FrameWriter<TcpStream>)> {
    split(TcpStream::connect(addr)?)
}
