//! Frame reader - dedicated-thread blocking read loop.
//!
//! [`spawn_reader`] starts one OS thread per connection. The thread blocks
//! on socket receives, feeds every chunk through a
//! [`MessageBuffer`](crate::protocol::MessageBuffer), and dispatches each
//! completed message to the handler in wire order. There is no cooperative
//! or async scheduling anywhere in this path.
//!
//! Teardown is cooperative: [`ReaderHandle::close`] raises a shared closed
//! flag, observed at the top of every loop iteration, and shuts the socket
//! down through the transport's shutdown handle so an in-flight blocking
//! receive returns promptly instead of waiting on a silent peer.
//!
//! # Failure semantics
//!
//! - A socket error during receive ends the loop as a normal disconnect;
//!   nothing propagates past the thread boundary.
//! - A handler error is logged and absorbed; the loop continues.
//! - `on_disconnected` fires exactly once after the loop exits, for any
//!   exit cause.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::handler::MessageHandler;
use crate::protocol::MessageBuffer;
use crate::transport::{Transport, TransportShutdown};

/// Default size of the reusable receive scratch buffer (64 KB).
pub const DEFAULT_RECV_BUFFER_SIZE: usize = 64 * 1024;

/// Configuration for the read loop.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Size of the receive scratch buffer, private to the reader thread
    /// and reused across iterations.
    pub recv_buffer_size: usize,
    /// Optional cap on declared body length. `None` preserves the
    /// protocol's unbounded default.
    pub max_body_size: Option<usize>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            recv_buffer_size: DEFAULT_RECV_BUFFER_SIZE,
            max_body_size: None,
        }
    }
}

/// Spawn the reader thread for one connection.
///
/// The transport is owned by the reader thread from here on; the returned
/// handle is the only way to interact with the running loop.
pub fn spawn_reader<T, H>(transport: T, handler: H, config: ReaderConfig) -> ReaderHandle
where
    T: Transport,
    H: MessageHandler,
{
    let closed = Arc::new(AtomicBool::new(false));
    let shutdown: Box<dyn TransportShutdown> = Box::new(transport.shutdown_handle());

    let thread = thread::spawn({
        let closed = closed.clone();
        move || read_loop(transport, handler, config, closed)
    });

    ReaderHandle {
        closed,
        shutdown,
        thread: Some(thread),
    }
}

/// Spawn the reader thread with default configuration.
pub fn spawn_reader_default<T, H>(transport: T, handler: H) -> ReaderHandle
where
    T: Transport,
    H: MessageHandler,
{
    spawn_reader(transport, handler, ReaderConfig::default())
}

/// Handle for observing and tearing down a running reader.
///
/// Dropping the handle without calling [`close`](ReaderHandle::close)
/// detaches the thread; it keeps reading until the remote end closes.
pub struct ReaderHandle {
    closed: Arc<AtomicBool>,
    shutdown: Box<dyn TransportShutdown>,
    thread: Option<JoinHandle<()>>,
}

impl ReaderHandle {
    /// Request cooperative stop, force the in-flight receive to return,
    /// and wait for the reader thread to finish.
    ///
    /// `on_disconnected` has fired by the time this returns.
    pub fn close(mut self) {
        self.closed.store(true, Ordering::Release);
        self.shutdown.shutdown();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }

    /// Wait for the reader thread to exit on its own (remote close or
    /// socket error).
    pub fn join(mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }

    /// Whether stop has been requested.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

/// Main read loop: receive, accumulate, dispatch, until disconnect.
fn read_loop<T, H>(mut transport: T, mut handler: H, config: ReaderConfig, closed: Arc<AtomicBool>)
where
    T: Transport,
    H: MessageHandler,
{
    let mut messages = match config.max_body_size {
        Some(max) => MessageBuffer::with_max_body_size(max),
        None => MessageBuffer::new(),
    };
    let mut scratch = vec![0u8; config.recv_buffer_size];

    loop {
        // Liveness checkpoint before each blocking receive
        if closed.load(Ordering::Acquire) {
            break;
        }

        let n = match transport.recv(&mut scratch) {
            Ok(0) => break, // remote closed
            Ok(n) => n,
            Err(e) => {
                if !closed.load(Ordering::Acquire) {
                    tracing::debug!("Read loop socket error: {}", e);
                }
                break;
            }
        };

        // Re-check after waking from the receive: teardown may have
        // raced with delivered bytes
        if closed.load(Ordering::Acquire) {
            break;
        }

        let batch = match messages.push(&scratch[..n]) {
            Ok(batch) => batch,
            Err(e) => {
                tracing::error!("Read loop protocol error: {}", e);
                break;
            }
        };

        for message in batch {
            if let Err(e) = handler.on_message(message) {
                tracing::error!("Handler error: {}", e);
            }
        }
    }

    transport.disconnect();
    handler.on_disconnected();
}
