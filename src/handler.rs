//! Message dispatch callbacks.
//!
//! A consumer of the frame reader supplies a [`MessageHandler`]. Both
//! callbacks run on the reader's own thread, so a handler that blocks
//! stalls further parsing of that connection (but no other connection).

use crate::error::Result;
use crate::protocol::Message;

/// Consumer-side callbacks for one framed connection.
pub trait MessageHandler: Send + 'static {
    /// Called synchronously, in wire order, once per fully parsed message.
    ///
    /// An `Err` is logged and absorbed by the read loop; it does not
    /// terminate the connection.
    fn on_message(&mut self, message: Message) -> Result<()>;

    /// Called exactly once after the read loop exits, whatever the cause:
    /// graceful close, remote close, socket error, or explicit teardown.
    fn on_disconnected(&mut self) {}
}

/// Closure-based handler for small consumers and tests.
///
/// # Example
///
/// ```
/// use framewire::handler::FnHandler;
///
/// let handler = FnHandler::new(
///     |message| {
///         println!("got {} bytes", message.body_len());
///         Ok(())
///     },
///     || println!("disconnected"),
/// );
/// # let _ = handler;
/// ```
pub struct FnHandler<M, D> {
    on_message: M,
    on_disconnected: D,
}

impl<M, D> FnHandler<M, D>
where
    M: FnMut(Message) -> Result<()> + Send + 'static,
    D: FnMut() + Send + 'static,
{
    /// Create a handler from a message callback and a disconnect callback.
    pub fn new(on_message: M, on_disconnected: D) -> Self {
        Self {
            on_message,
            on_disconnected,
        }
    }
}

impl<M, D> MessageHandler for FnHandler<M, D>
where
    M: FnMut(Message) -> Result<()> + Send + 'static,
    D: FnMut() + Send + 'static,
{
    fn on_message(&mut self, message: Message) -> Result<()> {
        (self.on_message)(message)
    }

    fn on_disconnected(&mut self) {
        (self.on_disconnected)()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{mpsc, Arc};

    use super::*;
    use crate::protocol::HeaderMap;

    #[test]
    fn test_fn_handler_dispatch() {
        let (tx, rx) = mpsc::channel();
        let disconnects = Arc::new(AtomicUsize::new(0));
        let disconnects_seen = disconnects.clone();

        let mut handler = FnHandler::new(
            move |message: Message| {
                tx.send(message.body).unwrap();
                Ok(())
            },
            move || {
                disconnects_seen.fetch_add(1, Ordering::SeqCst);
            },
        );

        handler
            .on_message(Message::new(HeaderMap::new(), "one".into()))
            .unwrap();
        handler
            .on_message(Message::new(HeaderMap::new(), "two".into()))
            .unwrap();
        handler.on_disconnected();

        let received: Vec<String> = rx.try_iter().collect();
        assert_eq!(received, vec!["one", "two"]);
        assert_eq!(disconnects.load(Ordering::SeqCst), 1);
    }
}
