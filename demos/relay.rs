//! Bidirectional TCP relay.
//!
//! Forwards every connection accepted on the listen address to the target
//! address, byte-for-byte in both directions. Useful for putting a framed
//! debugger channel through a host you can reach when the debuggee is not
//! directly reachable.
//!
//! Run with: `cargo run --example relay -- 127.0.0.1:5858 127.0.0.1:9229`

use std::env;
use std::io;
use std::net::{Shutdown, TcpListener, TcpStream};
use std::thread;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt().init();

    let mut args = env::args().skip(1);
    let listen = args.next().unwrap_or_else(|| "127.0.0.1:5858".to_string());
    let target = args.next().unwrap_or_else(|| "127.0.0.1:9229".to_string());

    let listener = TcpListener::bind(&listen)?;
    tracing::info!("relaying {} -> {}", listen, target);

    for stream in listener.incoming() {
        let local = match stream {
            Ok(local) => local,
            Err(e) => {
                tracing::warn!("accept failed: {}", e);
                continue;
            }
        };

        let remote = match TcpStream::connect(&target) {
            Ok(remote) => remote,
            Err(e) => {
                tracing::warn!("connect to {} failed: {}", target, e);
                continue;
            }
        };

        let local_rx = local.try_clone()?;
        let remote_rx = remote.try_clone()?;
        thread::spawn(move || pipe(local_rx, remote));
        thread::spawn(move || pipe(remote_rx, local));
    }

    Ok(())
}

/// Copy bytes from `from` to `to` until either side closes.
fn pipe(mut from: TcpStream, mut to: TcpStream) {
    let _ = io::copy(&mut from, &mut to);
    let _ = to.shutdown(Shutdown::Write);
    let _ = from.shutdown(Shutdown::Read);
}
