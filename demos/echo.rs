//! Framed echo over TCP.
//!
//! Spawns an echo server on an ephemeral port, connects a reader/writer
//! pair to it, sends a few JSON payloads, and prints what comes back.
//!
//! Run with: `cargo run --example echo`

use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use framewire::handler::FnHandler;
use framewire::transport::{connect, split, Transport as _};
use framewire::{spawn_reader_default, Message, MessageBuffer, Result};

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    tracing::info!("echo server on {}", addr);

    thread::spawn(move || {
        if let Err(e) = serve(listener) {
            tracing::error!("echo server error: {}", e);
        }
    });

    let (transport, mut writer) = connect(addr)?;

    let (done_tx, done_rx) = mpsc::channel();
    let handler = FnHandler::new(
        |message: Message| {
            println!("<- {}", message.body());
            Ok(())
        },
        move || {
            let _ = done_tx.send(());
        },
    );
    let reader = spawn_reader_default(transport, handler);

    writer.send_value(&serde_json::json!({"command": "version", "seq": 1}))?;
    writer.send_value(&serde_json::json!({"command": "evaluate", "seq": 2}))?;
    writer.send("plain text works too")?;

    thread::sleep(Duration::from_millis(200));
    reader.close();
    let _ = done_rx.recv_timeout(Duration::from_secs(1));

    Ok(())
}

/// Accept one connection and echo every framed message back.
fn serve(listener: TcpListener) -> Result<()> {
    let (stream, peer) = listener.accept()?;
    tracing::info!("connection from {}", peer);

    let (mut transport, mut writer) = split(stream)?;
    let mut buffer = MessageBuffer::new();
    let mut scratch = [0u8; 4096];

    loop {
        let n = match transport.recv(&mut scratch) {
            Ok(0) | Err(_) => return Ok(()),
            Ok(n) => n,
        };
        for message in buffer.push(&scratch[..n])? {
            writer.send(message.body())?;
        }
    }
}
