//! Minimal reply server for running the client demo end-to-end.
//!
//! Accepts one framed request per connection, decodes the root message,
//! and replies with raw text: `ECHO: <message>` or `REVERSED: <data>`.
//! The real server is a separate program; this exists so the demo client
//! has something to talk to.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixListener;

use plde_client::config::DEFAULT_SOCKET_PATH;
use plde_client::payload::Payload;
use plde_client::protocol::FrameBuffer;
use plde_client::RootMessage;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SOCKET_PATH.to_string());
    if std::path::Path::new(&path).exists() {
        std::fs::remove_file(&path)?;
    }

    let listener = UnixListener::bind(&path)?;
    tracing::info!(%path, "listening");

    loop {
        let (mut stream, _) = listener.accept().await?;
        tokio::spawn(async move {
            let mut frames = FrameBuffer::new();
            let mut buf = vec![0u8; 4096];
            loop {
                let n = match stream.read(&mut buf).await {
                    Ok(0) | Err(_) => return,
                    Ok(n) => n,
                };
                let bodies = match frames.push(&buf[..n]) {
                    Ok(bodies) => bodies,
                    Err(e) => {
                        tracing::warn!(error = %e, "rejecting connection");
                        return;
                    }
                };
                if let Some(body) = bodies.into_iter().next() {
                    let reply = match RootMessage::decode(&body) {
                        Ok(Payload::Echo(e)) => {
                            tracing::info!(message = %e.message, "echo request");
                            format!("ECHO: {}", e.message)
                        }
                        Ok(Payload::Reverse(r)) => {
                            tracing::info!(data = %r.data, "reverse request");
                            format!("REVERSED: {}", r.data.chars().rev().collect::<String>())
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "undecodable root message");
                            return;
                        }
                    };
                    let _ = stream.write_all(reply.as_bytes()).await;
                    return;
                }
            }
        });
    }
}
