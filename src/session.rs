//! One-shot transport session state machine.
//!
//! Each request runs through its own session and connection:
//!
//! ```text
//! Idle → Connecting → Connected → AwaitingResponse → Closed
//! ```
//!
//! `Closed` is terminal and reachable from any state on a transport
//! error. The session writes exactly one frame, treats the first inbound
//! data event as the complete response (the response direction carries no
//! framing), then actively closes the connection. There are no retries
//! and no timeout while awaiting the response: a session against a
//! silent endpoint stays parked in `AwaitingResponse`.
//!
//! Sessions are independent. Issuing N requests opens N connections,
//! sequentially or concurrently; a failed session never affects another.

use bytes::Bytes;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::error::{Result, WireError};
use crate::transport::{Endpoint, SocketStream};

/// Read buffer size for the single response event.
const RESPONSE_BUF_SIZE: usize = 64 * 1024;

/// Session lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No connection yet.
    Idle,
    /// Connect issued, not yet established.
    Connecting,
    /// Connected; the frame write is in flight.
    Connected,
    /// Frame fully written; waiting for the first inbound data event.
    AwaitingResponse,
    /// Terminal: completed or failed.
    Closed,
}

/// A single request/response exchange over one connection.
pub struct Session {
    endpoint: Endpoint,
    state: SessionState,
}

impl Session {
    /// Create an idle session against the fixed endpoint.
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            state: SessionState::Idle,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Drive the session to completion: connect, write the frame, await
    /// the first response event, close.
    ///
    /// Errors are scoped to this session; they are logged and surfaced,
    /// never retried.
    pub async fn execute(mut self, frame: Bytes) -> Result<Bytes> {
        let result = self.exchange(&frame).await;
        self.transition(SessionState::Closed);
        if let Err(e) = &result {
            tracing::error!(endpoint = %self.endpoint, error = %e, "session failed");
        }
        result
    }

    async fn exchange(&mut self, frame: &[u8]) -> Result<Bytes> {
        self.transition(SessionState::Connecting);
        let mut stream = SocketStream::connect(&self.endpoint).await?;
        self.transition(SessionState::Connected);

        tracing::debug!(bytes = frame.len(), "sending frame");
        // write_all retries partial writes until every byte is flushed
        stream.write_all(frame).await?;
        stream.flush().await?;
        self.transition(SessionState::AwaitingResponse);

        // Single read; no timeout. A silent endpoint parks the session here.
        let mut buf = vec![0u8; RESPONSE_BUF_SIZE];
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            return Err(WireError::ConnectionClosed);
        }
        let response = Bytes::copy_from_slice(&buf[..n]);
        tracing::debug!(bytes = n, "received response");

        // First data event is the whole response; close actively.
        let _ = stream.shutdown().await;
        Ok(response)
    }

    fn transition(&mut self, next: SessionState) {
        tracing::debug!(from = ?self.state, to = ?next, endpoint = %self.endpoint, "session state");
        self.state = next;
    }

    /// Run a session as a detached task.
    ///
    /// Control returns immediately; the response (or error) arrives on
    /// the handle when the session completes.
    pub fn spawn(endpoint: Endpoint, frame: Bytes) -> SessionHandle {
        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            let result = Session::new(endpoint).execute(frame).await;
            let _ = tx.send(result);
        });
        SessionHandle { rx, _task: task }
    }
}

/// Handle to a detached session.
pub struct SessionHandle {
    rx: oneshot::Receiver<Result<Bytes>>,
    _task: JoinHandle<()>,
}

impl SessionHandle {
    /// Wait for the session's response or its error.
    pub async fn response(self) -> Result<Bytes> {
        match self.rx.await {
            Ok(result) => result,
            Err(_) => Err(WireError::ConnectionClosed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new(Endpoint::unix("/tmp/x.sock"));
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[tokio::test]
    async fn test_connect_refused_surfaces_error() {
        let session = Session::new(Endpoint::unix("/tmp/plde-refused.sock"));
        let result = session.execute(Bytes::from_static(b"frame")).await;
        assert!(matches!(result, Err(WireError::Io(_))));
    }

    #[tokio::test]
    async fn test_spawn_surfaces_error_through_handle() {
        let handle = Session::spawn(
            Endpoint::unix("/tmp/plde-refused.sock"),
            Bytes::from_static(b"frame"),
        );
        assert!(handle.response().await.is_err());
    }
}
