//! The transport seam (C8, §6): an async trait the driver talks to, so tests
//! can run the whole session state machine without a real WebSocket.

use std::future::Future;

use tokio::sync::mpsc;

use crate::error::SessionError;
use crate::session::events::Frame;

/// Anything that can exchange [`Frame`]s with the peer.
///
/// The driver (`session::driver`) is generic over `T: Transport` rather than
/// boxing a trait object, so implementors don't need `Send + 'static`
/// futures boxed on every call.
pub trait Transport: Send {
    /// Wait for the next inbound frame.
    fn recv(&mut self) -> impl Future<Output = Result<Frame, SessionError>> + Send;
    /// Send one outbound frame.
    fn send(&mut self, frame: Frame) -> impl Future<Output = Result<(), SessionError>> + Send;
    /// Close the underlying connection.
    fn close(&mut self) -> impl Future<Output = Result<(), SessionError>> + Send;
}

/// An in-memory [`Transport`] for tests: one channel carries frames in, one
/// carries them out, so a test can drive the session driver without a
/// socket.
pub struct MockTransport {
    inbound: mpsc::Receiver<Frame>,
    outbound: mpsc::Sender<Frame>,
    closed: bool,
}

impl MockTransport {
    /// Build a connected pair: `(transport, test_inbound_sender,
    /// test_outbound_receiver)`.
    pub fn pair() -> (Self, mpsc::Sender<Frame>, mpsc::Receiver<Frame>) {
        let (in_tx, in_rx) = mpsc::channel(32);
        let (out_tx, out_rx) = mpsc::channel(32);
        let transport = MockTransport {
            inbound: in_rx,
            outbound: out_tx,
            closed: false,
        };
        (transport, in_tx, out_rx)
    }
}

impl Transport for MockTransport {
    async fn recv(&mut self) -> Result<Frame, SessionError> {
        if self.closed {
            return Err(SessionError::TransportClosed);
        }
        self.inbound.recv().await.ok_or(SessionError::TransportClosed)
    }

    async fn send(&mut self, frame: Frame) -> Result<(), SessionError> {
        if self.closed {
            return Err(SessionError::TransportClosed);
        }
        self.outbound
            .send(frame)
            .await
            .map_err(|_| SessionError::TransportClosed)
    }

    async fn close(&mut self) -> Result<(), SessionError> {
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_transport_round_trips_frames() {
        let (mut transport, in_tx, mut out_rx) = MockTransport::pair();

        in_tx.send(Frame::Text("!123".to_string())).await.unwrap();
        let got = transport.recv().await.unwrap();
        assert_eq!(got, Frame::Text("!123".to_string()));

        transport.send(Frame::keepalive()).await.unwrap();
        let sent = out_rx.recv().await.unwrap();
        assert_eq!(sent, Frame::keepalive());
    }

    #[tokio::test]
    async fn closed_transport_rejects_further_use() {
        let (mut transport, _in_tx, _out_rx) = MockTransport::pair();
        transport.close().await.unwrap();
        assert!(transport.recv().await.is_err());
        assert!(transport.send(Frame::keepalive()).await.is_err());
    }
}
