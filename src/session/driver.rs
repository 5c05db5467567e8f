//! The async session driver (C12): a single background task that owns the
//! transport and drives both frame reads and the keepalive ticker via
//! `select!`, wired to bounded channels the caller polls for
//! [`QrData`]/[`ConnInfo`]/[`MessageEvent`].
//!
//! Grounded on the background-task-plus-channel shape of the teacher's
//! `NomadClient` (`client::client`), adapted from its `Arc<RwLock<_>>`
//! shared-state pattern to a single mutating task with `Arc<Mutex<_>>` used
//! only at the one seam external callers reach across: `SetKeys`.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tokio::time::interval;

use crate::config::ClientConfig;
use crate::crypto::keys::{EncKey, MacKey};
use crate::error::SessionError;
use crate::identity;
use crate::session::events::{ConnInfo, Frame, MessageEvent, QrData};
use crate::session::state::{Phase, SessionEvent, SessionState};
use crate::session::tag::new_tag;
use crate::session::transport::Transport;

/// Handle returned by [`SessionDriver::spawn`]: lets the caller install
/// pairing keys, poll events, and close the session.
pub struct SessionHandle {
    state: Arc<Mutex<SessionState>>,
    client_id: String,
    qr_events: mpsc::Receiver<QrData>,
    conn_events: mpsc::Receiver<ConnInfo>,
    messages: mpsc::Receiver<MessageEvent>,
    shutdown: mpsc::Sender<()>,
}

impl SessionHandle {
    /// Await the next QR payload.
    pub async fn next_qr(&mut self) -> Option<QrData> {
        self.qr_events.recv().await
    }

    /// Await the next wrapped-secret payload.
    pub async fn next_conn_info(&mut self) -> Option<ConnInfo> {
        self.conn_events.recv().await
    }

    /// Await the next decoded application message.
    pub async fn next_message(&mut self) -> Option<MessageEvent> {
        self.messages.recv().await
    }

    /// Install the keys produced by completing the pairing ceremony
    /// (`crypto::pair`), moving the session from `Pairing` to
    /// `Authenticated`.
    pub async fn set_keys(&self, enc_key: EncKey, mac_key: MacKey) {
        self.state.lock().await.set_keys(enc_key, mac_key);
    }

    /// Current phase, for callers that want to poll rather than await an
    /// event.
    pub async fn phase(&self) -> Phase {
        self.state.lock().await.phase()
    }

    /// Build the bit-exact QR payload string for a [`QrData::reference`]
    /// (§6 "QR payload format"): `ref + "," + base64(local_public) + "," +
    /// client_id`. The caller renders the result as a QR code for the
    /// peer's mobile app to scan.
    pub async fn qr_payload(&self, reference: &str) -> String {
        use base64::{engine::general_purpose::STANDARD, Engine as _};
        let local_public = self.state.lock().await.local_public();
        format!("{reference},{},{}", STANDARD.encode(local_public), self.client_id)
    }

    /// Idempotently end the session: signals the driver task to stop and
    /// closes the transport.
    pub async fn close(&self) {
        self.state.lock().await.close();
        let _ = self.shutdown.send(()).await;
    }
}

/// Spawn the reader and keepalive tasks over `transport`, returning a
/// [`SessionHandle`]. Sends the initial `Init` frame before returning.
pub async fn spawn<T>(mut transport: T, config: &ClientConfig) -> Result<SessionHandle, SessionError>
where
    T: Transport + Send + 'static,
{
    let client_id = identity::new_client_id();
    let tag = new_tag();
    transport
        .send(Frame::init(&tag, config.web_version, &config.web_agent, &client_id))
        .await?;

    let state = Arc::new(Mutex::new(SessionState::new()));
    state.lock().await.dial_complete();

    let (qr_tx, qr_rx) = mpsc::channel(8);
    let (conn_tx, conn_rx) = mpsc::channel(8);
    let (msg_tx, msg_rx) = mpsc::channel(64);
    let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

    let keepalive_interval = config.keepalive_interval;
    let driver_state = Arc::clone(&state);

    // One task owns the transport outright: recv and the keepalive send
    // both need `&mut transport`, so rather than split it across two tasks
    // (which Transport doesn't support) both are driven from the same
    // `select!`, same shape as a single-socket event loop.
    tokio::spawn(async move {
        let mut ticker = interval(keepalive_interval);
        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    let _ = transport.close().await;
                    break;
                }
                _ = ticker.tick() => {
                    if driver_state.lock().await.keepalive_on()
                        && transport.send(Frame::keepalive()).await.is_err()
                    {
                        break;
                    }
                }
                frame = transport.recv() => {
                    let Ok(frame) = frame else { break };
                    match frame {
                        Frame::Text(body) => {
                            let event = driver_state.lock().await.handle_text(&body).0;
                            dispatch(event, &qr_tx, &conn_tx, &msg_tx).await;
                        }
                        Frame::Binary(bytes) => {
                            let result = driver_state.lock().await.handle_binary(&bytes);
                            match result {
                                Ok(event) => dispatch(event, &qr_tx, &conn_tx, &msg_tx).await,
                                Err(err) => tracing::warn!(%err, "dropping unreadable binary frame"),
                            }
                        }
                    }
                }
            }
        }
    });

    Ok(SessionHandle {
        state,
        client_id,
        qr_events: qr_rx,
        conn_events: conn_rx,
        messages: msg_rx,
        shutdown: shutdown_tx,
    })
}

async fn dispatch(
    event: SessionEvent,
    qr_tx: &mpsc::Sender<QrData>,
    conn_tx: &mpsc::Sender<ConnInfo>,
    msg_tx: &mpsc::Sender<MessageEvent>,
) {
    match event {
        SessionEvent::Qr(qr) => {
            let _ = qr_tx.send(qr).await;
        }
        SessionEvent::Conn(info) => {
            let _ = conn_tx.send(info).await;
        }
        SessionEvent::Message(node) => {
            let _ = msg_tx.send(MessageEvent { node }).await;
        }
        SessionEvent::Pong(_) | SessionEvent::Ignored => {}
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::session::transport::MockTransport;

    #[tokio::test]
    async fn spawn_sends_init_frame_immediately() {
        let (transport, _in_tx, mut out_rx) = MockTransport::pair();
        let config = ClientConfig::default();
        let _handle = spawn(transport, &config).await.unwrap();

        let sent = out_rx.recv().await.unwrap();
        match sent {
            Frame::Text(body) => assert!(body.contains("\"admin\",\"init\"")),
            Frame::Binary(_) => panic!("expected a text Init frame"),
        }
    }

    #[tokio::test]
    async fn qr_banner_surfaces_on_the_qr_channel() {
        let (transport, in_tx, _out_rx) = MockTransport::pair();
        let config = ClientConfig::default();
        let mut handle = spawn(transport, &config).await.unwrap();

        in_tx
            .send(Frame::Text(
                r#"1672000000,{"ref":"R","ttl":20000,"time":1672000000000}"#.to_string(),
            ))
            .await
            .unwrap();

        let qr = handle.next_qr().await.unwrap();
        assert_eq!(qr.reference, "R");
        assert_eq!(handle.phase().await, Phase::Pairing);
    }

    #[tokio::test]
    async fn qr_payload_combines_reference_public_key_and_client_id() {
        let (transport, _in_tx, mut out_rx) = MockTransport::pair();
        let config = ClientConfig::default();
        let handle = spawn(transport, &config).await.unwrap();
        let _ = out_rx.recv().await; // drain the Init frame

        let payload = handle.qr_payload("R").await;
        let mut parts = payload.splitn(3, ',');
        assert_eq!(parts.next(), Some("R"));
        assert!(!parts.next().unwrap().is_empty()); // base64 public key
        assert_eq!(parts.next(), Some(handle.client_id.as_str()));
    }

    #[tokio::test]
    async fn close_stops_the_driver_and_closes_the_transport() {
        let (transport, _in_tx, mut out_rx) = MockTransport::pair();
        let config = ClientConfig::default();
        let handle = spawn(transport, &config).await.unwrap();

        // Drain the Init frame so the channel doesn't matter afterward.
        let _ = out_rx.recv().await;

        handle.close().await;
        assert_eq!(handle.phase().await, Phase::Closed);

        // Give the background task a moment to observe the shutdown signal.
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(out_rx.recv().await.is_none());
    }
}
