//! Events the session driver emits on `qr_events`/`conn_events`, and the
//! frame/timestamp types they carry (§3 `QRData`/`ConnInfo`).

use crate::binary::Node;

/// Milliseconds since the Unix epoch. Kept as a plain integer (rather than
/// `std::time::Instant`, which has no epoch) so tests can construct and
/// compare values directly.
pub type EpochMillis = u64;

/// Emitted whenever the peer sends an unauthenticated JSON banner carrying
/// both `time` and `ttl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrData {
    /// The QR reference string to render as a QR code.
    pub reference: String,
    /// `time + ttl`, in milliseconds since the epoch.
    pub expires_at: EpochMillis,
}

/// Emitted exactly once per session, once the peer's scan produces the
/// wrapped shared secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnInfo {
    /// Base64-encoded wrapped secret, as carried in the `s1` frame payload.
    pub secret: String,
}

/// A fully decoded application message, handed to the caller once
/// authenticated.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageEvent {
    /// The decoded node tree.
    pub node: Node,
}

/// A typed frame delivered by or sent to the transport (§3 `Frame`).
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// A UTF-8 text frame.
    Text(String),
    /// A raw binary frame.
    Binary(Vec<u8>),
}

impl Frame {
    /// Build the outbound keepalive frame: the literal three bytes `"?,,"`.
    pub fn keepalive() -> Self {
        Frame::Text("?,,".to_string())
    }

    /// Build the outbound `Init` frame (§4.2 "Init frame").
    pub fn init(tag: &str, web_version: [u16; 3], web_agent: &[String; 3], client_id: &str) -> Self {
        let body = serde_json::json!(["admin", "init", web_version, web_agent, client_id, true]);
        Frame::Text(format!("{tag},{body}"))
    }
}
