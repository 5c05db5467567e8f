//! The synchronous session state machine (C7, §3 `SessionState`, §4.2).
//!
//! `SessionState` is plain data plus transition methods — no I/O, no
//! channels. The async driver (`session::driver`) owns one instance and is
//! the only thing that calls into it from inbound/outbound frame handling.

use serde_json::Value;

use crate::binary::{self, Node};
use crate::crypto::keys::{EncKey, LocalKeypair, MacKey};
use crate::error::{DecodeError, FramingError};
use crate::session::events::{ConnInfo, EpochMillis, Frame, QrData};

/// The four session phases (§3), transitioning monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// `Init` has been (or is about to be) sent; listening for text frames.
    Unauthenticated,
    /// QR shown, awaiting the peer's scan and the `s1` secret frame.
    Pairing,
    /// Keys installed; binary frames are decrypted and decoded.
    Authenticated,
    /// Terminal, absorbing state.
    Closed,
}

/// Result of classifying one inbound frame against the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A pong frame updated `last_seen`; carries the parsed Unix-seconds value.
    Pong(u64),
    /// A fresh QR payload was emitted.
    Qr(QrData),
    /// The peer's wrapped secret arrived.
    Conn(ConnInfo),
    /// An authenticated binary frame decoded to a node.
    Message(Node),
    /// The frame was recognized but carried nothing actionable (e.g. a
    /// known-but-unhandled info type, or a duplicate `ConnInfo`).
    Ignored,
}

/// `{ phase, enc_key, mac_key, local_secret/public, last_seen, keepalive_on }`
/// (§3), plus bookkeeping the table in §4.2 needs (whether `Init` has been
/// sent, whether `ConnInfo` has already fired once).
pub struct SessionState {
    phase: Phase,
    enc_key: Option<EncKey>,
    mac_key: Option<MacKey>,
    local: LocalKeypair,
    last_seen: Option<EpochMillis>,
    keepalive_on: bool,
    conn_info_emitted: bool,
    init_sent: bool,
}

impl SessionState {
    /// Start a fresh session with a newly generated local keypair.
    pub fn new() -> Self {
        Self {
            phase: Phase::Unauthenticated,
            enc_key: None,
            mac_key: None,
            local: LocalKeypair::generate(),
            last_seen: None,
            keepalive_on: false,
            conn_info_emitted: false,
            init_sent: false,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Most recent pong timestamp, if any.
    pub fn last_seen(&self) -> Option<EpochMillis> {
        self.last_seen
    }

    /// This session's local Curve25519 public key.
    pub fn local_public(&self) -> [u8; 32] {
        self.local.public_bytes()
    }

    /// `true` once `Authenticated`.
    pub fn is_authenticated(&self) -> bool {
        self.phase == Phase::Authenticated
    }

    /// Record that the dial completed: marks `Init` as sent and starts the
    /// keepalive timer. Stays in `Unauthenticated` (§4.2 first transition).
    pub fn dial_complete(&mut self) {
        self.init_sent = true;
        self.keepalive_on = true;
    }

    /// Install the keys derived by pairing. Transitions `Pairing →
    /// Authenticated`; any other phase is a no-op (the transition table has
    /// no edge for it).
    pub fn set_keys(&mut self, enc_key: EncKey, mac_key: MacKey) {
        if self.phase == Phase::Pairing {
            self.enc_key = Some(enc_key);
            self.mac_key = Some(mac_key);
            self.phase = Phase::Authenticated;
        }
    }

    /// Idempotent close: stops the keepalive timer and absorbs into `Closed`.
    pub fn close(&mut self) {
        self.keepalive_on = false;
        self.phase = Phase::Closed;
    }

    /// `true` while the keepalive timer should keep firing.
    pub fn keepalive_on(&self) -> bool {
        self.keepalive_on && self.phase != Phase::Closed
    }

    /// `true` once `dial_complete` has run (used to decide whether a pong
    /// should re-send `Init`, per §4.2).
    pub fn init_sent(&self) -> bool {
        self.init_sent
    }

    /// Classify and apply one inbound TEXT frame (§4.2 "Frame classification
    /// algorithm"). Returns the outbound frame to send, if any, alongside the
    /// resulting event.
    pub fn handle_text(&mut self, body: &str) -> (SessionEvent, Option<Frame>) {
        if self.phase == Phase::Closed {
            return (SessionEvent::Ignored, None);
        }

        if let Some(pong) = parse_pong(body) {
            self.last_seen = Some(pong);
            return (SessionEvent::Pong(pong), None);
        }

        let Some((tag, json_body)) = body.split_once(',') else {
            return (SessionEvent::Ignored, None);
        };

        if self.phase == Phase::Authenticated {
            tracing::warn!(tag, "text frame received after authentication");
            return (SessionEvent::Ignored, None);
        }

        let Ok(json) = serde_json::from_str::<Value>(json_body) else {
            return (SessionEvent::Ignored, None);
        };

        if tag == "s1" {
            if self.conn_info_emitted {
                return (SessionEvent::Ignored, None);
            }
            if let Some(secret) = extract_s1_secret(&json) {
                self.conn_info_emitted = true;
                return (SessionEvent::Conn(ConnInfo { secret }), None);
            }
            return (SessionEvent::Ignored, None);
        }

        if tag.starts_with('s') {
            tracing::debug!(tag, "unhandled info-frame tag");
        }

        if let Some((reference, expires_at)) = extract_qr_banner(&json) {
            self.phase = Phase::Pairing;
            return (
                SessionEvent::Qr(QrData {
                    reference,
                    expires_at,
                }),
                None,
            );
        }

        (SessionEvent::Ignored, None)
    }

    /// Classify and apply one inbound BINARY frame (§4.2 last row).
    ///
    /// Requires `Authenticated`; otherwise returns `Ignored` without
    /// consulting the keys (there are none yet).
    pub fn handle_binary(&self, bytes: &[u8]) -> Result<SessionEvent, BinaryFrameError> {
        if self.phase != Phase::Authenticated {
            return Ok(SessionEvent::Ignored);
        }
        let enc_key = self.enc_key.as_ref().expect("Authenticated implies enc_key is set");
        let mac_key = self.mac_key.as_ref().expect("Authenticated implies mac_key is set");

        let plaintext = crate::crypto::frame_cipher::open(enc_key, mac_key, bytes)?;
        let node = binary::decode(&plaintext)?;
        Ok(SessionEvent::Message(node))
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Either layer of error `handle_binary` can raise.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum BinaryFrameError {
    /// The HMAC gate or padding/length check failed.
    #[error("framing error: {0}")]
    Framing(#[from] FramingError),
    /// The decrypted plaintext failed to decode as a node.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// `"!" + digits` → `Some(seconds)`; anything else → `None`.
fn parse_pong(body: &str) -> Option<u64> {
    let rest = body.strip_prefix('!')?;
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok()
}

/// A banner carries `time`/`ttl` at the JSON's top level (an object).
fn extract_qr_banner(json: &Value) -> Option<(String, EpochMillis)> {
    let obj = json.as_object()?;
    let time = obj.get("time")?.as_u64()?;
    let ttl = obj.get("ttl")?.as_u64()?;
    let reference = obj.get("ref")?.as_str()?.to_string();
    Some((reference, time + ttl))
}

/// `s1`'s body is a 2-element array whose `[1]` has a `"secret"` key.
fn extract_s1_secret(json: &Value) -> Option<String> {
    let arr = json.as_array()?;
    if arr.len() != 2 {
        return None;
    }
    arr[1].as_object()?.get("secret")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pong_updates_last_seen_and_stays_in_phase() {
        let mut s = SessionState::new();
        let (event, outbound) = s.handle_text("!1700000000");
        assert_eq!(event, SessionEvent::Pong(1_700_000_000));
        assert_eq!(outbound, None);
        assert_eq!(s.last_seen(), Some(1_700_000_000));
        assert_eq!(s.phase(), Phase::Unauthenticated);
    }

    #[test]
    fn non_digit_suffix_is_not_a_pong() {
        assert_eq!(parse_pong("!12a3"), None);
        assert_eq!(parse_pong("!"), None);
        assert_eq!(parse_pong("hello"), None);
    }

    #[test]
    fn qr_banner_emits_qr_event_and_moves_to_pairing() {
        let mut s = SessionState::new();
        let body = r#"1672000000,{"ref":"R","ttl":20000,"time":1672000000000}"#;
        let (event, _) = s.handle_text(body);
        assert_eq!(
            event,
            SessionEvent::Qr(QrData {
                reference: "R".to_string(),
                expires_at: 1_672_000_020_000,
            })
        );
        assert_eq!(s.phase(), Phase::Pairing);
    }

    #[test]
    fn s1_frame_emits_conn_info_once() {
        let mut s = SessionState::new();
        s.handle_text(r#"1672000000,{"ref":"R","ttl":20000,"time":1672000000000}"#);
        let body = r#"s1,["ignored",{"secret":"abc123=="}]"#;
        let (event, _) = s.handle_text(body);
        assert_eq!(
            event,
            SessionEvent::Conn(ConnInfo {
                secret: "abc123==".to_string()
            })
        );

        // A duplicate s1 frame must not re-emit.
        let (event2, _) = s.handle_text(body);
        assert_eq!(event2, SessionEvent::Ignored);
    }

    #[test]
    fn set_keys_transitions_pairing_to_authenticated() {
        let mut s = SessionState::new();
        s.handle_text(r#"1672000000,{"ref":"R","ttl":20000,"time":1672000000000}"#);
        assert_eq!(s.phase(), Phase::Pairing);
        s.set_keys(EncKey([1u8; 32]), MacKey([2u8; 32]));
        assert_eq!(s.phase(), Phase::Authenticated);
    }

    #[test]
    fn set_keys_outside_pairing_is_a_no_op() {
        let mut s = SessionState::new();
        s.set_keys(EncKey([1u8; 32]), MacKey([2u8; 32]));
        assert_eq!(s.phase(), Phase::Unauthenticated);
    }

    #[test]
    fn close_is_idempotent_and_absorbing() {
        let mut s = SessionState::new();
        s.close();
        assert_eq!(s.phase(), Phase::Closed);
        s.handle_text("!1700000000");
        assert_eq!(s.phase(), Phase::Closed);
        s.close();
        assert_eq!(s.phase(), Phase::Closed);
    }

    #[test]
    fn binary_frame_before_authentication_is_ignored() {
        let s = SessionState::new();
        let event = s.handle_binary(&[0u8; 64]).unwrap();
        assert_eq!(event, SessionEvent::Ignored);
    }

    #[test]
    fn qr_banner_after_authentication_does_not_regress_phase() {
        let mut s = SessionState::new();
        s.handle_text(r#"1672000000,{"ref":"R","ttl":20000,"time":1672000000000}"#);
        s.set_keys(EncKey([1u8; 32]), MacKey([2u8; 32]));
        assert_eq!(s.phase(), Phase::Authenticated);

        let body = r#"1672000001,{"ref":"R2","ttl":20000,"time":1672000001000}"#;
        let (event, outbound) = s.handle_text(body);
        assert_eq!(event, SessionEvent::Ignored);
        assert_eq!(outbound, None);
        assert_eq!(s.phase(), Phase::Authenticated);
    }
}
