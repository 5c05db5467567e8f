//! Error taxonomy for the tagged binary protocol and its session layer.

use thiserror::Error;

/// Errors raised while parsing a tagged binary node tree.
///
/// All of these are fatal to the *current frame only*: the decoder's buffer
/// is owned exclusively per call, so a decode failure never corrupts
/// [`crate::session::state::SessionState`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The cursor would advance past the end of the buffer.
    #[error("unexpected end of buffer")]
    UnexpectedEnd,

    /// A tag byte did not match any known dispatch in `read_string`.
    #[error("invalid tag: {0}")]
    InvalidTag(u8),

    /// A tag byte did not match `LIST_EMPTY`/`LIST_8`/`LIST_16`.
    #[error("invalid list tag: {0}")]
    InvalidListTag(u8),

    /// A node had zero list size or an empty descriptor.
    #[error("invalid node")]
    InvalidNode,

    /// `STREAM_END` appeared where a descriptor tag was expected.
    #[error("unexpected stream end")]
    UnexpectedStreamEnd,

    /// A nibble value outside `{0..=11, 15}` was seen in a packed-8 nibble read.
    #[error("invalid nibble value: {0}")]
    InvalidNibble(u8),

    /// A nibble value outside `{0..=15}` was seen in a packed-8 hex read.
    #[error("invalid hex value: {0}")]
    InvalidHex(u8),

    /// An attribute key repeated within the same node.
    #[error("duplicate attribute key: {0}")]
    DuplicateAttributeKey(String),

    /// A `message` node's opaque blob failed to deserialize.
    ///
    /// Non-fatal: callers are expected to keep the node, substituting the
    /// raw bytes for `content` and carrying this error alongside it.
    #[error("protobuf decode error: {0}")]
    ProtobufDecodeError(String),
}

/// Errors from the authenticated-framing codec (HMAC gate + AES-CBC + unpad).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FramingError {
    /// The padding's trailing length byte was zero or exceeded the buffer length.
    #[error("invalid padding")]
    InvalidPadding,

    /// The computed HMAC did not match the frame's leading 32 bytes.
    #[error("invalid mac")]
    InvalidMac,

    /// The frame was shorter than `mac(32) + iv(16)`.
    #[error("ciphertext too short")]
    CiphertextTooShort,
}

/// Errors from the pairing ceremony (§4.3).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PairingError {
    /// The peer's HMAC over `peer_pub || peer_secret[64..144]` did not match.
    #[error("pairing rejected: hmac mismatch")]
    PairingRejected,

    /// The base64-decoded peer secret was not exactly 144 bytes.
    #[error("secret has wrong length: expected 144, got {0}")]
    SecretWrongLength(usize),

    /// The peer secret failed to base64-decode.
    #[error("secret decode error: {0}")]
    SecretDecodeError(String),
}

/// Top-level error returned by the session driver.
///
/// Wraps every lower-layer error domain plus the transport-level failures
/// that are fatal to the whole session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A frame failed to decode; the frame is dropped, the session survives.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Authenticated-framing failure; the frame is dropped, the session survives.
    #[error("framing error: {0}")]
    Framing(#[from] FramingError),

    /// Pairing failure; fatal to the session.
    #[error("pairing error: {0}")]
    Pairing(#[from] PairingError),

    /// The transport reported that the peer closed the connection.
    #[error("transport closed")]
    TransportClosed,

    /// An I/O error occurred on the transport.
    #[error("transport i/o error: {0}")]
    TransportIo(#[from] std::io::Error),
}
