//! # kennan-protocol
//!
//! A from-scratch Rust implementation of the tagged binary node protocol and
//! pairing handshake used by a proprietary web chat client — the wire
//! format a browser tab speaks once it has a live WebSocket to the server.
//!
//! This crate covers three concerns:
//!
//! - **Binary decoding** ([`binary`]): the tagged node-tree format — list
//!   framing, the single/double-byte token dictionaries, JID pairs, and the
//!   packed hex/nibble alphabets used for phone-number-shaped strings.
//! - **Pairing and framing** ([`crypto`]): the X25519/HKDF QR-pairing
//!   ceremony and the HMAC-then-AES-CBC codec that wraps every binary frame
//!   once a session is authenticated.
//! - **Session lifecycle** ([`session`]): the four-phase state machine
//!   (`Unauthenticated` → `Pairing` → `Authenticated` → `Closed`), frame
//!   classification, and the async driver that ties a [`session::Transport`]
//!   to that state machine.
//!
//! ## Feature flags
//!
//! - `crypto` (default): Curve25519, HKDF, HMAC, AES-CBC and the pairing
//!   ceremony. Pulled in by `session`; usable alone by anything that only
//!   needs to unwrap a peer secret or seal/open a frame.
//! - `session` (default, implies `crypto`): the state machine, transport
//!   trait, and `tokio`-based async driver.
//!
//! `binary`, `error`, `identity`, and `padding` have no feature gate: they
//! have no cryptographic or async dependency and are useful to anyone who
//! only needs to decode a captured binary frame.
//!
//! ## Example
//!
//! ```
//! use kennan_protocol::binary;
//!
//! // LIST_8, size 1, no attribute pairs, descriptor token at single-byte index 3.
//! let encoded = hex::decode("f80103").unwrap();
//! let node = binary::decode(&encoded).unwrap();
//! assert_eq!(node.desc, "200");
//! println!("decoded node: {}", node.desc);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod binary;
pub mod error;
pub mod identity;
pub mod padding;

#[cfg(feature = "crypto")]
#[cfg_attr(docsrs, doc(cfg(feature = "crypto")))]
pub mod crypto;

#[cfg(feature = "session")]
#[cfg_attr(docsrs, doc(cfg(feature = "session")))]
pub mod config;

#[cfg(feature = "session")]
#[cfg_attr(docsrs, doc(cfg(feature = "session")))]
pub mod session;

/// Convenience re-exports of the types most call sites need.
pub mod prelude {
    pub use crate::binary::{self, Attrs, Content, Node};
    pub use crate::error::{DecodeError, FramingError, PairingError, SessionError};

    #[cfg(feature = "crypto")]
    pub use crate::crypto::{pair, EncKey, LocalKeypair, MacKey};

    #[cfg(feature = "session")]
    pub use crate::config::{ClientConfig, ClientConfigBuilder};
    #[cfg(feature = "session")]
    pub use crate::session::{
        spawn, ConnInfo, Frame, MessageEvent, Phase, QrData, SessionHandle, Transport,
    };
}

pub use binary::{decode, Node};
pub use error::{DecodeError, FramingError, PairingError, SessionError};
