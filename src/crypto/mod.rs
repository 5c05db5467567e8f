//! Curve25519 identity, the pairing ceremony, and the authenticated framing
//! cipher (C5/C6).

pub mod frame_cipher;
pub mod keys;
pub mod pairing;

pub use keys::{EncKey, LocalKeypair, MacKey};
pub use pairing::pair;
