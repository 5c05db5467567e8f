//! Curve25519 identity and the two symmetric keys produced by pairing.
//!
//! All secret material zeroizes on drop, following the same pattern as the
//! teacher crate's `StaticKeypair`.

use rand::rngs::OsRng;
use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// This session's long-term Curve25519 keypair.
///
/// `local_secret` is clamped per Curve25519 by `x25519_dalek::StaticSecret`
/// itself (bit 0/1/2 of byte 0 cleared, bit 7 of byte 31 cleared, bit 6 of
/// byte 31 set) — the same clamping §3 requires of `SessionState`.
pub struct LocalKeypair {
    secret: StaticSecret,
    public: PublicKey,
}

impl LocalKeypair {
    /// Generate a new random keypair from a process-scoped CSPRNG.
    pub fn generate() -> Self {
        let secret = StaticSecret::random_from_rng(OsRng);
        let public = PublicKey::from(&secret);
        Self { secret, public }
    }

    /// Rebuild a keypair from an existing (already clamped) private key.
    pub fn from_secret_bytes(bytes: [u8; 32]) -> Self {
        let secret = StaticSecret::from(bytes);
        let public = PublicKey::from(&secret);
        Self { secret, public }
    }

    /// This identity's public key bytes.
    pub fn public_bytes(&self) -> [u8; 32] {
        self.public.to_bytes()
    }

    /// Compute `X25519(local_secret, peer_public)`.
    pub fn diffie_hellman(&self, peer_public: &[u8; 32]) -> [u8; 32] {
        let peer = PublicKey::from(*peer_public);
        self.secret.diffie_hellman(&peer).to_bytes()
    }
}

/// A 32-byte AES-256 key used to encrypt/decrypt authenticated frames.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EncKey(pub [u8; 32]);

/// A 32-byte HMAC-SHA256 key used to authenticate frames.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MacKey(pub [u8; 32]);

impl AsRef<[u8]> for EncKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for MacKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
