//! The pairing ceremony (C6, §4.3): turns the peer's scanned-QR secret plus
//! our local keypair into an `(EncKey, MacKey)` pair.

use aes::Aes256;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, KeyIvInit};
use hkdf::Hkdf;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::crypto::keys::{EncKey, LocalKeypair, MacKey};
use crate::error::PairingError;
use crate::padding;

type HmacSha256 = Hmac<Sha256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Required length of the base64-decoded peer secret.
const PEER_SECRET_LEN: usize = 144;
const HKDF_OUTPUT_LEN: usize = 80;

/// Run the pairing ceremony (§4.3 steps 1–9), returning the derived keys.
///
/// `peer_secret_b64` is the secret carried by the `ConnInfo` the session
/// state machine emits once the peer scans the QR code.
pub fn pair(local: &LocalKeypair, peer_secret_b64: &str) -> Result<(EncKey, MacKey), PairingError> {
    let peer_secret = STANDARD
        .decode(peer_secret_b64)
        .map_err(|e| PairingError::SecretDecodeError(e.to_string()))?;
    if peer_secret.len() != PEER_SECRET_LEN {
        return Err(PairingError::SecretWrongLength(peer_secret.len()));
    }

    let peer_pub: [u8; 32] = peer_secret[0..32].try_into().unwrap();
    let peer_hmac: [u8; 32] = peer_secret[32..64].try_into().unwrap();
    let peer_iv_and_ct = &peer_secret[64..144];

    // 1. shared = X25519(local_secret, peer_pub)
    let shared = local.diffie_hellman(&peer_pub);

    // 2. prk = HMAC-SHA256(zeros(32), shared) — HKDF-Extract with a zero salt.
    let hk = Hkdf::<Sha256>::new(Some(&[0u8; 32]), &shared);

    // 3. okm = HKDF-Expand(prk, info="", L=80)
    let mut okm = [0u8; HKDF_OUTPUT_LEN];
    hk.expand(&[], &mut okm)
        .expect("80 <= 255*HashLen for HKDF-SHA256");

    // 4. split okm into k_enc, k_mac, k_pad
    let k_enc = &okm[0..32];
    let k_mac = &okm[32..64];
    let k_pad = &okm[64..80];

    // 5. verify_msg = peer_pub || peer_secret[64..144]
    let mut verify_msg = Vec::with_capacity(32 + peer_iv_and_ct.len());
    verify_msg.extend_from_slice(&peer_pub);
    verify_msg.extend_from_slice(peer_iv_and_ct);

    // 6. require HMAC-SHA256(k_mac, verify_msg) == peer_hmac
    let mut mac = HmacSha256::new_from_slice(k_mac).expect("HMAC accepts any key length");
    mac.update(&verify_msg);
    mac.verify_slice(&peer_hmac)
        .map_err(|_| PairingError::PairingRejected)?;

    // 7. wrapped = k_pad || peer_secret[64..144]
    let mut wrapped = Vec::with_capacity(16 + peer_iv_and_ct.len());
    wrapped.extend_from_slice(k_pad);
    wrapped.extend_from_slice(peer_iv_and_ct);

    // 8. AES-CBC-decrypt wrapped[16..] with IV wrapped[0..16] and key k_enc; strip pad.
    let iv: [u8; 16] = wrapped[0..16].try_into().unwrap();
    let ciphertext = &wrapped[16..];
    let decrypted = Aes256CbcDec::new(k_enc.into(), (&iv).into())
        .decrypt_padded_vec_mut::<NoPadding>(ciphertext)
        .map_err(|_| PairingError::PairingRejected)?;
    let unwrapped = padding::unpad(&decrypted).map_err(|_| PairingError::PairingRejected)?;

    // 9. enc_key = unwrapped[0..32], mac_key = unwrapped[32..64]
    if unwrapped.len() != 64 {
        return Err(PairingError::PairingRejected);
    }
    let enc_key: [u8; 32] = unwrapped[0..32].try_into().unwrap();
    let mac_key: [u8; 32] = unwrapped[32..64].try_into().unwrap();

    Ok((EncKey(enc_key), MacKey(mac_key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes::cipher::BlockEncryptMut;

    /// Build a peer secret blob the way the real peer would, then confirm
    /// `pair` recovers the exact keys that produced it (§8 scenario 6).
    fn build_peer_secret(
        peer: &LocalKeypair,
        local_public: [u8; 32],
        enc_key: [u8; 32],
        mac_key: [u8; 32],
    ) -> (String, [u8; 32], [u8; 32]) {
        let shared = peer.diffie_hellman(&local_public);
        let hk = Hkdf::<Sha256>::new(Some(&[0u8; 32]), &shared);
        let mut okm = [0u8; HKDF_OUTPUT_LEN];
        hk.expand(&[], &mut okm).unwrap();
        let k_enc = &okm[0..32];
        let k_mac = &okm[32..64];
        let k_pad = &okm[64..80];

        let mut unwrapped = Vec::with_capacity(64);
        unwrapped.extend_from_slice(&enc_key);
        unwrapped.extend_from_slice(&mac_key);
        let padded = padding::pad(&unwrapped, 16);

        let iv = [5u8; 16];
        type Aes256CbcEnc = cbc::Encryptor<Aes256>;
        let ciphertext = Aes256CbcEnc::new(k_enc.into(), (&iv).into())
            .encrypt_padded_vec_mut::<NoPadding>(&padded);

        let mut iv_and_ct = Vec::with_capacity(16 + ciphertext.len());
        iv_and_ct.extend_from_slice(&iv);
        iv_and_ct.extend_from_slice(&ciphertext);

        let mut verify_msg = Vec::with_capacity(32 + iv_and_ct.len());
        verify_msg.extend_from_slice(&peer.public_bytes());
        verify_msg.extend_from_slice(&iv_and_ct);
        let mut mac = HmacSha256::new_from_slice(k_mac).unwrap();
        mac.update(&verify_msg);
        let peer_hmac: [u8; 32] = mac.finalize().into_bytes().into();

        let mut peer_secret = Vec::with_capacity(144);
        peer_secret.extend_from_slice(&peer.public_bytes());
        peer_secret.extend_from_slice(&peer_hmac);
        peer_secret.extend_from_slice(&iv_and_ct);

        (STANDARD.encode(&peer_secret), enc_key, mac_key)
    }

    #[test]
    fn recovers_the_keys_that_produced_the_blob() {
        let local = LocalKeypair::generate();
        let peer = LocalKeypair::generate();
        let expected_enc = [0x11u8; 32];
        let expected_mac = [0x22u8; 32];

        let (secret_b64, enc, mac) =
            build_peer_secret(&peer, local.public_bytes(), expected_enc, expected_mac);

        let (enc_key, mac_key) = pair(&local, &secret_b64).unwrap();
        assert_eq!(enc_key.0, enc);
        assert_eq!(mac_key.0, mac);
    }

    #[test]
    fn flipped_hmac_byte_is_rejected() {
        let local = LocalKeypair::generate();
        let peer = LocalKeypair::generate();
        let (secret_b64, _, _) =
            build_peer_secret(&peer, local.public_bytes(), [1u8; 32], [2u8; 32]);

        let mut raw = STANDARD.decode(&secret_b64).unwrap();
        raw[32] ^= 0xFF; // inside peer_hmac
        let tampered = STANDARD.encode(&raw);

        assert_eq!(pair(&local, &tampered), Err(PairingError::PairingRejected));
    }

    #[test]
    fn wrong_length_secret_is_rejected() {
        let local = LocalKeypair::generate();
        let short = STANDARD.encode([0u8; 100]);
        assert_eq!(
            pair(&local, &short),
            Err(PairingError::SecretWrongLength(100))
        );
    }
}
