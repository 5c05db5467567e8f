//! The authenticated framing codec: per-frame HMAC-SHA256 gate plus
//! AES-256-CBC encrypt/decrypt (§3 "Binary frame body", §4.2 binary-frame
//! classification).
//!
//! Wire layout: `mac[0..32] || iv[32..48] || ciphertext[48..]`. The MAC
//! covers `iv || ciphertext`, never the plaintext directly — this mirrors
//! the corrected byte ranges called out in §4.2's "known source defect"
//! note (one draft authenticates and decrypts mismatched ranges; this is
//! the fixed version).

use aes::Aes256;
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::crypto::keys::{EncKey, MacKey};
use crate::error::FramingError;
use crate::padding;

type HmacSha256 = Hmac<Sha256>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

const MAC_LEN: usize = 32;
const IV_LEN: usize = 16;

fn compute_mac(mac_key: &MacKey, iv_and_ct: &[u8]) -> [u8; MAC_LEN] {
    let mut mac = HmacSha256::new_from_slice(mac_key.as_ref()).expect("HMAC accepts any key length");
    mac.update(iv_and_ct);
    mac.finalize().into_bytes().into()
}

/// Encrypt `plaintext` into a full authenticated frame: `mac || iv || ct`.
pub fn seal(enc_key: &EncKey, mac_key: &MacKey, iv: [u8; IV_LEN], plaintext: &[u8]) -> Vec<u8> {
    let padded = padding::pad(plaintext, 16);
    let ciphertext = Aes256CbcEnc::new(enc_key.as_ref().into(), (&iv).into())
        .encrypt_padded_vec_mut::<NoPadding>(&padded);

    let mut iv_and_ct = Vec::with_capacity(IV_LEN + ciphertext.len());
    iv_and_ct.extend_from_slice(&iv);
    iv_and_ct.extend_from_slice(&ciphertext);

    let mac = compute_mac(mac_key, &iv_and_ct);
    let mut frame = Vec::with_capacity(MAC_LEN + iv_and_ct.len());
    frame.extend_from_slice(&mac);
    frame.extend_from_slice(&iv_and_ct);
    frame
}

/// Verify and decrypt a binary frame, returning the unpadded plaintext.
///
/// Requires `frame.len() >= 32 + 16`; verifies
/// `HMAC-SHA256(mac_key, frame[32:]) == frame[..32]` before touching the
/// ciphertext.
pub fn open(enc_key: &EncKey, mac_key: &MacKey, frame: &[u8]) -> Result<Vec<u8>, FramingError> {
    if frame.len() < MAC_LEN + IV_LEN {
        return Err(FramingError::CiphertextTooShort);
    }

    let (tag, iv_and_ct) = frame.split_at(MAC_LEN);
    let mut mac = HmacSha256::new_from_slice(mac_key.as_ref()).expect("HMAC accepts any key length");
    mac.update(iv_and_ct);
    mac.verify_slice(tag).map_err(|_| FramingError::InvalidMac)?;

    let (iv, ciphertext) = iv_and_ct.split_at(IV_LEN);
    let mut iv_arr = [0u8; IV_LEN];
    iv_arr.copy_from_slice(iv);

    let decrypted = Aes256CbcDec::new(enc_key.as_ref().into(), (&iv_arr).into())
        .decrypt_padded_vec_mut::<NoPadding>(ciphertext)
        .map_err(|_| FramingError::InvalidPadding)?;

    padding::unpad(&decrypted).map(|p| p.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> (EncKey, MacKey) {
        (EncKey([7u8; 32]), MacKey([9u8; 32]))
    }

    #[test]
    fn seal_then_open_round_trips() {
        let (enc, mac) = keys();
        let iv = [3u8; 16];
        let plaintext = b"hello decoder".to_vec();
        let frame = seal(&enc, &mac, iv, &plaintext);
        let opened = open(&enc, &mac, &frame).unwrap();
        assert_eq!(opened, plaintext);
    }

    #[test]
    fn flipping_a_mac_byte_is_rejected() {
        let (enc, mac) = keys();
        let mut frame = seal(&enc, &mac, [1u8; 16], b"payload");
        frame[0] ^= 0xFF;
        assert_eq!(open(&enc, &mac, &frame), Err(FramingError::InvalidMac));
    }

    #[test]
    fn flipping_a_ciphertext_byte_is_rejected() {
        let (enc, mac) = keys();
        let mut frame = seal(&enc, &mac, [1u8; 16], b"payload");
        let last = frame.len() - 1;
        frame[last] ^= 0xFF;
        assert_eq!(open(&enc, &mac, &frame), Err(FramingError::InvalidMac));
    }

    #[test]
    fn short_frame_is_ciphertext_too_short() {
        let (enc, mac) = keys();
        assert_eq!(
            open(&enc, &mac, &[0u8; 10]),
            Err(FramingError::CiphertextTooShort)
        );
    }
}
