//! PKCS-style padding codec used to wrap plaintext before AES-CBC encryption.
//!
//! `unpad` follows the source's `UnPad` exactly: the trailing byte is read as
//! a length and the tail of that length is dropped, rejecting a zero length
//! or a length that exceeds the buffer — it does not validate that every
//! padding byte repeats the length (textbook PKCS#7 would).

use crate::error::FramingError;

/// Strip trailing padding added by [`pad`].
///
/// # Errors
/// Returns [`FramingError::InvalidPadding`] if the last byte is `0` or
/// exceeds `buf.len()`.
pub fn unpad(buf: &[u8]) -> Result<&[u8], FramingError> {
    let pad_len = *buf.last().ok_or(FramingError::InvalidPadding)? as usize;
    if pad_len == 0 || pad_len > buf.len() {
        return Err(FramingError::InvalidPadding);
    }
    Ok(&buf[..buf.len() - pad_len])
}

/// Pad `buf` to a multiple of `block` bytes.
///
/// Appends `block - (len(buf) mod block)` bytes, each equal to that count.
/// Note this always adds at least one byte of padding, even when `buf.len()`
/// is already a multiple of `block` — the padding byte must stay nonzero so
/// `unpad` can invert it.
pub fn pad(buf: &[u8], block: usize) -> Vec<u8> {
    let pad_len = block - (buf.len() % block);
    let mut out = Vec::with_capacity(buf.len() + pad_len);
    out.extend_from_slice(buf);
    out.resize(out.len() + pad_len, pad_len as u8);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_various_lengths() {
        for len in 0..40 {
            let data: Vec<u8> = (0..len as u8).collect();
            let padded = pad(&data, 16);
            assert_eq!(padded.len() % 16, 0);
            assert_eq!(unpad(&padded).unwrap(), data.as_slice());
        }
    }

    #[test]
    fn rejects_zero_length_byte() {
        let buf = [1u8, 2, 3, 0];
        assert_eq!(unpad(&buf), Err(FramingError::InvalidPadding));
    }

    #[test]
    fn rejects_length_exceeding_buffer() {
        let buf = [1u8, 2, 200];
        assert_eq!(unpad(&buf), Err(FramingError::InvalidPadding));
    }

    #[test]
    fn single_byte_buffer_pads_to_length_itself() {
        let buf = [16u8];
        assert_eq!(unpad(&buf).unwrap(), &[] as &[u8]);
    }
}
