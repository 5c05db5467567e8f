//! Client identifier generation (C1).

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::{rngs::OsRng, RngCore};

/// Number of random bytes backing a client identifier.
const CLIENT_ID_BYTES: usize = 16;

/// Generate a fresh client identifier: base64-standard of 16 CSPRNG bytes.
///
/// Drawn from a process-scoped [`OsRng`] rather than a reseed-per-call PRNG
/// (the source's `random.GetPlainInt` reseeds from wall-clock on every call,
/// which is a defect — see the design notes).
pub fn new_client_id() -> String {
    let mut bytes = [0u8; CLIENT_ID_BYTES];
    OsRng.fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_distinct_ids() {
        let a = new_client_id();
        let b = new_client_id();
        assert_ne!(a, b);
    }

    #[test]
    fn decodes_to_sixteen_bytes() {
        let id = new_client_id();
        let decoded = STANDARD.decode(&id).unwrap();
        assert_eq!(decoded.len(), CLIENT_ID_BYTES);
    }
}
