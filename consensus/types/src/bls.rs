//! Opaque containers for compressed BLS public keys and signatures.
//!
//! The transition core carries key and signature bytes through its SSZ
//! containers and hashes them; it never performs pairing operations.
//! Verification belongs to the host runtime, which owns the key material.

pub const PUBLIC_KEY_BYTES_LEN: usize = 48;
pub const SIGNATURE_BYTES_LEN: usize = 96;

/// A compressed BLS public key, not checked for being a valid curve point.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKeyBytes([u8; PUBLIC_KEY_BYTES_LEN]);

/// A compressed BLS signature, not checked for being a valid curve point.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureBytes([u8; SIGNATURE_BYTES_LEN]);

impl_fixed_len_bytes!(PublicKeyBytes, PUBLIC_KEY_BYTES_LEN);
impl_fixed_len_bytes!(SignatureBytes, SIGNATURE_BYTES_LEN);

impl From<[u8; PUBLIC_KEY_BYTES_LEN]> for PublicKeyBytes {
    fn from(bytes: [u8; PUBLIC_KEY_BYTES_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<[u8; SIGNATURE_BYTES_LEN]> for SignatureBytes {
    fn from(bytes: [u8; SIGNATURE_BYTES_LEN]) -> Self {
        Self(bytes)
    }
}
