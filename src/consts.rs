// src/consts.rs

//! Fixed sizes for the ML-KEM-768 + X25519 parameter set.

/// Serialized private key: the 32-byte generation seed, nothing else.
pub const SEED_SIZE: usize = 32;

/// External entropy consumed by one encapsulation.
///
/// Bytes `[0..32)` feed the ML-KEM encapsulation, bytes `[32..64)` are the
/// X25519 ephemeral secret.
pub const ENCAPSULATION_SEED_SIZE: usize = 64;

/// Output length of the combiner.
pub const SHARED_SECRET_SIZE: usize = 32;

/// X25519 public keys, secrets and shared secrets are all 32 bytes.
pub const X25519_KEY_SIZE: usize = 32;

/// ML-KEM-768 keygen seed material (`d || z`).
pub const MLKEM768_KEYGEN_SEED_SIZE: usize = 64;

/// ML-KEM-768 encapsulation key.
pub const MLKEM768_PUBLIC_KEY_SIZE: usize = 1184;

/// ML-KEM-768 ciphertext.
pub const MLKEM768_CIPHERTEXT_SIZE: usize = 1088;

/// ML-KEM-768 shared secret.
pub const MLKEM768_SHARED_SECRET_SIZE: usize = 32;

/// Encoded public key: ML-KEM-768 encapsulation key, then the X25519 key.
pub const PUBLIC_KEY_SIZE: usize = MLKEM768_PUBLIC_KEY_SIZE + X25519_KEY_SIZE;

/// Encoded ciphertext: ML-KEM-768 ciphertext, then the X25519 ephemeral key.
pub const CIPHERTEXT_SIZE: usize = MLKEM768_CIPHERTEXT_SIZE + X25519_KEY_SIZE;
