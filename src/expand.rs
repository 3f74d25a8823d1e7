// src/expand.rs

//! Seed expansion: one 32-byte seed into both sub-scheme secrets.

use libcrux_ml_kem::mlkem768::{generate_key_pair, MlKem768KeyPair};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;
use x25519_dalek::StaticSecret;
use zeroize::Zeroize;

use crate::consts::{MLKEM768_KEYGEN_SEED_SIZE, SEED_SIZE, X25519_KEY_SIZE};

/// Expands a private-key seed into the ML-KEM-768 key pair and the X25519
/// secret scalar.
///
/// SHAKE-256 over the seed, squeezed as 64 bytes of ML-KEM keygen material
/// (`d || z`) followed by 32 bytes of X25519 scalar. The read order is part
/// of the key derivation; the two outputs are disjoint slices of one
/// stream.
pub(crate) fn expand_private_key(seed: &[u8; SEED_SIZE]) -> (MlKem768KeyPair, StaticSecret) {
    let mut xof = Shake256::default();
    xof.update(seed);
    let mut reader = xof.finalize_xof();

    let mut ml_seed = [0u8; MLKEM768_KEYGEN_SEED_SIZE];
    reader.read(&mut ml_seed);
    let keys = generate_key_pair(ml_seed);
    ml_seed.zeroize();

    let mut x_scalar = [0u8; X25519_KEY_SIZE];
    reader.read(&mut x_scalar);
    let sk_x = StaticSecret::from(x_scalar);
    x_scalar.zeroize();

    (keys, sk_x)
}
