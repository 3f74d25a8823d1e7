// src/combiner.rs

//! Combiner: mixes both sub-scheme shared secrets and the curve transcript
//! into the final shared secret.

use sha3::{Digest, Sha3_256};

use crate::consts::{MLKEM768_SHARED_SECRET_SIZE, X25519_KEY_SIZE};
use crate::SharedSecret;

/// Protocol label, absorbed last.
pub const COMBINER_LABEL: &[u8; 6] = b"\\.//^\\";

/// `SHA3-256(ss_m || ss_x || ct_x || pk_x || label)`.
///
/// SHA3-256 carries a different Keccak domain tag than the SHAKE-256 used
/// for seed expansion, so combiner outputs and expanded key material can
/// never collide. The absorb order and the trailing label are fixed;
/// changing either changes every derived secret.
pub fn combiner(
    ss_m: &[u8; MLKEM768_SHARED_SECRET_SIZE],
    ss_x: &[u8; X25519_KEY_SIZE],
    ct_x: &[u8; X25519_KEY_SIZE],
    pk_x: &[u8; X25519_KEY_SIZE],
) -> SharedSecret {
    let mut hash = Sha3_256::new();
    hash.update(ss_m);
    hash.update(ss_x);
    hash.update(ct_x);
    hash.update(pk_x);
    hash.update(COMBINER_LABEL);
    hash.finalize().into()
}
