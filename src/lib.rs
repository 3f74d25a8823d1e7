// src/lib.rs

//! # xwing-kem
//!
//! X-Wing hybrid post-quantum KEM (ML-KEM-768 + X25519) using libcrux
//! and x25519-dalek, following draft-connolly-cfrg-xwing-kem.
//!
//! A private key is generated from, and serialized as, a single 32-byte
//! seed. Public keys and ciphertexts are fixed-size concatenations of the
//! two sub-schemes' encodings, curve portion last. The shared secret is
//! the domain-separated combiner hash over both sub-scheme secrets and
//! the curve transcript.
//!
//! ```
//! use rand_core::OsRng;
//! use xwing_kem::{generate_key_pair, SharedSecret};
//!
//! let (private_key, public_key) = generate_key_pair(&mut OsRng);
//! let (ciphertext, sender_secret) = public_key.encapsulate(&mut OsRng).unwrap();
//!
//! let mut receiver_secret = SharedSecret::default();
//! private_key
//!     .decapsulate(&ciphertext, &mut receiver_secret)
//!     .unwrap();
//! assert_eq!(sender_secret, receiver_secret);
//! ```

pub mod combiner;
pub mod consts;
pub mod error;
mod expand;
mod kem;

pub use consts::{
    CIPHERTEXT_SIZE, ENCAPSULATION_SEED_SIZE, PUBLIC_KEY_SIZE, SEED_SIZE, SHARED_SECRET_SIZE,
};
pub use error::{Error, Result};
pub use kem::{generate_key_pair, Ciphertext, PrivateKey, PublicKey};

/// Output of encapsulation and decapsulation; the only value callers use
/// as symmetric key material.
pub type SharedSecret = [u8; SHARED_SECRET_SIZE];
