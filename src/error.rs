// src/error.rs

//! Error types for X-Wing KEM operations.

use thiserror::Error;

/// Errors reported by key parsing, encapsulation and decapsulation.
///
/// Every failure is deterministic for a given input; nothing is retried.
/// The one compensating behavior is tied to [`DecapsulationFailure`]: the
/// caller's shared-secret buffer is overwritten with fresh randomness
/// before the error is returned.
///
/// [`DecapsulationFailure`]: Error::DecapsulationFailure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A serialized private key whose length is not exactly the seed
    /// length. Trailing bytes are an error, not ignored.
    #[error("malformed private key")]
    MalformedKey,

    /// An encoded public key that does not split into a valid ML-KEM-768
    /// encapsulation key plus X25519 key, or a peer key for which the
    /// X25519 exchange produced the identity.
    #[error("invalid public key")]
    InvalidPublicKey,

    /// A destination buffer whose length does not match the encoded
    /// public key size.
    #[error("output buffer size mismatch")]
    EncodingError,

    /// The ciphertext was rejected, either at the split or by the curve
    /// shared-secret step.
    #[error("decapsulation failed")]
    DecapsulationFailure,
}

/// Type alias for results in this crate.
pub type Result<T> = core::result::Result<T, Error>;
