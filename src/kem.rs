// src/kem.rs

//! Key management, encapsulation and decapsulation for the
//! ML-KEM-768 + X25519 hybrid.

use libcrux_ml_kem::mlkem768::{
    decapsulate as mlkem_decapsulate, encapsulate as mlkem_encapsulate, validate_public_key,
    MlKem768Ciphertext, MlKem768KeyPair, MlKem768PublicKey,
};
use rand_core::{CryptoRng, OsRng, RngCore};
use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};
use zeroize::Zeroize;

use crate::combiner::combiner;
use crate::consts::{
    CIPHERTEXT_SIZE, ENCAPSULATION_SEED_SIZE, MLKEM768_CIPHERTEXT_SIZE, MLKEM768_PUBLIC_KEY_SIZE,
    PUBLIC_KEY_SIZE, SEED_SIZE, X25519_KEY_SIZE,
};
use crate::error::{Error, Result};
use crate::expand::expand_private_key;
use crate::SharedSecret;

/// Decapsulation key.
///
/// Holds the expanded ML-KEM-768 key pair and X25519 scalar next to the
/// seed they were derived from. Only the seed is ever serialized; the
/// expanded secrets are reproducible from it and never leave memory.
pub struct PrivateKey {
    keys: MlKem768KeyPair,
    sk_x: StaticSecret,
    seed: [u8; SEED_SIZE],
}

/// Encapsulation key: ML-KEM-768 encapsulation key plus X25519 public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pk_m: [u8; MLKEM768_PUBLIC_KEY_SIZE],
    pk_x: X25519PublicKey,
}

/// Encoded as the ML-KEM-768 ciphertext followed by the X25519 ephemeral
/// public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    ct_m: [u8; MLKEM768_CIPHERTEXT_SIZE],
    ct_x: [u8; X25519_KEY_SIZE],
}

/// Generates a fresh key pair from the caller's CSPRNG.
pub fn generate_key_pair<R: RngCore + CryptoRng>(rng: &mut R) -> (PrivateKey, PublicKey) {
    let mut seed = [0u8; SEED_SIZE];
    rng.fill_bytes(&mut seed);
    let private_key = PrivateKey::from_seed(seed);
    seed.zeroize();
    let public_key = private_key.public_key();
    (private_key, public_key)
}

impl PrivateKey {
    /// Deterministic key generation from a 32-byte seed.
    pub fn from_seed(seed: [u8; SEED_SIZE]) -> Self {
        let (keys, sk_x) = expand_private_key(&seed);
        Self { keys, sk_x, seed }
    }

    /// Parses a serialized private key.
    ///
    /// The input must be exactly [`SEED_SIZE`] bytes; anything else,
    /// including a single trailing byte, is [`Error::MalformedKey`].
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let seed: [u8; SEED_SIZE] = bytes.try_into().map_err(|_| Error::MalformedKey)?;
        Ok(Self::from_seed(seed))
    }

    /// Marshals the private key: the seed alone is the canonical form.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; SEED_SIZE] {
        self.seed
    }

    /// Derives the encapsulation key.
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        let pk_m: [u8; MLKEM768_PUBLIC_KEY_SIZE] = self
            .keys
            .public_key()
            .as_ref()
            .try_into()
            .expect("ML-KEM public key size mismatch");
        PublicKey {
            pk_m,
            pk_x: X25519PublicKey::from(&self.sk_x),
        }
    }

    /// Recovers the shared secret from a ciphertext, writing it into
    /// `shared_secret`.
    ///
    /// On failure the buffer is overwritten with fresh randomness before
    /// [`Error::DecapsulationFailure`] is returned, so a caller that skips
    /// the status check is left with unusable, unpredictable bytes rather
    /// than anything attacker-influenced.
    pub fn decapsulate(
        &self,
        ciphertext: &Ciphertext,
        shared_secret: &mut SharedSecret,
    ) -> Result<()> {
        match self.decapsulate_inner(ciphertext) {
            Ok(ss) => {
                *shared_secret = ss;
                Ok(())
            }
            Err(err) => {
                OsRng.fill_bytes(shared_secret);
                Err(err)
            }
        }
    }

    fn decapsulate_inner(&self, ciphertext: &Ciphertext) -> Result<SharedSecret> {
        let ct_m = MlKem768Ciphertext::from(ciphertext.ct_m);
        let mut ss_m = mlkem_decapsulate(self.keys.private_key(), &ct_m);

        let dh = self
            .sk_x
            .diffie_hellman(&X25519PublicKey::from(ciphertext.ct_x));
        if !dh.was_contributory() {
            ss_m.zeroize();
            return Err(Error::DecapsulationFailure);
        }
        let mut ss_x = dh.to_bytes();

        // Own static X25519 key, recomputed for the combiner transcript.
        let pk_x = X25519PublicKey::from(&self.sk_x);
        let ss = combiner(&ss_m, &ss_x, &ciphertext.ct_x, pk_x.as_bytes());

        ss_m.zeroize();
        ss_x.zeroize();

        Ok(ss)
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.seed.zeroize();
    }
}

impl PublicKey {
    /// Parses an encoded public key.
    ///
    /// The ML-KEM-768 prefix must pass the modulus check; the trailing 32
    /// bytes are taken as the X25519 key. Degenerate curve keys are only
    /// detected at encapsulation time, when the exchange runs.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PUBLIC_KEY_SIZE {
            return Err(Error::InvalidPublicKey);
        }

        let mut pk_m = [0u8; MLKEM768_PUBLIC_KEY_SIZE];
        pk_m.copy_from_slice(&bytes[..MLKEM768_PUBLIC_KEY_SIZE]);
        if !validate_public_key(&MlKem768PublicKey::from(pk_m)) {
            return Err(Error::InvalidPublicKey);
        }

        let mut pk_x = [0u8; X25519_KEY_SIZE];
        pk_x.copy_from_slice(&bytes[MLKEM768_PUBLIC_KEY_SIZE..]);

        Ok(Self {
            pk_m,
            pk_x: X25519PublicKey::from(pk_x),
        })
    }

    /// Encodes the public key, curve portion last.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        let mut buffer = [0u8; PUBLIC_KEY_SIZE];
        buffer[..MLKEM768_PUBLIC_KEY_SIZE].copy_from_slice(&self.pk_m);
        buffer[MLKEM768_PUBLIC_KEY_SIZE..].copy_from_slice(self.pk_x.as_bytes());
        buffer
    }

    /// Encodes the public key into a caller-provided buffer.
    ///
    /// The buffer length must equal [`PUBLIC_KEY_SIZE`] exactly.
    pub fn write_to(&self, out: &mut [u8]) -> Result<()> {
        if out.len() != PUBLIC_KEY_SIZE {
            return Err(Error::EncodingError);
        }
        out[..MLKEM768_PUBLIC_KEY_SIZE].copy_from_slice(&self.pk_m);
        out[MLKEM768_PUBLIC_KEY_SIZE..].copy_from_slice(self.pk_x.as_bytes());
        Ok(())
    }

    /// Encapsulates against this key with entropy drawn from `rng`.
    pub fn encapsulate<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<(Ciphertext, SharedSecret)> {
        let mut eseed = [0u8; ENCAPSULATION_SEED_SIZE];
        rng.fill_bytes(&mut eseed);
        let result = self.encapsulate_with_entropy(&eseed);
        eseed.zeroize();
        result
    }

    /// Derandomized encapsulation from a fixed 64-byte entropy input.
    ///
    /// Bytes `[0..32)` drive the ML-KEM encapsulation, bytes `[32..64)`
    /// become the X25519 ephemeral secret. Identical inputs give
    /// byte-identical ciphertext and shared secret.
    pub fn encapsulate_with_entropy(
        &self,
        eseed: &[u8; ENCAPSULATION_SEED_SIZE],
    ) -> Result<(Ciphertext, SharedSecret)> {
        let mut ephemeral_bytes = [0u8; X25519_KEY_SIZE];
        ephemeral_bytes.copy_from_slice(&eseed[X25519_KEY_SIZE..]);
        let ephemeral = StaticSecret::from(ephemeral_bytes);
        ephemeral_bytes.zeroize();

        let ct_x = X25519PublicKey::from(&ephemeral).to_bytes();

        let dh = ephemeral.diffie_hellman(&self.pk_x);
        if !dh.was_contributory() {
            return Err(Error::InvalidPublicKey);
        }
        let mut ss_x = dh.to_bytes();

        let mut ml_rand = [0u8; 32];
        ml_rand.copy_from_slice(&eseed[..32]);
        let (ct_m, mut ss_m) = mlkem_encapsulate(&MlKem768PublicKey::from(self.pk_m), ml_rand);
        ml_rand.zeroize();

        let ct_m_bytes: [u8; MLKEM768_CIPHERTEXT_SIZE] = ct_m
            .as_ref()
            .try_into()
            .expect("ML-KEM ciphertext size mismatch");

        let ss = combiner(&ss_m, &ss_x, &ct_x, self.pk_x.as_bytes());

        ss_m.zeroize();
        ss_x.zeroize();

        Ok((
            Ciphertext {
                ct_m: ct_m_bytes,
                ct_x,
            },
            ss,
        ))
    }
}

impl Ciphertext {
    /// Parses an encoded ciphertext; the length must equal
    /// [`CIPHERTEXT_SIZE`] exactly.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != CIPHERTEXT_SIZE {
            return Err(Error::DecapsulationFailure);
        }
        let mut ct_m = [0u8; MLKEM768_CIPHERTEXT_SIZE];
        ct_m.copy_from_slice(&bytes[..MLKEM768_CIPHERTEXT_SIZE]);
        let mut ct_x = [0u8; X25519_KEY_SIZE];
        ct_x.copy_from_slice(&bytes[MLKEM768_CIPHERTEXT_SIZE..]);
        Ok(Self { ct_m, ct_x })
    }

    /// Encodes the ciphertext, curve portion last.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; CIPHERTEXT_SIZE] {
        let mut buffer = [0u8; CIPHERTEXT_SIZE];
        buffer[..MLKEM768_CIPHERTEXT_SIZE].copy_from_slice(&self.ct_m);
        buffer[MLKEM768_CIPHERTEXT_SIZE..].copy_from_slice(&self.ct_x);
        buffer
    }
}
