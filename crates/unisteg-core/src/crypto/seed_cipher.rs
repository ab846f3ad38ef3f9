//! Sealing the placement seed for one recipient.
//!
//! Hybrid asymmetric encryption:
//! 1. Generate an ephemeral X25519 key pair
//! 2. Perform ECDH with the recipient's public key
//! 3. Derive a symmetric key using HKDF-SHA256
//! 4. Encrypt the seed with ChaCha20Poly1305
//!
//! The sealed seed has a fixed size, so the header region of the image it
//! occupies is identical for every conceal/reveal pair.

use byteorder::{BigEndian, ByteOrder};
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Nonce,
};
use hkdf::Hkdf;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use x25519_dalek::{EphemeralSecret, PublicKey, StaticSecret};

use crate::error::UniStegError;
use crate::result::Result;

/// HKDF info string for key derivation.
const HKDF_INFO: &[u8] = b"UNISTEG-V1-SEED";

/// Nonce size for ChaCha20Poly1305.
const NONCE_LEN: usize = 12;

/// Poly1305 authentication tag size.
const TAG_LEN: usize = 16;

/// Big-endian byte size of the seed itself.
const SEED_LEN: usize = 8;

/// Size of a sealed seed:
/// `ephemeral_public (32) || nonce (12) || ciphertext (8 + 16 tag)`.
pub const SEALED_SEED_LEN: usize = 32 + NONCE_LEN + SEED_LEN + TAG_LEN;

/// Seals a placement seed for a recipient using their public key.
pub fn seal(seed: u64, recipient: &PublicKey) -> Result<[u8; SEALED_SEED_LEN]> {
    let ephemeral_secret = EphemeralSecret::random_from_rng(OsRng);
    let ephemeral_public = PublicKey::from(&ephemeral_secret);

    let shared_secret = ephemeral_secret.diffie_hellman(recipient);
    let key = derive_key(shared_secret.as_bytes()).ok_or(UniStegError::SeedEncryption)?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let mut seed_bytes = [0u8; SEED_LEN];
    BigEndian::write_u64(&mut seed_bytes, seed);

    let cipher = ChaCha20Poly1305::new(&key.into());
    let ciphertext = cipher
        .encrypt(nonce, &seed_bytes[..])
        .map_err(|_| UniStegError::SeedEncryption)?;

    let mut sealed = [0u8; SEALED_SEED_LEN];
    sealed[..32].copy_from_slice(ephemeral_public.as_bytes());
    sealed[32..32 + NONCE_LEN].copy_from_slice(&nonce_bytes);
    sealed[32 + NONCE_LEN..].copy_from_slice(&ciphertext);

    Ok(sealed)
}

/// Opens a sealed seed with the recipient's secret key.
///
/// A key that does not match the one the seed was sealed for fails the
/// AEAD authentication and is reported as [`UniStegError::KeyMismatch`].
pub fn open(sealed: &[u8; SEALED_SEED_LEN], recipient: &StaticSecret) -> Result<u64> {
    let mut ephemeral_public = [0u8; 32];
    ephemeral_public.copy_from_slice(&sealed[..32]);

    let nonce = Nonce::from_slice(&sealed[32..32 + NONCE_LEN]);
    let ciphertext = &sealed[32 + NONCE_LEN..];

    let shared_secret = recipient.diffie_hellman(&PublicKey::from(ephemeral_public));
    let key = derive_key(shared_secret.as_bytes()).ok_or(UniStegError::SeedDecryption)?;

    let cipher = ChaCha20Poly1305::new(&key.into());
    let seed_bytes = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| UniStegError::KeyMismatch)?;

    if seed_bytes.len() != SEED_LEN {
        return Err(UniStegError::SeedDecryption);
    }

    Ok(BigEndian::read_u64(&seed_bytes))
}

fn derive_key(shared_secret: &[u8]) -> Option<[u8; 32]> {
    let hk = Hkdf::<Sha256>::new(None, shared_secret);
    let mut key = [0u8; 32];
    hk.expand(HKDF_INFO, &mut key).ok()?;

    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::ExchangeKeyPair;

    #[test]
    fn it_should_roundtrip_a_seed() {
        let recipient = ExchangeKeyPair::generate();

        let sealed = seal(0xDEAD_BEEF_CAFE_F00D, recipient.public()).unwrap();
        let seed = open(&sealed, recipient.secret()).unwrap();

        assert_eq!(seed, 0xDEAD_BEEF_CAFE_F00D);
    }

    #[test]
    fn it_should_produce_a_fresh_sealing_every_time() {
        let recipient = ExchangeKeyPair::generate();

        let a = seal(1, recipient.public()).unwrap();
        let b = seal(1, recipient.public()).unwrap();

        // fresh ephemeral key and nonce per sealing
        assert_ne!(a, b);
    }

    #[test]
    fn it_should_reject_the_wrong_recipient_key() {
        let recipient = ExchangeKeyPair::generate();
        let other = ExchangeKeyPair::generate();

        let sealed = seal(77, recipient.public()).unwrap();
        let res = open(&sealed, other.secret());

        assert!(matches!(res, Err(UniStegError::KeyMismatch)));
    }

    #[test]
    fn it_should_reject_a_corrupted_sealing() {
        let recipient = ExchangeKeyPair::generate();

        let mut sealed = seal(77, recipient.public()).unwrap();
        sealed[SEALED_SEED_LEN - 1] ^= 1;
        let res = open(&sealed, recipient.secret());

        assert!(matches!(res, Err(UniStegError::KeyMismatch)));
    }
}
