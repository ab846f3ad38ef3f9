//! Key pair value types.
//!
//! Key material is passed into operations as explicit values, never read
//! from ambient process state. Encryption (X25519) and signing (Ed25519)
//! use separate key pairs.

use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use x25519_dalek::{PublicKey, StaticSecret};

use crate::error::UniStegError;
use crate::result::Result;

/// An X25519 key pair used for sealing and opening placement seeds.
#[derive(Clone)]
pub struct ExchangeKeyPair {
    secret: StaticSecret,
    public: PublicKey,
}

impl ExchangeKeyPair {
    /// Generates a new random key pair from OS entropy.
    pub fn generate() -> Self {
        let secret = StaticSecret::random_from_rng(OsRng);
        let public = PublicKey::from(&secret);
        Self { secret, public }
    }

    /// Rebuilds a key pair from raw secret bytes; the public key is derived.
    pub fn from_secret_bytes(bytes: [u8; 32]) -> Self {
        let secret = StaticSecret::from(bytes);
        let public = PublicKey::from(&secret);
        Self { secret, public }
    }

    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    pub fn secret(&self) -> &StaticSecret {
        &self.secret
    }
}

/// An Ed25519 key pair for signing and verifying messages.
#[derive(Clone)]
pub struct SigningKeyPair {
    signing: SigningKey,
    verifying: VerifyingKey,
}

impl SigningKeyPair {
    /// Generates a new random signing key pair from OS entropy.
    pub fn generate() -> Self {
        let signing = SigningKey::generate(&mut OsRng);
        let verifying = signing.verifying_key();
        Self { signing, verifying }
    }

    /// Rebuilds a key pair from raw secret bytes; the verifying key is derived.
    pub fn from_secret_bytes(bytes: &[u8; 32]) -> Self {
        let signing = SigningKey::from_bytes(bytes);
        let verifying = signing.verifying_key();
        Self { signing, verifying }
    }

    pub fn signing(&self) -> &SigningKey {
        &self.signing
    }

    pub fn verifying(&self) -> &VerifyingKey {
        &self.verifying
    }
}

/// Parses a verifying key from raw bytes.
pub fn verifying_key_from_bytes(bytes: &[u8]) -> Result<VerifyingKey> {
    let bytes: &[u8; 32] = bytes
        .try_into()
        .map_err(|_| UniStegError::InvalidKeyMaterial)?;

    VerifyingKey::from_bytes(bytes).map_err(|_| UniStegError::InvalidKeyMaterial)
}

/// Parses an X25519 public key from raw bytes.
pub fn public_key_from_bytes(bytes: &[u8]) -> Result<PublicKey> {
    let bytes: [u8; 32] = bytes
        .try_into()
        .map_err(|_| UniStegError::InvalidKeyMaterial)?;

    Ok(PublicKey::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_derive_the_same_public_key_from_secret_bytes() {
        let pair = ExchangeKeyPair::generate();
        let rebuilt = ExchangeKeyPair::from_secret_bytes(pair.secret().to_bytes());

        assert_eq!(pair.public().as_bytes(), rebuilt.public().as_bytes());
    }

    #[test]
    fn it_should_derive_the_same_verifying_key_from_secret_bytes() {
        let pair = SigningKeyPair::generate();
        let rebuilt = SigningKeyPair::from_secret_bytes(&pair.signing().to_bytes());

        assert_eq!(pair.verifying().as_bytes(), rebuilt.verifying().as_bytes());
    }

    #[test]
    fn it_should_reject_key_bytes_of_the_wrong_length() {
        assert!(matches!(
            public_key_from_bytes(&[1, 2, 3]),
            Err(UniStegError::InvalidKeyMaterial)
        ));
        assert!(matches!(
            verifying_key_from_bytes(&[0u8; 31]),
            Err(UniStegError::InvalidKeyMaterial)
        ));
    }
}
