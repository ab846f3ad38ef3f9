//! Key file loading.
//!
//! Key files hold one base64 encoded 32 byte raw key each. Generation and
//! long term storage of key pairs is out of scope; files are read as-is.

use std::fs;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use unisteg_core::crypto::keys::{public_key_from_bytes, verifying_key_from_bytes};
use unisteg_core::crypto::{ExchangeKeyPair, SigningKeyPair, VerifyingKey};
use unisteg_core::keyring::{IdentityKeys, RecipientKeys};
use unisteg_core::{Result, UniStegError};

fn load_key_bytes(path: &Path) -> Result<[u8; 32]> {
    let text = fs::read_to_string(path)?;
    let bytes = BASE64
        .decode(text.trim())
        .map_err(|_| UniStegError::InvalidKeyMaterial)?;

    bytes
        .try_into()
        .map_err(|_| UniStegError::InvalidKeyMaterial)
}

/// Loads the private half of the local identity from two secret key files.
pub fn load_identity(exchange: &Path, signing: &Path) -> Result<IdentityKeys> {
    let exchange = ExchangeKeyPair::from_secret_bytes(load_key_bytes(exchange)?);
    let signing = SigningKeyPair::from_secret_bytes(&load_key_bytes(signing)?);

    Ok(IdentityKeys::new(&exchange, &signing))
}

/// Loads the own secret exchange key; the public half is derived.
pub fn load_exchange(path: &Path) -> Result<ExchangeKeyPair> {
    Ok(ExchangeKeyPair::from_secret_bytes(load_key_bytes(path)?))
}

/// Loads a correspondent's public verifying key.
pub fn load_verifying(path: &Path) -> Result<VerifyingKey> {
    verifying_key_from_bytes(&load_key_bytes(path)?)
}

/// Loads the public half of a correspondent from two public key files.
pub fn load_recipient(exchange: &Path, verifying: &Path) -> Result<RecipientKeys> {
    Ok(RecipientKeys {
        exchange: public_key_from_bytes(&load_key_bytes(exchange)?)?,
        verifying: verifying_key_from_bytes(&load_key_bytes(verifying)?)?,
    })
}
