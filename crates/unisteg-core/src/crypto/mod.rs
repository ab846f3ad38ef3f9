//! Asymmetric primitives of the concealment protocol: sealing the placement
//! seed for the recipient and signing the message for the sender.

pub mod keys;
pub mod seed_cipher;
pub mod signing;

pub use ed25519_dalek::VerifyingKey;
pub use keys::{ExchangeKeyPair, SigningKeyPair};
pub use seed_cipher::{open, seal, SEALED_SEED_LEN};
pub use signing::{sign, verify, SIGNATURE_LEN};
