//! Message authentication with Ed25519.
//!
//! The signature binds integrity and sender authenticity of the revealed
//! message independently of the confidentiality the scattered placement
//! provides. Verification failure is an expected outcome, not an
//! exceptional one: it is how wrong keys, tampered images and plain
//! non-stego covers surface.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

/// Fixed Ed25519 signature size.
pub const SIGNATURE_LEN: usize = ed25519_dalek::SIGNATURE_LENGTH;

/// Signs the message bytes with the sender's signing key.
pub fn sign(message: &[u8], key: &SigningKey) -> [u8; SIGNATURE_LEN] {
    key.sign(message).to_bytes()
}

/// Verifies a detached signature against the message bytes.
///
/// Anything that is not a valid signature by the holder of `key` over
/// exactly `message` yields `false`, including malformed signature bytes.
pub fn verify(message: &[u8], signature: &[u8], key: &VerifyingKey) -> bool {
    let Ok(signature) = Signature::from_slice(signature) else {
        return false;
    };

    key.verify(message, &signature).is_ok()
}
