//! Key collaborator boundary.
//!
//! Operations receive key material through [`KeyProvider`], keyed by plain
//! identifiers. Only identifiers ever cross this boundary; neither message
//! nor image content is handed to the collaborator.

use std::collections::HashMap;

use ed25519_dalek::{SigningKey, VerifyingKey};
use x25519_dalek::{PublicKey, StaticSecret};

use crate::crypto::{ExchangeKeyPair, SigningKeyPair};
use crate::error::UniStegError;
use crate::result::Result;

/// The public half known about a correspondent: where to seal seeds to and
/// how to verify their signatures.
#[derive(Clone)]
pub struct RecipientKeys {
    pub exchange: PublicKey,
    pub verifying: VerifyingKey,
}

/// The private half of an identity this party holds.
#[derive(Clone)]
pub struct IdentityKeys {
    pub exchange: StaticSecret,
    pub signing: SigningKey,
}

impl IdentityKeys {
    pub fn new(exchange: &ExchangeKeyPair, signing: &SigningKeyPair) -> Self {
        Self {
            exchange: exchange.secret().clone(),
            signing: signing.signing().clone(),
        }
    }

    /// The public half this identity presents to others.
    pub fn recipient_keys(&self) -> RecipientKeys {
        RecipientKeys {
            exchange: PublicKey::from(&self.exchange),
            verifying: self.signing.verifying_key(),
        }
    }
}

/// Resolves identifiers to key material.
pub trait KeyProvider {
    /// Public keys for a correspondent identifier.
    fn recipient_keys(&self, id: &str) -> Result<RecipientKeys>;

    /// Private keys for an identity held by this party.
    fn identity_keys(&self, id: &str) -> Result<IdentityKeys>;
}

/// In-memory key provider.
#[derive(Default)]
pub struct MemoryKeyring {
    recipients: HashMap<String, RecipientKeys>,
    identities: HashMap<String, IdentityKeys>,
}

impl MemoryKeyring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_recipient(&mut self, id: impl Into<String>, keys: RecipientKeys) -> &mut Self {
        self.recipients.insert(id.into(), keys);
        self
    }

    /// Registers a held identity; its public half becomes resolvable as a
    /// recipient under the same identifier.
    pub fn add_identity(&mut self, id: impl Into<String>, keys: IdentityKeys) -> &mut Self {
        let id = id.into();
        self.recipients.insert(id.clone(), keys.recipient_keys());
        self.identities.insert(id, keys);
        self
    }
}

impl KeyProvider for MemoryKeyring {
    fn recipient_keys(&self, id: &str) -> Result<RecipientKeys> {
        self.recipients
            .get(id)
            .cloned()
            .ok_or_else(|| UniStegError::KeyNotFound(id.to_owned()))
    }

    fn identity_keys(&self, id: &str) -> Result<IdentityKeys> {
        self.identities
            .get(id)
            .cloned()
            .ok_or_else(|| UniStegError::KeyNotFound(id.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_identity() -> IdentityKeys {
        IdentityKeys::new(&ExchangeKeyPair::generate(), &SigningKeyPair::generate())
    }

    #[test]
    fn it_should_resolve_a_registered_identity_both_ways() {
        let mut ring = MemoryKeyring::new();
        let identity = fresh_identity();
        let expected = identity.recipient_keys();
        ring.add_identity("alice", identity);

        let public_half = ring.recipient_keys("alice").unwrap();
        assert_eq!(public_half.exchange.as_bytes(), expected.exchange.as_bytes());
        assert!(ring.identity_keys("alice").is_ok());
    }

    #[test]
    fn it_should_report_unknown_identifiers() {
        let ring = MemoryKeyring::new();

        let res = ring.recipient_keys("nobody");

        assert!(matches!(res, Err(UniStegError::KeyNotFound(id)) if id == "nobody"));
    }

    #[test]
    fn it_should_not_expose_private_keys_for_mere_recipients() {
        let mut ring = MemoryKeyring::new();
        ring.add_recipient("bob", fresh_identity().recipient_keys());

        assert!(ring.recipient_keys("bob").is_ok());
        assert!(matches!(
            ring.identity_keys("bob"),
            Err(UniStegError::KeyNotFound(_))
        ));
    }
}
