use std::path::{Path, PathBuf};

use ed25519_dalek::VerifyingKey;
use x25519_dalek::StaticSecret;

use crate::error::UniStegError;
use crate::keyring::KeyProvider;
use crate::result::Result;
use crate::{codec, media};

pub fn prepare() -> RevealApi {
    RevealApi::default()
}

#[derive(Default)]
pub struct RevealApi {
    image: Option<PathBuf>,
    identity: Option<StaticSecret>,
    sender: Option<VerifyingKey>,
}

impl RevealApi {
    pub fn with_stego_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The recipient key the placement seed was sealed for.
    pub fn with_identity(mut self, identity: StaticSecret) -> Self {
        self.identity = Some(identity);
        self
    }

    /// The sender key the message signature is verified against.
    pub fn from_sender(mut self, sender: VerifyingKey) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Resolve both keys through a key provider by identifier.
    pub fn with_keyring(
        mut self,
        keys: &impl KeyProvider,
        own_id: &str,
        sender_id: &str,
    ) -> Result<Self> {
        self.identity = Some(keys.identity_keys(own_id)?.exchange);
        self.sender = Some(keys.recipient_keys(sender_id)?.verifying);
        Ok(self)
    }

    /// Reveals and returns the authenticated message.
    pub fn execute(self) -> Result<String> {
        let Some(image) = self.image else {
            return Err(UniStegError::CarrierNotSet);
        };
        let (Some(identity), Some(sender)) = (self.identity, self.sender) else {
            return Err(UniStegError::MissingKeys);
        };

        let stego = media::load_cover(&image)?;
        codec::reveal(&stego, &identity, &sender)
    }
}
