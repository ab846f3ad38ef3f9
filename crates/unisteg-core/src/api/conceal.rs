use std::path::{Path, PathBuf};

use ed25519_dalek::SigningKey;
use x25519_dalek::PublicKey;

use crate::error::UniStegError;
use crate::keyring::KeyProvider;
use crate::result::Result;
use crate::{codec, media};

pub fn prepare() -> ConcealApi {
    ConcealApi::default()
}

#[derive(Default)]
pub struct ConcealApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    recipient: Option<PublicKey>,
    signer: Option<SigningKey>,
}

impl ConcealApi {
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Seal the placement seed for this recipient key.
    pub fn for_recipient(mut self, recipient: PublicKey) -> Self {
        self.recipient = Some(recipient);
        self
    }

    /// Sign the message with this sender key.
    pub fn signed_by(mut self, signer: SigningKey) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Resolve both keys through a key provider by identifier.
    pub fn with_keyring(
        mut self,
        keys: &impl KeyProvider,
        recipient_id: &str,
        sender_id: &str,
    ) -> Result<Self> {
        self.recipient = Some(keys.recipient_keys(recipient_id)?.exchange);
        self.signer = Some(keys.identity_keys(sender_id)?.signing);
        Ok(self)
    }

    pub fn execute(self) -> Result<()> {
        let Some(message) = self.message else {
            return Err(UniStegError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(UniStegError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(UniStegError::TargetNotSet);
        };
        let (Some(recipient), Some(signer)) = (self.recipient, self.signer) else {
            return Err(UniStegError::MissingKeys);
        };

        let mut cover = media::load_cover(&image)?;
        codec::conceal(&mut cover, &message, &recipient, &signer)?;
        media::save_stego(&cover, &output)
    }
}
