//! Path-level operations behind the CLI.

use std::path::Path;

use crate::keyring::KeyProvider;
use crate::result::Result;
use crate::{api, media, quality};

/// Conceals `message` in the cover at `cover`, sealed for `recipient_id` and
/// signed by the held identity `sender_id`, writing the stego PNG to `target`.
pub fn conceal(
    cover: &Path,
    target: &Path,
    message: &str,
    recipient_id: &str,
    sender_id: &str,
    keys: &impl KeyProvider,
) -> Result<()> {
    api::conceal::prepare()
        .with_image(cover)
        .with_output(target)
        .with_message(message)
        .with_keyring(keys, recipient_id, sender_id)?
        .execute()
}

/// Reveals the message hidden in `stego` for the held identity
/// `recipient_id`, verifying the signature of `sender_id`.
pub fn reveal(
    stego: &Path,
    recipient_id: &str,
    sender_id: &str,
    keys: &impl KeyProvider,
) -> Result<String> {
    api::reveal::prepare()
        .with_stego_image(stego)
        .with_keyring(keys, recipient_id, sender_id)?
        .execute()
}

/// Compares an original cover with its stego counterpart.
pub fn evaluate(original: &Path, stego: &Path) -> Result<quality::Report> {
    let original = media::load_cover(original)?;
    let stego = media::load_cover(stego)?;

    quality::evaluate(&original, &stego)
}
