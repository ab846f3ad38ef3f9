//! The conceal/reveal protocol orchestrator.
//!
//! Layout inside the image:
//!
//! ```text
//! [header: 68 bytes sealed seed, raster order, slots 0..544)
//! [payload: permutation-ordered bits over the remaining slots =
//!     u32 big-endian message length || message bytes || 64 byte signature]
//! ```
//!
//! The header stays unshuffled so the revealing side can always locate the
//! seed; the payload is scattered by the seed-derived permutation so an
//! observer without the recipient's key cannot trivially locate the message
//! even knowing the method; the signature binds message authenticity
//! independently of either.

use std::io::{Read, Write};

use ed25519_dalek::{SigningKey, VerifyingKey};
use image::RgbImage;
use log::debug;
use x25519_dalek::{PublicKey, StaticSecret};

use crate::address::{PixelAddressSpace, PixelAddressSpaceMut};
use crate::bits::{SlotBitReader, SlotBitWriter};
use crate::crypto::{seed_cipher, signing, SEALED_SEED_LEN, SIGNATURE_LEN};
use crate::entropy::{EntropySource, OsEntropy};
use crate::error::UniStegError;
use crate::payload::{self, LENGTH_PREFIX_LEN};
use crate::permutation::Permutation;
use crate::result::Result;

/// Slots reserved for the sealed seed at the start of the image.
pub const HEADER_SLOTS: usize = SEALED_SEED_LEN * 8;

/// Conceals a message in the cover image, sealed for the recipient and
/// signed by the sender. Mutates the image in place.
pub fn conceal(
    image: &mut RgbImage,
    message: &str,
    recipient: &PublicKey,
    sender: &SigningKey,
) -> Result<()> {
    conceal_with_entropy(image, message, recipient, sender, &mut OsEntropy)
}

/// Same as [`conceal`], with an injectable seed source.
pub fn conceal_with_entropy(
    image: &mut RgbImage,
    message: &str,
    recipient: &PublicKey,
    sender: &SigningKey,
    entropy: &mut dyn EntropySource,
) -> Result<()> {
    // capacity check runs to completion before any slot is written: a
    // rejected conceal leaves the cover bit-for-bit untouched
    let slot_count = PixelAddressSpace::new(image).slot_count();
    let capacity = slot_count.saturating_sub(HEADER_SLOTS);
    let required = 8 * (LENGTH_PREFIX_LEN + message.len() + SIGNATURE_LEN);
    debug!("capacity check: {required} payload bits, {capacity} available");
    if required > capacity {
        return Err(UniStegError::CapacityExceeded { required, capacity });
    }

    let seed = entropy.next_seed();
    let sealed = seed_cipher::seal(seed, recipient)?;

    SlotBitWriter::new(PixelAddressSpaceMut::new(image), 0..HEADER_SLOTS)
        .write_all(&sealed)
        .map_err(io_defect)?;
    debug!("sealed seed written into {HEADER_SLOTS} header slots");

    let signature = signing::sign(message.as_bytes(), sender);
    let order = Permutation::from_seed(seed, capacity);
    let payload = payload::encode(message.as_bytes(), &signature)?;

    SlotBitWriter::new(
        PixelAddressSpaceMut::new(image),
        order.iter().map(|slot| HEADER_SLOTS + slot),
    )
    .write_all(&payload)
    .map_err(io_defect)?;
    debug!("{} payload bytes scattered over {} slots", payload.len(), capacity);

    Ok(())
}

/// Reveals and authenticates the message hidden in a stego image.
pub fn reveal(
    image: &RgbImage,
    recipient: &StaticSecret,
    sender: &VerifyingKey,
) -> Result<String> {
    // a cover too small to even hold the sealed seed cannot carry anything
    let slot_count = PixelAddressSpace::new(image).slot_count();
    if slot_count < HEADER_SLOTS {
        return Err(UniStegError::TruncatedPayload);
    }

    let mut sealed = [0u8; SEALED_SEED_LEN];
    SlotBitReader::new(PixelAddressSpace::new(image), 0..HEADER_SLOTS)
        .read_exact(&mut sealed)
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::UnexpectedEof => UniStegError::TruncatedPayload,
            _ => e.into(),
        })?;

    let seed = seed_cipher::open(&sealed, recipient)?;
    debug!("sealed seed opened, recomputing slot order");

    let capacity = slot_count.saturating_sub(HEADER_SLOTS);
    let order = Permutation::from_seed(seed, capacity);

    let mut reader = SlotBitReader::new(
        PixelAddressSpace::new(image),
        order.iter().map(|slot| HEADER_SLOTS + slot),
    );
    let max_message_len = (capacity / 8).saturating_sub(LENGTH_PREFIX_LEN + SIGNATURE_LEN);
    let payload = payload::decode(&mut reader, SIGNATURE_LEN, max_message_len)?;

    if !signing::verify(&payload.message, &payload.signature, sender) {
        return Err(UniStegError::SignatureMismatch);
    }
    debug!("signature verified for {} message bytes", payload.message.len());

    Ok(String::from_utf8(payload.message)?)
}

/// Payload bits available in a cover of the given dimensions.
pub fn capacity_of(image: &RgbImage) -> usize {
    PixelAddressSpace::new(image)
        .slot_count()
        .saturating_sub(HEADER_SLOTS)
}

fn io_defect(e: std::io::Error) -> UniStegError {
    // running out of slots mid-write is unreachable behind the capacity
    // check; anything else is a real defect too
    if e.kind() == std::io::ErrorKind::WriteZero {
        unreachable!("payload outgrew the slot order despite the capacity check");
    }
    e.into()
}
