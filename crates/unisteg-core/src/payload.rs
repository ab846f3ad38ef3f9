//! Length-prefixed payload layout.
//!
//! Wire format: `u32 big-endian message length || message bytes ||
//! fixed-length signature`. Only the message length is self describing; the
//! signature length is agreed out-of-band by the algorithm choice.

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read};

use crate::error::UniStegError;
use crate::result::Result;

/// Size of the big-endian message length prefix.
pub const LENGTH_PREFIX_LEN: usize = 4;

/// A parsed payload: the message bytes and their detached signature.
#[derive(Debug, PartialEq, Eq)]
pub struct Payload {
    pub message: Vec<u8>,
    pub signature: Vec<u8>,
}

/// Serializes message and signature into the payload byte layout.
pub fn encode(message: &[u8], signature: &[u8]) -> Result<Vec<u8>> {
    if message.len() > u32::MAX as usize {
        return Err(UniStegError::MessageTooLarge(message.len()));
    }

    let mut buffer = Vec::with_capacity(LENGTH_PREFIX_LEN + message.len() + signature.len());
    buffer.write_u32::<BigEndian>(message.len() as u32)?;
    buffer.extend_from_slice(message);
    buffer.extend_from_slice(signature);

    Ok(buffer)
}

/// Parses a payload from a byte stream, in field order.
///
/// `max_message_len` caps the declared length at what the carrier can hold
/// at all; anything above it cannot be a real payload and is rejected as
/// truncated before any allocation happens.
pub fn decode(
    content: &mut impl Read,
    signature_len: usize,
    max_message_len: usize,
) -> Result<Payload> {
    let len = content.read_u32::<BigEndian>().map_err(truncated)? as usize;
    if len > max_message_len {
        return Err(UniStegError::TruncatedPayload);
    }

    let mut message = vec![0u8; len];
    content.read_exact(&mut message).map_err(truncated)?;

    let mut signature = vec![0u8; signature_len];
    content.read_exact(&mut signature).map_err(truncated)?;

    Ok(Payload { message, signature })
}

fn truncated(e: io::Error) -> UniStegError {
    match e.kind() {
        io::ErrorKind::UnexpectedEof => UniStegError::TruncatedPayload,
        _ => e.into(),
    }
}
