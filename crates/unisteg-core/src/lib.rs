//! # UniSteg Core API
//!
//! Conceals a signed UTF-8 message in the least significant bits of an RGB
//! image so that only the intended recipient can recover it, and measures
//! how much the embedding perturbed the cover.
//!
//! The placement of the payload bits is scattered by a permutation derived
//! from a random seed; the seed travels inside the image, sealed with the
//! recipient's public key, in a fixed header region. The message carries an
//! Ed25519 signature of the sender, so extraction with wrong keys or from a
//! plain image fails loudly instead of producing garbage.
//!
//! # Usage Examples
//!
//! ## Conceal and reveal a message in memory
//!
//! ```rust
//! use unisteg_core::crypto::{ExchangeKeyPair, SigningKeyPair};
//! use unisteg_core::{conceal, reveal};
//!
//! let recipient = ExchangeKeyPair::generate();
//! let sender = SigningKeyPair::generate();
//! let mut image = image::RgbImage::from_fn(64, 64, |x, y| {
//!     image::Rgb([x as u8, y as u8, (x + y) as u8])
//! });
//!
//! conceal(&mut image, "Hello, World!", recipient.public(), sender.signing())
//!     .expect("message does not fit the cover");
//!
//! let message = reveal(&image, recipient.secret(), sender.verifying())
//!     .expect("not a stego image or wrong keys");
//! assert_eq!(message, "Hello, World!");
//! ```
//!
//! ## Working with files
//!
//! See [`api::conceal`] and [`api::reveal`] for the builder style file API
//! used by the command line front end.

#![warn(clippy::redundant_else)]

pub mod address;
pub mod api;
pub mod bits;
pub mod codec;
pub mod commands;
pub mod crypto;
pub mod entropy;
pub mod error;
pub mod keyring;
pub mod media;
pub mod payload;
pub mod permutation;
pub mod quality;
pub mod result;

pub use crate::codec::{capacity_of, conceal, conceal_with_entropy, reveal, HEADER_SLOTS};
pub use crate::error::UniStegError;
pub use crate::result::Result;
