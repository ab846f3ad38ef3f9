//! Builder style file-level API.
//!
//! ```no_run
//! use unisteg_core::crypto::{ExchangeKeyPair, SigningKeyPair};
//!
//! let recipient = ExchangeKeyPair::generate();
//! let sender = SigningKeyPair::generate();
//!
//! unisteg_core::api::conceal::prepare()
//!     .with_image("cover.png")
//!     .with_message("Hello, World!")
//!     .for_recipient(*recipient.public())
//!     .signed_by(sender.signing().clone())
//!     .with_output("stego.png")
//!     .execute()
//!     .expect("Failed to conceal message in image");
//! ```

pub mod conceal;
pub mod reveal;
