use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UniStegError {
    /// Represents a slot index outside `[0, slot_count)`. This is a defect in
    /// the caller, not a property of the cover image.
    #[error("Slot index {index} is out of range for {count} slots")]
    SlotOutOfRange { index: usize, count: usize },

    /// Represents a payload that does not fit into the cover image. Raised
    /// before any pixel is touched, so the cover stays intact.
    #[error("Payload of {required} bits exceeds the cover capacity of {capacity} bits")]
    CapacityExceeded { required: usize, capacity: usize },

    /// Represents a message too large for the 32 bit length prefix
    #[error("Message of {0} bytes does not fit the length prefix")]
    MessageTooLarge(usize),

    /// Represents a payload that ended before all declared fields were read.
    /// Usually the image never carried a secret, or the seed was wrong.
    #[error("Payload ended before the declared length was read")]
    TruncatedPayload,

    /// Represents a sealed seed that did not open with the given key
    #[error("Sealed seed could not be opened with the given key")]
    KeyMismatch,

    /// Represents a failure while sealing the placement seed
    #[error("Placement seed could not be sealed")]
    SeedEncryption,

    /// Represents a malformed sealed seed header
    #[error("Sealed seed header is malformed")]
    SeedDecryption,

    /// Represents a message whose signature did not verify. Expected outcome
    /// for tampered images, wrong sender keys or plain covers.
    #[error("Message signature does not verify")]
    SignatureMismatch,

    /// Represents a cover file that cannot be converted to 8 bit RGB
    #[error("Media cannot be converted to an RGB image")]
    UnsupportedImageMode,

    /// Represents an invalid carrier image. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents an unknown identifier at the key collaborator boundary
    #[error("No key material known for identifier `{0}`")]
    KeyNotFound(String),

    /// Represents key material of the wrong length or encoding
    #[error("Key material is malformed")]
    InvalidKeyMaterial,

    /// Represents the error of invalid UTF-8 data found inside a revealed message
    #[error("Invalid text data found inside a message")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents two evaluation images of different dimensions
    #[error("Images have different dimensions: {0}x{1} vs {2}x{3}")]
    DimensionMismatch(u32, u32, u32, u32),

    /// Represents a failure when encoding the stego image file
    #[error("Image encoding error")]
    ImageEncoding,

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No cover media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Missing key material")]
    MissingKeys,
}
