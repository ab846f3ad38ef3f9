//! Cover image loading and stego image saving.
//!
//! Covers are decoded and converted to 8-bit RGB. Output is always PNG:
//! lossy recompression would destroy the embedded LSBs.

use std::fs::File;
use std::path::Path;

use image::RgbImage;
use log::error;

use crate::error::UniStegError;
use crate::result::Result;

/// Loads a cover file as an RGB pixel matrix.
///
/// Only PNG and JPEG covers are accepted; anything else cannot be converted
/// to the RGB mode the protocol addresses.
pub fn load_cover(path: &Path) -> Result<RgbImage> {
    let Some(ext) = path.extension() else {
        return Err(UniStegError::UnsupportedImageMode);
    };

    match ext.to_string_lossy().to_lowercase().as_str() {
        "png" | "jpg" | "jpeg" => Ok(image::open(path)
            .map_err(|_e| UniStegError::InvalidImageMedia)?
            .to_rgb8()),
        _ => Err(UniStegError::UnsupportedImageMode),
    }
}

/// Writes a stego image as a PNG file.
pub fn save_stego(image: &RgbImage, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        error!("Error creating file {path:?}: {e}");
        UniStegError::WriteError { source: e }
    })?;

    image
        .write_to(&mut file, image::ImageFormat::Png)
        .map_err(|e| {
            error!("Error saving image: {e}");
            UniStegError::ImageEncoding
        })
}
