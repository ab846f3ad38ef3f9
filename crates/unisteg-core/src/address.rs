//! Flat slot addressing over the color channel bytes of an RGB image.
//!
//! A slot is one channel byte of one pixel. Slot `i` maps to pixel `i / 3`
//! in raster order and channel `i % 3`, which for [`RgbImage`] is exactly
//! index `i` of the raw sample buffer.

use image::RgbImage;

use crate::error::UniStegError;
use crate::result::Result;

/// Number of bit carrying channels per pixel.
pub const CHANNELS: usize = 3;

/// Read-only slot view over a cover image.
pub struct PixelAddressSpace<'a> {
    image: &'a RgbImage,
}

impl<'a> PixelAddressSpace<'a> {
    pub fn new(image: &'a RgbImage) -> Self {
        Self { image }
    }

    /// Total number of bit carrying slots, `width * height * 3`.
    pub fn slot_count(&self) -> usize {
        self.image.as_raw().len()
    }

    /// The least significant bit of the addressed channel byte.
    pub fn read_lsb(&self, index: usize) -> Result<bool> {
        self.image
            .as_raw()
            .get(index)
            .map(|byte| byte & 1 == 1)
            .ok_or(UniStegError::SlotOutOfRange {
                index,
                count: self.slot_count(),
            })
    }
}

/// Mutable slot view, used while writing a payload into a cover.
pub struct PixelAddressSpaceMut<'a> {
    image: &'a mut RgbImage,
}

impl<'a> PixelAddressSpaceMut<'a> {
    pub fn new(image: &'a mut RgbImage) -> Self {
        Self { image }
    }

    pub fn slot_count(&self) -> usize {
        self.image.as_raw().len()
    }

    pub fn read_lsb(&self, index: usize) -> Result<bool> {
        PixelAddressSpace::new(self.image).read_lsb(index)
    }

    /// Overwrites the least significant bit of the addressed channel byte,
    /// leaving the remaining 7 bits untouched.
    pub fn write_lsb(&mut self, index: usize, bit: bool) -> Result<()> {
        let count = self.slot_count();
        let samples: &mut [u8] = self.image;
        let byte = samples
            .get_mut(index)
            .ok_or(UniStegError::SlotOutOfRange { index, count })?;
        *byte = (*byte & (u8::MAX - 1)) | if bit { 1 } else { 0 };

        Ok(())
    }
}
