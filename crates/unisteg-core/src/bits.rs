//! Byte transport over slot LSBs.
//!
//! [`SlotBitWriter`] and [`SlotBitReader`] adapt a slot visiting order to
//! `std::io::Write` / `std::io::Read`, so the payload layer can use plain
//! byte oriented codecs on top of them. Bytes are spread MSB-first, one bit
//! per slot, in whatever order the iterator yields.

use std::io::{self, Read, Write};

use crate::address::{PixelAddressSpace, PixelAddressSpaceMut};

/// Hides bytes in the LSBs of the slots visited by `order`.
///
/// A byte is only written if all of its 8 slots are available, so a full
/// order never leaves a partially written byte behind.
pub struct SlotBitWriter<'a, I> {
    space: PixelAddressSpaceMut<'a>,
    order: I,
}

impl<'a, I> SlotBitWriter<'a, I>
where
    I: Iterator<Item = usize>,
{
    pub fn new(space: PixelAddressSpaceMut<'a>, order: I) -> Self {
        Self { space, order }
    }
}

impl<I> Write for SlotBitWriter<'_, I>
where
    I: Iterator<Item = usize>,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut written = 0;
        for &byte in buf {
            let mut slots = [0usize; 8];
            for slot in slots.iter_mut() {
                match self.order.next() {
                    Some(s) => *slot = s,
                    None if written > 0 => return Ok(written),
                    None => return Err(io::ErrorKind::WriteZero.into()),
                }
            }
            for (i, slot) in slots.into_iter().enumerate() {
                let bit = (byte >> (7 - i)) & 1 == 1;
                self.space
                    .write_lsb(slot, bit)
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            }
            written += 1;
        }

        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Recovers bytes from the LSBs of the slots visited by `order`.
///
/// Reports a clean EOF at a byte boundary; an order exhausted mid-byte could
/// only come from a broken caller and surfaces as `UnexpectedEof` too.
pub struct SlotBitReader<'a, I> {
    space: PixelAddressSpace<'a>,
    order: I,
}

impl<'a, I> SlotBitReader<'a, I>
where
    I: Iterator<Item = usize>,
{
    pub fn new(space: PixelAddressSpace<'a>, order: I) -> Self {
        Self { space, order }
    }
}

impl<I> Read for SlotBitReader<'_, I>
where
    I: Iterator<Item = usize>,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut read = 0;
        for byte in buf.iter_mut() {
            let mut assembled = 0u8;
            for i in 0..8 {
                let Some(slot) = self.order.next() else {
                    return Ok(read);
                };
                let bit = self
                    .space
                    .read_lsb(slot)
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
                if bit {
                    assembled |= 1 << (7 - i);
                }
            }
            *byte = assembled;
            read += 1;
        }

        Ok(read)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn blank_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, image::Rgb([100, 150, 200]))
    }

    #[test]
    fn it_should_roundtrip_bytes_through_slot_lsbs() {
        let mut img = blank_image(8, 4);
        let data = [0b1010_0110, 0xff, 0x00, 42];

        SlotBitWriter::new(PixelAddressSpaceMut::new(&mut img), 0..96)
            .write_all(&data)
            .unwrap();

        let mut buf = [0u8; 4];
        SlotBitReader::new(PixelAddressSpace::new(&img), 0..96)
            .read_exact(&mut buf)
            .unwrap();

        assert_eq!(buf, data);
    }

    #[test]
    fn it_should_spread_bits_msb_first() {
        let mut img = blank_image(8, 4);

        SlotBitWriter::new(PixelAddressSpaceMut::new(&mut img), 0..96)
            .write_all(&[0b1000_0001])
            .unwrap();

        let space = PixelAddressSpace::new(&img);
        assert!(space.read_lsb(0).unwrap());
        for slot in 1..7 {
            assert!(!space.read_lsb(slot).unwrap());
        }
        assert!(space.read_lsb(7).unwrap());
    }

    #[test]
    fn it_should_follow_the_given_slot_order() {
        let mut img = blank_image(8, 4);
        let order = [90, 3, 17, 64, 5, 21, 40, 33];

        SlotBitWriter::new(PixelAddressSpaceMut::new(&mut img), order.into_iter())
            .write_all(&[0xff])
            .unwrap();

        let space = PixelAddressSpace::new(&img);
        for slot in order {
            assert!(space.read_lsb(slot).unwrap(), "slot {slot} not set");
        }

        let mut buf = [0u8; 1];
        SlotBitReader::new(PixelAddressSpace::new(&img), order.into_iter())
            .read_exact(&mut buf)
            .unwrap();
        assert_eq!(buf[0], 0xff);
    }

    #[test]
    fn it_should_stop_writing_when_the_order_is_exhausted() {
        let mut img = blank_image(8, 4);
        let before = img.as_raw().clone();

        let res = SlotBitWriter::new(PixelAddressSpaceMut::new(&mut img), 0..0)
            .write_all(&[1, 2, 3]);

        assert_eq!(res.unwrap_err().kind(), io::ErrorKind::WriteZero);
        assert_eq!(img.as_raw(), &before);
    }

    #[test]
    fn it_should_report_eof_when_the_order_is_exhausted() {
        let img = blank_image(8, 4);
        let mut buf = [0u8; 3];

        let res = SlotBitReader::new(PixelAddressSpace::new(&img), 0..16).read_exact(&mut buf);

        assert_eq!(res.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }
}
