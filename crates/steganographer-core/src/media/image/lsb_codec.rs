use std::borrow::{Borrow, BorrowMut};
use std::io::Cursor;

use bitstream_io::{BigEndian as BitBigEndian, BitRead, BitReader, BitWrite, BitWriter};
use byteorder::{BigEndian, ByteOrder};

use super::cursor::BitAddressCursor;
use crate::media::HostImage;
use crate::Result;

/// Bitstream codec on top of a [`BitAddressCursor`].
///
/// Every value is stored most significant bit first, multi byte values are
/// big-endian. Characters are always 16-bit code units, so each character of a
/// string costs two bytes of capacity.
///
/// Any operation can fail with [`crate::SteganoError::AddressSpaceExhausted`].
/// Bits written before that failure stay in the image, such an image is
/// incomplete and must be discarded.
///
/// Reading works on a borrowed image as well, which keeps pre-flight checks cheap.
#[derive(Debug, Clone)]
pub struct LsbCodec<I = HostImage> {
    image: I,
    cursor: BitAddressCursor,
}

impl<I: Borrow<HostImage>> LsbCodec<I> {
    /// codec walking the image in the order derived from `password`
    pub fn new(image: I, password: &str) -> Self {
        let (width, height) = image.borrow().dimensions();
        let cursor = BitAddressCursor::for_password(password, width, height);
        Self::with_cursor(image, cursor)
    }

    pub fn with_cursor(image: I, cursor: BitAddressCursor) -> Self {
        Self { image, cursor }
    }

    pub fn read_bit(&mut self) -> Result<bool> {
        let loc = self.cursor.location()?;
        let bit = self.image.borrow().bit(loc.x, loc.y, loc.lane, loc.plane);
        self.cursor.advance()?;

        Ok(bit)
    }

    /// fills `buf` completely, each byte is assembled most significant bit first
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        let bits_to_read = buf.len() << 3;
        let mut bits = BitWriter::endian(Cursor::new(buf), BitBigEndian);
        for _ in 0..bits_to_read {
            let bit = self.read_bit()?;
            bits.write_bit(bit)?;
        }

        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let mut buf = [0; 1];
        self.read_bytes(&mut buf)?;

        Ok(buf[0])
    }

    pub fn read_char(&mut self) -> Result<u16> {
        let mut buf = [0; 2];
        self.read_bytes(&mut buf)?;

        Ok(BigEndian::read_u16(&buf))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let mut buf = [0; 4];
        self.read_bytes(&mut buf)?;

        Ok(BigEndian::read_i32(&buf))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        let mut buf = [0; 8];
        self.read_bytes(&mut buf)?;

        Ok(BigEndian::read_i64(&buf))
    }

    /// reads exactly `len` 16-bit code units
    pub fn read_utf16(&mut self, len: usize) -> Result<Vec<u16>> {
        (0..len).map(|_| self.read_char()).collect()
    }

    /// reads `len` characters, unpaired surrogates become U+FFFD
    pub fn read_string(&mut self, len: usize) -> Result<String> {
        Ok(String::from_utf16_lossy(&self.read_utf16(len)?))
    }

    pub fn cursor(&self) -> &BitAddressCursor {
        &self.cursor
    }

    pub fn image(&self) -> &HostImage {
        self.image.borrow()
    }

    pub fn into_image(self) -> I {
        self.image
    }
}

impl<I: BorrowMut<HostImage>> LsbCodec<I> {
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        let loc = self.cursor.location()?;
        self.image
            .borrow_mut()
            .set_bit(loc.x, loc.y, loc.lane, loc.plane, bit);
        self.cursor.advance()
    }

    /// writes all bytes, each one most significant bit first
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let mut bits = BitReader::endian(Cursor::new(bytes), BitBigEndian);
        for _ in 0..bytes.len() << 3 {
            let bit = bits.read_bit()?;
            self.write_bit(bit)?;
        }

        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_bytes(&[value])
    }

    /// writes one 16-bit character code unit
    pub fn write_char(&mut self, unit: u16) -> Result<()> {
        let mut buf = [0; 2];
        BigEndian::write_u16(&mut buf, unit);
        self.write_bytes(&buf)
    }

    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        let mut buf = [0; 4];
        BigEndian::write_i32(&mut buf, value);
        self.write_bytes(&buf)
    }

    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        let mut buf = [0; 8];
        BigEndian::write_i64(&mut buf, value);
        self.write_bytes(&buf)
    }

    /// writes the UTF-16 code units of `s`, without any length prefix
    pub fn write_string(&mut self, s: &str) -> Result<()> {
        for unit in s.encode_utf16() {
            self.write_char(unit)?;
        }

        Ok(())
    }
}
