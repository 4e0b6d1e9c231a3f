use super::permutation::Permutation;
use crate::media::{BIT_PLANES, CHANNELS};
use crate::{Result, SteganoError};

/// concrete position of one addressable bit inside the carrier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitLocation {
    pub x: u32,
    pub y: u32,
    /// color lane that is really touched, 0 = blue, 1 = green, 2 = red
    pub lane: u8,
    pub plane: u8,
}

impl BitLocation {
    /// bit offset inside the packed `0xRRGGBB` value
    pub fn physical_bit(&self) -> u32 {
        self.plane as u32 + self.lane as u32 * 8
    }
}

/// Walks the logical address space of a carrier.
///
/// Order is pixel-major (following the permutation), then logical channel,
/// then bit-plane. Once the last bit of plane 7 on channel 2 is consumed the
/// cursor is exhausted and every further access fails.
#[derive(Debug, Clone)]
pub struct BitAddressCursor {
    permutation: Permutation,
    width: u32,
    position: usize,
    channel: u8,
    bit_plane: u8,
    exhausted: bool,
}

impl BitAddressCursor {
    pub fn new(permutation: Permutation, width: u32) -> Self {
        let exhausted = permutation.is_empty() || width == 0;
        Self {
            permutation,
            width,
            position: 0,
            channel: 0,
            bit_plane: 0,
            exhausted,
        }
    }

    pub fn for_password(password: &str, width: u32, height: u32) -> Self {
        let pixels = width as usize * height as usize;
        Self::new(Permutation::from_password(password, pixels), width)
    }

    /// coordinate of the pixel at the current sequence position
    pub fn current_pixel(&self) -> Result<(u32, u32)> {
        if self.exhausted {
            return Err(SteganoError::AddressSpaceExhausted);
        }
        let index = self.permutation.pixel_index(self.position);
        let width = self.width as usize;

        Ok(((index % width) as u32, (index / width) as u32))
    }

    /// The lane actually touched is not the logical channel but
    /// `(x + y + channel) mod 3`, so neighbouring pixels spread one logical
    /// channel over all three color bytes.
    pub fn location(&self) -> Result<BitLocation> {
        let (x, y) = self.current_pixel()?;
        let lane = ((x as u64 + y as u64 + self.channel as u64) % CHANNELS as u64) as u8;

        Ok(BitLocation {
            x,
            y,
            lane,
            plane: self.bit_plane,
        })
    }

    /// moves to the next logical bit, stepping into the exhausted state after the last one
    pub fn advance(&mut self) -> Result<()> {
        if self.exhausted {
            return Err(SteganoError::AddressSpaceExhausted);
        }
        self.position += 1;
        if self.position >= self.permutation.len() {
            self.position = 0;
            self.channel += 1;
            if self.channel as usize >= CHANNELS {
                self.channel = 0;
                self.bit_plane += 1;
                if self.bit_plane as usize >= BIT_PLANES {
                    self.exhausted = true;
                }
            }
        }

        Ok(())
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn channel(&self) -> u8 {
        self.channel
    }

    pub fn bit_plane(&self) -> u8 {
        self.bit_plane
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// total number of addressable bits
    pub fn address_space(&self) -> u64 {
        self.permutation.len() as u64 * (CHANNELS * BIT_PLANES) as u64
    }

    /// number of bits consumed so far
    pub fn consumed(&self) -> u64 {
        if self.exhausted {
            return self.address_space();
        }
        let pixels = self.permutation.len() as u64;
        (self.bit_plane as u64 * CHANNELS as u64 + self.channel as u64) * pixels
            + self.position as u64
    }
}
