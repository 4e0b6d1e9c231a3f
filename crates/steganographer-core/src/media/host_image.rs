use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::io::Reader as ImageReader;
use image::{Rgba, RgbaImage};
use log::error;

use crate::error::SteganoError;
use crate::result::Result;

use super::Persist;

/// number of color lanes that carry data, alpha is never touched
pub const CHANNELS: usize = 3;

/// number of bit-planes per color lane
pub const BIT_PLANES: usize = 8;

/// The carrier image, seen as a grid of packed `0xRRGGBB` integers.
///
/// Lanes are numbered from the least significant byte of the packed value:
/// lane 0 is blue, lane 1 is green, lane 2 is red.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostImage {
    pixels: RgbaImage,
}

impl HostImage {
    pub fn from_image(img: RgbaImage) -> Self {
        Self { pixels: img }
    }

    /// Loads a PNG or JPEG carrier, other extensions are rejected.
    ///
    /// The decoder is picked from the file content, so a PNG saved under a
    /// `.jpg` name still loads.
    pub fn from_file(f: &Path) -> Result<Self> {
        let Some(ext) = f.extension().and_then(|e| e.to_str()) else {
            return Err(SteganoError::UnsupportedMedia);
        };
        match ext.to_lowercase().as_str() {
            "png" | "jpg" | "jpeg" => {
                let img = ImageReader::open(f)
                    .and_then(|reader| reader.with_guessed_format())
                    .map_err(|_e| SteganoError::InvalidImageMedia)?
                    .decode()
                    .map_err(|_e| SteganoError::InvalidImageMedia)?;

                Ok(Self::from_image(img.to_rgba8()))
            }
            _ => Err(SteganoError::UnsupportedMedia),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.width() as usize * self.pixels.height() as usize
    }

    /// the pixel at (x, y) packed as `0xRRGGBB`
    pub fn rgb(&self, x: u32, y: u32) -> u32 {
        let Rgba([r, g, b, _]) = *self.pixels.get_pixel(x, y);
        (r as u32) << 16 | (g as u32) << 8 | b as u32
    }

    /// replaces the color of the pixel at (x, y), alpha stays as it is
    pub fn set_rgb(&mut self, x: u32, y: u32, rgb: u32) {
        let p = self.pixels.get_pixel_mut(x, y);
        p.0[0] = (rgb >> 16) as u8;
        p.0[1] = (rgb >> 8) as u8;
        p.0[2] = rgb as u8;
    }

    /// reads bit `plane` of color `lane`, equal to bit `plane + lane * 8` of the packed value
    #[inline]
    pub fn bit(&self, x: u32, y: u32, lane: u8, plane: u8) -> bool {
        let color = self.pixels.get_pixel(x, y).0[Self::channel_index(lane)];
        (color >> plane) & 1 == 1
    }

    #[inline]
    pub fn set_bit(&mut self, x: u32, y: u32, lane: u8, plane: u8, bit: bool) {
        let color = &mut self.pixels.get_pixel_mut(x, y).0[Self::channel_index(lane)];
        if bit {
            *color |= 1 << plane;
        } else {
            *color &= !(1 << plane);
        }
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    #[inline]
    fn channel_index(lane: u8) -> usize {
        debug_assert!((lane as usize) < CHANNELS);
        CHANNELS - 1 - lane as usize
    }

    /// writes the image as PNG, any lossy format would destroy the hidden bits
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.pixels
            .write_to(&mut writer, image::ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                SteganoError::ImageEncodingError
            })
    }
}

impl From<RgbaImage> for HostImage {
    fn from(img: RgbaImage) -> Self {
        Self::from_image(img)
    }
}

impl Persist for HostImage {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.save_to_writer(&mut writer)?;
        writer
            .flush()
            .map_err(|source| SteganoError::WriteError { source })
    }
}
