use std::io::Cursor;

use image::RgbaImage;
use log::error;

use crate::error::StegoError;
use crate::result::Result;

/// A carrier image for steganography, based on `RgbaImage` by the `image` crate.
///
/// The raster is owned for the duration of one embed or extract call, it is
/// never shared across calls. Embedding mutates channel LSBs in place,
/// extraction only reads.
#[derive(Debug, Clone)]
pub struct CoverImage(RgbaImage);

impl CoverImage {
    /// Decode a carrier from in-memory image bytes, the format is guessed
    /// from the content. Any undecodable input is an [`StegoError::InvalidImage`].
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        image::load_from_memory(data)
            .map(|i| Self(i.to_rgba8()))
            .map_err(|_e| StegoError::InvalidImage)
    }

    /// Wrap an already decoded raster.
    pub fn from_raster(raster: RgbaImage) -> Self {
        Self(raster)
    }

    /// Re-encode the raster losslessly as PNG.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.0
            .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
            .map_err(|e| {
                error!("Error encoding stego image as PNG: {e}");
                StegoError::ImageEncodingError
            })?;

        Ok(out)
    }

    /// Read-only view of the pixel grid, used during extraction.
    pub fn raster(&self) -> &RgbaImage {
        &self.0
    }

    /// Mutable view of the pixel grid for in-place LSB embedding.
    pub fn raster_mut(&mut self) -> &mut RgbaImage {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_growing_colors_image;

    #[test]
    fn png_bytes_round_trip_losslessly() {
        let cover = CoverImage::from_raster(prepare_growing_colors_image(5, 4));

        let png = cover.to_png_bytes().unwrap();
        let reloaded = CoverImage::from_bytes(&png).unwrap();

        assert_eq!(reloaded.raster(), cover.raster());
    }

    #[test]
    fn garbage_bytes_are_an_invalid_image() {
        let result = CoverImage::from_bytes(b"definitely not an image");

        assert!(matches!(result, Err(StegoError::InvalidImage)));
    }
}
