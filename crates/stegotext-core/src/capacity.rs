use image::RgbaImage;

use crate::error::StegoError;
use crate::lsb_codec::CHANNELS_PER_PIXEL;
use crate::result::Result;

/// Number of payload bits the raster can carry, one per RGB channel.
pub fn capacity_bits(raster: &RgbaImage) -> usize {
    raster.width() as usize * raster.height() as usize * CHANNELS_PER_PIXEL
}

/// Validates that a payload of `payload_len` bytes fits the raster.
///
/// On failure the error reports the required byte count (rounded up) and the
/// available byte count (rounded down), so a caller can pick a larger cover
/// image.
pub fn ensure_fits(payload_len: usize, raster: &RgbaImage) -> Result<()> {
    let capacity = capacity_bits(raster);
    let required_bits = payload_len * 8;

    if required_bits > capacity {
        return Err(StegoError::InsufficientCapacity {
            required: payload_len,
            available: capacity / 8,
        });
    }

    Ok(())
}
