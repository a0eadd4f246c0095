use image::RgbaImage;

/// Color channels carrying hidden bits per pixel: red, green, blue.
/// The alpha channel is never touched.
pub const CHANNELS_PER_PIXEL: usize = 3;

/// A position in the flat, MSB-first bit stream shared by [`pack`] and
/// [`unpack`].
///
/// The cursor maps one bit index both ways: onto the payload byte it lives in
/// (`index / 8`, bit `7 - index % 8`) and onto the raster channel that
/// carries it (pixel `index / 3` in row-major order, channel `index % 3`).
/// Keeping the arithmetic in one place keeps packer and unpacker bit-exact
/// inverses of each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitCursor {
    index: usize,
}

impl BitCursor {
    /// Moves the cursor one bit forward.
    pub fn advance(&mut self) {
        self.index += 1;
    }

    /// Flattened raster position of the pixel carrying the current bit.
    pub fn pixel(&self) -> usize {
        self.index / CHANNELS_PER_PIXEL
    }

    /// Color channel index (0 = red, 1 = green, 2 = blue) carrying the
    /// current bit.
    pub fn channel(&self) -> usize {
        self.index % CHANNELS_PER_PIXEL
    }

    /// Reads the current bit out of `payload`, MSB of each byte first.
    pub fn peek(&self, payload: &[u8]) -> u8 {
        (payload[self.index / 8] >> (7 - self.index % 8)) & 1
    }

    /// Writes `bit` into `out` at the current position, MSB of each byte
    /// first. Only ever sets bits, `out` must start zeroed.
    pub fn write(&self, out: &mut [u8], bit: u8) {
        out[self.index / 8] |= bit << (7 - self.index % 8);
    }
}

/// Embeds `payload` into the LSBs of the raster's color channels.
///
/// Bits beyond the raster's capacity are dropped, callers are expected to
/// run the capacity check first.
pub fn pack(raster: &mut RgbaImage, payload: &[u8]) {
    let width = raster.width() as usize;
    let capacity = crate::capacity::capacity_bits(raster);

    let mut cursor = BitCursor::default();
    for _ in 0..(payload.len() * 8).min(capacity) {
        let bit = cursor.peek(payload);
        let (x, y) = (cursor.pixel() % width, cursor.pixel() / width);

        let channel = &mut raster.get_pixel_mut(x as u32, y as u32).0[cursor.channel()];
        *channel = (*channel & (u8::MAX - 1)) | bit;

        cursor.advance();
    }
}

/// Reads `num_bits` channel LSBs back out of the raster and reassembles
/// them into bytes, MSB first.
///
/// When `num_bits` is not a multiple of 8 the final partial byte is right
/// shifted so the never-written low padding bits are dropped, not
/// interpreted. Reads beyond the raster's capacity yield zero bits, the
/// caller decides whether that is an error.
pub fn unpack(raster: &RgbaImage, num_bits: usize) -> Vec<u8> {
    let width = raster.width() as usize;
    let capacity = crate::capacity::capacity_bits(raster);
    let mut out = vec![0u8; (num_bits + 7) / 8];

    let mut cursor = BitCursor::default();
    for _ in 0..num_bits.min(capacity) {
        let (x, y) = (cursor.pixel() % width, cursor.pixel() / width);
        let bit = raster.get_pixel(x as u32, y as u32).0[cursor.channel()] & 1;

        cursor.write(&mut out, bit);
        cursor.advance();
    }

    let padding = (8 - num_bits % 8) % 8;
    if padding > 0 {
        let last = out.len() - 1;
        out[last] >>= padding;
    }

    out
}
