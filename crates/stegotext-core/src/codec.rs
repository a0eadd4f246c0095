use log::debug;

use crate::capacity;
use crate::carrier::CoverImage;
use crate::error::StegoError;
use crate::header::{StegoHeader, HEADER_LEN};
use crate::lsb_codec;
use crate::result::Result;
use stegotext_crypt::{decrypt, encrypt, random_nonce, random_salt, DerivedKey};

/// Embeds encrypted text messages into images and extracts them again.
///
/// The codec is stateless apart from an optional fallback secret, every call
/// allocates its own salt, nonce and key, so one instance is safe to use
/// from many threads at once.
#[derive(Default)]
pub struct StegoCodec {
    fallback_password: Option<String>,
}

impl StegoCodec {
    /// A codec without a fallback secret, every embed and every extract of a
    /// fallback-flagged payload then requires an explicit password.
    pub fn new() -> Self {
        Self::default()
    }

    /// A codec carrying the process-configured fallback secret that is used
    /// whenever the caller supplies no password.
    pub fn with_fallback_password<S: Into<String>>(secret: S) -> Self {
        Self {
            fallback_password: Some(secret.into()),
        }
    }

    /// Hides `message` inside `image`, returning the stego image as PNG.
    ///
    /// When `password` is `None` the configured fallback secret encrypts the
    /// message and the header records that choice, so extraction can
    /// replicate it without being told.
    pub fn embed(&self, image: &[u8], message: &str, password: Option<&str>) -> Result<Vec<u8>> {
        let mut cover = CoverImage::from_bytes(image)?;

        let (secret, uses_fallback_password) = match password {
            Some(p) => (p, false),
            None => (
                self.fallback_password
                    .as_deref()
                    .ok_or(StegoError::MissingPassword)?,
                true,
            ),
        };

        let salt = random_salt();
        let nonce = random_nonce();
        let key = DerivedKey::derive(secret, &salt);
        let ciphertext = encrypt(&key, &nonce, message.as_bytes())?;

        let header = StegoHeader {
            salt,
            nonce,
            uses_fallback_password,
            ciphertext_len: ciphertext_len_u32(&ciphertext, cover.raster())?,
        };

        let mut payload = header.encode();
        payload.extend_from_slice(&ciphertext);

        capacity::ensure_fits(payload.len(), cover.raster())?;
        lsb_codec::pack(cover.raster_mut(), &payload);

        cover.to_png_bytes()
    }

    /// Recovers the message hidden in `image`.
    ///
    /// Returns `Ok(None)` when the input is not a decodable image at all.
    /// That soft failure is asymmetric with [`StegoCodec::embed`], which
    /// errors for the same condition; the asymmetry is part of the public
    /// contract and is kept on purpose.
    pub fn extract(&self, image: &[u8], password: Option<&str>) -> Result<Option<String>> {
        let cover = match CoverImage::from_bytes(image) {
            Ok(cover) => cover,
            Err(e) => {
                debug!("stego input did not decode as an image: {e}");
                return Ok(None);
            }
        };

        let header = StegoHeader::decode(&lsb_codec::unpack(cover.raster(), HEADER_LEN * 8))?;

        let secret = if header.uses_fallback_password {
            self.fallback_password
                .as_deref()
                .ok_or(StegoError::MissingPassword)?
        } else {
            password.ok_or(StegoError::MissingPassword)?
        };

        // a length beyond the raster's bit budget can only come from a
        // damaged or forged header
        let total_len = HEADER_LEN + header.ciphertext_len as usize;
        if total_len * 8 > capacity::capacity_bits(cover.raster()) {
            return Err(StegoError::InvalidFormat);
        }

        let payload = lsb_codec::unpack(cover.raster(), total_len * 8);
        let ciphertext = &payload[HEADER_LEN..];

        let key = DerivedKey::derive(secret, &header.salt);
        let plaintext = decrypt(&key, &header.nonce, ciphertext)?;

        Ok(Some(String::from_utf8(plaintext)?))
    }
}

/// The header commits to the ciphertext length as a `u32`; anything larger
/// could never fit a real carrier anyway, so it surfaces as a capacity error.
fn ciphertext_len_u32(ciphertext: &[u8], raster: &image::RgbaImage) -> Result<u32> {
    u32::try_from(ciphertext.len()).map_err(|_| StegoError::InsufficientCapacity {
        required: HEADER_LEN + ciphertext.len(),
        available: capacity::capacity_bits(raster) / 8,
    })
}
