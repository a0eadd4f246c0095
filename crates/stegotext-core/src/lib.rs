//! # Stegotext Core API
//!
//! Hides a password-encrypted text message inside the least significant bits
//! of an image's color channels, and recovers it later. The central type is
//! [`StegoCodec`][codec] with its two operations
//! - [`StegoCodec::embed`] for hiding a message inside an image
//! - [`StegoCodec::extract`] for recovering a message from an image
//!
//! Both operate on in-memory image bytes; embedding always produces a
//! lossless PNG, no matter the carrier input format.
//!
//! # Usage Example
//!
//! ```rust
//! use image::{ImageBuffer, Rgba};
//! use stegotext_core::StegoCodec;
//!
//! // any PNG works as a carrier, here one is rendered on the fly
//! let mut carrier = Vec::new();
//! ImageBuffer::from_pixel(64, 64, Rgba([120u8, 40, 80, 255]))
//!     .write_to(&mut std::io::Cursor::new(&mut carrier), image::ImageFormat::Png)
//!     .expect("Failed to render carrier image");
//!
//! let codec = StegoCodec::new();
//! let stego = codec
//!     .embed(&carrier, "Hello, World!", Some("SuperSecret42"))
//!     .expect("Failed to hide message in image");
//! let message = codec
//!     .extract(&stego, Some("SuperSecret42"))
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(message.as_deref(), Some("Hello, World!"));
//! ```
//!
//! A fluent builder over the same operations lives under [`api`]:
//!
//! ```rust
//! # use image::{ImageBuffer, Rgba};
//! # let mut carrier = Vec::new();
//! # ImageBuffer::from_pixel(64, 64, Rgba([9u8, 9, 9, 255]))
//! #     .write_to(&mut std::io::Cursor::new(&mut carrier), image::ImageFormat::Png)
//! #     .unwrap();
//! let stego = stegotext_core::api::embed::prepare()
//!     .with_image_data(carrier)
//!     .with_message("Hello, World!")
//!     .with_password("SuperSecret42")
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```
//!
//! [codec]: ./codec/struct.StegoCodec.html

pub mod api;
pub mod capacity;
pub mod carrier;
pub mod codec;
pub mod error;
pub mod header;
pub mod lsb_codec;
pub mod result;

pub use crate::carrier::CoverImage;
pub use crate::codec::StegoCodec;
pub use crate::error::StegoError;
pub use crate::header::StegoHeader;
pub use crate::result::Result;

#[cfg(test)]
mod test_utils {
    use image::{ImageBuffer, RgbaImage};

    /// Raster with deterministic, distinct channel values, growing in
    /// row-major order so positional mix-ups show up in assertions.
    pub fn prepare_growing_colors_image(width: u32, height: u32) -> RgbaImage {
        ImageBuffer::from_fn(width, height, |x, y| {
            let i = ((y * width + x) * 3) as u8;
            image::Rgba([i, i.wrapping_add(1), i.wrapping_add(2), 255])
        })
    }
}
