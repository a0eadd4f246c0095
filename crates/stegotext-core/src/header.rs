use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::StegoError;
use crate::result::Result;
use stegotext_crypt::{NONCE_LEN, SALT_LEN};

/// Magic tag marking the start of an embedded payload.
pub const MAGIC: &[u8; 6] = b"STEGO1";
/// The single payload format version this crate reads and writes.
pub const VERSION: u8 = 1;

// Fixed byte layout, all offsets relative to the start of the payload:
//
// | offset | size | field                  |
// |--------|------|------------------------|
// | 0      | 6    | magic `"STEGO1"`       |
// | 6      | 1    | version                |
// | 7      | 16   | salt                   |
// | 23     | 12   | nonce                  |
// | 35     | 1    | uses_fallback_password |
// | 36     | 4    | ciphertext_len (u32)   |
const VERSION_OFFSET: usize = MAGIC.len();
const SALT_OFFSET: usize = VERSION_OFFSET + 1;
const NONCE_OFFSET: usize = SALT_OFFSET + SALT_LEN;
const FLAG_OFFSET: usize = NONCE_OFFSET + NONCE_LEN;
const LEN_OFFSET: usize = FLAG_OFFSET + 1;

/// Total encoded header size in bytes, independent of the payload.
pub const HEADER_LEN: usize = LEN_OFFSET + 4;

/// The self-describing header preceding every embedded ciphertext.
///
/// A header is built fresh for every embed call and parsed fresh for every
/// extract call, it is never mutated after construction. All integers are
/// big-endian on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StegoHeader {
    /// Random per-embed salt for key derivation.
    pub salt: [u8; SALT_LEN],
    /// Random per-embed AEAD nonce.
    pub nonce: [u8; NONCE_LEN],
    /// `true` when the embedder encrypted with the configured fallback
    /// secret instead of a caller supplied password.
    pub uses_fallback_password: bool,
    /// Length of the trailing ciphertext including the authentication tag.
    pub ciphertext_len: u32,
}

impl StegoHeader {
    /// Serializes the header into its fixed 40 byte wire form,
    /// magic and version first.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_LEN);
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&self.salt);
        buf.extend_from_slice(&self.nonce);
        buf.push(u8::from(self.uses_fallback_password));
        buf.extend_from_slice(&self.ciphertext_len.to_be_bytes());

        debug_assert_eq!(buf.len(), HEADER_LEN);
        buf
    }

    /// Parses a header from the first [`HEADER_LEN`] bytes of `buf`.
    ///
    /// There is no partial or streaming decode, the full fixed-size header
    /// must be available. Fails with [`StegoError::InvalidFormat`] on a magic
    /// mismatch and [`StegoError::UnsupportedVersion`] on a foreign version.
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() < HEADER_LEN || &buf[..MAGIC.len()] != MAGIC {
            return Err(StegoError::InvalidFormat);
        }

        let version = buf[VERSION_OFFSET];
        if version != VERSION {
            return Err(StegoError::UnsupportedVersion(version));
        }

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(&buf[SALT_OFFSET..SALT_OFFSET + SALT_LEN]);

        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&buf[NONCE_OFFSET..NONCE_OFFSET + NONCE_LEN]);

        let uses_fallback_password = buf[FLAG_OFFSET] == 1;
        let ciphertext_len = Cursor::new(&buf[LEN_OFFSET..HEADER_LEN]).read_u32::<BigEndian>()?;

        Ok(Self {
            salt,
            nonce,
            uses_fallback_password,
            ciphertext_len,
        })
    }
}
