use std::string::FromUtf8Error;
use thiserror::Error;

pub use stegotext_crypt::CryptError;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents an invalid carrier image. For example, a broken PNG file
    #[error("Image data is not a decodable raster")]
    InvalidImage,

    /// Represents a payload that does not fit the carrier's bit budget,
    /// both counts are in bytes
    #[error("Carrier too small: the payload needs {required} bytes, the image holds {available} bytes")]
    InsufficientCapacity { required: usize, available: usize },

    /// Represents a missing or corrupted magic tag, the input was never a
    /// stego image or its header region got damaged
    #[error("Invalid stego image (bad magic)")]
    InvalidFormat,

    /// Represents an unsupported payload format version, a forward
    /// compatibility guard
    #[error("Unsupported stego format version: {0}")]
    UnsupportedVersion(u8),

    /// Represents a password that is required but was not supplied
    #[error("A password is required and none was supplied")]
    MissingPassword,

    /// Represents a failed authentication tag check: wrong password or a
    /// tampered/corrupted payload. No partial plaintext is ever returned
    #[error("Authentication failed: wrong password or corrupted payload")]
    AuthenticationFailure,

    /// Represents invalid UTF-8 found inside a decrypted message
    #[error("Invalid text data found inside a message")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents a failure when re-encoding the stego raster as PNG
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents an error while encrypting the message
    #[error("Encryption error")]
    EncryptionError(CryptError),

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("API Error: No carrier image set")]
    CarrierNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}

impl From<CryptError> for StegoError {
    fn from(e: CryptError) -> Self {
        match e {
            CryptError::AuthenticationFailure(_) => StegoError::AuthenticationFailure,
            e @ CryptError::EncryptionError(_) => StegoError::EncryptionError(e),
        }
    }
}
