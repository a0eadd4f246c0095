pub use aes_gcm::Error as AeadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptError {
    /// The cipher refused to encrypt, this never happens under valid inputs.
    #[error("Encryption error")]
    EncryptionError(AeadError),

    /// The authentication tag did not verify: wrong key, corrupted
    /// ciphertext or tampering.
    #[error("Authentication failed during decryption")]
    AuthenticationFailure(AeadError),
}
