//! Password based key derivation and authenticated encryption,
//! it uses PBKDF2-HMAC-SHA256 for key derivation and AES-256-GCM for encryption.

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use zeroize::Zeroize;

pub mod error;

pub use crate::error::CryptError;

/// Length of the random salt mixed into key derivation.
pub const SALT_LEN: usize = 16;
/// Length of the AES-GCM nonce.
pub const NONCE_LEN: usize = 12;
/// Length of the derived symmetric key (256 bit).
pub const KEY_LEN: usize = 32;
/// Length of the GCM authentication tag appended to every ciphertext.
pub const TAG_LEN: usize = 16;
/// PBKDF2 round count, intentionally slow to make brute forcing a password costly.
pub const PBKDF2_ROUNDS: u32 = 100_000;

pub type Result<T> = std::result::Result<T, CryptError>;

/// A 256-bit symmetric key derived from a password.
///
/// The key material is owned by the single encrypt or decrypt call that
/// requested it and is zeroed out on drop. It is never cached, a fresh salt
/// per embed forces a fresh derivation.
pub struct DerivedKey([u8; KEY_LEN]);

impl DerivedKey {
    /// Derive a key with PBKDF2-HMAC-SHA256 at [`PBKDF2_ROUNDS`] rounds.
    ///
    /// Deterministic: the same password and salt always yield the same key.
    pub fn derive(password: &str, salt: &[u8; SALT_LEN]) -> Self {
        let mut key = [0u8; KEY_LEN];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ROUNDS, &mut key);

        Self(key)
    }
}

impl From<[u8; KEY_LEN]> for DerivedKey {
    fn from(key: [u8; KEY_LEN]) -> Self {
        Self(key)
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Encrypt `plaintext`, returning ciphertext with the 128-bit tag appended.
///
/// There is no failure mode under valid inputs, the error path only exists to
/// propagate an unrecoverable cipher fault.
pub fn encrypt(key: &DerivedKey, nonce: &[u8; NONCE_LEN], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(&key.0.into());

    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(CryptError::EncryptionError)
}

/// Decrypt `ciphertext` (which must carry the trailing tag) and verify it.
///
/// Fails with [`CryptError::AuthenticationFailure`] when the tag does not
/// verify, never with silently wrong plaintext.
pub fn decrypt(key: &DerivedKey, nonce: &[u8; NONCE_LEN], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(&key.0.into());

    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(CryptError::AuthenticationFailure)
}

/// Generate a random salt from the operating system RNG.
pub fn random_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}

/// Generate a random nonce from the operating system RNG.
pub fn random_nonce() -> [u8; NONCE_LEN] {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);
    nonce
}
