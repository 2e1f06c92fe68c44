//! Working keys: single-length DES and double-length Triple-DES.
//!
//! This module provides:
//! - [`Key`]: 8-byte DES key with its bound cipher
//! - [`DoubleLengthKey`]: 16-byte EDE2 key with its bound cipher
//!
//! Both are immutable value objects. The cipher is built once, from the
//! stored bytes, when the value is constructed.

use std::fmt;

use data_encoding::HEXUPPER;
use des::cipher::generic_array::GenericArray;
use des::cipher::KeyInit;
use des::{Des, TdesEde3};
use zeroize::Zeroizing;

use crate::block::{BlockCipher, DES_BLOCK_SIZE};
use crate::ecb::{self, BlockMode, EcbEncryptor};
use crate::ede2::ede2_cipher;
use crate::error::ZmkError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Single-length key size in bytes.
pub const KEY_SIZE: usize = 8;

/// Double-length key size in bytes.
pub const DOUBLE_LENGTH_KEY_SIZE: usize = 16;

/// Length of a key check value rendered as hex.
pub const KCV_HEX_LEN: usize = 16;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Constant-time byte comparison for key material.
///
/// The early return on length mismatch only reveals the key size, which is
/// public.
pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Encrypt one all-zero block.
pub(crate) fn check_value<B: BlockCipher + ?Sized>(cipher: &B) -> [u8; DES_BLOCK_SIZE] {
    let mut kcv = [0u8; DES_BLOCK_SIZE];
    EcbEncryptor::new(cipher).crypt_blocks(&mut kcv, &[0u8; DES_BLOCK_SIZE]);
    kcv
}

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A single-length (8-byte) DES key.
#[derive(Clone)]
pub struct Key {
    bytes: Zeroizing<[u8; KEY_SIZE]>,
    cipher: Des,
}

impl Key {
    /// Create a key from exactly 8 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ZmkError::InvalidKeySize`] for any other length. Input is
    /// never padded or truncated.
    pub fn new(key: &[u8]) -> Result<Self, ZmkError> {
        let bytes: [u8; KEY_SIZE] = key
            .try_into()
            .map_err(|_| ZmkError::InvalidKeySize(key.len()))?;
        Ok(Self::from_bytes(bytes))
    }

    /// Create a key from a fixed-size array.
    #[must_use]
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        let bytes = Zeroizing::new(bytes);
        let cipher = Des::new(GenericArray::from_slice(&bytes[..]));
        Self { bytes, cipher }
    }

    /// Expose the raw key bytes.
    #[must_use]
    pub fn expose(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }

    pub(crate) const fn cipher(&self) -> &Des {
        &self.cipher
    }

    /// ECB-encrypt `plaintext`.
    ///
    /// # Errors
    ///
    /// Returns [`ZmkError::InvalidDataLength`] if `plaintext` is empty or not
    /// a multiple of 8 bytes.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, ZmkError> {
        ecb::encrypt_blocks(&self.cipher, "plaintext", plaintext)
    }

    /// ECB-decrypt `ciphertext`.
    ///
    /// # Errors
    ///
    /// Returns [`ZmkError::InvalidDataLength`] if `ciphertext` is empty or
    /// not a multiple of 8 bytes.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>, ZmkError> {
        ecb::decrypt_blocks(&self.cipher, "ciphertext", ciphertext)
    }

    /// The key check value: one zero block encrypted under this key.
    #[must_use]
    pub fn key_check_value(&self) -> [u8; DES_BLOCK_SIZE] {
        check_value(&self.cipher)
    }

    /// The key check value as uppercase hex.
    #[must_use]
    pub fn key_check_value_hex(&self) -> String {
        HEXUPPER.encode(&self.key_check_value())
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = ZmkError;

    fn try_from(key: &[u8]) -> Result<Self, Self::Error> {
        Self::new(key)
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(self.expose(), other.expose())
    }
}

impl Eq for Key {}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key(***)")
    }
}

// ---------------------------------------------------------------------------
// DoubleLengthKey
// ---------------------------------------------------------------------------

/// A double-length (16-byte) key used as two-key Triple-DES.
#[derive(Clone)]
pub struct DoubleLengthKey {
    bytes: Zeroizing<[u8; DOUBLE_LENGTH_KEY_SIZE]>,
    cipher: TdesEde3,
}

impl DoubleLengthKey {
    /// Create a key from exactly 16 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ZmkError::InvalidKeySize`] for any other length.
    pub fn new(key: &[u8]) -> Result<Self, ZmkError> {
        let bytes: [u8; DOUBLE_LENGTH_KEY_SIZE] = key
            .try_into()
            .map_err(|_| ZmkError::InvalidKeySize(key.len()))?;
        Ok(Self::from_bytes(bytes))
    }

    /// Create a key from a fixed-size array.
    #[must_use]
    pub fn from_bytes(bytes: [u8; DOUBLE_LENGTH_KEY_SIZE]) -> Self {
        let bytes = Zeroizing::new(bytes);
        let cipher = ede2_cipher(&bytes);
        Self { bytes, cipher }
    }

    /// Expose the raw key bytes (`K1 || K2`).
    #[must_use]
    pub fn expose(&self) -> &[u8; DOUBLE_LENGTH_KEY_SIZE] {
        &self.bytes
    }

    pub(crate) const fn cipher(&self) -> &TdesEde3 {
        &self.cipher
    }

    /// ECB-encrypt `plaintext` under EDE2.
    ///
    /// # Errors
    ///
    /// Returns [`ZmkError::InvalidDataLength`] if `plaintext` is empty or not
    /// a multiple of 8 bytes.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, ZmkError> {
        ecb::encrypt_blocks(&self.cipher, "plaintext", plaintext)
    }

    /// ECB-decrypt `ciphertext` under EDE2.
    ///
    /// # Errors
    ///
    /// Returns [`ZmkError::InvalidDataLength`] if `ciphertext` is empty or
    /// not a multiple of 8 bytes.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>, ZmkError> {
        ecb::decrypt_blocks(&self.cipher, "ciphertext", ciphertext)
    }

    /// The key check value: one zero block encrypted under this key.
    #[must_use]
    pub fn key_check_value(&self) -> [u8; DES_BLOCK_SIZE] {
        check_value(&self.cipher)
    }

    /// The key check value as uppercase hex.
    #[must_use]
    pub fn key_check_value_hex(&self) -> String {
        HEXUPPER.encode(&self.key_check_value())
    }
}

impl TryFrom<&[u8]> for DoubleLengthKey {
    type Error = ZmkError;

    fn try_from(key: &[u8]) -> Result<Self, Self::Error> {
        Self::new(key)
    }
}

impl PartialEq for DoubleLengthKey {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(self.expose(), other.expose())
    }
}

impl Eq for DoubleLengthKey {}

impl fmt::Debug for DoubleLengthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DoubleLengthKey(***)")
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
