//! Zone Master Keys.
//!
//! A ZMK is a key-encrypting key: it wraps and unwraps working keys
//! exchanged between two zones. The ZMK types carry the same surface as
//! the working key types in [`crate::key`], plus [`SingleLengthZmk::encrypt_key`]
//! and [`SingleLengthZmk::decrypt_key`] (and the double-length equivalents),
//! which treat another key's bytes as the data to transform.
//!
//! # Double-length wrapping
//!
//! A double-length ZMK runs Triple-DES with `K1 || K2 || K1` over the
//! supplied key in ECB mode. A 16-byte working key is therefore wrapped as
//! two independently encrypted halves: equal halves in, equal halves out.

use std::fmt;

use zeroize::Zeroizing;

use crate::ecb;
use crate::error::ZmkError;
use crate::key::{DoubleLengthKey, Key, DOUBLE_LENGTH_KEY_SIZE, KEY_SIZE};

/// Single-length ZMK size in bytes.
pub const SINGLE_LENGTH_ZMK_SIZE: usize = KEY_SIZE;

/// Double-length ZMK size in bytes.
pub const DOUBLE_LENGTH_ZMK_SIZE: usize = DOUBLE_LENGTH_KEY_SIZE;

// ---------------------------------------------------------------------------
// SingleLengthZmk
// ---------------------------------------------------------------------------

/// A single-length (8-byte) DES Zone Master Key.
///
/// `Default` yields the all-zero key, the zero value of the type.
#[derive(Clone, PartialEq, Eq)]
pub struct SingleLengthZmk {
    key: Key,
}

impl SingleLengthZmk {
    /// Create a ZMK from exactly 8 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ZmkError::InvalidKeySize`] for any other length.
    pub fn new(zmk: &[u8]) -> Result<Self, ZmkError> {
        Ok(Self { key: Key::new(zmk)? })
    }

    /// Create a ZMK from a fixed-size array.
    #[must_use]
    pub fn from_bytes(bytes: [u8; SINGLE_LENGTH_ZMK_SIZE]) -> Self {
        Self {
            key: Key::from_bytes(bytes),
        }
    }

    /// Expose the raw ZMK bytes.
    #[must_use]
    pub fn expose(&self) -> &[u8; SINGLE_LENGTH_ZMK_SIZE] {
        self.key.expose()
    }

    /// Wrap a clear working key under this ZMK.
    ///
    /// # Errors
    ///
    /// Returns [`ZmkError::InvalidDataLength`] if `clear_key` is empty or not
    /// a multiple of 8 bytes.
    pub fn encrypt_key(&self, clear_key: &[u8]) -> Result<Vec<u8>, ZmkError> {
        ecb::encrypt_blocks(self.key.cipher(), "clear key", clear_key)
    }

    /// Unwrap a working key encrypted under this ZMK.
    ///
    /// # Errors
    ///
    /// Returns [`ZmkError::InvalidDataLength`] if `cipher_key` is empty or
    /// not a multiple of 8 bytes.
    pub fn decrypt_key(&self, cipher_key: &[u8]) -> Result<Zeroizing<Vec<u8>>, ZmkError> {
        ecb::decrypt_blocks(self.key.cipher(), "encrypted key", cipher_key)
    }

    /// ECB-encrypt arbitrary block-aligned data.
    ///
    /// # Errors
    ///
    /// See [`Key::encrypt`].
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, ZmkError> {
        self.key.encrypt(plaintext)
    }

    /// ECB-decrypt arbitrary block-aligned data.
    ///
    /// # Errors
    ///
    /// See [`Key::decrypt`].
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>, ZmkError> {
        self.key.decrypt(ciphertext)
    }

    /// The key check value as uppercase hex.
    #[must_use]
    pub fn key_check_value(&self) -> String {
        self.key.key_check_value_hex()
    }
}

impl Default for SingleLengthZmk {
    fn default() -> Self {
        Self::from_bytes([0u8; SINGLE_LENGTH_ZMK_SIZE])
    }
}

impl TryFrom<&[u8]> for SingleLengthZmk {
    type Error = ZmkError;

    fn try_from(zmk: &[u8]) -> Result<Self, Self::Error> {
        Self::new(zmk)
    }
}

impl fmt::Debug for SingleLengthZmk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SingleLengthZmk(kcv={})", self.key_check_value())
    }
}

// ---------------------------------------------------------------------------
// DoubleLengthZmk
// ---------------------------------------------------------------------------

/// A double-length (16-byte) Triple-DES Zone Master Key, `K1 || K2`.
///
/// `Default` yields the all-zero key, the zero value of the type.
#[derive(Clone, PartialEq, Eq)]
pub struct DoubleLengthZmk {
    key: DoubleLengthKey,
}

impl DoubleLengthZmk {
    /// Create a ZMK from exactly 16 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ZmkError::InvalidKeySize`] for any other length.
    pub fn new(zmk: &[u8]) -> Result<Self, ZmkError> {
        Ok(Self {
            key: DoubleLengthKey::new(zmk)?,
        })
    }

    /// Create a ZMK from a fixed-size array.
    #[must_use]
    pub fn from_bytes(bytes: [u8; DOUBLE_LENGTH_ZMK_SIZE]) -> Self {
        Self {
            key: DoubleLengthKey::from_bytes(bytes),
        }
    }

    /// Expose the raw ZMK bytes.
    #[must_use]
    pub fn expose(&self) -> &[u8; DOUBLE_LENGTH_ZMK_SIZE] {
        self.key.expose()
    }

    /// Wrap a clear working key (typically 8 or 16 bytes) under this ZMK.
    ///
    /// # Errors
    ///
    /// Returns [`ZmkError::InvalidDataLength`] if `clear_key` is empty or not
    /// a multiple of 8 bytes.
    pub fn encrypt_key(&self, clear_key: &[u8]) -> Result<Vec<u8>, ZmkError> {
        ecb::encrypt_blocks(self.key.cipher(), "clear key", clear_key)
    }

    /// Unwrap a working key encrypted under this ZMK.
    ///
    /// # Errors
    ///
    /// Returns [`ZmkError::InvalidDataLength`] if `cipher_key` is empty or
    /// not a multiple of 8 bytes.
    pub fn decrypt_key(&self, cipher_key: &[u8]) -> Result<Zeroizing<Vec<u8>>, ZmkError> {
        ecb::decrypt_blocks(self.key.cipher(), "encrypted key", cipher_key)
    }

    /// ECB-encrypt arbitrary block-aligned data.
    ///
    /// # Errors
    ///
    /// See [`DoubleLengthKey::encrypt`].
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, ZmkError> {
        self.key.encrypt(plaintext)
    }

    /// ECB-decrypt arbitrary block-aligned data.
    ///
    /// # Errors
    ///
    /// See [`DoubleLengthKey::decrypt`].
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>, ZmkError> {
        self.key.decrypt(ciphertext)
    }

    /// The key check value as uppercase hex.
    #[must_use]
    pub fn key_check_value(&self) -> String {
        self.key.key_check_value_hex()
    }
}

impl Default for DoubleLengthZmk {
    fn default() -> Self {
        Self::from_bytes([0u8; DOUBLE_LENGTH_ZMK_SIZE])
    }
}

impl TryFrom<&[u8]> for DoubleLengthZmk {
    type Error = ZmkError;

    fn try_from(zmk: &[u8]) -> Result<Self, Self::Error> {
        Self::new(zmk)
    }
}

impl fmt::Debug for DoubleLengthZmk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DoubleLengthZmk(kcv={})", self.key_check_value())
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
