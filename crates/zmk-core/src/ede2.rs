//! Two-key Triple-DES (EDE2).
//!
//! A 16-byte key `K1 || K2` is expanded to the 24-byte Triple-DES key
//! `K1 || K2 || K1`, giving encrypt-K1 / decrypt-K2 / encrypt-K1.

use des::cipher::generic_array::GenericArray;
use des::cipher::KeyInit;
use des::TdesEde3;
use zeroize::Zeroizing;

use crate::error::ZmkError;
use crate::key::{DOUBLE_LENGTH_KEY_SIZE, KEY_SIZE};

/// Length of the expanded three-key Triple-DES key.
pub const EDE3_KEY_SIZE: usize = 24;

/// Expand `K1 || K2` to `K1 || K2 || K1`.
#[must_use]
pub fn ede3_key_from_ede2(key: &[u8; DOUBLE_LENGTH_KEY_SIZE]) -> Zeroizing<[u8; EDE3_KEY_SIZE]> {
    let mut ede3 = Zeroizing::new([0u8; EDE3_KEY_SIZE]);
    ede3[..DOUBLE_LENGTH_KEY_SIZE].copy_from_slice(key);
    ede3[DOUBLE_LENGTH_KEY_SIZE..].copy_from_slice(&key[..KEY_SIZE]);
    ede3
}

/// Build a Triple-DES cipher from a 16-byte double-length key.
///
/// # Errors
///
/// Returns [`ZmkError::InvalidKeySize`] if `key` is not exactly 16 bytes.
pub fn new_ede2_cipher(key: &[u8]) -> Result<TdesEde3, ZmkError> {
    let key: &[u8; DOUBLE_LENGTH_KEY_SIZE] = key
        .try_into()
        .map_err(|_| ZmkError::InvalidKeySize(key.len()))?;
    Ok(ede2_cipher(key))
}

pub(crate) fn ede2_cipher(key: &[u8; DOUBLE_LENGTH_KEY_SIZE]) -> TdesEde3 {
    let ede3 = ede3_key_from_ede2(key);
    TdesEde3::new(GenericArray::from_slice(&ede3[..]))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
