//! Electronic Code Book mode over any [`BlockCipher`].
//!
//! Each block is transformed independently: no IV, no chaining. Identical
//! input blocks always yield identical output blocks. That leaks patterns in
//! general data, but here the inputs are one or two blocks of key material.
//!
//! [`BlockMode::crypt_blocks`] treats misaligned input as a caller bug and
//! panics. The crate-internal helpers below validate first and return
//! [`ZmkError::InvalidDataLength`] instead.

use zeroize::Zeroizing;

use crate::block::BlockCipher;
use crate::error::ZmkError;

/// A block cipher mode that processes whole blocks.
pub trait BlockMode {
    /// Block size of the underlying cipher.
    fn block_size(&self) -> usize;

    /// Transform every block of `src` into the matching position of `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `src` is not a whole number of blocks or if `dst` is shorter
    /// than `src`.
    fn crypt_blocks(&self, dst: &mut [u8], src: &[u8]);
}

/// ECB encryption over a borrowed cipher.
pub struct EcbEncryptor<'a, B: BlockCipher + ?Sized> {
    cipher: &'a B,
}

impl<'a, B: BlockCipher + ?Sized> EcbEncryptor<'a, B> {
    /// Wrap `cipher` for multi-block encryption.
    #[must_use]
    pub const fn new(cipher: &'a B) -> Self {
        Self { cipher }
    }
}

impl<B: BlockCipher + ?Sized> BlockMode for EcbEncryptor<'_, B> {
    fn block_size(&self) -> usize {
        self.cipher.block_size()
    }

    fn crypt_blocks(&self, dst: &mut [u8], src: &[u8]) {
        let block_size = self.block_size();
        assert_full_blocks(block_size, dst, src);
        for (out, block) in dst.chunks_exact_mut(block_size).zip(src.chunks_exact(block_size)) {
            self.cipher.encrypt_block(out, block);
        }
    }
}

/// ECB decryption over a borrowed cipher.
pub struct EcbDecryptor<'a, B: BlockCipher + ?Sized> {
    cipher: &'a B,
}

impl<'a, B: BlockCipher + ?Sized> EcbDecryptor<'a, B> {
    /// Wrap `cipher` for multi-block decryption.
    #[must_use]
    pub const fn new(cipher: &'a B) -> Self {
        Self { cipher }
    }
}

impl<B: BlockCipher + ?Sized> BlockMode for EcbDecryptor<'_, B> {
    fn block_size(&self) -> usize {
        self.cipher.block_size()
    }

    fn crypt_blocks(&self, dst: &mut [u8], src: &[u8]) {
        let block_size = self.block_size();
        assert_full_blocks(block_size, dst, src);
        for (out, block) in dst.chunks_exact_mut(block_size).zip(src.chunks_exact(block_size)) {
            self.cipher.decrypt_block(out, block);
        }
    }
}

fn assert_full_blocks(block_size: usize, dst: &[u8], src: &[u8]) {
    assert!(
        src.len().checked_rem(block_size) == Some(0),
        "input not full blocks"
    );
    assert!(dst.len() >= src.len(), "output smaller than input");
}

/// Check that `len` is a non-zero whole number of `block_size` blocks.
///
/// # Errors
///
/// Returns [`ZmkError::InvalidDataLength`] if `len` is zero or not a
/// multiple of `block_size`.
pub fn validate_block_length(
    context: &'static str,
    len: usize,
    block_size: usize,
) -> Result<(), ZmkError> {
    if len == 0 || len.checked_rem(block_size) != Some(0) {
        return Err(ZmkError::InvalidDataLength {
            context,
            len,
            block_size,
        });
    }
    Ok(())
}

/// Validate then ECB-encrypt `plaintext` into a fresh buffer.
pub(crate) fn encrypt_blocks<B: BlockCipher + ?Sized>(
    cipher: &B,
    context: &'static str,
    plaintext: &[u8],
) -> Result<Vec<u8>, ZmkError> {
    validate_block_length(context, plaintext.len(), cipher.block_size())?;
    let mut ciphertext = vec![0u8; plaintext.len()];
    EcbEncryptor::new(cipher).crypt_blocks(&mut ciphertext, plaintext);
    Ok(ciphertext)
}

/// Validate then ECB-decrypt `ciphertext` into a buffer erased on drop.
pub(crate) fn decrypt_blocks<B: BlockCipher + ?Sized>(
    cipher: &B,
    context: &'static str,
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>, ZmkError> {
    validate_block_length(context, ciphertext.len(), cipher.block_size())?;
    let mut plaintext = Zeroizing::new(vec![0u8; ciphertext.len()]);
    EcbDecryptor::new(cipher).crypt_blocks(&mut plaintext, ciphertext);
    Ok(plaintext)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
