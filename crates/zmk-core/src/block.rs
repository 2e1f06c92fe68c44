//! Single-block cipher capability.
//!
//! [`BlockCipher`] is the narrow seam between the modes in [`crate::ecb`] and
//! the DES / Triple-DES transforms supplied by the `des` crate. Anything that
//! can transform one fixed-size block in both directions can be driven by
//! the ECB adapter.

use des::cipher::generic_array::GenericArray;
use des::cipher::{BlockDecrypt, BlockEncrypt};
use des::{Des, TdesEde3};

/// DES block size in bytes. Triple-DES keeps the same block size.
pub const DES_BLOCK_SIZE: usize = 8;

/// A keyed block cipher transforming exactly one block per call.
///
/// Implementations hold no per-call mutable state, so a shared reference may
/// be used from several threads at once.
pub trait BlockCipher {
    /// Block size in bytes.
    fn block_size(&self) -> usize;

    /// Encrypt the single block `src` into `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `src` or `dst` is not exactly one block long.
    fn encrypt_block(&self, dst: &mut [u8], src: &[u8]);

    /// Decrypt the single block `src` into `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `src` or `dst` is not exactly one block long.
    fn decrypt_block(&self, dst: &mut [u8], src: &[u8]);
}

impl BlockCipher for Des {
    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }

    fn encrypt_block(&self, dst: &mut [u8], src: &[u8]) {
        encrypt_with(self, dst, src);
    }

    fn decrypt_block(&self, dst: &mut [u8], src: &[u8]) {
        decrypt_with(self, dst, src);
    }
}

impl BlockCipher for TdesEde3 {
    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }

    fn encrypt_block(&self, dst: &mut [u8], src: &[u8]) {
        encrypt_with(self, dst, src);
    }

    fn decrypt_block(&self, dst: &mut [u8], src: &[u8]) {
        decrypt_with(self, dst, src);
    }
}

fn encrypt_with<C: BlockEncrypt>(cipher: &C, dst: &mut [u8], src: &[u8]) {
    cipher.encrypt_block_b2b(GenericArray::from_slice(src), GenericArray::from_mut_slice(dst));
}

fn decrypt_with<C: BlockDecrypt>(cipher: &C, dst: &mut [u8], src: &[u8]) {
    cipher.decrypt_block_b2b(GenericArray::from_slice(src), GenericArray::from_mut_slice(dst));
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
