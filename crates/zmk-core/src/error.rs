//! Error types for `zmk-core`.

use thiserror::Error;

/// Recoverable validation errors produced by key, ZMK and component operations.
///
/// Caller programming errors (misaligned buffers handed straight to the ECB
/// adapter, `must_*` helpers fed bad input) panic instead and never surface
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZmkError {
    /// Key or ZMK material has the wrong length.
    #[error("invalid key size {0}")]
    InvalidKeySize(usize),

    /// A component does not have the length the operation requires.
    #[error("invalid component size: {0}")]
    InvalidComponentSize(usize),

    /// Forming was attempted with an empty component list.
    #[error("at least one component is required to form a ZMK")]
    NoComponents,

    /// Component text is not valid hexadecimal.
    #[error("invalid component hex: {0}")]
    HexDecode(#[from] data_encoding::DecodeError),

    /// An encrypt/decrypt input is empty or not whole blocks.
    #[error("invalid {context} length: {len} bytes (expected a non-zero multiple of {block_size})")]
    InvalidDataLength {
        /// What was being processed (`"plaintext"`, `"clear key"`, ...).
        context: &'static str,
        /// Length that was supplied.
        len: usize,
        /// Block size of the bound cipher.
        block_size: usize,
    },
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
