//! `zmk-core`: Zone Master Key handling for payment-HSM style workflows.
//!
//! Pure, synchronous library logic: zero I/O, zero randomness, zero global
//! state. DES and Triple-DES block transforms come from the `des` crate;
//! everything above the single-block transform lives here.
//!
//! Data flows bottom-up:
//!
//! ```text
//! components ──XOR──► ZMK ──ECB(DES | EDE2)──► wrapped working keys, KCVs
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod block;
pub mod ecb;
pub mod ede2;

pub mod key;
pub mod zmk;

pub mod component;

pub use block::{BlockCipher, DES_BLOCK_SIZE};
pub use component::{
    form_double_length_zmk, form_single_length_zmk, load_component, must_form_double_length_zmk,
    must_form_single_length_zmk, must_load_component, Component,
};
pub use ecb::{validate_block_length, BlockMode, EcbDecryptor, EcbEncryptor};
pub use ede2::{ede3_key_from_ede2, new_ede2_cipher, EDE3_KEY_SIZE};
pub use error::ZmkError;
pub use key::{DoubleLengthKey, Key, DOUBLE_LENGTH_KEY_SIZE, KCV_HEX_LEN, KEY_SIZE};
pub use zmk::{DoubleLengthZmk, SingleLengthZmk, DOUBLE_LENGTH_ZMK_SIZE, SINGLE_LENGTH_ZMK_SIZE};
