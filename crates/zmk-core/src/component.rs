//! Key components and split-knowledge ZMK forming.
//!
//! This module provides:
//! - [`Component`]: one custodian's share, loaded from hex
//! - [`load_component`] / [`must_load_component`]: hex decoding
//! - [`form_single_length_zmk`] / [`form_double_length_zmk`]: XOR forming
//!
//! # Split knowledge
//!
//! ```text
//! component 1  ⊕  component 2  ⊕  ...  ⊕  component n  =  ZMK
//! ```
//!
//! XOR is commutative and associative, so the order custodians enter their
//! components does not matter. Any subset missing even one component is
//! masked by that component and tells nothing about the ZMK.

use std::fmt;
use std::str::FromStr;

use data_encoding::HEXLOWER_PERMISSIVE;
use secrecy::{ExposeSecret, SecretSlice};
use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::error::ZmkError;
use crate::zmk::{DoubleLengthZmk, SingleLengthZmk, DOUBLE_LENGTH_ZMK_SIZE, SINGLE_LENGTH_ZMK_SIZE};

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// One share of a ZMK.
///
/// Not a key on its own; only meaningful XORed with the other components of
/// the same length. The bytes are erased on drop and never printed.
pub struct Component {
    bytes: SecretSlice<u8>,
}

impl Component {
    /// Expose the raw component bytes.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        self.bytes.expose_secret()
    }

    /// Number of bytes in the component.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expose().len()
    }

    /// Returns `true` if the component holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Key check value of this component taken alone as a ZMK.
    ///
    /// Custodians use it to confirm a share was entered correctly before
    /// it is combined.
    ///
    /// # Errors
    ///
    /// Returns [`ZmkError::InvalidComponentSize`] unless the component is 8
    /// or 16 bytes long.
    pub fn key_check_value(&self) -> Result<String, ZmkError> {
        match self.len() {
            SINGLE_LENGTH_ZMK_SIZE => Ok(SingleLengthZmk::new(self.expose())?.key_check_value()),
            DOUBLE_LENGTH_ZMK_SIZE => Ok(DoubleLengthZmk::new(self.expose())?.key_check_value()),
            len => Err(ZmkError::InvalidComponentSize(len)),
        }
    }
}

impl FromStr for Component {
    type Err = ZmkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        load_component(s)
    }
}

impl<'de> Deserialize<'de> for Component {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = Zeroizing::new(String::deserialize(deserializer)?);
        load_component(&hex).map_err(serde::de::Error::custom)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Component({} bytes, ***)", self.len())
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Decode a component from hexadecimal text (either case).
///
/// # Errors
///
/// Returns [`ZmkError::HexDecode`] on non-hex characters or an odd number
/// of digits.
pub fn load_component(hex: &str) -> Result<Component, ZmkError> {
    let bytes = HEXLOWER_PERMISSIVE.decode(hex.as_bytes())?;
    debug!(len = bytes.len(), "Component loaded");
    Ok(Component {
        bytes: bytes.into(),
    })
}

/// Like [`load_component`] but for hex that is known to be valid.
///
/// # Panics
///
/// Panics if `hex` is not valid hexadecimal.
#[must_use]
pub fn must_load_component(hex: &str) -> Component {
    load_component(hex).unwrap_or_else(|e| panic!("{e}"))
}

// ---------------------------------------------------------------------------
// Forming
// ---------------------------------------------------------------------------

/// XOR every component into an `N`-byte accumulator that starts at zero.
///
/// Returns the accumulator and the number of components combined.
fn xor_components<'a, const N: usize>(
    components: impl IntoIterator<Item = &'a Component>,
) -> Result<(Zeroizing<[u8; N]>, usize), ZmkError> {
    let mut acc = Zeroizing::new([0u8; N]);
    let mut count = 0usize;
    for component in components {
        let share = component.expose();
        if share.len() != N {
            return Err(ZmkError::InvalidComponentSize(share.len()));
        }
        for (a, b) in acc.iter_mut().zip(share) {
            *a ^= b;
        }
        count = count.saturating_add(1);
    }
    if count == 0 {
        return Err(ZmkError::NoComponents);
    }
    if count == 1 {
        warn!("ZMK formed from a single component, split knowledge not enforced");
    }
    Ok((acc, count))
}

/// Form a single-length ZMK by XORing 8-byte components.
///
/// # Errors
///
/// Returns [`ZmkError::NoComponents`] if `components` is empty and
/// [`ZmkError::InvalidComponentSize`] if any component is not 8 bytes.
pub fn form_single_length_zmk<'a>(
    components: impl IntoIterator<Item = &'a Component>,
) -> Result<SingleLengthZmk, ZmkError> {
    let (bytes, count) = xor_components::<SINGLE_LENGTH_ZMK_SIZE>(components)?;
    let zmk = SingleLengthZmk::from_bytes(*bytes);
    debug!(
        component_count = count,
        kcv = %zmk.key_check_value(),
        "Single-length ZMK formed"
    );
    Ok(zmk)
}

/// Form a double-length ZMK by XORing 16-byte components.
///
/// # Errors
///
/// Returns [`ZmkError::NoComponents`] if `components` is empty and
/// [`ZmkError::InvalidComponentSize`] if any component is not 16 bytes.
pub fn form_double_length_zmk<'a>(
    components: impl IntoIterator<Item = &'a Component>,
) -> Result<DoubleLengthZmk, ZmkError> {
    let (bytes, count) = xor_components::<DOUBLE_LENGTH_ZMK_SIZE>(components)?;
    let zmk = DoubleLengthZmk::from_bytes(*bytes);
    debug!(
        component_count = count,
        kcv = %zmk.key_check_value(),
        "Double-length ZMK formed"
    );
    Ok(zmk)
}

/// Like [`form_single_length_zmk`] but for components known to be valid.
///
/// # Panics
///
/// Panics if forming fails.
#[must_use]
pub fn must_form_single_length_zmk<'a>(
    components: impl IntoIterator<Item = &'a Component>,
) -> SingleLengthZmk {
    form_single_length_zmk(components).unwrap_or_else(|e| panic!("{e}"))
}

/// Like [`form_double_length_zmk`] but for components known to be valid.
///
/// # Panics
///
/// Panics if forming fails.
#[must_use]
pub fn must_form_double_length_zmk<'a>(
    components: impl IntoIterator<Item = &'a Component>,
) -> DoubleLengthZmk {
    form_double_length_zmk(components).unwrap_or_else(|e| panic!("{e}"))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
