//! Failure types for the codec's validated surfaces.
//!
//! Packing and unpacking never fail: every in-range triple packs, and every
//! `u32` unpacks. The fallible surfaces are the two boundaries where values
//! arrive from outside the type system — [`ErrorCode::checked_new`] for
//! numeric inputs and [`ErrorCode::from_str`] for text — and each gets its
//! own error type here.
//!
//! The reference behavior this crate replaces swallowed parse failures and
//! produced a valid-looking code from garbage input. That is a latent defect,
//! not a contract; both surfaces here report instead.
//!
//! [`ErrorCode::checked_new`]: crate::ErrorCode::checked_new
//! [`ErrorCode::from_str`]: crate::ErrorCode#impl-FromStr-for-ErrorCode

use crate::code::Field;
use std::fmt;

// ============================================================================
// Numeric Boundary
// ============================================================================

/// A field value does not fit its declared bit width.
///
/// Returned by [`ErrorCode::checked_new`](crate::ErrorCode::checked_new).
/// Only the 12-bit fields can overflow; the category is an `u8` and fits by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOverflow {
    /// Which field overflowed.
    pub field: Field,
    /// The rejected value.
    pub value: u16,
}

impl fmt::Display for FieldOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} value {} exceeds its {}-bit field (max {})",
            self.field,
            self.value,
            self.field.width(),
            self.field.max()
        )
    }
}

impl std::error::Error for FieldOverflow {}

// ============================================================================
// Text Boundary
// ============================================================================

/// A string does not parse as a `SSS.CC.SSS` error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedErrorCode {
    /// The string does not have exactly three `.`-separated segments.
    SegmentCount {
        /// Number of segments actually present (an empty string counts as one).
        found: usize,
    },
    /// A segment is empty or contains a non-hexadecimal character.
    InvalidHex {
        /// The field whose segment failed.
        field: Field,
    },
    /// A segment has more hex digits than its field's width allows, so its
    /// value cannot fit the field.
    Overflow {
        /// The field whose segment failed.
        field: Field,
        /// Number of digits actually present.
        digits: usize,
    },
}

impl fmt::Display for MalformedErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SegmentCount { found } => {
                write!(f, "expected 3 dot-separated segments, found {}", found)
            }
            Self::InvalidHex { field } => {
                write!(f, "{} segment is not valid hexadecimal", field)
            }
            Self::Overflow { field, digits } => {
                write!(
                    f,
                    "{} segment has {} hex digits, but the field is {} bits ({} digits)",
                    field,
                    digits,
                    field.width(),
                    field.hex_digits()
                )
            }
        }
    }
}

impl std::error::Error for MalformedErrorCode {}

// ============================================================================
// Tests
// ============================================================================
