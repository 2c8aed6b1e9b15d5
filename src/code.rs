//! The packed error code and its bit-field layout.
//!
//! An [`ErrorCode`] packs three diagnostic fields into a single `u32`,
//! most-significant first:
//!
//! | Field    | Width   | Bits (0 = LSB) | Max value |
//! |----------|---------|----------------|-----------|
//! | service  | 12 bits | 20–31          | 4095      |
//! | category | 8 bits  | 12–19          | 255       |
//! | subcode  | 12 bits | 0–11           | 4095      |
//!
//! The invariant is `code == (service << 20) | (category << 12) | subcode`,
//! with each field truncated to its declared width before the shift.
//!
//! # Canonical string form
//!
//! `Display` renders the three fields as uppercase hex groups joined by `.`,
//! zero-padded to one digit per nibble: `SSS.CC.SSS`. `FromStr` reverses it
//! and reports [`MalformedErrorCode`] on garbage input instead of guessing.
//!
//! # Construction APIs
//!
//! - [`ErrorCode::new`]: masks each field to its width (safe default)
//! - [`ErrorCode::checked_new`]: rejects out-of-range fields (returns Result)
//! - [`ErrorCode::new_unchecked`]: raw shifts, caller guarantees the widths
//!
//! # Zero-Allocation Guarantee
//!
//! Every operation here is allocation-free: packing and unpacking are pure
//! bit arithmetic, and `Display` writes directly to the provided formatter.
//! `to_string()` allocates in user code, not here.

use crate::error::{FieldOverflow, MalformedErrorCode};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Field Layout
// ============================================================================

/// One of the three bit-fields packed into an [`ErrorCode`].
///
/// Carries the layout as const data (width, shift, mask, hex digit count) so
/// the packing arithmetic and the string codec cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Which service/component raised the error (bits 20–31).
    Service,
    /// Broad error class shared across services, e.g. database or disk
    /// (bits 12–19).
    Category,
    /// Service-specific error detail (bits 0–11).
    Subcode,
}

impl Field {
    /// Lowercase name for diagnostics.
    #[inline]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Category => "category",
            Self::Subcode => "subcode",
        }
    }

    /// Width of the field in bits.
    #[inline]
    pub const fn width(self) -> u32 {
        match self {
            Self::Service => 12,
            Self::Category => 8,
            Self::Subcode => 12,
        }
    }

    /// Left-shift distance of the field within the packed `u32`.
    #[inline]
    pub const fn shift(self) -> u32 {
        match self {
            Self::Service => 20,
            Self::Category => 12,
            Self::Subcode => 0,
        }
    }

    /// Field-local mask: `width` low bits set.
    #[inline]
    pub const fn mask(self) -> u32 {
        (1 << self.width()) - 1
    }

    /// Largest value the field can hold.
    #[inline]
    pub const fn max(self) -> u16 {
        self.mask() as u16
    }

    /// Number of hex digits the field occupies in the canonical string form.
    ///
    /// Widths are whole nibbles, so this is exact: 3 for the 12-bit fields,
    /// 2 for the 8-bit category.
    #[inline]
    pub const fn hex_digits(self) -> usize {
        self.width() as usize / 4
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Error Code (Packed Value)
// ============================================================================

/// A packed 32-bit diagnostic error code.
///
/// The code is a value, not an object with identity: `Copy`, comparable, and
/// hashable. Ordering matches the raw `u32`, so codes sort by service first,
/// then category, then subcode — `sort`ing a list of codes groups them the
/// way the string forms would.
///
/// # Example
///
/// ```rust
/// use tricode::ErrorCode;
///
/// let code = ErrorCode::new(1234, 189, 1513);
/// assert_eq!(code.as_u32(), 0x4D2B_D5E9);
/// assert_eq!(code.to_string(), "4D2.BD.5E9");
/// assert_eq!("4D2.BD.5E9".parse::<ErrorCode>(), Ok(code));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ErrorCode(u32);

impl ErrorCode {
    /// The all-zero code, `"000.00.000"`.
    pub const MIN: Self = Self(0);

    /// The all-ones code, `"FFF.FF.FFF"`.
    pub const MAX: Self = Self(u32::MAX);

    /// Pack three fields into a code, truncating each to its declared width.
    ///
    /// The masking is a deliberate deviation from a raw shift-and-or encoder:
    /// an oversized input loses its high bits instead of corrupting the
    /// neighboring field. In-range inputs are unaffected, so
    /// `decode(encode(s, c, x))` round-trips whenever `s` and `x` fit 12 bits.
    /// Use [`checked_new`](Self::checked_new) to surface out-of-range inputs
    /// instead of truncating, or [`new_unchecked`](Self::new_unchecked) for
    /// the raw precondition-based contract.
    #[inline]
    pub const fn new(service: u16, category: u8, subcode: u16) -> Self {
        Self(
            ((service as u32 & Field::Service.mask()) << Field::Service.shift())
                | ((category as u32) << Field::Category.shift())
                | (subcode as u32 & Field::Subcode.mask()),
        )
    }

    /// Pack three fields with no masking and no bounds checking.
    ///
    /// This is the raw widen-shift-or encoder. The caller guarantees that
    /// `service` and `subcode` fit 12 bits; `category` fits by type. If the
    /// guarantee is violated, the excess high bits of `service` are shifted
    /// past bit 31 and silently dropped, and the excess bits of `subcode`
    /// land on (and corrupt) the low bits of `category`. Not memory-unsafe,
    /// just wrong answers.
    #[inline]
    pub const fn new_unchecked(service: u16, category: u8, subcode: u16) -> Self {
        Self(
            ((service as u32) << Field::Service.shift())
                | ((category as u32) << Field::Category.shift())
                | (subcode as u32),
        )
    }

    /// Pack three fields, rejecting any that exceed its declared width.
    ///
    /// For codes built from untrusted or configured values. `category` is an
    /// `u8` and always fits its 8-bit field, so only the 12-bit fields can
    /// fail. In-range behavior is identical to [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`FieldOverflow`] naming the first offending field.
    #[inline]
    pub const fn checked_new(
        service: u16,
        category: u8,
        subcode: u16,
    ) -> Result<Self, FieldOverflow> {
        if service > Field::Service.max() {
            return Err(FieldOverflow {
                field: Field::Service,
                value: service,
            });
        }
        if subcode > Field::Subcode.max() {
            return Err(FieldOverflow {
                field: Field::Subcode,
                value: subcode,
            });
        }
        Ok(Self::new_unchecked(service, category, subcode))
    }

    /// Reinterpret a raw `u32` as a code. Every `u32` is a valid code.
    #[inline]
    pub const fn from_u32(raw: u32) -> Self {
        Self(raw)
    }

    /// The packed representation.
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Extract the 12-bit service field (bits 20–31).
    #[inline]
    pub const fn service(self) -> u16 {
        // The shift discards the lower 20 bits; 12 bits remain.
        (self.0 >> Field::Service.shift()) as u16
    }

    /// Extract the 8-bit category field (bits 12–19).
    #[inline]
    pub const fn category(self) -> u8 {
        ((self.0 >> Field::Category.shift()) & Field::Category.mask()) as u8
    }

    /// Extract the 12-bit subcode field (bits 0–11).
    #[inline]
    pub const fn subcode(self) -> u16 {
        (self.0 & Field::Subcode.mask()) as u16
    }

    /// Unpack all three fields as `(service, category, subcode)`.
    #[inline]
    pub const fn fields(self) -> (u16, u8, u16) {
        (self.service(), self.category(), self.subcode())
    }
}

impl From<u32> for ErrorCode {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_u32(raw)
    }
}

impl From<ErrorCode> for u32 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.as_u32()
    }
}

// ============================================================================
// String Codec
// ============================================================================

impl fmt::Display for ErrorCode {
    /// Canonical `SSS.CC.SSS` form: uppercase hex, zero-padded per field.
    /// Writes directly to the formatter, no intermediate buffer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:03X}.{:02X}.{:03X}",
            self.service(),
            self.category(),
            self.subcode()
        )
    }
}

impl fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErrorCode({} = {:#010X})", self, self.0)
    }
}

/// Parse one dot-separated segment as the given field.
///
/// A segment is valid when it is non-empty ASCII hex and no longer than the
/// field's canonical digit count. Since widths are whole nibbles, the length
/// bound is exactly the width bound: 3 hex digits cannot exceed 0xFFF.
fn parse_segment(field: Field, segment: &str) -> Result<u16, MalformedErrorCode> {
    if segment.len() > field.hex_digits() {
        return Err(MalformedErrorCode::Overflow {
            field,
            digits: segment.len(),
        });
    }
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(MalformedErrorCode::InvalidHex { field });
    }
    u16::from_str_radix(segment, 16).map_err(|_| MalformedErrorCode::InvalidHex { field })
}

impl FromStr for ErrorCode {
    type Err = MalformedErrorCode;

    /// Parse the canonical string form back into a code.
    ///
    /// Requires exactly three `.`-separated hex segments, each within its
    /// field's digit count (3, 2, 3). Lowercase hex is accepted on input;
    /// zero-padding is not required, so `"4D2.BD.5E9"` and `"4d2.bd.5e9"`
    /// parse to the same code. Malformed input is reported, never silently
    /// coerced to a valid-looking code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.split('.');
        match (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) {
            (Some(service), Some(category), Some(subcode), None) => {
                let service = parse_segment(Field::Service, service)?;
                let category = parse_segment(Field::Category, category)?;
                let subcode = parse_segment(Field::Subcode, subcode)?;
                // The length bound above caps category at 0xFF.
                Ok(Self::new(service, category as u8, subcode))
            }
            _ => Err(MalformedErrorCode::SegmentCount {
                found: s.split('.').count(),
            }),
        }
    }
}

// ============================================================================
// Serde (optional)
// ============================================================================

/// Serde support: canonical string in human-readable formats (JSON, TOML),
/// raw `u32` in binary ones.
#[cfg(feature = "serde")]
mod serde_impl {
    use super::ErrorCode;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
    use std::fmt;

    impl Serialize for ErrorCode {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.collect_str(self)
            } else {
                serializer.serialize_u32(self.as_u32())
            }
        }
    }

    impl<'de> Deserialize<'de> for ErrorCode {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                struct CodeVisitor;

                impl<'de> de::Visitor<'de> for CodeVisitor {
                    type Value = ErrorCode;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        f.write_str("an error code string like \"4D2.BD.5E9\"")
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<ErrorCode, E> {
                        v.parse().map_err(E::custom)
                    }
                }

                deserializer.deserialize_str(CodeVisitor)
            } else {
                u32::deserialize(deserializer).map(ErrorCode::from_u32)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Layout Tests
    // ========================================================================

    #[test]
    fn fields_tile_the_u32_exactly() {
        let total: u32 = [Field::Service, Field::Category, Field::Subcode]
            .iter()
            .map(|f| f.width())
            .sum();
        assert_eq!(total, 32);

        assert_eq!(Field::Service.shift(), Field::Category.shift() + Field::Category.width());
        assert_eq!(Field::Category.shift(), Field::Subcode.shift() + Field::Subcode.width());
        assert_eq!(Field::Subcode.shift(), 0);
    }

    #[test]
    fn field_constants() {
        assert_eq!(Field::Service.max(), 4095);
        assert_eq!(Field::Category.max(), 255);
        assert_eq!(Field::Subcode.max(), 4095);
        assert_eq!(Field::Service.hex_digits(), 3);
        assert_eq!(Field::Category.hex_digits(), 2);
        assert_eq!(Field::Subcode.hex_digits(), 3);
    }

    // ========================================================================
    // Packing Tests
    // ========================================================================

    #[test]
    fn worked_example_packs_to_known_value() {
        // service 1234 = 0x4D2, category 189 = 0xBD, subcode 1513 = 0x5E9
        let code = ErrorCode::new(1234, 189, 1513);
        assert_eq!(code.as_u32(), (1234 << 20) | (189 << 12) | 1513);
        assert_eq!(code.as_u32(), 0x4D2B_D5E9);
        assert_eq!(code.as_u32(), 1_294_718_441);
        assert_eq!(code.fields(), (1234, 189, 1513));
    }

    #[test]
    fn boundary_values() {
        assert_eq!(ErrorCode::new(0, 0, 0), ErrorCode::MIN);
        assert_eq!(ErrorCode::MIN.as_u32(), 0);
        assert_eq!(ErrorCode::new(4095, 255, 4095), ErrorCode::MAX);
        assert_eq!(ErrorCode::MAX.as_u32(), 0xFFFF_FFFF);
    }

    #[test]
    fn every_u32_decodes() {
        let code = ErrorCode::from_u32(0xDEAD_BEEF);
        assert_eq!(code.service(), 0xDEA);
        assert_eq!(code.category(), 0xDB);
        assert_eq!(code.subcode(), 0xEEF);
    }

    #[test]
    fn new_masks_oversized_fields() {
        // 0x1FFF is 13 bits; new keeps only the low 12.
        let code = ErrorCode::new(0x1FFF, 0, 0);
        assert_eq!(code.service(), 0xFFF);
        assert_eq!(code.category(), 0);
        assert_eq!(code.subcode(), 0);

        let code = ErrorCode::new(0, 0, 0x1FFF);
        assert_eq!(code.subcode(), 0xFFF);
        assert_eq!(code.category(), 0);
    }

    #[test]
    fn new_unchecked_corrupts_on_oversized_subcode() {
        // Bit 12 of an oversized subcode lands on bit 0 of category.
        let code = ErrorCode::new_unchecked(0, 0, 0x1001);
        assert_eq!(code.category(), 1);
        assert_eq!(code.subcode(), 1);

        // The masked encoder keeps the category intact instead.
        let masked = ErrorCode::new(0, 0, 0x1001);
        assert_eq!(masked.category(), 0);
        assert_eq!(masked.subcode(), 1);
    }

    #[test]
    fn masked_and_unchecked_agree_in_range() {
        for &(s, c, x) in &[(0u16, 0u8, 0u16), (1, 2, 3), (4095, 255, 4095), (3936, 150, 1513)] {
            assert_eq!(ErrorCode::new(s, c, x), ErrorCode::new_unchecked(s, c, x));
        }
    }

    #[test]
    fn checked_new_accepts_in_range() {
        let code = ErrorCode::checked_new(1234, 189, 1513).unwrap();
        assert_eq!(code, ErrorCode::new(1234, 189, 1513));
    }

    #[test]
    fn checked_new_rejects_oversized_service() {
        let err = ErrorCode::checked_new(4096, 0, 0).unwrap_err();
        assert_eq!(
            err,
            FieldOverflow {
                field: Field::Service,
                value: 4096
            }
        );
    }

    #[test]
    fn checked_new_rejects_oversized_subcode() {
        let err = ErrorCode::checked_new(0, 0, 0x1001).unwrap_err();
        assert_eq!(err.field, Field::Subcode);
        assert_eq!(err.value, 0x1001);
    }

    #[test]
    fn ordering_matches_raw_value() {
        let a = ErrorCode::new(1, 0, 4095);
        let b = ErrorCode::new(2, 0, 0);
        assert!(a < b);
        assert_eq!(a.cmp(&b), a.as_u32().cmp(&b.as_u32()));
    }

    // ========================================================================
    // Display Tests
    // ========================================================================

    #[test]
    fn display_is_canonical() {
        assert_eq!(ErrorCode::new(1234, 189, 1513).to_string(), "4D2.BD.5E9");
        assert_eq!(ErrorCode::new(3936, 150, 1513).to_string(), "F60.96.5E9");
        assert_eq!(ErrorCode::MIN.to_string(), "000.00.000");
        assert_eq!(ErrorCode::MAX.to_string(), "FFF.FF.FFF");
    }

    #[test]
    fn display_zero_pads_small_fields() {
        assert_eq!(ErrorCode::new(1, 2, 3).to_string(), "001.02.003");
    }

    #[test]
    fn debug_shows_string_and_raw_forms() {
        let rendered = format!("{:?}", ErrorCode::new(1234, 189, 1513));
        assert_eq!(rendered, "ErrorCode(4D2.BD.5E9 = 0x4D2BD5E9)");
    }

    // ========================================================================
    // Parse Tests
    // ========================================================================

    #[test]
    fn parse_canonical_form() {
        let code: ErrorCode = "4D2.BD.5E9".parse().unwrap();
        assert_eq!(code.fields(), (1234, 189, 1513));
    }

    #[test]
    fn parse_accepts_lowercase_and_short_segments() {
        assert_eq!("4d2.bd.5e9".parse::<ErrorCode>(), "4D2.BD.5E9".parse());
        assert_eq!("1.2.3".parse::<ErrorCode>(), Ok(ErrorCode::new(1, 2, 3)));
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert_eq!(
            "ZZZ.GG.000".parse::<ErrorCode>(),
            Err(MalformedErrorCode::InvalidHex {
                field: Field::Service
            })
        );
    }

    #[test]
    fn parse_rejects_wrong_segment_count() {
        assert_eq!(
            "12.34".parse::<ErrorCode>(),
            Err(MalformedErrorCode::SegmentCount { found: 2 })
        );
        assert_eq!(
            "".parse::<ErrorCode>(),
            Err(MalformedErrorCode::SegmentCount { found: 1 })
        );
        assert_eq!(
            "1.2.3.4".parse::<ErrorCode>(),
            Err(MalformedErrorCode::SegmentCount { found: 4 })
        );
    }

    #[test]
    fn parse_rejects_empty_segment() {
        assert_eq!(
            "4D2..5E9".parse::<ErrorCode>(),
            Err(MalformedErrorCode::InvalidHex {
                field: Field::Category
            })
        );
    }

    #[test]
    fn parse_rejects_overlong_segment() {
        // 0x10E1 needs 13 bits; four hex digits exceed the subcode's three.
        assert_eq!(
            "4D2.BD.10E1".parse::<ErrorCode>(),
            Err(MalformedErrorCode::Overflow {
                field: Field::Subcode,
                digits: 4
            })
        );
    }

    #[test]
    fn parse_rejects_sign_prefixes() {
        // from_str_radix would accept "+1"; the hex-digit pre-check must not.
        assert!("+12.34.111".parse::<ErrorCode>().is_err());
        assert!("-12.34.111".parse::<ErrorCode>().is_err());
    }

    #[test]
    fn format_parse_round_trip() {
        for &raw in &[0u32, 1, 0x4D2B_D5E9, 0xDEAD_BEEF, u32::MAX] {
            let code = ErrorCode::from_u32(raw);
            assert_eq!(code.to_string().parse::<ErrorCode>(), Ok(code));
        }
    }

    #[test]
    fn field_isolation_in_string_form() {
        let before = ErrorCode::new(100, 7, 200).to_string();
        let after = ErrorCode::new(100, 8, 200).to_string();

        let before: Vec<&str> = before.split('.').collect();
        let after: Vec<&str> = after.split('.').collect();
        assert_eq!(before[0], after[0]);
        assert_ne!(before[1], after[1]);
        assert_eq!(before[2], after[2]);
    }

    // ========================================================================
    // Serde Tests
    // ========================================================================

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn json_uses_canonical_string() {
            let code = ErrorCode::new(1234, 189, 1513);
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, "\"4D2.BD.5E9\"");
            assert_eq!(serde_json::from_str::<ErrorCode>(&json).unwrap(), code);
        }

        #[test]
        fn json_rejects_malformed_string() {
            assert!(serde_json::from_str::<ErrorCode>("\"12.34\"").is_err());
            assert!(serde_json::from_str::<ErrorCode>("\"ZZZ.GG.000\"").is_err());
        }
    }
}
