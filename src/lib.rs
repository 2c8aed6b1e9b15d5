//! # tricode
//!
//! Compact packed 32-bit diagnostic error codes for distributed services.
//!
//! Three independent pieces of diagnostic information — which service raised
//! the error, a generic error category shared across services (database,
//! disk, cache, ...), and a service-specific subcode — are packed into one
//! `u32` with a lossless uppercase-hex string form. The result is an error
//! identifier that is compact on the wire, sortable as an integer, and
//! greppable in logs.
//!
//! ## Design Philosophy
//!
//! 1. **A code is a value.** [`ErrorCode`] is a `Copy` newtype over `u32`
//!    with no identity, no mutation, and no I/O anywhere in the crate.
//! 2. **The layout is data, not convention.** Field widths, shifts, and
//!    masks live on the [`Field`] enum, so the packing arithmetic and the
//!    string codec share one source of truth.
//! 3. **Malformed input is reported, never guessed at.** Parsing a garbage
//!    string fails with [`MalformedErrorCode`]; it does not silently produce
//!    a valid-looking code.
//! 4. **Zero-allocation hot paths.** Packing, unpacking, and `Display`
//!    formatting allocate nothing.
//!
//! ## Layout
//!
//! ```text
//!  31            20 19      12 11             0
//! ┌────────────────┬──────────┬────────────────┐
//! │ service (12)   │ cat. (8) │ subcode (12)   │
//! └────────────────┴──────────┴────────────────┘
//! ```
//!
//! String form: `SSS.CC.SSS`, one uppercase hex digit per nibble. A service
//! that hit a database error might log `F60.96.5E9`: service `0xF60`,
//! category `0x96`, detail `0x5E9`. What the numbers *mean* is a lookup
//! table owned by the deployment, not by this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use tricode::ErrorCode;
//!
//! // Pack at the error site...
//! let code = ErrorCode::new(1234, 189, 1513);
//! assert_eq!(code.to_string(), "4D2.BD.5E9");
//!
//! // ...and recover the fields wherever the string surfaces.
//! let parsed: ErrorCode = "4D2.BD.5E9".parse()?;
//! assert_eq!(parsed.fields(), (1234, 189, 1513));
//! # Ok::<(), tricode::MalformedErrorCode>(())
//! ```
//!
//! ## Out-of-range inputs
//!
//! [`ErrorCode::new`] masks each field to its declared width, so an
//! oversized value loses its high bits instead of corrupting a neighboring
//! field. [`ErrorCode::checked_new`] rejects oversized values outright, and
//! [`ErrorCode::new_unchecked`] keeps the raw shift-and-or contract for
//! callers that guarantee their inputs.
//!
//! ## Features
//!
//! - `serde`: serialize as the canonical string in human-readable formats
//!   and as the raw `u32` in binary ones

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod code;
pub mod error;

pub use code::{ErrorCode, Field};
pub use error::{FieldOverflow, MalformedErrorCode};

/// Type alias for Results from the text-parsing surface.
pub type Result<T> = std::result::Result<T, MalformedErrorCode>;
