//! Table-driven CRC folding engine.
//!
//! Given a byte stream, an initial register value, and a precomputed
//! 256-entry lookup table, this crate folds the stream into a final register
//! value for one of five widths and one of two bit orderings. Building the
//! table, picking a polynomial, and applying a final XOR are left to the
//! caller.
//!
//! # Supported Widths
//!
//! | Width | Register / entry | Result range | Operations |
//! |-------|------------------|--------------|------------|
//! | 8  | `u8`  | `0..=0xFF` | [`crc8`], [`crc8r`] |
//! | 16 | `u16` | `0..=0xFFFF` | [`crc16`], [`crc16r`] |
//! | 24 | `u32` | `0..=0xFFFFFF` | [`crc24`], [`crc24r`] |
//! | 32 | `u32` | `0..=0xFFFFFFFF` | [`crc32`], [`crc32r`] |
//! | 64 | `u64` | `0..=u64::MAX` | [`crc64`], [`crc64r`] |
//!
//! All ten are instances of one generic algorithm ([`fold_with`]) over a
//! [`Width`] policy. [`fold`] selects width and direction at run time.
//!
//! # Example
//!
//! ```rust
//! // Reflected CRC-32 table (polynomial 0xEDB88320), built by the caller.
//! let mut table = [0u32; 256];
//! for (i, e) in table.iter_mut().enumerate() {
//!   let mut c = i as u32;
//!   for _ in 0..8 {
//!     c = if c & 1 != 0 { (c >> 1) ^ 0xEDB8_8320 } else { c >> 1 };
//!   }
//!   *e = c;
//! }
//!
//! crcfun::init();
//!
//! // One-shot.
//! let crc = crcfun::crc32r(b"123456789", !0, &table)?;
//! assert_eq!(crc ^ !0, 0xCBF4_3926);
//!
//! // Streaming: thread the register through successive calls.
//! let partial = crcfun::crc32r(b"1234", !0, &table)?;
//! let resumed = crcfun::crc32r(b"56789", partial, &table)?;
//! assert_eq!(resumed, crc);
//!
//! // Text must be encoded first.
//! assert!(crcfun::crc32r("123456789", !0, &table).is_err());
//! # Ok::<(), crcfun::FoldError>(())
//! ```
//!
//! # Validation
//!
//! Every operation validates before folding, in this order:
//!
//! 1. The table must hold exactly 256 entries ([`ErrorKind::InvalidTable`]).
//! 2. The input must be bytes, not text ([`ErrorKind::TypeMismatch`]).
//! 3. The input must be one-dimensional ([`ErrorKind::BufferShape`]).
//!
//! Once validation passes the fold cannot fail.
//!
//! # Concurrency
//!
//! Folds are pure functions of their arguments. They hold no state, never
//! block, and may run on any number of threads at once.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! crcfun = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

mod direction;
mod fold;
mod input;
pub mod introspect;
mod ops;
mod table;
pub mod width;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod reference;

pub use direction::Direction;
pub use fold::fold_with;
pub use input::{AsByteView, ByteView, Value};
pub use introspect::{EngineInfo, FoldPlan};
pub use ops::{crc8, crc8r, crc16, crc16r, crc24, crc24r, crc32, crc32r, crc64, crc64r, fold, fold_checked};
pub use platform::{EnvironmentError, Layout};
pub use table::{AnyTable, OwnedTable, TABLE_ENTRIES, Table};
// Re-export the seams for convenience
pub use traits::{ErrorKind, FoldError, InputError, InvalidTable, Register};
pub use width::{Bits, MaskTiming, W8, W16, W24, W32, W64, Width, WidthSpec};

/// One-time library initialization.
///
/// Verifies that the native containers used for registers and table entries
/// have their expected sizes, caching the result for the life of the process.
/// Call it once at startup; individual operations do not repeat the check.
///
/// # Panics
///
/// Panics if the host's containers have unexpected sizes. This is an
/// unrecoverable environment failure.
#[inline]
pub fn init() -> Layout {
  platform::get()
}
