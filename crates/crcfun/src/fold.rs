//! The generic byte-at-a-time folding algorithm.
//!
//! One routine per direction, parameterized by [`Width`]:
//!
//! ```text
//! normal:     crc' = table[b ^ byte(crc, W - 8)] ^ (crc << 8)
//! reflected:  crc' = table[b ^ byte(crc, 0)]     ^ (crc >> 8)
//! ```
//!
//! The container truncates shifted-out bits for every width whose container
//! is its semantic width. The 24-bit width masks exactly once, at the point
//! its [`MaskTiming`] names (see [`crate::width`]).

// SAFETY: All array indexing in this module uses bounded indices:
// - Tables are `&[R; 256]`
// - Indices are a `u8` widened to `usize` (0..=255)
#![allow(clippy::indexing_slicing)]

use traits::Register;

use crate::{Direction, MaskTiming, Table, Width, table::TABLE_ENTRIES};

/// Fold `data` into `initial` using a validated table.
///
/// This cannot fail: the table's shape was checked when the [`Table`] was
/// built, and the rest is arithmetic. An empty `data` returns `initial`,
/// masked for the 24-bit width.
///
/// # Examples
///
/// ```
/// use crcfun::{Direction, Table, W32, fold_with};
///
/// // Reflected CRC-32 table, polynomial 0xEDB88320.
/// let mut entries = [0u32; 256];
/// for (i, e) in entries.iter_mut().enumerate() {
///   let mut c = i as u32;
///   for _ in 0..8 {
///     c = if c & 1 != 0 { (c >> 1) ^ 0xEDB8_8320 } else { c >> 1 };
///   }
///   *e = c;
/// }
///
/// let crc = fold_with::<W32>(Direction::Reflected, b"123456789", !0, Table::from(&entries));
/// assert_eq!(crc ^ !0, 0xCBF4_3926);
/// ```
#[inline]
#[must_use]
pub fn fold_with<W: Width>(
  direction: Direction,
  data: &[u8],
  initial: W::Register,
  table: Table<'_, W::Register>,
) -> W::Register {
  match direction {
    Direction::Normal => normal::<W>(initial, data, table.entries()),
    Direction::Reflected => reflected::<W>(initial, data, table.entries()),
  }
}

#[inline(always)]
fn mask_if<W: Width>(timing: MaskTiming, when: MaskTiming, crc: W::Register) -> W::Register {
  if timing == when {
    crc & W::Register::from_u64(W::SPEC.mask)
  } else {
    crc
  }
}

/// MSB-first fold.
#[inline]
pub(crate) fn normal<W: Width>(
  crc: W::Register,
  data: &[u8],
  table: &[W::Register; TABLE_ENTRIES],
) -> W::Register {
  let timing = W::SPEC.normal;
  let shift = W::SPEC.top_shift();

  let mut crc = mask_if::<W>(timing, MaskTiming::BeforeLoop, crc);
  for &byte in data {
    crc = table[(byte ^ crc.byte(shift)) as usize] ^ crc.shl8();
  }
  mask_if::<W>(timing, MaskTiming::OnReturn, crc)
}

/// LSB-first fold.
#[inline]
pub(crate) fn reflected<W: Width>(
  crc: W::Register,
  data: &[u8],
  table: &[W::Register; TABLE_ENTRIES],
) -> W::Register {
  let timing = W::SPEC.reflected;

  let mut crc = mask_if::<W>(timing, MaskTiming::BeforeLoop, crc);
  for &byte in data {
    crc = table[(byte ^ crc.byte(0)) as usize] ^ crc.shr8();
  }
  mask_if::<W>(timing, MaskTiming::OnReturn, crc)
}
