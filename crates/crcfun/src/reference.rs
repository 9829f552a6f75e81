//! Bitwise reference implementations and table builders for tests.
//!
//! The engine consumes tables; it never builds them. Tests still need real
//! tables and an independent oracle, so this module provides both, computed
//! one bit at a time in a `u64` working register so the arithmetic is
//! obviously width-independent.

#![allow(clippy::indexing_slicing)]

use traits::Register;

use crate::{Width, table::TABLE_ENTRIES};

#[inline]
fn mask<W: Width>() -> u64 {
  W::SPEC.mask
}

/// Table for an MSB-first CRC with `poly` in normal (unreflected) form.
pub(crate) fn normal_table<W: Width>(poly: u64) -> [W::Register; TABLE_ENTRIES] {
  let bits = W::SPEC.bits;
  let top = 1u64 << (bits - 1);
  let mut table = [W::Register::default(); TABLE_ENTRIES];
  for (i, entry) in table.iter_mut().enumerate() {
    let mut crc = (i as u64) << (bits - 8);
    for _ in 0..8 {
      crc = if crc & top != 0 { (crc << 1) ^ poly } else { crc << 1 };
      crc &= mask::<W>();
    }
    *entry = W::Register::from_u64(crc);
  }
  table
}

/// Table for an LSB-first CRC with `poly` in reflected form.
pub(crate) fn reflected_table<W: Width>(poly: u64) -> [W::Register; TABLE_ENTRIES] {
  let mut table = [W::Register::default(); TABLE_ENTRIES];
  for (i, entry) in table.iter_mut().enumerate() {
    let mut crc = i as u64;
    for _ in 0..8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
    }
    *entry = W::Register::from_u64(crc & mask::<W>());
  }
  table
}

/// Bitwise MSB-first CRC register update (no final XOR).
pub(crate) fn normal_bitwise<W: Width>(poly: u64, init: u64, data: &[u8]) -> u64 {
  let bits = W::SPEC.bits;
  let top = 1u64 << (bits - 1);
  let mut crc = init & mask::<W>();
  for &b in data {
    crc ^= u64::from(b) << (bits - 8);
    for _ in 0..8 {
      crc = if crc & top != 0 { (crc << 1) ^ poly } else { crc << 1 };
      crc &= mask::<W>();
    }
  }
  crc
}

/// Bitwise LSB-first CRC register update (no final XOR).
pub(crate) fn reflected_bitwise<W: Width>(poly: u64, init: u64, data: &[u8]) -> u64 {
  let mut crc = init & mask::<W>();
  for &b in data {
    crc ^= u64::from(b);
    for _ in 0..8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
    }
  }
  crc
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{W24, W32};

  #[test]
  fn crc32_table_entries() {
    let table = reflected_table::<W32>(0xEDB8_8320);
    assert_eq!(table[0], 0);
    assert_eq!(table[1], 0x7707_3096);
    assert_eq!(table[255], 0x2D02_EF8D);
  }

  #[test]
  fn crc24_table_entries_fit() {
    let table = normal_table::<W24>(0x0086_4CFB);
    assert_eq!(table[1], 0x0086_4CFB);
    assert!(table.iter().all(|&e| e <= 0x00FF_FFFF));
  }

  #[test]
  fn bitwise_check_values() {
    assert_eq!(reflected_bitwise::<W32>(0xEDB8_8320, 0xFFFF_FFFF, b"123456789") ^ 0xFFFF_FFFF, 0xCBF4_3926);
    assert_eq!(normal_bitwise::<W24>(0x0086_4CFB, 0x00B7_04CE, b"123456789"), 0x0021_CF02);
  }
}
