//! Property tests for the folding engine.
//!
//! Every width × direction is checked for:
//!
//! 1. **Reference equivalence**: the table-driven fold equals the bitwise
//!    reference for the same polynomial and initial value.
//! 2. **Incremental composition**: `fold(B, fold(A, r)) == fold(A || B, r)`
//!    for every split point.
//! 3. **24-bit bound**: both 24-bit directions return at most `0xFFFFFF`
//!    for any initial register, including ones with bits set above bit 23.

#![cfg(all(test, not(miri)))]

extern crate std;

use proptest::prelude::*;
use traits::Register;

use crate::{
  Direction, Table, W8, W16, W24, W32, W64, Width, fold_with,
  reference::{normal_bitwise, normal_table, reflected_bitwise, reflected_table},
};

// Polynomials in the form each direction expects.
const POLY8: (u64, u64) = (0x07, 0xE0);
const POLY16: (u64, u64) = (0x1021, 0x8408);
const POLY24: (u64, u64) = (0x0086_4CFB, 0x00DF_3261);
const POLY32: (u64, u64) = (0x04C1_1DB7, 0xEDB8_8320);
const POLY64: (u64, u64) = (0x42F0_E1EB_A9EA_3693, 0xC96C_5795_D787_0F42);

fn check_reference<W: Width>((normal_poly, reflected_poly): (u64, u64), init: u64, data: &[u8]) -> Result<(), TestCaseError> {
  let init_reg = W::Register::from_u64(init);

  let table = normal_table::<W>(normal_poly);
  let ours = fold_with::<W>(Direction::Normal, data, init_reg, Table::from(&table));
  prop_assert_eq!(ours.to_u64(), normal_bitwise::<W>(normal_poly, init, data));

  let table = reflected_table::<W>(reflected_poly);
  let ours = fold_with::<W>(Direction::Reflected, data, init_reg, Table::from(&table));
  prop_assert_eq!(ours.to_u64(), reflected_bitwise::<W>(reflected_poly, init, data));
  Ok(())
}

fn check_composition<W: Width>(
  (normal_poly, reflected_poly): (u64, u64),
  init: u64,
  data: &[u8],
  split: usize,
) -> Result<(), TestCaseError> {
  let (a, b) = data.split_at(split);
  let init = W::Register::from_u64(init);

  let normal = normal_table::<W>(normal_poly);
  let reflected = reflected_table::<W>(reflected_poly);
  for (direction, table) in [(Direction::Normal, &normal), (Direction::Reflected, &reflected)] {
    let whole = fold_with::<W>(direction, data, init, Table::from(table));
    let first = fold_with::<W>(direction, a, init, Table::from(table));
    let second = fold_with::<W>(direction, b, first, Table::from(table));
    prop_assert_eq!(second, whole, "{} split {}/{}", direction, split, data.len());
  }
  Ok(())
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  // ─────────────────────────────────────────────────────────────────────────
  // Reference Equivalence
  // ─────────────────────────────────────────────────────────────────────────

  #[test]
  fn w8_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..=512), init in any::<u8>()) {
    check_reference::<W8>(POLY8, u64::from(init), &data)?;
  }

  #[test]
  fn w16_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..=512), init in any::<u16>()) {
    check_reference::<W16>(POLY16, u64::from(init), &data)?;
  }

  #[test]
  fn w24_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..=512), init in 0u32..=0x00FF_FFFF) {
    check_reference::<W24>(POLY24, u64::from(init), &data)?;
  }

  #[test]
  fn w32_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..=512), init in any::<u32>()) {
    check_reference::<W32>(POLY32, u64::from(init), &data)?;
  }

  #[test]
  fn w64_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..=512), init in any::<u64>()) {
    check_reference::<W64>(POLY64, init, &data)?;
  }

  // ─────────────────────────────────────────────────────────────────────────
  // Incremental Composition
  // ─────────────────────────────────────────────────────────────────────────

  #[test]
  fn w8_composes(data in proptest::collection::vec(any::<u8>(), 0..=512), split in any::<usize>(), init in any::<u8>()) {
    let split = split % (data.len() + 1);
    check_composition::<W8>(POLY8, u64::from(init), &data, split)?;
  }

  #[test]
  fn w16_composes(data in proptest::collection::vec(any::<u8>(), 0..=512), split in any::<usize>(), init in any::<u16>()) {
    let split = split % (data.len() + 1);
    check_composition::<W16>(POLY16, u64::from(init), &data, split)?;
  }

  #[test]
  fn w24_composes(data in proptest::collection::vec(any::<u8>(), 0..=512), split in any::<usize>(), init in any::<u32>()) {
    let split = split % (data.len() + 1);
    check_composition::<W24>(POLY24, u64::from(init), &data, split)?;
  }

  #[test]
  fn w32_composes(data in proptest::collection::vec(any::<u8>(), 0..=512), split in any::<usize>(), init in any::<u32>()) {
    let split = split % (data.len() + 1);
    check_composition::<W32>(POLY32, u64::from(init), &data, split)?;
  }

  #[test]
  fn w64_composes(data in proptest::collection::vec(any::<u8>(), 0..=512), split in any::<usize>(), init in any::<u64>()) {
    let split = split % (data.len() + 1);
    check_composition::<W64>(POLY64, init, &data, split)?;
  }

  // ─────────────────────────────────────────────────────────────────────────
  // 24-bit Masking
  // ─────────────────────────────────────────────────────────────────────────

  #[test]
  fn w24_result_is_bounded(data in proptest::collection::vec(any::<u8>(), 0..=512), init in any::<u32>()) {
    let normal = normal_table::<W24>(POLY24.0);
    let reflected = reflected_table::<W24>(POLY24.1);

    let n = fold_with::<W24>(Direction::Normal, &data, init, Table::from(&normal));
    let r = fold_with::<W24>(Direction::Reflected, &data, init, Table::from(&reflected));
    prop_assert!(n <= 0x00FF_FFFF);
    prop_assert!(r <= 0x00FF_FFFF);
  }

  #[test]
  fn w24_scratch_byte_is_ignored(data in proptest::collection::vec(any::<u8>(), 0..=512), init in any::<u32>()) {
    let masked = init & 0x00FF_FFFF;
    let normal = normal_table::<W24>(POLY24.0);
    let reflected = reflected_table::<W24>(POLY24.1);

    prop_assert_eq!(
      fold_with::<W24>(Direction::Normal, &data, init, Table::from(&normal)),
      fold_with::<W24>(Direction::Normal, &data, masked, Table::from(&normal))
    );
    prop_assert_eq!(
      fold_with::<W24>(Direction::Reflected, &data, init, Table::from(&reflected)),
      fold_with::<W24>(Direction::Reflected, &data, masked, Table::from(&reflected))
    );
  }
}
