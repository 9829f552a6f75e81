//! Fuzz target for threading the register through successive folds.
//!
//! Any chunking of the input, with any initial value and any table, must
//! produce the same result as folding the whole input at once.

#![no_main]

use arbitrary::Arbitrary;
use crcfun::{Direction, Register, Table, W8, W16, W24, W32, W64, Width, fold_with};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for successive folds
  chunk_sizes: Vec<usize>,
  initial: u64,
  /// Seed for the table contents
  seed: u64,
  reflected: bool,
}

fuzz_target!(|input: Input| {
  let direction = if input.reflected { Direction::Reflected } else { Direction::Normal };

  check::<W8>(&input, direction);
  check::<W16>(&input, direction);
  check::<W24>(&input, direction);
  check::<W32>(&input, direction);
  check::<W64>(&input, direction);
});

/// Entries stay within the width; a 24-bit reflected fold only composes when
/// the table's scratch byte is clear.
fn table<W: Width>(seed: u64) -> [W::Register; 256] {
  let mut x = seed | 1;
  core::array::from_fn(|_| {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    W::Register::from_u64(x & W::SPEC.mask)
  })
}

fn check<W: Width>(input: &Input, direction: Direction) {
  let table = table::<W>(input.seed);
  let initial = W::Register::from_u64(input.initial);
  let data = &input.data;

  let expected = fold_with::<W>(direction, data, initial, Table::from(&table));

  let mut crc = initial;
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    crc = fold_with::<W>(direction, &data[offset..end], crc, Table::from(&table));
    offset = end;
    chunk_idx += 1;
  }

  // An empty input still applies the 24-bit mask.
  if data.is_empty() {
    crc = fold_with::<W>(direction, &[], crc, Table::from(&table));
  }

  assert_eq!(crc, expected, "{}-bit {direction} streaming mismatch", W::SPEC.bits);
  if W::SPEC.bits == 24 && direction == Direction::Normal {
    assert!(crc.to_u64() <= 0xFF_FFFF, "crc24 escaped its mask: {crc:?}");
  }
}
