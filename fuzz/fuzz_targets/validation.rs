//! Fuzz target for argument validation.
//!
//! Arbitrary table lengths, entry widths, shapes, and widths must either fold
//! or return an error. Nothing may panic.

#![no_main]

use arbitrary::Arbitrary;
use crcfun::{AnyTable, Bits, Direction, ErrorKind, Value, fold};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum TableKind {
  U8,
  U16,
  U32,
  U64,
  NativeBytes,
}

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  shape: Vec<usize>,
  table_len: u16,
  table_kind: TableKind,
  bits: u8,
  reflected: bool,
  initial: u64,
}

fuzz_target!(|input: Input| {
  let Some(bits) = Bits::from_bits(u32::from(input.bits)) else {
    return;
  };
  let direction = if input.reflected { Direction::Reflected } else { Direction::Normal };
  let len = usize::from(input.table_len) % 2100;

  let t8 = vec![0xA5u8; len];
  let t16 = vec![0xA5A5u16; len];
  let t32 = vec![0xA5A5_A5A5u32; len];
  let t64 = vec![0xA5A5_A5A5_A5A5_A5A5u64; len];
  let table = match input.table_kind {
    TableKind::U8 => AnyTable::U8(&t8),
    TableKind::U16 => AnyTable::U16(&t16),
    TableKind::U32 => AnyTable::U32(&t32),
    TableKind::U64 => AnyTable::U64(&t64),
    TableKind::NativeBytes => AnyTable::NativeBytes(&t8),
  };

  let value = Value::Array { data: &input.data, shape: &input.shape };
  let spec = bits.spec();
  let table_ok = match table {
    AnyTable::NativeBytes(raw) => raw.len() == 256 * spec.entry_bytes(),
    typed => typed.len() == 256 && typed.entry_bytes() == spec.entry_bytes(),
  };

  match fold(direction, bits, &value, input.initial, table) {
    Ok(crc) => {
      assert!(table_ok && input.shape.len() <= 1);
      if bits == Bits::W24 && direction == Direction::Normal {
        assert!(crc <= 0xFF_FFFF);
      }
    }
    Err(e) if !table_ok => assert_eq!(e.kind(), ErrorKind::InvalidTable),
    Err(e) => assert_eq!(e.kind(), ErrorKind::BufferShape),
  }
});
