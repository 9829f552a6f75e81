//! Basic folding: one-shot, streaming, and run-time dispatch.
//!
//! Run with: `cargo run --example basic -p crcfun`

use crcfun::{AnyTable, Bits, Direction};

fn main() {
  println!("=== CRC Folding Examples ===\n");

  crcfun::init();

  one_shot_examples();
  streaming_example();
  runtime_example();
  rejected_inputs();
}

/// Table for an MSB-first CRC of `width` bits.
fn normal_table(poly: u64, width: u32) -> [u64; 256] {
  let mask = if width >= 64 { u64::MAX } else { (1u64 << width) - 1 };
  let top = 1u64 << (width - 1);
  core::array::from_fn(|i| {
    let mut crc = (i as u64) << (width - 8);
    for _ in 0..8 {
      crc = (if crc & top != 0 { (crc << 1) ^ poly } else { crc << 1 }) & mask;
    }
    crc
  })
}

/// Table for an LSB-first CRC with a reflected polynomial.
fn reflected_table(poly: u64) -> [u64; 256] {
  core::array::from_fn(|i| {
    let mut crc = i as u64;
    for _ in 0..8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
    }
    crc
  })
}

fn to_u32(table: [u64; 256]) -> [u32; 256] {
  table.map(|e| e as u32)
}

fn one_shot_examples() {
  println!("--- One-Shot ---\n");

  let data = b"123456789";

  // CRC-8/SMBUS
  let t8 = normal_table(0x07, 8).map(|e| e as u8);
  let crc8 = crcfun::crc8(data, 0, &t8).unwrap();
  println!("CRC-8/SMBUS:      0x{crc8:02X}");
  assert_eq!(crc8, 0xF4);

  // CRC-16/IBM-3740 (CCITT-FALSE)
  let t16 = normal_table(0x1021, 16).map(|e| e as u16);
  let crc16 = crcfun::crc16(data, 0xFFFF, &t16).unwrap();
  println!("CRC-16/IBM-3740:  0x{crc16:04X}");
  assert_eq!(crc16, 0x29B1);

  // CRC-24/OPENPGP
  let t24 = to_u32(normal_table(0x86_4CFB, 24));
  let crc24 = crcfun::crc24(data, 0xB7_04CE, &t24).unwrap();
  println!("CRC-24/OPENPGP:   0x{crc24:06X}");
  assert_eq!(crc24, 0x21_CF02);

  // CRC-32/ISO-HDLC: the final XOR is the caller's job.
  let t32 = to_u32(reflected_table(0xEDB8_8320));
  let crc32 = crcfun::crc32r(data, !0, &t32).unwrap() ^ !0;
  println!("CRC-32/ISO-HDLC:  0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  // CRC-64/XZ
  let t64 = reflected_table(0xC96C_5795_D787_0F42);
  let crc64 = crcfun::crc64r(data, !0, &t64).unwrap() ^ !0;
  println!("CRC-64/XZ:        0x{crc64:016X}");
  assert_eq!(crc64, 0x995D_C9BB_DF19_39FA);

  println!();
}

fn streaming_example() {
  println!("--- Streaming ---\n");

  let t32 = to_u32(reflected_table(0xEDB8_8320));
  let chunks: [&[u8]; 4] = [b"The quick ", b"brown fox ", b"jumps over ", b"the lazy dog"];

  let mut crc = !0u32;
  for chunk in chunks {
    crc = crcfun::crc32r(chunk, crc, &t32).unwrap();
    println!("after {:>14?}: 0x{crc:08X}", core::str::from_utf8(chunk).unwrap_or("?"));
  }

  let whole = crcfun::crc32r(&chunks.concat(), !0, &t32).unwrap();
  assert_eq!(crc, whole);
  println!("final:            0x{:08X}\n", crc ^ !0);
}

fn runtime_example() {
  println!("--- Run-time Width ---\n");

  let t16 = normal_table(0x1021, 16).map(|e| e as u16);
  let raw: Vec<u8> = t16.iter().flat_map(|e| e.to_ne_bytes()).collect();

  for (label, table) in [("typed", AnyTable::U16(&t16)), ("raw bytes", AnyTable::NativeBytes(&raw))] {
    let crc = crcfun::fold(Direction::Normal, Bits::W16, b"123456789", 0, table).unwrap();
    println!("CRC-16/XMODEM ({label}): 0x{crc:04X}");
    assert_eq!(crc, 0x31C3);
  }
  println!();
}

fn rejected_inputs() {
  println!("--- Rejected Inputs ---\n");

  let t32 = to_u32(reflected_table(0xEDB8_8320));

  match crcfun::crc32r("123456789", !0, &t32) {
    Ok(_) => unreachable!("text is never folded"),
    Err(e) => println!("text:        {e} ({:?})", e.kind()),
  }

  match crcfun::crc32r(b"123456789", !0, &t32[..128]) {
    Ok(_) => unreachable!("short tables are never accepted"),
    Err(e) => println!("short table: {e} ({:?})", e.kind()),
  }
}
