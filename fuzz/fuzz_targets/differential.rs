//! Differential fuzzing against reference implementations.
//!
//! CRC-64/XZ is compared against `crc64fast`; every other width is compared
//! against a bit-at-a-time implementation.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  test_crc64_differential(data);
  test_bitwise_differential(data);
});

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

fn reflected_table(poly: u64) -> [u64; 256] {
  core::array::from_fn(|i| {
    let mut crc = i as u64;
    for _ in 0..8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
    }
    crc
  })
}

fn normal_bitwise(poly: u64, width: u32, init: u64, data: &[u8]) -> u64 {
  let mask = if width >= 64 { u64::MAX } else { (1u64 << width) - 1 };
  let top = 1u64 << (width - 1);
  let mut crc = init & mask;
  for &b in data {
    crc ^= u64::from(b) << (width - 8);
    for _ in 0..8 {
      crc = (if crc & top != 0 { (crc << 1) ^ poly } else { crc << 1 }) & mask;
    }
  }
  crc
}

fn reflected_bitwise(poly: u64, init: u64, data: &[u8]) -> u64 {
  let mut crc = init;
  for &b in data {
    crc ^= u64::from(b);
    for _ in 0..8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
    }
  }
  crc
}

fn test_crc64_differential(data: &[u8]) {
  let table = reflected_table(0xC96C_5795_D787_0F42);
  let ours = crcfun::crc64r(data, !0, &table).unwrap() ^ !0;

  let mut digest = crc64fast::Digest::new();
  digest.write(data);
  let reference = digest.sum64();

  assert_eq!(
    ours,
    reference,
    "CRC64/XZ differential mismatch: ours={:#018x}, reference={:#018x}, len={}",
    ours,
    reference,
    data.len()
  );
}

fn test_bitwise_differential(data: &[u8]) {
  let t8 = normal_table(0x07, 8).map(|e| e as u8);
  let ours = u64::from(crcfun::crc8(data, 0, &t8).unwrap());
  assert_eq!(ours, normal_bitwise(0x07, 8, 0, data), "crc8 mismatch");

  let t16r = reflected_table(0xA001).map(|e| e as u16);
  let ours = u64::from(crcfun::crc16r(data, 0, &t16r).unwrap());
  assert_eq!(ours, reflected_bitwise(0xA001, 0, data), "crc16r mismatch");

  let t24 = normal_table(0x86_4CFB, 24).map(|e| e as u32);
  let ours = u64::from(crcfun::crc24(data, 0xB7_04CE, &t24).unwrap());
  assert_eq!(ours, normal_bitwise(0x86_4CFB, 24, 0xB7_04CE, data), "crc24 mismatch");

  let t24r = reflected_table(0xDA_6000).map(|e| e as u32);
  let ours = u64::from(crcfun::crc24r(data, 0xAA_AAAA, &t24r).unwrap());
  assert_eq!(ours, reflected_bitwise(0xDA_6000, 0xAA_AAAA, data), "crc24r mismatch");

  let t32 = normal_table(0x04C1_1DB7, 32).map(|e| e as u32);
  let ours = u64::from(crcfun::crc32(data, !0, &t32).unwrap());
  assert_eq!(ours, normal_bitwise(0x04C1_1DB7, 32, 0xFFFF_FFFF, data), "crc32 mismatch");

  let t64 = normal_table(0x42F0_E1EB_A9EA_3693, 64);
  let ours = crcfun::crc64(data, 0, &t64).unwrap();
  assert_eq!(ours, normal_bitwise(0x42F0_E1EB_A9EA_3693, 64, 0, data), "crc64 mismatch");
}
