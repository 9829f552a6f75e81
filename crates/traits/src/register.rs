//! Register container abstraction.
//!
//! A CRC register of semantic width W lives in the smallest native unsigned
//! integer that can hold it. The folding algorithm only ever needs a handful of
//! operations on that container: pick one byte out, shift by a whole byte, and
//! XOR with a table entry. [`Register`] captures exactly those.

use core::{
  fmt::Debug,
  ops::{BitAnd, BitXor},
};

/// Native unsigned integer used as a CRC register container.
///
/// Shifts by a whole byte never panic: on an 8-bit container every bit is
/// shifted out and the result is zero.
///
/// # Examples
///
/// ```
/// use traits::Register;
///
/// let crc: u32 = 0x1234_5678;
/// assert_eq!(crc.byte(16), 0x34);
/// assert_eq!(crc.shl8(), 0x3456_7800);
/// assert_eq!(0xABu8.shl8(), 0);
/// ```
pub trait Register:
  Copy + Eq + Debug + Default + Send + Sync + BitXor<Output = Self> + BitAnd<Output = Self> + 'static
{
  /// Container width in bits.
  const BITS: u32;

  /// Container width in bytes (the storage size of one table entry).
  const BYTES: usize;

  /// Returns the byte occupying bit positions `[shift, shift + 7]`.
  #[must_use]
  fn byte(self, shift: u32) -> u8;

  /// Shift left by one byte, discarding bits beyond the container.
  #[must_use]
  fn shl8(self) -> Self;

  /// Shift right by one byte.
  #[must_use]
  fn shr8(self) -> Self;

  /// Widen a byte into the container.
  #[must_use]
  fn from_byte(byte: u8) -> Self;

  /// Truncate a `u64` to the container width.
  #[must_use]
  fn from_u64(value: u64) -> Self;

  /// Widen the container to `u64`.
  #[must_use]
  fn to_u64(self) -> u64;

  /// Decode one native-endian entry. Returns `None` unless `chunk` is exactly
  /// [`BYTES`](Self::BYTES) long.
  #[must_use]
  fn from_ne_chunk(chunk: &[u8]) -> Option<Self>;
}

macro_rules! impl_register {
  ($($ty:ty),* $(,)?) => {
    $(
      impl Register for $ty {
        const BITS: u32 = <$ty>::BITS;
        const BYTES: usize = core::mem::size_of::<$ty>();

        #[inline(always)]
        fn byte(self, shift: u32) -> u8 {
          self.checked_shr(shift).unwrap_or(0) as u8
        }

        #[inline(always)]
        fn shl8(self) -> Self {
          self.checked_shl(8).unwrap_or(0)
        }

        #[inline(always)]
        fn shr8(self) -> Self {
          self.checked_shr(8).unwrap_or(0)
        }

        #[inline(always)]
        fn from_byte(byte: u8) -> Self {
          Self::from(byte)
        }

        #[inline(always)]
        fn from_u64(value: u64) -> Self {
          value as Self
        }

        #[inline(always)]
        fn to_u64(self) -> u64 {
          u64::from(self)
        }

        #[inline]
        fn from_ne_chunk(chunk: &[u8]) -> Option<Self> {
          chunk.try_into().ok().map(<$ty>::from_ne_bytes)
        }
      }
    )*
  };
}

impl_register!(u8, u16, u32, u64);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn container_sizes() {
    assert_eq!(<u8 as Register>::BYTES, 1);
    assert_eq!(<u16 as Register>::BYTES, 2);
    assert_eq!(<u32 as Register>::BYTES, 4);
    assert_eq!(<u64 as Register>::BYTES, 8);
    assert_eq!(<u64 as Register>::BITS, 64);
  }

  #[test]
  fn byte_extraction() {
    let v: u64 = 0x0102_0304_0506_0708;
    assert_eq!(v.byte(0), 0x08);
    assert_eq!(v.byte(56), 0x01);
    assert_eq!(0xA5u8.byte(0), 0xA5);
    assert_eq!(0xBEEFu16.byte(8), 0xBE);
  }

  #[test]
  fn byte_shift_on_narrow_container_is_zero() {
    assert_eq!(0xFFu8.shl8(), 0);
    assert_eq!(0xFFu8.shr8(), 0);
    assert_eq!(0xFFFFu16.shl8(), 0xFF00);
    assert_eq!(0xFFFFu16.shr8(), 0x00FF);
  }

  #[test]
  fn shl8_discards_high_byte() {
    assert_eq!(0xAB12_3456u32.shl8(), 0x1234_5600);
    assert_eq!(u64::MAX.shl8(), 0xFFFF_FFFF_FFFF_FF00);
  }

  #[test]
  fn from_u64_truncates() {
    assert_eq!(<u8 as Register>::from_u64(0x1FF), 0xFF);
    assert_eq!(<u16 as Register>::from_u64(0xDEAD_BEEF), 0xBEEF);
    assert_eq!(<u32 as Register>::from_u64(u64::MAX), u32::MAX);
    assert_eq!(0xBEEFu16.to_u64(), 0xBEEF);
  }

  #[test]
  fn from_ne_chunk_requires_exact_length() {
    let bytes = 0x1122_3344u32.to_ne_bytes();
    assert_eq!(<u32 as Register>::from_ne_chunk(&bytes), Some(0x1122_3344));
    assert_eq!(<u32 as Register>::from_ne_chunk(&bytes[..3]), None);
    assert_eq!(<u16 as Register>::from_ne_chunk(&bytes), None);
  }
}
