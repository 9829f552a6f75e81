//! Public operation surface.
//!
//! | Operation | Width | Direction | Register / entry |
//! |-----------|-------|-----------|------------------|
//! | [`crc8`] / [`crc8r`] | 8 | normal / reflected | `u8` |
//! | [`crc16`] / [`crc16r`] | 16 | normal / reflected | `u16` |
//! | [`crc24`] / [`crc24r`] | 24 | normal / reflected | `u32` (24 significant bits) |
//! | [`crc32`] / [`crc32r`] | 32 | normal / reflected | `u32` |
//! | [`crc64`] / [`crc64r`] | 64 | normal / reflected | `u64` |
//!
//! [`fold`] is the same surface with width and direction chosen at run time.

use traits::{FoldError, InvalidTable, Register};

use crate::{
  AnyTable, AsByteView, Bits, Direction, OwnedTable, Table, W8, W16, W24, W32, W64, Width, fold_with,
};

/// Validate `table` and `data`, then fold.
///
/// The table is checked before the input is acquired, and both before the
/// first byte is folded.
///
/// # Errors
///
/// Returns [`FoldError::Table`] for a table that is not 256 entries long, or
/// [`FoldError::Input`] for input that cannot be viewed as one-dimensional
/// bytes.
#[inline]
pub fn fold_checked<W: Width, B: AsByteView + ?Sized>(
  direction: Direction,
  data: &B,
  crc: W::Register,
  table: &[W::Register],
) -> Result<W::Register, FoldError> {
  let table = Table::new(table)?;
  let view = data.byte_view()?;
  Ok(fold_with::<W>(direction, view.as_bytes(), crc, table))
}

define_fold_op! {
  /// 8-bit MSB-first fold.
  pub fn crc8 => W8, Normal;
}

define_fold_op! {
  /// 8-bit LSB-first fold. Identical arithmetic to [`crc8`]: the top and
  /// bottom byte of an 8-bit register coincide and both shifts clear it.
  pub fn crc8r => W8, Reflected;
}

define_fold_op! {
  /// 16-bit MSB-first fold.
  pub fn crc16 => W16, Normal;
}

define_fold_op! {
  /// 16-bit LSB-first fold.
  pub fn crc16r => W16, Reflected;
}

define_fold_op! {
  /// 24-bit MSB-first fold. The result is masked to 24 bits on return.
  ///
  /// # Examples
  ///
  /// ```
  /// // CRC-24/OPENPGP table (polynomial 0x864CFB).
  /// let mut table = [0u32; 256];
  /// for (i, e) in table.iter_mut().enumerate() {
  ///   let mut c = (i as u32) << 16;
  ///   for _ in 0..8 {
  ///     c = if c & 0x80_0000 != 0 { (c << 1) ^ 0x86_4CFB } else { c << 1 };
  ///   }
  ///   *e = c & 0xFF_FFFF;
  /// }
  ///
  /// assert_eq!(crcfun::crc24(b"123456789", 0xB7_04CE, &table), Ok(0x21_CF02));
  /// ```
  pub fn crc24 => W24, Normal;
}

define_fold_op! {
  /// 24-bit LSB-first fold. The initial register is masked to 24 bits before
  /// the first byte.
  pub fn crc24r => W24, Reflected;
}

define_fold_op! {
  /// 32-bit MSB-first fold.
  pub fn crc32 => W32, Normal;
}

define_fold_op! {
  /// 32-bit LSB-first fold.
  ///
  /// # Examples
  ///
  /// ```
  /// let mut table = [0u32; 256];
  /// for (i, e) in table.iter_mut().enumerate() {
  ///   let mut c = i as u32;
  ///   for _ in 0..8 {
  ///     c = if c & 1 != 0 { (c >> 1) ^ 0xEDB8_8320 } else { c >> 1 };
  ///   }
  ///   *e = c;
  /// }
  ///
  /// // The final complement is the caller's business.
  /// let crc = crcfun::crc32r(b"123456789", !0, &table).unwrap() ^ !0;
  /// assert_eq!(crc, 0xCBF4_3926);
  ///
  /// assert!(crcfun::crc32r("123456789", !0, &table).is_err());
  /// ```
  pub fn crc32r => W32, Reflected;
}

define_fold_op! {
  /// 64-bit MSB-first fold.
  pub fn crc64 => W64, Normal;
}

define_fold_op! {
  /// 64-bit LSB-first fold.
  pub fn crc64r => W64, Reflected;
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime-parameterized fold
// ─────────────────────────────────────────────────────────────────────────────

/// Containers an [`AnyTable`] can hand out typed entries for.
trait Entry: Register {
  fn entries(table: AnyTable<'_>) -> Option<&[Self]>;
}

macro_rules! impl_entry {
  ($($ty:ty => $variant:ident),* $(,)?) => {
    $(
      impl Entry for $ty {
        #[inline]
        fn entries(table: AnyTable<'_>) -> Option<&[Self]> {
          match table {
            AnyTable::$variant(entries) => Some(entries),
            _ => None,
          }
        }
      }
    )*
  };
}

impl_entry!(u8 => U8, u16 => U16, u32 => U32, u64 => U64);

/// Fold with width and direction chosen at run time.
///
/// `initial` is truncated to the width's container, as a native argument
/// conversion would. The table's entry width must match the container (`u32`
/// for both 24 and 32 bits); [`AnyTable::NativeBytes`] is decoded at that
/// width. The result is widened back to `u64`.
///
/// # Errors
///
/// Same as the named operations, plus [`FoldError::Table`] when the table's
/// entry width does not match the container.
///
/// # Examples
///
/// ```
/// use crcfun::{AnyTable, Bits, Direction};
///
/// let table = [0u16; 256];
/// let crc = crcfun::fold(Direction::Normal, Bits::W16, b"", 0x1_BEEF, AnyTable::U16(&table));
/// assert_eq!(crc, Ok(0xBEEF));
///
/// let err = crcfun::fold(Direction::Normal, Bits::W32, b"", 0, AnyTable::U16(&table));
/// assert!(err.is_err());
/// ```
pub fn fold<B: AsByteView + ?Sized>(
  direction: Direction,
  bits: Bits,
  data: &B,
  initial: u64,
  table: AnyTable<'_>,
) -> Result<u64, FoldError> {
  match bits {
    Bits::W8 => fold_any::<W8, B>(direction, data, initial, table),
    Bits::W16 => fold_any::<W16, B>(direction, data, initial, table),
    Bits::W24 => fold_any::<W24, B>(direction, data, initial, table),
    Bits::W32 => fold_any::<W32, B>(direction, data, initial, table),
    Bits::W64 => fold_any::<W64, B>(direction, data, initial, table),
  }
}

fn fold_any<W, B>(direction: Direction, data: &B, initial: u64, table: AnyTable<'_>) -> Result<u64, FoldError>
where
  W: Width,
  W::Register: Entry,
  B: AsByteView + ?Sized,
{
  let crc = W::Register::from_u64(initial);
  let folded = match table {
    AnyTable::NativeBytes(raw) => {
      let owned = OwnedTable::<W::Register>::from_ne_bytes(raw)?;
      fold_checked::<W, B>(direction, data, crc, owned.as_table().entries())?
    }
    typed => {
      let entries = <W::Register as Entry>::entries(typed)
        .ok_or_else(|| InvalidTable::new(typed.len(), typed.entry_bytes(), W::SPEC.entry_bytes()))?;
      fold_checked::<W, B>(direction, data, crc, entries)?
    }
  };
  Ok(folded.to_u64())
}
