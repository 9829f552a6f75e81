//! Validated lookup tables.
//!
//! The engine never builds a table and never inspects one: it only checks
//! that a table has exactly 256 entries of the register's container width.
//! After that check a table is a plain `&[R; 256]` and every lookup by a byte
//! index is in bounds.

use traits::{InvalidTable, Register};

/// Number of entries in every lookup table.
pub const TABLE_ENTRIES: usize = 256;

/// A borrowed lookup table known to hold exactly 256 entries.
///
/// # Examples
///
/// ```
/// use crcfun::Table;
///
/// let entries = [0u16; 256];
/// let table = Table::new(&entries[..]).unwrap();
/// assert_eq!(table.entries().len(), 256);
///
/// assert!(Table::new(&entries[..255]).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table<'a, R: Register> {
  entries: &'a [R; TABLE_ENTRIES],
}

impl<'a, R: Register> Table<'a, R> {
  /// Validate a slice of entries.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidTable`] if `entries.len() != 256`.
  #[inline]
  pub fn new(entries: &'a [R]) -> Result<Self, InvalidTable> {
    entries
      .try_into()
      .map(|entries| Self { entries })
      .map_err(|_| InvalidTable::new(entries.len(), R::BYTES, R::BYTES))
  }

  /// The 256 entries.
  #[inline]
  #[must_use]
  pub const fn entries(&self) -> &'a [R; TABLE_ENTRIES] {
    self.entries
  }
}

impl<'a, R: Register> From<&'a [R; TABLE_ENTRIES]> for Table<'a, R> {
  #[inline]
  fn from(entries: &'a [R; TABLE_ENTRIES]) -> Self {
    Self { entries }
  }
}

/// A lookup table decoded from a native-endian byte string.
///
/// Some callers keep tables as raw bytes (`256 * size_of::<R>()` of them, in
/// host byte order). This decodes such a string into entries without any
/// alignment requirement on the source.
///
/// # Examples
///
/// ```
/// use crcfun::OwnedTable;
///
/// let mut raw = Vec::new();
/// for i in 0u32..256 {
///   raw.extend_from_slice(&(i * 3).to_ne_bytes());
/// }
/// let table = OwnedTable::<u32>::from_ne_bytes(&raw).unwrap();
/// assert_eq!(table.as_table().entries()[5], 15);
///
/// assert!(OwnedTable::<u32>::from_ne_bytes(&raw[..1020]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedTable<R: Register> {
  entries: [R; TABLE_ENTRIES],
}

impl<R: Register> OwnedTable<R> {
  /// Decode `256 * R::BYTES` native-endian bytes.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidTable`] if `bytes.len() != 256 * R::BYTES`.
  pub fn from_ne_bytes(bytes: &[u8]) -> Result<Self, InvalidTable> {
    let invalid = || InvalidTable::byte_length(bytes.len(), R::BYTES);
    if bytes.len() != TABLE_ENTRIES * R::BYTES {
      return Err(invalid());
    }

    let mut entries = [R::default(); TABLE_ENTRIES];
    for (entry, chunk) in entries.iter_mut().zip(bytes.chunks_exact(R::BYTES)) {
      *entry = R::from_ne_chunk(chunk).ok_or_else(invalid)?;
    }
    Ok(Self { entries })
  }

  /// Borrow as a validated [`Table`].
  #[inline]
  #[must_use]
  pub fn as_table(&self) -> Table<'_, R> {
    Table::from(&self.entries)
  }
}

impl<R: Register> From<[R; TABLE_ENTRIES]> for OwnedTable<R> {
  #[inline]
  fn from(entries: [R; TABLE_ENTRIES]) -> Self {
    Self { entries }
  }
}

/// A lookup table whose entry width is only known at run time.
///
/// Used by [`crate::fold`], where the width is also a run-time value. The
/// entry width must match the width's container: a `U16` table offered to a
/// 32-bit fold is an invalid table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnyTable<'a> {
  /// `u8` entries (8-bit width).
  U8(&'a [u8]),
  /// `u16` entries (16-bit width).
  U16(&'a [u16]),
  /// `u32` entries (24 and 32-bit widths).
  U32(&'a [u32]),
  /// `u64` entries (64-bit width).
  U64(&'a [u64]),
  /// Native-endian entries packed into a byte string; the entry width is the
  /// container width of whichever fold consumes it.
  NativeBytes(&'a [u8]),
}

impl AnyTable<'_> {
  /// Number of entries, counting raw bytes for [`NativeBytes`](Self::NativeBytes).
  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    match self {
      Self::U8(t) | Self::NativeBytes(t) => t.len(),
      Self::U16(t) => t.len(),
      Self::U32(t) => t.len(),
      Self::U64(t) => t.len(),
    }
  }

  /// Returns `true` if the table holds nothing.
  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Storage width of one entry, in bytes (1 for raw byte strings).
  #[inline]
  #[must_use]
  pub const fn entry_bytes(&self) -> usize {
    match self {
      Self::U8(_) | Self::NativeBytes(_) => 1,
      Self::U16(_) => 2,
      Self::U32(_) => 4,
      Self::U64(_) => 8,
    }
  }
}

impl<'a> From<&'a [u8; TABLE_ENTRIES]> for AnyTable<'a> {
  fn from(t: &'a [u8; TABLE_ENTRIES]) -> Self {
    Self::U8(t)
  }
}

impl<'a> From<&'a [u16; TABLE_ENTRIES]> for AnyTable<'a> {
  fn from(t: &'a [u16; TABLE_ENTRIES]) -> Self {
    Self::U16(t)
  }
}

impl<'a> From<&'a [u32; TABLE_ENTRIES]> for AnyTable<'a> {
  fn from(t: &'a [u32; TABLE_ENTRIES]) -> Self {
    Self::U32(t)
  }
}

impl<'a> From<&'a [u64; TABLE_ENTRIES]> for AnyTable<'a> {
  fn from(t: &'a [u64; TABLE_ENTRIES]) -> Self {
    Self::U64(t)
  }
}
