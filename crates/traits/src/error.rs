//! Error types for CRC folding.
//!
//! Every failure is an input-shape problem detected before the first byte is
//! folded. There is nothing transient to retry, so the types are small `Copy`
//! values that carry just enough to produce a parameter-specific message.

use core::fmt;

/// Coarse classification of a [`FoldError`].
///
/// Binding layers map these onto their own exception types (type error,
/// buffer error, value error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  /// The input is text, or not byte-addressable at all.
  TypeMismatch,
  /// The input is byte-addressable but has more than one dimension.
  BufferShape,
  /// The lookup table does not hold 256 entries of the register's width.
  InvalidTable,
}

/// The input could not be viewed as a flat, read-only byte sequence.
///
/// # Examples
///
/// ```
/// use traits::{ErrorKind, InputError};
///
/// let err = InputError::Text;
/// assert_eq!(err.kind(), ErrorKind::TypeMismatch);
/// assert_eq!(err.to_string(), "strings must be encoded before calculating a CRC");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum InputError {
  /// Text was supplied where bytes are required. The caller must encode first.
  Text,
  /// The object does not expose its contents as bytes.
  Unsupported {
    /// Name of the rejected type, for diagnostics.
    type_name: &'static str,
  },
  /// The byte view has more than one dimension.
  Shape {
    /// Number of dimensions reported by the view.
    ndim: usize,
  },
}

impl InputError {
  /// Classify this error.
  #[inline]
  #[must_use]
  pub const fn kind(&self) -> ErrorKind {
    match self {
      Self::Text | Self::Unsupported { .. } => ErrorKind::TypeMismatch,
      Self::Shape { .. } => ErrorKind::BufferShape,
    }
  }
}

impl fmt::Display for InputError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Text => f.write_str("strings must be encoded before calculating a CRC"),
      Self::Unsupported { type_name } => {
        write!(f, "object supporting the byte buffer API required, got `{type_name}`")
      }
      Self::Shape { ndim } => write!(f, "buffer must be single dimension, got {ndim} dimensions"),
    }
  }
}

impl core::error::Error for InputError {}

/// The lookup table is not exactly 256 entries of the register's container width.
///
/// Content is never inspected; only the shape is validated.
///
/// # Examples
///
/// ```
/// use traits::InvalidTable;
///
/// let err = InvalidTable::new(255, 4, 4);
/// assert!(err.to_string().starts_with("invalid CRC table"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidTable {
  entries: usize,
  entry_bytes: usize,
  expected_entry_bytes: usize,
}

impl InvalidTable {
  /// Number of entries every table must hold, regardless of width.
  pub const ENTRIES: usize = 256;

  /// Create an error describing the table that was supplied.
  #[inline]
  #[must_use]
  pub const fn new(entries: usize, entry_bytes: usize, expected_entry_bytes: usize) -> Self {
    Self {
      entries,
      entry_bytes,
      expected_entry_bytes,
    }
  }

  /// Error for a raw byte table whose length is not `256 * expected_entry_bytes`.
  #[inline]
  #[must_use]
  pub const fn byte_length(len: usize, expected_entry_bytes: usize) -> Self {
    Self::new(len, 1, expected_entry_bytes)
  }

  /// Number of entries found.
  #[inline]
  #[must_use]
  pub const fn entries(&self) -> usize {
    self.entries
  }

  /// Storage width of each supplied entry, in bytes.
  #[inline]
  #[must_use]
  pub const fn entry_bytes(&self) -> usize {
    self.entry_bytes
  }

  /// Storage width the register's container requires, in bytes.
  #[inline]
  #[must_use]
  pub const fn expected_entry_bytes(&self) -> usize {
    self.expected_entry_bytes
  }
}

impl fmt::Display for InvalidTable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "invalid CRC table: expected {} entries of {} bytes, found {} entries of {} bytes",
      Self::ENTRIES,
      self.expected_entry_bytes,
      self.entries,
      self.entry_bytes
    )
  }
}

impl core::error::Error for InvalidTable {}

/// Failure of a public fold operation.
///
/// All variants are produced before any byte is folded; a fold either returns
/// a register or one of these, never a partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoldError {
  /// The data argument was rejected.
  Input(InputError),
  /// The table argument was rejected.
  Table(InvalidTable),
}

impl FoldError {
  /// Classify this error.
  #[inline]
  #[must_use]
  pub const fn kind(&self) -> ErrorKind {
    match self {
      Self::Input(e) => e.kind(),
      Self::Table(_) => ErrorKind::InvalidTable,
    }
  }
}

impl From<InputError> for FoldError {
  #[inline]
  fn from(e: InputError) -> Self {
    Self::Input(e)
  }
}

impl From<InvalidTable> for FoldError {
  #[inline]
  fn from(e: InvalidTable) -> Self {
    Self::Table(e)
  }
}

impl fmt::Display for FoldError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Input(e) => fmt::Display::fmt(e, f),
      Self::Table(e) => fmt::Display::fmt(e, f),
    }
  }
}

impl core::error::Error for FoldError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      Self::Input(e) => Some(e),
      Self::Table(e) => Some(e),
    }
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};
  use core::error::Error;

  use super::*;

  #[test]
  fn text_message() {
    assert_eq!(
      InputError::Text.to_string(),
      "strings must be encoded before calculating a CRC"
    );
  }

  #[test]
  fn unsupported_names_type() {
    let err = InputError::Unsupported { type_name: "int" };
    assert!(err.to_string().contains("`int`"));
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
  }

  #[test]
  fn shape_is_buffer_shape() {
    let err = InputError::Shape { ndim: 2 };
    assert_eq!(err.kind(), ErrorKind::BufferShape);
    assert_eq!(err.to_string(), "buffer must be single dimension, got 2 dimensions");
  }

  #[test]
  fn invalid_table_message() {
    let err = InvalidTable::new(128, 2, 2);
    assert_eq!(
      err.to_string(),
      "invalid CRC table: expected 256 entries of 2 bytes, found 128 entries of 2 bytes"
    );
    assert_eq!(err.entries(), 128);
    assert_eq!(err.entry_bytes(), 2);
    assert_eq!(err.expected_entry_bytes(), 2);
  }

  #[test]
  fn byte_length_counts_bytes() {
    let err = InvalidTable::byte_length(1000, 4);
    assert_eq!(err.entries(), 1000);
    assert_eq!(err.entry_bytes(), 1);
    assert_eq!(err.expected_entry_bytes(), 4);
  }

  #[test]
  fn fold_error_kinds() {
    assert_eq!(FoldError::from(InputError::Text).kind(), ErrorKind::TypeMismatch);
    assert_eq!(
      FoldError::from(InputError::Shape { ndim: 3 }).kind(),
      ErrorKind::BufferShape
    );
    assert_eq!(
      FoldError::from(InvalidTable::new(0, 8, 8)).kind(),
      ErrorKind::InvalidTable
    );
  }

  #[test]
  fn fold_error_display_is_transparent() {
    let inner = InvalidTable::new(3, 1, 1);
    assert_eq!(FoldError::from(inner).to_string(), inner.to_string());
  }

  #[test]
  fn fold_error_source_chains() {
    let err = FoldError::from(InputError::Text);
    let source = err.source().expect("FoldError must expose its cause");
    assert_eq!(source.to_string(), InputError::Text.to_string());
  }

  #[test]
  fn debug_impl() {
    let dbg = format!("{:?}", InputError::Text);
    assert_eq!(dbg, "Text");
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    fn assert_error<T: core::error::Error + 'static>() {}

    assert_send::<FoldError>();
    assert_sync::<FoldError>();
    assert_error::<FoldError>();
    assert_error::<InputError>();
    assert_error::<InvalidTable>();
  }
}
