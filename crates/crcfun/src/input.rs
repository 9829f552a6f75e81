//! Byte-view acquisition.
//!
//! The fold consumes a read-only, contiguous, one-dimensional byte view. This
//! module turns caller inputs into such a view or rejects them:
//!
//! | Input | Result |
//! |-------|--------|
//! | `[u8]`, `[u8; N]`, `Vec<u8>`, `Box<[u8]>` | view |
//! | `str`, `String` | [`InputError::Text`] |
//! | [`Value::Array`] with more than one dimension | [`InputError::Shape`] |
//! | [`Value::Opaque`] | [`InputError::Unsupported`] |
//!
//! A [`ByteView`] is a borrow scoped to the call that produced it, so it is
//! released on every exit path, including validation failures.

use core::ops::Deref;

use traits::InputError;

/// A read-only, contiguous, one-dimensional view of the input bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByteView<'a> {
  bytes: &'a [u8],
}

impl<'a> ByteView<'a> {
  /// Wrap a byte slice.
  #[inline]
  #[must_use]
  pub const fn new(bytes: &'a [u8]) -> Self {
    Self { bytes }
  }

  /// The viewed bytes.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &'a [u8] {
    self.bytes
  }
}

impl Deref for ByteView<'_> {
  type Target = [u8];

  #[inline]
  fn deref(&self) -> &[u8] {
    self.bytes
  }
}

/// Inputs that can be folded.
///
/// Implementations either produce a [`ByteView`] or say why they cannot.
/// Text types implement this trait only to reject themselves with a
/// message telling the caller to encode first.
pub trait AsByteView {
  /// Acquire a byte view.
  ///
  /// # Errors
  ///
  /// Returns [`InputError`] if the input is text, not byte-addressable, or
  /// not one-dimensional.
  fn byte_view(&self) -> Result<ByteView<'_>, InputError>;
}

impl AsByteView for [u8] {
  #[inline]
  fn byte_view(&self) -> Result<ByteView<'_>, InputError> {
    Ok(ByteView::new(self))
  }
}

impl<const N: usize> AsByteView for [u8; N] {
  #[inline]
  fn byte_view(&self) -> Result<ByteView<'_>, InputError> {
    Ok(ByteView::new(self))
  }
}

impl AsByteView for ByteView<'_> {
  #[inline]
  fn byte_view(&self) -> Result<ByteView<'_>, InputError> {
    Ok(*self)
  }
}

impl AsByteView for str {
  #[inline]
  fn byte_view(&self) -> Result<ByteView<'_>, InputError> {
    Err(InputError::Text)
  }
}

impl<T: AsByteView + ?Sized> AsByteView for &T {
  #[inline]
  fn byte_view(&self) -> Result<ByteView<'_>, InputError> {
    (**self).byte_view()
  }
}

#[cfg(feature = "alloc")]
impl AsByteView for alloc::vec::Vec<u8> {
  #[inline]
  fn byte_view(&self) -> Result<ByteView<'_>, InputError> {
    Ok(ByteView::new(self))
  }
}

#[cfg(feature = "alloc")]
impl AsByteView for alloc::boxed::Box<[u8]> {
  #[inline]
  fn byte_view(&self) -> Result<ByteView<'_>, InputError> {
    Ok(ByteView::new(self))
  }
}

#[cfg(feature = "alloc")]
impl AsByteView for alloc::string::String {
  #[inline]
  fn byte_view(&self) -> Result<ByteView<'_>, InputError> {
    Err(InputError::Text)
  }
}

/// A dynamically typed input, as handed over by a binding layer.
///
/// # Examples
///
/// ```
/// use crcfun::{AsByteView, ErrorKind, Value};
///
/// let ok = Value::Array { data: b"abcd", shape: &[4] };
/// assert_eq!(ok.byte_view().unwrap().as_bytes(), b"abcd");
///
/// let grid = Value::Array { data: b"abcd", shape: &[2, 2] };
/// assert_eq!(grid.byte_view().unwrap_err().kind(), ErrorKind::BufferShape);
///
/// let text = Value::Text("abcd");
/// assert_eq!(text.byte_view().unwrap_err().kind(), ErrorKind::TypeMismatch);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Value<'a> {
  /// Plain bytes.
  Bytes(&'a [u8]),
  /// Unencoded text. Always rejected.
  Text(&'a str),
  /// A contiguous buffer with a declared shape. Accepted only when it has at
  /// most one dimension.
  Array {
    /// Backing bytes.
    data: &'a [u8],
    /// Extent of each dimension.
    shape: &'a [usize],
  },
  /// Anything that does not expose bytes. Always rejected.
  Opaque {
    /// Name of the type, for the error message.
    type_name: &'static str,
  },
}

impl AsByteView for Value<'_> {
  fn byte_view(&self) -> Result<ByteView<'_>, InputError> {
    match *self {
      Self::Bytes(bytes) => Ok(ByteView::new(bytes)),
      Self::Text(_) => Err(InputError::Text),
      Self::Array { data, shape } if shape.len() <= 1 => Ok(ByteView::new(data)),
      Self::Array { shape, .. } => Err(InputError::Shape { ndim: shape.len() }),
      Self::Opaque { type_name } => Err(InputError::Unsupported { type_name }),
    }
  }
}

#[cfg(test)]
mod tests {
  use traits::ErrorKind;

  use super::*;

  #[test]
  fn slices_and_arrays() {
    assert_eq!(b"abc".byte_view().unwrap().as_bytes(), b"abc");
    assert_eq!((&b"abc"[..]).byte_view().unwrap().len(), 3);
    assert!([0u8; 0].byte_view().unwrap().is_empty());
  }

  #[test]
  fn text_is_rejected() {
    assert_eq!("abc".byte_view(), Err(InputError::Text));
    assert_eq!(Value::Text("").byte_view(), Err(InputError::Text));
  }

  #[cfg(feature = "alloc")]
  #[test]
  fn owned_types() {
    use alloc::{boxed::Box, string::String, vec};

    assert_eq!(vec![1u8, 2].byte_view().unwrap().as_bytes(), &[1, 2]);
    let boxed: Box<[u8]> = Box::new([9u8]);
    assert_eq!(boxed.byte_view().unwrap().as_bytes(), &[9]);
    assert_eq!(String::from("x").byte_view(), Err(InputError::Text));
  }

  #[test]
  fn scalar_and_flat_arrays_are_accepted() {
    let scalar = Value::Array { data: b"z", shape: &[] };
    assert_eq!(scalar.byte_view().unwrap().as_bytes(), b"z");
    let flat = Value::Array { data: b"xyz", shape: &[3] };
    assert_eq!(flat.byte_view().unwrap().as_bytes(), b"xyz");
  }

  #[test]
  fn multi_dimensional_is_rejected() {
    let err = Value::Array {
      data: &[0; 8],
      shape: &[2, 2, 2],
    }
    .byte_view()
    .unwrap_err();
    assert_eq!(err, InputError::Shape { ndim: 3 });
    assert_eq!(err.kind(), ErrorKind::BufferShape);
  }

  #[test]
  fn opaque_is_rejected() {
    let err = Value::Opaque { type_name: "float" }.byte_view().unwrap_err();
    assert_eq!(err, InputError::Unsupported { type_name: "float" });
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
  }
}
