//! Native container layout.

use core::{fmt, mem::size_of};

/// Storage size, in bytes, of each register container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Layout {
  /// Size of `u8`.
  pub u8_bytes: usize,
  /// Size of `u16`.
  pub u16_bytes: usize,
  /// Size of `u32`.
  pub u32_bytes: usize,
  /// Size of `u64`.
  pub u64_bytes: usize,
}

impl Layout {
  /// The layout the engine requires.
  pub const EXPECTED: Self = Self {
    u8_bytes: 1,
    u16_bytes: 2,
    u32_bytes: 4,
    u64_bytes: 8,
  };

  /// The layout of the target being compiled for.
  pub const NATIVE: Self = Self {
    u8_bytes: size_of::<u8>(),
    u16_bytes: size_of::<u16>(),
    u32_bytes: size_of::<u32>(),
    u64_bytes: size_of::<u64>(),
  };

  /// Returns `true` if every container has its expected size.
  #[inline]
  #[must_use]
  pub const fn is_supported(&self) -> bool {
    self.u8_bytes == Self::EXPECTED.u8_bytes
      && self.u16_bytes == Self::EXPECTED.u16_bytes
      && self.u32_bytes == Self::EXPECTED.u32_bytes
      && self.u64_bytes == Self::EXPECTED.u64_bytes
  }

  /// Check this layout, returning it unchanged when supported.
  ///
  /// # Errors
  ///
  /// Returns [`EnvironmentError`] carrying this layout otherwise.
  #[inline]
  pub const fn verify(self) -> Result<Self, EnvironmentError> {
    if self.is_supported() {
      Ok(self)
    } else {
      Err(EnvironmentError { found: self })
    }
  }
}

impl fmt::Display for Layout {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "u8={} u16={} u32={} u64={}",
      self.u8_bytes, self.u16_bytes, self.u32_bytes, self.u64_bytes
    )
  }
}

/// A register container has an unexpected storage size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvironmentError {
  found: Layout,
}

impl EnvironmentError {
  /// The offending layout.
  #[inline]
  #[must_use]
  pub const fn found(&self) -> Layout {
    self.found
  }
}

impl fmt::Display for EnvironmentError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "one of the register containers is invalid: found {}, expected {}",
      self.found,
      Layout::EXPECTED
    )
  }
}

impl core::error::Error for EnvironmentError {}
