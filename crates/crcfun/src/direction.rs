//! Bit ordering of a fold.

use core::fmt;

/// Which end of the register meets each input byte.
///
/// - [`Normal`](Self::Normal) (MSB-first): the top byte of the register is
///   combined with the input byte and the register shifts left.
/// - [`Reflected`](Self::Reflected) (LSB-first): the bottom byte is combined
///   and the register shifts right. Used with bit-reversed polynomials.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
  /// MSB-first.
  #[default]
  Normal,
  /// LSB-first.
  Reflected,
}

impl Direction {
  /// Both directions, normal first.
  pub const ALL: [Self; 2] = [Self::Normal, Self::Reflected];

  /// Returns `true` for [`Reflected`](Self::Reflected).
  #[inline]
  #[must_use]
  pub const fn is_reflected(self) -> bool {
    matches!(self, Self::Reflected)
  }

  /// Suffix used in operation names (`crc32` vs `crc32r`).
  #[inline]
  #[must_use]
  pub const fn suffix(self) -> &'static str {
    match self {
      Self::Normal => "",
      Self::Reflected => "r",
    }
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Normal => "normal",
      Self::Reflected => "reflected",
    })
  }
}
