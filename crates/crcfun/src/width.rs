//! Width policies.
//!
//! Each supported width is described by a [`WidthSpec`]: its semantic bit
//! count, the native container it lives in, and when (if ever) the register
//! has to be masked back to the semantic width.
//!
//! | Width | Container | Mask | Normal | Reflected |
//! |-------|-----------|------|--------|-----------|
//! | 8  | `u8`  | `0xFF` | never | never |
//! | 16 | `u16` | `0xFFFF` | never | never |
//! | 24 | `u32` | `0xFFFFFF` | on return | before loop |
//! | 32 | `u32` | `0xFFFFFFFF` | never | never |
//! | 64 | `u64` | all ones | never | never |
//!
//! # The 24-bit asymmetry
//!
//! A 24-bit register carries a scratch byte (bits 24..31) in its `u32`
//! container. The two directions need that byte cleared at different times:
//!
//! - **Normal**: the extracted byte is bits 16..23 and the register shifts
//!   left, so scratch bits can only move further up and out. They never reach
//!   a table index. Masking once on return is sufficient and necessary.
//! - **Reflected**: the register shifts right, so anything in bits 24..31 lands
//!   in bits 16..23 after one step and corrupts later lookups. Masking once
//!   before the loop is sufficient (shifting right only clears high bits, and
//!   24-bit table entries never set them) and necessary.
//!
//! The register is never masked per step.

use core::fmt;

use traits::Register;

use crate::Direction;

/// When a register is masked to its semantic width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaskTiming {
  /// The container width is the semantic width; truncation is implicit.
  Never,
  /// Mask the initial register once, before the first byte is folded.
  BeforeLoop,
  /// Mask the final register once, after the last byte is folded.
  OnReturn,
}

impl fmt::Display for MaskTiming {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Never => "never",
      Self::BeforeLoop => "before loop",
      Self::OnReturn => "on return",
    })
  }
}

/// Compile-time description of one CRC width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WidthSpec {
  /// Semantic width in bits.
  pub bits: u32,
  /// Bit width of the native container.
  pub container_bits: u32,
  /// Mask selecting the semantic bits.
  pub mask: u64,
  /// Mask timing for [`Direction::Normal`].
  pub normal: MaskTiming,
  /// Mask timing for [`Direction::Reflected`].
  pub reflected: MaskTiming,
}

impl WidthSpec {
  const fn native(bits: u32) -> Self {
    Self {
      bits,
      container_bits: bits,
      mask: if bits >= 64 { u64::MAX } else { (1u64 << bits) - 1 },
      normal: MaskTiming::Never,
      reflected: MaskTiming::Never,
    }
  }

  /// Mask timing for `direction`.
  #[inline]
  #[must_use]
  pub const fn mask_timing(&self, direction: Direction) -> MaskTiming {
    match direction {
      Direction::Normal => self.normal,
      Direction::Reflected => self.reflected,
    }
  }

  /// Bit position of the register byte combined with each input byte in the
  /// normal direction (the top semantic byte).
  #[inline]
  #[must_use]
  pub const fn top_shift(&self) -> u32 {
    self.bits - 8
  }

  /// Bit position of the register byte combined with each input byte.
  #[inline]
  #[must_use]
  pub const fn extract_shift(&self, direction: Direction) -> u32 {
    match direction {
      Direction::Normal => self.top_shift(),
      Direction::Reflected => 0,
    }
  }

  /// Returns `true` when the container width equals the semantic width.
  #[inline]
  #[must_use]
  pub const fn is_native(&self) -> bool {
    self.bits == self.container_bits
  }

  /// Size of one table entry in bytes.
  #[inline]
  #[must_use]
  pub const fn entry_bytes(&self) -> usize {
    (self.container_bits / 8) as usize
  }
}

/// A CRC width, binding a [`WidthSpec`] to its register container.
pub trait Width: Copy + fmt::Debug + Send + Sync + 'static {
  /// Native container for the register and for table entries.
  type Register: Register;

  /// Policy for this width.
  const SPEC: WidthSpec;

  /// Runtime selector for this width.
  const BITS: Bits;
}

macro_rules! define_width {
  ($(#[$outer:meta])* $name:ident, $bits:ident, $reg:ty, $spec:expr) => {
    $(#[$outer])*
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct $name;

    impl Width for $name {
      type Register = $reg;
      const SPEC: WidthSpec = $spec;
      const BITS: Bits = Bits::$bits;
    }
  };
}

define_width!(
  /// 8-bit CRC in a `u8`.
  W8, W8, u8, WidthSpec::native(8)
);
define_width!(
  /// 16-bit CRC in a `u16`.
  W16, W16, u16, WidthSpec::native(16)
);
define_width!(
  /// 24-bit CRC carried in a `u32` with a scratch top byte.
  W24,
  W24,
  u32,
  WidthSpec {
    bits: 24,
    container_bits: 32,
    mask: 0x00FF_FFFF,
    normal: MaskTiming::OnReturn,
    reflected: MaskTiming::BeforeLoop,
  }
);
define_width!(
  /// 32-bit CRC in a `u32`.
  W32, W32, u32, WidthSpec::native(32)
);
define_width!(
  /// 64-bit CRC in a `u64`.
  W64, W64, u64, WidthSpec::native(64)
);

/// Runtime width selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bits {
  /// 8 bits.
  W8,
  /// 16 bits.
  W16,
  /// 24 bits.
  W24,
  /// 32 bits.
  W32,
  /// 64 bits.
  W64,
}

impl Bits {
  /// Every supported width, narrowest first.
  pub const ALL: [Self; 5] = [Self::W8, Self::W16, Self::W24, Self::W32, Self::W64];

  /// Policy for this width.
  #[inline]
  #[must_use]
  pub const fn spec(self) -> WidthSpec {
    match self {
      Self::W8 => W8::SPEC,
      Self::W16 => W16::SPEC,
      Self::W24 => W24::SPEC,
      Self::W32 => W32::SPEC,
      Self::W64 => W64::SPEC,
    }
  }

  /// Semantic width in bits.
  #[inline]
  #[must_use]
  pub const fn get(self) -> u32 {
    self.spec().bits
  }

  /// Look up a width by bit count.
  #[inline]
  #[must_use]
  pub const fn from_bits(bits: u32) -> Option<Self> {
    match bits {
      8 => Some(Self::W8),
      16 => Some(Self::W16),
      24 => Some(Self::W24),
      32 => Some(Self::W32),
      64 => Some(Self::W64),
      _ => None,
    }
  }
}

impl fmt::Display for Bits {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}-bit", self.get())
  }
}
