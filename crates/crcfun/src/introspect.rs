//! Fold introspection.
//!
//! Describes, without running anything, what a fold does for a given width
//! and direction: which register byte meets the input, which way the register
//! shifts, and when the 24-bit mask is applied.
//!
//! # Examples
//!
//! ```
//! use crcfun::{Bits, Direction, EngineInfo, MaskTiming, introspect};
//!
//! let plan = introspect::plan(Bits::W24, Direction::Reflected);
//! assert_eq!(plan.operation_name(), "crc24r");
//! assert_eq!(plan.mask_timing(), MaskTiming::BeforeLoop);
//! println!("{plan}");
//!
//! println!("{}", EngineInfo::current());
//! ```

use core::fmt;

use crate::{Bits, Direction, MaskTiming, Width, WidthSpec};

/// Name of the only kernel: one table lookup per input byte.
pub const KERNEL_NAME: &str = "portable/bytewise";

/// What a fold does for one (width, direction) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoldPlan {
  bits: Bits,
  direction: Direction,
}

impl FoldPlan {
  /// Plan for `bits` folded in `direction`.
  #[inline]
  #[must_use]
  pub const fn new(bits: Bits, direction: Direction) -> Self {
    Self { bits, direction }
  }

  /// Width of the fold.
  #[inline]
  #[must_use]
  pub const fn bits(&self) -> Bits {
    self.bits
  }

  /// Direction of the fold.
  #[inline]
  #[must_use]
  pub const fn direction(&self) -> Direction {
    self.direction
  }

  /// Width policy.
  #[inline]
  #[must_use]
  pub const fn spec(&self) -> WidthSpec {
    self.bits.spec()
  }

  /// Bit position of the register byte XORed with each input byte.
  #[inline]
  #[must_use]
  pub const fn extract_shift(&self) -> u32 {
    self.spec().extract_shift(self.direction)
  }

  /// When the register is masked to its semantic width.
  #[inline]
  #[must_use]
  pub const fn mask_timing(&self) -> MaskTiming {
    self.spec().mask_timing(self.direction)
  }

  /// Name of the matching named operation (e.g. `crc64r`).
  #[must_use]
  pub const fn operation_name(&self) -> &'static str {
    match (self.bits, self.direction) {
      (Bits::W8, Direction::Normal) => "crc8",
      (Bits::W8, Direction::Reflected) => "crc8r",
      (Bits::W16, Direction::Normal) => "crc16",
      (Bits::W16, Direction::Reflected) => "crc16r",
      (Bits::W24, Direction::Normal) => "crc24",
      (Bits::W24, Direction::Reflected) => "crc24r",
      (Bits::W32, Direction::Normal) => "crc32",
      (Bits::W32, Direction::Reflected) => "crc32r",
      (Bits::W64, Direction::Normal) => "crc64",
      (Bits::W64, Direction::Reflected) => "crc64r",
    }
  }
}

impl fmt::Display for FoldPlan {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let spec = self.spec();
    let shift = self.extract_shift();
    write!(
      f,
      "{}: {} {}, u{} container, byte [{}..={}], shift {}",
      self.operation_name(),
      self.bits,
      self.direction,
      spec.container_bits,
      shift,
      shift + 7,
      if self.direction.is_reflected() { "right" } else { "left" },
    )?;
    match self.mask_timing() {
      MaskTiming::Never => Ok(()),
      timing => write!(f, ", mask {:#X} {timing}", spec.mask),
    }
  }
}

/// Plan for a run-time width.
#[inline]
#[must_use]
pub const fn plan(bits: Bits, direction: Direction) -> FoldPlan {
  FoldPlan::new(bits, direction)
}

/// Plan for a compile-time width.
#[inline]
#[must_use]
pub const fn plan_for<W: Width>(direction: Direction) -> FoldPlan {
  FoldPlan::new(W::BITS, direction)
}

/// Engine and host summary.
#[derive(Clone, Copy)]
pub struct EngineInfo {
  platform: platform::Description,
}

impl EngineInfo {
  /// Info for the current host. Runs the one-time environment check if it
  /// has not run yet.
  #[inline]
  #[must_use]
  pub fn current() -> Self {
    Self {
      platform: platform::describe(),
    }
  }

  /// Host description.
  #[inline]
  #[must_use]
  pub const fn platform(&self) -> platform::Description {
    self.platform
  }

  /// Kernel every fold runs.
  #[inline]
  #[must_use]
  pub const fn kernel_name(&self) -> &'static str {
    KERNEL_NAME
  }
}

impl fmt::Display for EngineInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} on {}", KERNEL_NAME, self.platform)
  }
}

impl fmt::Debug for EngineInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("EngineInfo")
      .field("kernel", &KERNEL_NAME)
      .field("platform", &format_args!("{}", self.platform))
      .finish()
  }
}
