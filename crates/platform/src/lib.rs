//! Host environment state for crcfun.
//!
//! This crate is the **single source of truth** for process-wide
//! initialization state. The folding engine stores registers in the native
//! unsigned integers `u8`, `u16`, `u32` and `u64` and reads lookup tables as
//! arrays of them, so it relies on those containers occupying exactly 1, 2, 4
//! and 8 bytes.
//!
//! # Lifecycle
//!
//! 1. **Compile time**: a const assertion refuses to build for a host where
//!    the layout is wrong.
//! 2. **Initialization**: [`get()`] checks the layout once and caches the
//!    result (`OnceLock` with `std`, an atomic flag without). A mismatch is
//!    fatal and panics; it is never reported per call.
//! 3. **Afterwards**: [`get()`] is a single load.
//!
//! # Example
//!
//! ```
//! let layout = platform::get();
//! assert_eq!(layout, platform::Layout::EXPECTED);
//! println!("{}", platform::describe());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod layout;

use core::fmt;

pub use layout::{EnvironmentError, Layout};

const _: () = assert!(Layout::NATIVE.is_supported(), "register containers have unexpected sizes");

// ─────────────────────────────────────────────────────────────────────────────
// Cached check
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "std")]
static LAYOUT: std::sync::OnceLock<Layout> = std::sync::OnceLock::new();

#[cfg(not(feature = "std"))]
static CHECKED: core::sync::atomic::AtomicBool = core::sync::atomic::AtomicBool::new(false);

/// Check the native container layout without caching.
///
/// # Errors
///
/// Returns [`EnvironmentError`] if any container has an unexpected size.
#[inline]
pub const fn check() -> Result<Layout, EnvironmentError> {
  Layout::NATIVE.verify()
}

/// Get the verified container layout, checking it on first use.
///
/// # Panics
///
/// Panics if the host's containers do not have the expected sizes. This is an
/// unrecoverable environment failure: nothing in the engine can run correctly
/// on such a host.
#[inline]
#[must_use]
pub fn get() -> Layout {
  #[cfg(feature = "std")]
  {
    *LAYOUT.get_or_init(verified)
  }

  #[cfg(not(feature = "std"))]
  {
    use core::sync::atomic::Ordering;

    if !CHECKED.load(Ordering::Acquire) {
      let _ = verified();
      CHECKED.store(true, Ordering::Release);
    }
    Layout::NATIVE
  }
}

/// Returns whether [`get()`] has already run its check in this process.
#[inline]
#[must_use]
pub fn is_initialized() -> bool {
  #[cfg(feature = "std")]
  {
    LAYOUT.get().is_some()
  }

  #[cfg(not(feature = "std"))]
  {
    CHECKED.load(core::sync::atomic::Ordering::Acquire)
  }
}

#[cold]
fn verified() -> Layout {
  match check() {
    Ok(layout) => layout,
    Err(e) => panic!("crcfun: {e}"),
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Description
// ─────────────────────────────────────────────────────────────────────────────

/// Printable summary of the host as seen by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Description {
  /// Target architecture name (`target_arch`).
  pub arch: &'static str,
  /// Pointer width in bits.
  pub pointer_bits: u32,
  /// Verified container layout.
  pub layout: Layout,
}

/// Describe the current host. Runs the one-time check if it has not run yet.
#[inline]
#[must_use]
pub fn describe() -> Description {
  Description {
    arch: arch_name(),
    pointer_bits: usize::BITS,
    layout: get(),
  }
}

const fn arch_name() -> &'static str {
  if cfg!(target_arch = "x86_64") {
    "x86_64"
  } else if cfg!(target_arch = "aarch64") {
    "aarch64"
  } else if cfg!(target_arch = "x86") {
    "x86"
  } else if cfg!(target_arch = "arm") {
    "arm"
  } else if cfg!(target_arch = "riscv64") {
    "riscv64"
  } else if cfg!(target_arch = "wasm32") {
    "wasm32"
  } else if cfg!(target_arch = "powerpc64") {
    "powerpc64"
  } else if cfg!(target_arch = "s390x") {
    "s390x"
  } else {
    "other"
  }
}

impl fmt::Display for Description {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} ({}-bit), {}", self.arch, self.pointer_bits, self.layout)
  }
}
