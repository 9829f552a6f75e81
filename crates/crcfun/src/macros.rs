//! Internal macros for the named fold operations.
//!
//! Every width × direction pair exposes the same fallible signature; only the
//! width type and the direction differ, so the ten entry points are stamped
//! out from one template over [`crate::fold_checked`].

/// Generate a named fold operation.
///
/// # Arguments
///
/// - `$name`: Function name (e.g., `crc32r`)
/// - `$width`: Width marker type (e.g., `W32`)
/// - `$direction`: `Normal` or `Reflected`
macro_rules! define_fold_op {
  (
    $(#[$outer:meta])*
    $vis:vis fn $name:ident => $width:ty, $direction:ident;
  ) => {
    $(#[$outer])*
    ///
    /// # Errors
    ///
    /// Returns [`FoldError::Table`](traits::FoldError::Table) if `table` does
    /// not hold exactly 256 entries, then
    /// [`FoldError::Input`](traits::FoldError::Input) if `data` cannot be
    /// viewed as bytes. Nothing is folded on error.
    #[inline]
    $vis fn $name<B: $crate::AsByteView + ?Sized>(
      data: &B,
      crc: <$width as $crate::Width>::Register,
      table: &[<$width as $crate::Width>::Register],
    ) -> Result<<$width as $crate::Width>::Register, traits::FoldError> {
      $crate::fold_checked::<$width, B>($crate::Direction::$direction, data, crc, table)
    }
  };
}
