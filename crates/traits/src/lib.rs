//! Core traits for the crcfun folding engine.
//!
//! This crate provides the seams the engine is written against. It is
//! `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Implementors |
//! |-------|---------|--------------|
//! | [`Register`] | Native container holding a CRC register | `u8`, `u16`, `u32`, `u64` |
//!
//! # Error Types
//!
//! - [`InputError`] - The input could not be viewed as a flat byte sequence
//! - [`InvalidTable`] - The lookup table does not hold 256 entries of the right width
//! - [`FoldError`] - Either of the above, as returned by the public operations
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod register;

pub use error::{ErrorKind, FoldError, InputError, InvalidTable};
pub use register::Register;
