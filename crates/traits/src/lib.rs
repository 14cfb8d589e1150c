//! Core digest traits for rsdigest.
//!
//! This crate provides the foundational trait that all rsdigest algorithms
//! conform to. It is `no_std` compatible and has zero dependencies.
//!
//! # Lifecycle
//!
//! A [`Digest`] engine is an explicit two-state machine:
//!
//! | State | Legal operations |
//! |-------|------------------|
//! | Accumulating | `update`, `finalize`, `reset` |
//! | Finalized | `digest`, `reset` |
//!
//! Misuse (updating a finalized engine, finalizing twice, reading a digest
//! before finalize) surfaces as a [`SequenceError`] instead of silently
//! producing a wrong digest.
//!
//! # Error Types
//!
//! - [`SequenceError`] - lifecycle misuse of a digest engine
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

mod digest;
pub mod error;
#[cfg(feature = "std")]
pub mod io;

pub use digest::Digest;
pub use error::SequenceError;
