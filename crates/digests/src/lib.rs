//! Incremental cryptographic digests.
//!
//! This crate is `no_std` compatible and has zero library dependencies outside
//! the rsdigest workspace. Dev-only dependencies are used for oracle testing
//! and benchmarking.
//!
//! # Algorithms
//!
//! - [`Md4`] - MD4 (RFC 1320), 16-byte digest.
//! - [`Blake256`] - BLAKE-256 (SHA-3 finalist BLAKE), 32-byte digest.
//! - [`Blake2s256`] - BLAKE2s-256 (RFC 7693, unkeyed), 32-byte digest.
//!
//! All three share the same streaming engine skeleton: a bounded block
//! accumulator, an algorithm-specific compression transform, and an
//! algorithm-specific padding rule, behind the [`Digest`] lifecycle.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod blake256;
pub mod blake2s;
pub mod encode;
pub mod md4;

mod common;
mod util;

pub use blake256::Blake256;
pub use blake2s::Blake2s256;
pub use md4::Md4;
pub use traits::{Digest, SequenceError};
