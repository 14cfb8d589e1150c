//! Incremental cryptographic digests, pure Rust.
//!
//! `rsdigest` provides streaming MD4, BLAKE-256, and BLAKE2s-256 behind one
//! explicit-lifecycle [`Digest`] trait. Zero dependencies, `no_std`
//! compatible.
//!
//! # Quick Start
//!
//! ```
//! use rsdigest::{Blake2s256, Digest, Md4, encode};
//!
//! // One-shot computation
//! let digest = Md4::hash(b"abc");
//! assert_eq!(encode::hex(&digest), "a448017aaf21d8525fc10ae87aa6729d");
//!
//! // Streaming computation
//! let mut hasher = Blake2s256::new();
//! hasher.update(b"hello ")?.update(b"world")?.finalize()?;
//! assert_eq!(hasher.digest()?, Blake2s256::hash(b"hello world"));
//!
//! // A finalized engine refuses further input until reset.
//! assert!(hasher.update(b"more").is_err());
//! hasher.reset();
//! # Ok::<(), rsdigest::SequenceError>(())
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | I/O adapters ([`DigestReader`], [`DigestWriter`]) |
//! | `alloc` | Yes | [`encode::hex`] (implied by `std`) |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! rsdigest = { version = "0.1", default-features = false }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub use digests::{Blake256, Blake2s256, Md4, encode};
pub use traits::{Digest, SequenceError};

#[cfg(feature = "std")]
pub use traits::io::{DigestReader, DigestWriter};
