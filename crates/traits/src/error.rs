//! Error types for digest engines.
//!
//! Minimal, copyable error types. Individual crates may define additional
//! errors as needed.

use core::fmt;

/// A digest operation was called in the wrong lifecycle state.
///
/// A digest engine moves `Accumulating -> Finalized` exactly once per
/// `reset` cycle. Calling [`update`](crate::Digest::update) or
/// [`finalize`](crate::Digest::finalize) on a finalized engine, or
/// [`digest`](crate::Digest::digest) on one that has not been finalized,
/// returns this error rather than silently mixing padding and input.
///
/// # Examples
///
/// ```
/// use traits::{Digest, SequenceError};
/// # #[derive(Clone, Default)]
/// # struct Sum { acc: u8, done: bool }
/// # impl Digest for Sum {
/// #   const OUTPUT_SIZE: usize = 1;
/// #   const BLOCK_SIZE: usize = 1;
/// #   type Output = [u8; 1];
/// #   fn new() -> Self { Self::default() }
/// #   fn update(&mut self, data: &[u8]) -> Result<&mut Self, SequenceError> {
/// #     if self.done { return Err(SequenceError::AlreadyFinalized); }
/// #     self.acc = data.iter().fold(self.acc, |a, &b| a.wrapping_add(b));
/// #     Ok(self)
/// #   }
/// #   fn finalize(&mut self) -> Result<&mut Self, SequenceError> {
/// #     if self.done { return Err(SequenceError::AlreadyFinalized); }
/// #     self.done = true;
/// #     Ok(self)
/// #   }
/// #   fn digest(&self) -> Result<[u8; 1], SequenceError> {
/// #     if !self.done { return Err(SequenceError::NotFinalized); }
/// #     Ok([self.acc])
/// #   }
/// #   fn reset(&mut self) { *self = Self::default(); }
/// #   fn hash(data: &[u8]) -> [u8; 1] {
/// #     [data.iter().fold(0u8, |a, &b| a.wrapping_add(b))]
/// #   }
/// # }
///
/// let mut h = Sum::new();
/// assert_eq!(h.digest(), Err(SequenceError::NotFinalized));
/// h.update(b"abc")?.finalize()?;
/// assert_eq!(h.update(b"more").err(), Some(SequenceError::AlreadyFinalized));
/// assert_eq!(h.finalize().err(), Some(SequenceError::AlreadyFinalized));
/// h.reset();
/// h.update(b"abc")?;
/// # Ok::<(), SequenceError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SequenceError {
  /// `update` or `finalize` was called after `finalize`.
  ///
  /// Only `digest` and `reset` are legal on a finalized engine.
  AlreadyFinalized,
  /// `digest` was requested before `finalize`.
  NotFinalized,
}

impl fmt::Display for SequenceError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::AlreadyFinalized => f.write_str("digest engine already finalized; reset before further input"),
      Self::NotFinalized => f.write_str("digest engine not finalized"),
    }
  }
}

impl core::error::Error for SequenceError {}
