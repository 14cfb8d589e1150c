//! Cryptographic digest trait.
//!
//! Streaming updates over an explicit two-state lifecycle: an engine
//! accumulates input, is finalized exactly once, and then only exposes its
//! digest until `reset` starts a fresh cycle.

use core::fmt::Debug;

use crate::error::SequenceError;

/// Cryptographic hash function producing a fixed-size digest.
///
/// Engines start in the accumulating state. [`finalize`](Self::finalize)
/// absorbs the algorithm's padding and transitions the engine to the
/// finalized state; from there only [`digest`](Self::digest) and
/// [`reset`](Self::reset) are legal. Finalize is deliberately not
/// idempotent: a second call without an intervening reset is a
/// [`SequenceError`], as is updating a finalized engine.
///
/// `update` and `finalize` return `&mut Self` on success so call sites can
/// chain:
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
/// h.update(b"hello ")?.update(b"world")?.finalize()?;
/// assert_eq!(h.digest()?, Sum::hash(b"hello world"));
/// # Ok::<(), SequenceError>(())
/// ```
pub trait Digest: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Compression block size in bytes.
  const BLOCK_SIZE: usize;

  /// The digest output type.
  ///
  /// Typically `[u8; N]`.
  type Output: Copy + Eq + Debug;

  /// Create a new engine in its initial (accumulating) state.
  #[must_use]
  fn new() -> Self;

  /// Absorb additional input.
  ///
  /// # Errors
  ///
  /// [`SequenceError::AlreadyFinalized`] if the engine has been finalized
  /// and not reset.
  fn update(&mut self, data: &[u8]) -> Result<&mut Self, SequenceError>;

  /// Absorb multiple non-contiguous buffers.
  ///
  /// # Errors
  ///
  /// [`SequenceError::AlreadyFinalized`] if the engine has been finalized
  /// and not reset.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) -> Result<&mut Self, SequenceError> {
    for buf in bufs {
      self.update(buf)?;
    }
    Ok(self)
  }

  /// Absorb `std::io::IoSlice` buffers.
  ///
  /// # Errors
  ///
  /// [`SequenceError::AlreadyFinalized`] if the engine has been finalized
  /// and not reset.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) -> Result<&mut Self, SequenceError> {
    for buf in bufs {
      self.update(buf)?;
    }
    Ok(self)
  }

  /// Absorb the algorithm's padding and transition to the finalized state.
  ///
  /// # Errors
  ///
  /// [`SequenceError::AlreadyFinalized`] on a second call without an
  /// intervening [`reset`](Self::reset).
  fn finalize(&mut self) -> Result<&mut Self, SequenceError>;

  /// Read the digest of a finalized engine.
  ///
  /// # Errors
  ///
  /// [`SequenceError::NotFinalized`] before [`finalize`](Self::finalize).
  fn digest(&self) -> Result<Self::Output, SequenceError>;

  /// Return the engine to its initial state, discarding all absorbed input.
  ///
  /// Legal in either lifecycle state; always succeeds.
  fn reset(&mut self);

  /// Compute the digest of `data` in one shot.
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output;

  /// Wrap a reader to compute a digest transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::DigestReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::DigestReader::new(inner)
  }

  /// Wrap a writer to compute a digest transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::DigestWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::DigestWriter::new(inner)
  }
}
