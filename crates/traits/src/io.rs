//! I/O adapters for digest engines.
//!
//! [`DigestReader`] and [`DigestWriter`] wrap a `std::io` stream and feed
//! every byte actually transferred through a [`Digest`] engine, so hashing a
//! file is a plain `std::io::copy`.
//!
//! The wrapper owns its engine and never finalizes it;
//! [`DigestReader::digest`] finalizes a clone, so the stream can keep
//! flowing afterwards.

use std::io::{IoSlice, IoSliceMut, Read, Result, Write};

use crate::Digest;

fn finalized_output<D: Digest>(mut engine: D) -> D::Output {
  let out = engine.finalize().and_then(|e| e.digest());
  match out {
    Ok(out) => out,
    // The adapters never finalize the engine they own, so a fresh clone of
    // it finalizes exactly once.
    Err(_) => unreachable!("adapter engine is never finalized"),
  }
}

/// Wraps a [`Read`] and computes a digest of all bytes read through it.
///
/// Short reads are handled: only bytes actually returned by the inner
/// reader are absorbed.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
///
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
/// let mut reader = Sum::reader(Cursor::new(b"abc".to_vec()));
/// std::io::copy(&mut reader, &mut std::io::sink())?;
/// assert_eq!(reader.digest(), Sum::hash(b"abc"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct DigestReader<R, D: Digest> {
  inner: R,
  engine: D,
}

impl<R, D: Digest> DigestReader<R, D> {
  /// Create a new reader wrapper with a fresh engine.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self {
      inner,
      engine: D::new(),
    }
  }

  /// The digest of all bytes read so far.
  ///
  /// Finalizes a clone of the engine; the wrapper itself keeps accumulating.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    finalized_output(self.engine.clone())
  }

  /// Get a reference to the inner reader.
  #[inline]
  pub fn get_ref(&self) -> &R {
    &self.inner
  }

  /// Get a mutable reference to the inner reader.
  ///
  /// Bytes read through this reference bypass the engine.
  #[inline]
  pub fn get_mut(&mut self) -> &mut R {
    &mut self.inner
  }

  /// Unwrap, returning the inner reader and the digest of everything read.
  #[inline]
  pub fn into_parts(self) -> (R, D::Output) {
    let out = finalized_output(self.engine);
    (self.inner, out)
  }
}

impl<R: Read, D: Digest> Read for DigestReader<R, D> {
  fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(data) = buf.get(..n) {
      // The wrapper never finalizes its own engine.
      let _ = self.engine.update(data);
    }
    Ok(n)
  }

  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> Result<usize> {
    let n = self.inner.read_vectored(bufs)?;
    let mut remaining = n;
    for buf in bufs {
      let filled = remaining.min(buf.len());
      if filled == 0 {
        break;
      }
      if let Some(data) = buf.get(..filled) {
        let _ = self.engine.update(data);
      }
      remaining -= filled;
    }
    Ok(n)
  }
}

/// Wraps a [`Write`] and computes a digest of all bytes written through it.
///
/// Only bytes accepted by the inner writer are absorbed, so short writes
/// keep the digest aligned with what actually reached the sink.
#[derive(Clone)]
pub struct DigestWriter<W, D: Digest> {
  inner: W,
  engine: D,
}

impl<W, D: Digest> DigestWriter<W, D> {
  /// Create a new writer wrapper with a fresh engine.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self {
      inner,
      engine: D::new(),
    }
  }

  /// The digest of all bytes written so far.
  ///
  /// Finalizes a clone of the engine; the wrapper itself keeps accumulating.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    finalized_output(self.engine.clone())
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn get_ref(&self) -> &W {
    &self.inner
  }

  /// Get a mutable reference to the inner writer.
  ///
  /// Bytes written through this reference bypass the engine.
  #[inline]
  pub fn get_mut(&mut self) -> &mut W {
    &mut self.inner
  }

  /// Unwrap, returning the inner writer and the digest of everything written.
  #[inline]
  pub fn into_parts(self) -> (W, D::Output) {
    let out = finalized_output(self.engine);
    (self.inner, out)
  }
}

impl<W: Write, D: Digest> Write for DigestWriter<W, D> {
  fn write(&mut self, buf: &[u8]) -> Result<usize> {
    let n = self.inner.write(buf)?;
    if let Some(data) = buf.get(..n) {
      let _ = self.engine.update(data);
    }
    Ok(n)
  }

  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> Result<usize> {
    let n = self.inner.write_vectored(bufs)?;
    let mut remaining = n;
    for buf in bufs {
      let written = remaining.min(buf.len());
      if written == 0 {
        break;
      }
      if let Some(data) = buf.get(..written) {
        let _ = self.engine.update(data);
      }
      remaining -= written;
    }
    Ok(n)
  }

  fn flush(&mut self) -> Result<()> {
    self.inner.flush()
  }
}
