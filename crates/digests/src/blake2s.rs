//! BLAKE2s-256 (RFC 7693).
//!
//! Portable, `no_std`, pure Rust implementation (unkeyed, no salt or
//! personalization).

#![allow(clippy::indexing_slicing)] // Compression schedule uses fixed indices

use traits::{Digest, SequenceError};

use crate::common::gmix::{DIAGONALS, SIGMA, g};
use crate::common::{BlockBuffer, Stage, drain_update_holdback};

const BLOCK_LEN: usize = 64;

// One block is enough: the final block is zero-filled in place, and the
// hold-back discipline keeps at most one full block buffered.
const BUF_CAP: usize = BLOCK_LEN;

const IV: [u32; 8] = [
  0x6a09_e667,
  0xbb67_ae85,
  0x3c6e_f372,
  0xa54f_f53a,
  0x510e_527f,
  0x9b05_688c,
  0x1f83_d9ab,
  0x5be0_cd19,
];

// Parameter block word 0: outlen=32, keylen=0, fanout=1, depth=1.
const PARAM0: u32 = 0x0101_0020;

#[derive(Clone)]
pub struct Blake2s256 {
  h: [u32; 8],
  buf: BlockBuffer<BUF_CAP>,
  bytes_hashed: u64,
  stage: Stage,
}

impl Default for Blake2s256 {
  #[inline]
  fn default() -> Self {
    let mut h = IV;
    h[0] ^= PARAM0;
    Self {
      h,
      buf: BlockBuffer::new(),
      bytes_hashed: 0,
      stage: Stage::Accumulating,
    }
  }
}

impl Blake2s256 {
  /// One compression. `t` is the byte counter including the genuine bytes of
  /// this block (padding zeros excluded); `is_last` inverts `v[14]` for the
  /// designated final block.
  fn compress_block(h: &mut [u32; 8], block: &[u8; BLOCK_LEN], t: u64, is_last: bool) {
    let (chunks, _) = block.as_chunks::<4>();
    let mut m = [0u32; 16];
    for (i, c) in chunks.iter().enumerate() {
      m[i] = u32::from_le_bytes(*c);
    }

    let mut v = [0u32; 16];
    v[..8].copy_from_slice(h);
    v[8..].copy_from_slice(&IV);
    v[12] ^= t as u32;
    v[13] ^= (t >> 32) as u32;
    if is_last {
      v[14] = !v[14];
    }

    for s in &SIGMA {
      for (i, &(a, b, c, d)) in DIAGONALS.iter().enumerate() {
        g(&mut v, a, b, c, d, m[s[2 * i]], m[s[2 * i + 1]]);
      }
    }

    for (i, hi) in h.iter_mut().enumerate() {
      *hi ^= v[i] ^ v[i + 8];
    }
  }

  /// Absorb whole non-final blocks, advancing the byte counter.
  #[inline]
  fn absorb(h: &mut [u32; 8], bytes_hashed: &mut u64, blocks: &[u8]) {
    debug_assert_eq!(blocks.len() % BLOCK_LEN, 0);
    let (chunks, _) = blocks.as_chunks::<BLOCK_LEN>();
    for block in chunks {
      *bytes_hashed = bytes_hashed.wrapping_add(BLOCK_LEN as u64);
      Self::compress_block(h, block, *bytes_hashed, false);
    }
  }

  #[inline]
  fn absorb_data(&mut self, data: &[u8]) {
    let h = &mut self.h;
    let counter = &mut self.bytes_hashed;
    drain_update_holdback(&mut self.buf, BLOCK_LEN, data, |blocks| {
      Self::absorb(h, counter, blocks);
    });
  }

  fn finalize_blocks(&mut self) {
    // Counter advances by the genuine byte count only; the zero fill that
    // completes the block is invisible to it.
    let len = self.buf.len();
    self.bytes_hashed = self.bytes_hashed.wrapping_add(len as u64);
    self.buf.fill_zero(BLOCK_LEN - len);

    let (blocks, _) = self.buf.as_bytes().as_chunks::<BLOCK_LEN>();
    for block in blocks {
      Self::compress_block(&mut self.h, block, self.bytes_hashed, true);
    }
    self.buf.clear();
  }

  #[inline]
  fn output(&self) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (i, word) in self.h.iter().copied().enumerate() {
      let offset = i * 4;
      out[offset..offset + 4].copy_from_slice(&word.to_le_bytes());
    }
    out
  }
}

impl Digest for Blake2s256 {
  const OUTPUT_SIZE: usize = 32;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  type Output = [u8; 32];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, data: &[u8]) -> Result<&mut Self, SequenceError> {
    if self.stage == Stage::Finalized {
      return Err(SequenceError::AlreadyFinalized);
    }
    self.absorb_data(data);
    Ok(self)
  }

  fn finalize(&mut self) -> Result<&mut Self, SequenceError> {
    if self.stage == Stage::Finalized {
      return Err(SequenceError::AlreadyFinalized);
    }
    self.finalize_blocks();
    self.stage = Stage::Finalized;
    Ok(self)
  }

  fn digest(&self) -> Result<Self::Output, SequenceError> {
    if self.stage == Stage::Accumulating {
      return Err(SequenceError::NotFinalized);
    }
    Ok(self.output())
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }

  fn hash(data: &[u8]) -> Self::Output {
    let mut h = Self::default();
    h.absorb_data(data);
    h.finalize_blocks();
    h.output()
  }
}
