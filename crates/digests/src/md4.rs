//! MD4 (RFC 1320).
//!
//! Portable, `no_std`, pure Rust implementation. MD4 is cryptographically
//! broken; it is provided for interoperability with legacy formats, not for
//! new designs.

#![allow(clippy::indexing_slicing)] // Compression schedule uses fixed indices

use traits::{Digest, SequenceError};

use crate::common::{BlockBuffer, Stage, drain_update};
use crate::util::rotl32;

const BLOCK_LEN: usize = 64;

// Padding worst case: 0x80 + zeros + 8-byte length can spill into a second
// block when the trailing remainder is 56 bytes or more.
const BUF_CAP: usize = BLOCK_LEN * 2;

const H0: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

const ROUND2_K: u32 = 0x5a82_7999;
const ROUND3_K: u32 = 0x6ed9_eba1;

// Message-word order for rounds 2 and 3 (round 1 reads words in order) and
// the per-round left-rotation schedules.
const M2: [usize; 16] = [0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15];
const M3: [usize; 16] = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];
const S1: [u32; 4] = [3, 7, 11, 19];
const S2: [u32; 4] = [3, 5, 9, 13];
const S3: [u32; 4] = [3, 9, 11, 15];

#[derive(Clone)]
pub struct Md4 {
  state: [u32; 4],
  buf: BlockBuffer<BUF_CAP>,
  bytes_hashed: u64,
  stage: Stage,
}

impl Default for Md4 {
  #[inline]
  fn default() -> Self {
    Self {
      state: H0,
      buf: BlockBuffer::new(),
      bytes_hashed: 0,
      stage: Stage::Accumulating,
    }
  }
}

impl Md4 {
  #[inline(always)]
  fn compress_block(state: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
    let (chunks, _) = block.as_chunks::<4>();
    let mut x = [0u32; 16];
    for (i, c) in chunks.iter().enumerate() {
      x[i] = u32::from_le_bytes(*c);
    }

    let [mut a, mut b, mut c, mut d] = *state;

    // Each step updates one working word, then the roles rotate; 16 steps
    // bring the words back to their canonical positions.
    for (i, &w) in x.iter().enumerate() {
      let f = (b & (c ^ d)) ^ d;
      a = rotl32(a.wrapping_add(f).wrapping_add(w), S1[i % 4]);
      (a, b, c, d) = (d, a, b, c);
    }

    for (i, &k) in M2.iter().enumerate() {
      let g = (b & c) | ((b | c) & d);
      a = rotl32(a.wrapping_add(g).wrapping_add(x[k]).wrapping_add(ROUND2_K), S2[i % 4]);
      (a, b, c, d) = (d, a, b, c);
    }

    for (i, &k) in M3.iter().enumerate() {
      let h = b ^ c ^ d;
      a = rotl32(a.wrapping_add(h).wrapping_add(x[k]).wrapping_add(ROUND3_K), S3[i % 4]);
      (a, b, c, d) = (d, a, b, c);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
  }

  /// Absorb whole blocks of genuine message bytes, advancing the counter.
  #[inline]
  fn absorb(state: &mut [u32; 4], bytes_hashed: &mut u64, blocks: &[u8]) {
    debug_assert_eq!(blocks.len() % BLOCK_LEN, 0);
    let (chunks, _) = blocks.as_chunks::<BLOCK_LEN>();
    for block in chunks {
      Self::compress_block(state, block);
    }
    *bytes_hashed = bytes_hashed.wrapping_add(blocks.len() as u64);
  }

  #[inline]
  fn absorb_data(&mut self, data: &[u8]) {
    let state = &mut self.state;
    let counter = &mut self.bytes_hashed;
    drain_update(&mut self.buf, BLOCK_LEN, data, |blocks| {
      Self::absorb(state, counter, blocks);
    });
  }

  fn finalize_blocks(&mut self) {
    let total = self.bytes_hashed.wrapping_add(self.buf.len() as u64);
    let bit_len = total.wrapping_mul(8);

    self.buf.push(0x80);
    let fill = self.buf.len() % BLOCK_LEN;
    self.buf.fill_zero((56 + BLOCK_LEN - fill) % BLOCK_LEN);
    self.buf.append(&bit_len.to_le_bytes());

    // Padding bytes never touch the counter.
    let (blocks, _) = self.buf.as_bytes().as_chunks::<BLOCK_LEN>();
    for block in blocks {
      Self::compress_block(&mut self.state, block);
    }
    self.buf.clear();
  }

  #[inline]
  fn output(&self) -> [u8; 16] {
    let mut out = [0u8; 16];
    for (i, word) in self.state.iter().copied().enumerate() {
      let offset = i * 4;
      out[offset..offset + 4].copy_from_slice(&word.to_le_bytes());
    }
    out
  }
}

impl Digest for Md4 {
  const OUTPUT_SIZE: usize = 16;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  type Output = [u8; 16];

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
