//! BLAKE-256 (SHA-3 finalist BLAKE, 256-bit variant).
//!
//! Portable, `no_std`, pure Rust implementation of the original BLAKE hash,
//! predecessor of BLAKE2. Big-endian wire format throughout.

#![allow(clippy::indexing_slicing)] // Compression schedule uses fixed indices

use traits::{Digest, SequenceError};

use crate::common::gmix::{DIAGONALS, SIGMA, g};
use crate::common::{BlockBuffer, Stage, drain_update};

const BLOCK_LEN: usize = 64;

// Padding worst case: remainders of 56..=63 bytes need a data block plus a
// separate marker-and-length block.
const BUF_CAP: usize = BLOCK_LEN * 2;

const ROUNDS: usize = 14;

const H0: [u32; 8] = [
  0x6a09_e667,
  0xbb67_ae85,
  0x3c6e_f372,
  0xa54f_f53a,
  0x510e_527f,
  0x9b05_688c,
  0x1f83_d9ab,
  0x5be0_cd19,
];

// First digits of pi; the first 8 seed the working vector, and each G step
// XORs a pair of them into its message words.
const C: [u32; 16] = [
  0x243f_6a88,
  0x85a3_08d3,
  0x1319_8a2e,
  0x0370_7344,
  0xa409_3822,
  0x299f_31d0,
  0x082e_fa98,
  0xec4e_6c89,
  0x4528_21e6,
  0x38d0_1377,
  0xbe54_66cf,
  0x34e9_0c6c,
  0xc0ac_29b7,
  0xc97c_50dd,
  0x3f84_d5b5,
  0xb547_0917,
];

#[derive(Clone)]
pub struct Blake256 {
  h: [u32; 8],
  buf: BlockBuffer<BUF_CAP>,
  bytes_hashed: u64,
  stage: Stage,
}

impl Default for Blake256 {
  #[inline]
  fn default() -> Self {
    Self {
      h: H0,
      buf: BlockBuffer::new(),
      bytes_hashed: 0,
      stage: Stage::Accumulating,
    }
  }
}

impl Blake256 {
  /// One compression. `t_bits` is the message-bit count through this block;
  /// blocks containing no message bytes skip the counter XOR entirely
  /// (`with_counter = false`), per the reference implementation's null-t
  /// rule for padding-only blocks.
  fn compress_block(h: &mut [u32; 8], block: &[u8; BLOCK_LEN], t_bits: u64, with_counter: bool) {
    let (chunks, _) = block.as_chunks::<4>();
    let mut m = [0u32; 16];
    for (i, c) in chunks.iter().enumerate() {
      m[i] = u32::from_be_bytes(*c);
    }

    let mut v = [0u32; 16];
    v[..8].copy_from_slice(h);
    v[8..].copy_from_slice(&C[..8]);
    if with_counter {
      let t0 = t_bits as u32;
      let t1 = (t_bits >> 32) as u32;
      v[12] ^= t0;
      v[13] ^= t0;
      v[14] ^= t1;
      v[15] ^= t1;
    }

    // 14 rounds; the sigma schedule wraps after 10.
    for r in 0..ROUNDS {
      let s = &SIGMA[r % SIGMA.len()];
      for (i, &(a, b, c, d)) in DIAGONALS.iter().enumerate() {
        let x = m[s[2 * i]] ^ C[s[2 * i + 1]];
        let y = m[s[2 * i + 1]] ^ C[s[2 * i]];
        g(&mut v, a, b, c, d, x, y);
      }
    }

    for (i, hi) in h.iter_mut().enumerate() {
      *hi ^= v[i] ^ v[i + 8];
    }
  }

  /// Absorb whole blocks of genuine message bytes, advancing the counter.
  #[inline]
  fn absorb(h: &mut [u32; 8], bytes_hashed: &mut u64, blocks: &[u8]) {
    debug_assert_eq!(blocks.len() % BLOCK_LEN, 0);
    let (chunks, _) = blocks.as_chunks::<BLOCK_LEN>();
    for block in chunks {
      *bytes_hashed = bytes_hashed.wrapping_add(BLOCK_LEN as u64);
      Self::compress_block(h, block, bytes_hashed.wrapping_mul(8), true);
    }
  }

  #[inline]
  fn absorb_data(&mut self, data: &[u8]) {
    let h = &mut self.h;
    let counter = &mut self.bytes_hashed;
    drain_update(&mut self.buf, BLOCK_LEN, data, |blocks| {
      Self::absorb(h, counter, blocks);
    });
  }

  fn finalize_blocks(&mut self) {
    let rem = self.buf.len();
    let total = self.bytes_hashed.wrapping_add(rem as u64);
    let bit_len = total.wrapping_mul(8);

    // Final layout: byte 55 of the last block carries the 0x01 end marker
    // (merged with the 0x80 start marker when the remainder is exactly 55),
    // bytes 56..64 the big-endian bit count, high half first.
    if rem <= 54 {
      self.buf.push(0x80);
      self.buf.fill_zero(54 - rem);
      self.buf.push(0x01);
    } else if rem == 55 {
      self.buf.push(0x81);
    } else {
      self.buf.push(0x80);
      self.buf.fill_zero(BLOCK_LEN - rem - 1);
      self.buf.fill_zero(55);
      self.buf.push(0x01);
    }
    self.buf.append(&bit_len.to_be_bytes());

    let (blocks, _) = self.buf.as_bytes().as_chunks::<BLOCK_LEN>();
    for (i, block) in blocks.iter().enumerate() {
      // Only the block holding the last message byte XORs the counter.
      let with_counter = i == 0 && rem > 0;
      Self::compress_block(&mut self.h, block, bit_len, with_counter);
    }
    self.buf.clear();
  }

  #[inline]
  fn output(&self) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (i, word) in self.h.iter().copied().enumerate() {
      let offset = i * 4;
      out[offset..offset + 4].copy_from_slice(&word.to_be_bytes());
    }
    out
  }
}

impl Digest for Blake256 {
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
