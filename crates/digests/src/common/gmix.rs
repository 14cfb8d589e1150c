#![allow(clippy::indexing_slicing)] // Diagonal indices are fixed members of DIAGONALS

//! The additive-rotate-xor quarter round shared by BLAKE-256 and BLAKE2s.
//!
//! Both algorithms apply [`g`] over the same column/diagonal schedule and
//! draw message words through the same sigma permutation table; they differ
//! only in round count and in whether the message words are XORed with
//! round constants before entering the quarter round.

use crate::util::rotr32;

/// Message-word permutation per round, shared by the BLAKE family.
pub(crate) const SIGMA: [[usize; 16]; 10] = [
  [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
  [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
  [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
  [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
  [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
  [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
  [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
  [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
  [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
  [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// Working-vector indices for the four column and four diagonal G steps of
/// one double round. Step `i` consumes message words `sigma[2*i]` and
/// `sigma[2*i + 1]`.
pub(crate) const DIAGONALS: [(usize, usize, usize, usize); 8] = [
  (0, 4, 8, 12),
  (1, 5, 9, 13),
  (2, 6, 10, 14),
  (3, 7, 11, 15),
  (0, 5, 10, 15),
  (1, 6, 11, 12),
  (2, 7, 8, 13),
  (3, 4, 9, 14),
];

#[inline(always)]
pub(crate) fn g(v: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize, x: u32, y: u32) {
  v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
  v[d] = rotr32(v[d] ^ v[a], 16);
  v[c] = v[c].wrapping_add(v[d]);
  v[b] = rotr32(v[b] ^ v[c], 12);
  v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
  v[d] = rotr32(v[d] ^ v[a], 8);
  v[c] = v[c].wrapping_add(v[d]);
  v[b] = rotr32(v[b] ^ v[c], 7);
}
