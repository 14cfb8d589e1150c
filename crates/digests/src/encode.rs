#![allow(clippy::indexing_slicing)] // Nibble values index a 16-byte table

//! Digest rendering helpers.
//!
//! Stateless conversions of an already-finalized digest; none of these touch
//! the streaming engine.

/// Render a digest as lowercase hex, two characters per byte, no separators.
#[cfg(feature = "alloc")]
#[must_use]
pub fn hex(digest: &[u8]) -> alloc::string::String {
  const TABLE: &[u8; 16] = b"0123456789abcdef";
  let mut out = alloc::string::String::with_capacity(digest.len() * 2);
  for &b in digest {
    out.push(TABLE[(b >> 4) as usize] as char);
    out.push(TABLE[(b & 0x0f) as usize] as char);
  }
  out
}

/// Pack the leading digest bytes into a `u64`, most significant first.
///
/// Digests longer than 8 bytes are truncated; shorter ones zero-extend.
#[must_use]
pub fn to_u64(digest: &[u8]) -> u64 {
  digest.iter().take(8).fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Pack the leading digest bytes into a `u128`, most significant first.
///
/// Digests longer than 16 bytes are truncated; shorter ones zero-extend.
#[must_use]
pub fn to_u128(digest: &[u8]) -> u128 {
  digest.iter().take(16).fold(0u128, |acc, &b| (acc << 8) | u128::from(b))
}
