//! Shared streaming-engine machinery.
//!
//! Every algorithm here is the same skeleton: a [`BlockBuffer`] carrying the
//! partial trailing block, a compression transform absorbing whole blocks,
//! and a padding rule applied at finalize. The two drain disciplines below
//! cover all three algorithms; the compression transforms stay in their own
//! modules.

mod block;
pub(crate) mod gmix;

pub(crate) use block::BlockBuffer;

/// Engine lifecycle. `Accumulating -> Finalized` exactly once per reset cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Stage {
  Accumulating,
  Finalized,
}

/// Streaming drain for algorithms whose final block is only distinguished by
/// its padding (MD4, BLAKE-256): fill the partial buffer, absorb it the
/// moment it completes, bulk-absorb the block-aligned middle of `data`
/// without copying, and buffer the tail.
///
/// `absorb` is called with a whole number of blocks. At return the buffer
/// holds strictly less than one block.
pub(crate) fn drain_update<const CAP: usize>(
  buf: &mut BlockBuffer<CAP>,
  block_len: usize,
  mut data: &[u8],
  mut absorb: impl FnMut(&[u8]),
) {
  if data.is_empty() {
    return;
  }

  if !buf.is_empty() {
    let take = core::cmp::min(block_len - buf.len(), data.len());
    let (head, rest) = data.split_at(take);
    buf.append(head);
    data = rest;

    if buf.len() < block_len {
      return;
    }
    absorb(buf.as_bytes());
    buf.clear();
  }

  let aligned = data.len() - (data.len() % block_len);
  let (blocks, tail) = data.split_at(aligned);
  if !blocks.is_empty() {
    absorb(blocks);
  }
  if !tail.is_empty() {
    buf.append(tail);
  }
}

/// Streaming drain for algorithms that must flag their final block at
/// compression time (BLAKE2s): identical to [`drain_update`], except the
/// last full block is held back in the buffer until more input proves it is
/// not the final one. The buffer may therefore hold exactly one full block
/// between calls.
pub(crate) fn drain_update_holdback<const CAP: usize>(
  buf: &mut BlockBuffer<CAP>,
  block_len: usize,
  mut data: &[u8],
  mut absorb: impl FnMut(&[u8]),
) {
  if data.is_empty() {
    return;
  }

  if !buf.is_empty() {
    let take = core::cmp::min(block_len - buf.len(), data.len());
    let (head, rest) = data.split_at(take);
    buf.append(head);
    data = rest;

    if buf.len() == block_len && !data.is_empty() {
      absorb(buf.as_bytes());
      buf.clear();
    }
  }

  let aligned = data.len() - (data.len() % block_len);
  if aligned != 0 {
    let (full, rest) = data.split_at(aligned);
    if rest.is_empty() {
      // Hold back the last full block for finalization.
      let (bulk, last) = full.split_at(aligned - block_len);
      if !bulk.is_empty() {
        absorb(bulk);
      }
      buf.append(last);
    } else {
      absorb(full);
    }
    data = rest;
  }

  if !data.is_empty() {
    buf.append(data);
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;

  use super::*;

  const BLOCK: usize = 8;

  fn feed(chunks: &[&[u8]]) -> (Vec<u8>, Vec<u8>) {
    let mut buf = BlockBuffer::<BLOCK>::new();
    let mut absorbed = Vec::new();
    for chunk in chunks {
      drain_update(&mut buf, BLOCK, chunk, |blocks| absorbed.extend_from_slice(blocks));
    }
    (absorbed, buf.as_bytes().to_vec())
  }

  fn feed_holdback(chunks: &[&[u8]]) -> (Vec<u8>, Vec<u8>) {
    let mut buf = BlockBuffer::<BLOCK>::new();
    let mut absorbed = Vec::new();
    for chunk in chunks {
      drain_update_holdback(&mut buf, BLOCK, chunk, |blocks| absorbed.extend_from_slice(blocks));
    }
    (absorbed, buf.as_bytes().to_vec())
  }

  #[test]
  fn drains_eagerly_on_block_boundary() {
    let (absorbed, rest) = feed(&[b"01234567"]);
    assert_eq!(absorbed, b"01234567");
    assert!(rest.is_empty());
  }

  #[test]
  fn buffers_partial_tail() {
    let (absorbed, rest) = feed(&[b"0123456789ab"]);
    assert_eq!(absorbed, b"01234567");
    assert_eq!(rest, b"89ab");
  }

  #[test]
  fn carries_partial_across_calls() {
    let (absorbed, rest) = feed(&[b"012", b"345", b"6789abcdef", b"g"]);
    assert_eq!(absorbed, b"0123456789abcdef");
    assert_eq!(rest, b"g");
  }

  #[test]
  fn single_byte_feeding() {
    let data = b"0123456789abcdefgh";
    let chunks: Vec<&[u8]> = data.chunks(1).collect();
    let (absorbed, rest) = feed(&chunks);
    assert_eq!(absorbed, b"0123456789abcdef");
    assert_eq!(rest, b"gh");
  }

  #[test]
  fn holdback_keeps_last_full_block() {
    let (absorbed, rest) = feed_holdback(&[b"01234567"]);
    assert!(absorbed.is_empty());
    assert_eq!(rest, b"01234567");
  }

  #[test]
  fn holdback_releases_block_when_more_input_arrives() {
    let (absorbed, rest) = feed_holdback(&[b"01234567", b"89"]);
    assert_eq!(absorbed, b"01234567");
    assert_eq!(rest, b"89");
  }

  #[test]
  fn holdback_bulk_with_trailing_partial_absorbs_all_full_blocks() {
    let (absorbed, rest) = feed_holdback(&[b"0123456789abcdefXY"]);
    assert_eq!(absorbed, b"0123456789abcdef");
    assert_eq!(rest, b"XY");
  }

  #[test]
  fn holdback_exact_multiple_holds_only_the_last() {
    let (absorbed, rest) = feed_holdback(&[b"0123456789abcdef"]);
    assert_eq!(absorbed, b"01234567");
    assert_eq!(rest, b"89abcdef");
  }

  #[test]
  fn holdback_block_by_block() {
    let (absorbed, rest) = feed_holdback(&[b"01234567", b"89abcdef", b"ghijklmn"]);
    assert_eq!(absorbed, b"0123456789abcdef");
    assert_eq!(rest, b"ghijklmn");
  }
}
