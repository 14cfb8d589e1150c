#![no_main]

use digests::Blake256;
use libfuzzer_sys::fuzz_target;
use traits::Digest as _;

fn split_point(input: &[u8]) -> usize {
  if input.is_empty() {
    return 0;
  }
  (input[0] as usize) % (input.len() + 1)
}

// No oracle crate exists for BLAKE-1; this target cross-checks the two
// absorption paths (buffered streaming vs bulk one-shot) against each other.
fuzz_target!(|input: &[u8]| {
  let one_shot = Blake256::hash(input);

  let mut h = Blake256::new();
  let split = split_point(input);
  let (a, b) = input.split_at(split);
  h.update(a).unwrap();
  h.update(b).unwrap();
  h.finalize().unwrap();
  assert_eq!(one_shot, h.digest().unwrap());

  let mut bytewise = Blake256::new();
  for byte in input {
    bytewise.update(core::slice::from_ref(byte)).unwrap();
  }
  bytewise.finalize().unwrap();
  assert_eq!(one_shot, bytewise.digest().unwrap());
});
