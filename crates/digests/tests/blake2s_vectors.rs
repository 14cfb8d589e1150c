use digests::{Blake2s256, Digest as _, encode};

/// The official BLAKE2s KAT corpus hashes inputs of `n` bytes `00 01 02 ...`;
/// these rows are that corpus at the block-boundary lengths.
fn pattern(len: usize) -> Vec<u8> {
  (0..len).map(|i| i as u8).collect()
}

#[test]
fn rfc7693_vector() {
  assert_eq!(
    encode::hex(&Blake2s256::hash(b"abc")),
    "508c5e8c327c14e2e1a72ba34eeb452f37458b209ed63a294d999b4c86675982"
  );
}

#[test]
fn empty_input() {
  assert_eq!(
    encode::hex(&Blake2s256::hash(b"")),
    "69217a3079908094e11121d042354a7c1f55b6482ca1a51e1b250dfd1ed0eef9"
  );
}

#[test]
fn boundary_vectors() {
  let cases: &[(usize, &str)] = &[
    (1, "e34d74dbaf4ff4c6abd871cc220451d2ea2648846c7757fbaac82fe51ad64bea"),
    (31, "aba4ad9b480b9df3d08ca5e87b0c2440d4e4ea21224c2eb42cbae469d089b931"),
    (54, "23a196d3802ed3c1b384019a82325840d32f71950c4580b03445e0898e14053c"),
    (55, "f4495470f226c8c214be08fdfad4bc4a2a9dbea9136a210df0d4b64929e6fc14"),
    (56, "e290dd270b467f34ab1c002d340fa016257ff19e5833fdbbf2cb401c3b2817de"),
    (63, "e57cb79487dd57902432b250733813bd96a84efce59f650fac26e6696aefafc3"),
    (64, "56f34e8b96557e90c1f24b52d0c89d51086acf1b00f634cf1dde9233b8eaaa3e"),
    (65, "1b53ee94aaf34e4b159d48de352c7f0661d0a40edff95a0b1639b4090e974472"),
    (118, "9ccd53fe80be786aa984638462fb28afdf122b34d78f4687ec632bb19de2371a"),
    (119, "cbd48052c48d788466a3e8118c56c97fe146e5546faaf93e2bc3c47e45939753"),
    (127, "f18417b39d617ab1c18fdf91ebd0fc6d5516bb34cf39364037bce81fa04cecb1"),
    (128, "1fa877de67259d19863a2a34bcc6962a2b25fcbf5cbecd7ede8f1fa36688a796"),
    (129, "5bd169e67c82c2c2e98ef7008bdf261f2ddf30b1c00f9e7f275bb3e8a28dc9a2"),
    (256, "5fdeb59f681d975f52c8e69c5502e02a12a3afcc5836ba58f42784c439228781"),
    (1000, "b5f9d7799111edafc9326fbf667be98140b5e20ce5e151793c59125bf654ac18"),
  ];

  for &(len, expected) in cases {
    let input = pattern(len);
    assert_eq!(encode::hex(&Blake2s256::hash(&input)), expected, "len={len}");
  }
}

#[test]
fn million_a() {
  let input = vec![b'a'; 1_000_000];
  assert_eq!(
    encode::hex(&Blake2s256::hash(&input)),
    "bec0c0e6cde5b67acb73b81f79a67a4079ae1c60dac9d2661af18e9f8b50dfa5"
  );
}

// 5 GiB pushes the byte counter past 2^32, so the t1 half of the counter
// goes nonzero. Run with `--ignored` in release.
#[test]
#[ignore = "hashes 5 GiB"]
fn five_gigabytes_of_zeros() {
  let chunk = vec![0u8; 1 << 20];
  let mut h = Blake2s256::new();
  for _ in 0..5120 {
    h.update(&chunk).unwrap();
  }
  h.finalize().unwrap();
  assert_eq!(
    encode::hex(&h.digest().unwrap()),
    "97e0fa0129a302da9544440c32aadee50186dd675f0e0cc9e05bad80b9810d7e"
  );
}
