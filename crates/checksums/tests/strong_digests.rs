//! Strong digest behaviour through the `StrongDigest` trait.

use checksums::strong::{Md5, StrongDigest, Xxh3_128, Xxh64};
use proptest::prelude::*;

fn to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write as _;
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(&mut out, "{byte:02x}");
    }
    out
}

fn streamed<D: StrongDigest>(seed: D::Seed, chunks: &[&[u8]]) -> D::Digest {
    let mut hasher = D::with_seed(seed);
    for chunk in chunks {
        hasher.update(chunk);
    }
    hasher.finalize()
}

#[test]
fn md5_rfc1321_vectors() {
    let vectors: [(&[u8], &str); 4] = [
        (b"", "d41d8cd98f00b204e9800998ecf8427e"),
        (b"a", "0cc175b9c0f1b6a831c399e269772661"),
        (b"abc", "900150983cd24fb0d6963f7d28e17f72"),
        (b"message digest", "f96b697d7cb7938d525a2f31aaf161d0"),
    ];
    for (input, expected) in vectors {
        assert_eq!(to_hex(&<Md5 as StrongDigest>::digest(input)), expected);
    }
}

#[test]
fn xxh64_empty_input_vector() {
    let digest = <Xxh64 as StrongDigest>::digest(b"");
    assert_eq!(u64::from_le_bytes(digest), 0xEF46_DB37_51D8_E999);
}

#[test]
fn seeds_change_xxhash_output() {
    assert_ne!(
        <Xxh64 as StrongDigest>::digest_with_seed(1, b"block"),
        <Xxh64 as StrongDigest>::digest_with_seed(2, b"block"),
    );
    assert_ne!(
        <Xxh3_128 as StrongDigest>::digest_with_seed(1, b"block"),
        <Xxh3_128 as StrongDigest>::digest_with_seed(2, b"block"),
    );
}

#[test]
fn digest_widths() {
    assert_eq!(Md5::DIGEST_LEN, 16);
    assert_eq!(Xxh64::DIGEST_LEN, 8);
    assert_eq!(Xxh3_128::DIGEST_LEN, 16);
}

proptest! {
    #[test]
    fn streaming_matches_one_shot(
        data in prop::collection::vec(any::<u8>(), 0..4_096),
        split in any::<prop::sample::Index>(),
        seed in any::<u64>(),
    ) {
        let at = split.index(data.len() + 1);
        let (head, tail) = data.split_at(at);

        prop_assert_eq!(streamed::<Md5>((), &[head, tail]), <Md5 as StrongDigest>::digest(&data));
        prop_assert_eq!(
            streamed::<Xxh64>(seed, &[head, tail]),
            <Xxh64 as StrongDigest>::digest_with_seed(seed, &data)
        );
        prop_assert_eq!(
            streamed::<Xxh3_128>(seed, &[head, tail]),
            <Xxh3_128 as StrongDigest>::digest_with_seed(seed, &data)
        );
    }
}
