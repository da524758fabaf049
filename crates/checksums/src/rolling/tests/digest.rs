use super::super::*;
use super::reference_digest;

#[test]
fn digest_matches_reference_for_known_input() {
    let data = b"rolling weak checksum";
    let digest = reference_digest(data);

    let mut checksum = RollingChecksum::new();
    checksum.update(data);
    assert_eq!(checksum.digest(), digest);
    assert_eq!(checksum.value(), digest.value());
}

#[test]
fn digest_default_matches_zero_constant() {
    let digest = RollingDigest::default();
    assert_eq!(digest, RollingDigest::ZERO);
    assert!(digest.is_empty());
    assert_eq!(digest.sum1(), 0);
    assert_eq!(digest.sum2(), 0);
}

#[test]
fn ten_byte_ramp_fixture() {
    let content: Vec<u8> = (0..10).collect();
    let digest = RollingDigest::from_bytes(&content);

    assert_eq!(digest.sum1(), 45);
    assert_eq!(digest.sum2(), 165);
    assert_eq!(digest.value(), 10_813_485);
    assert_eq!(digest.len(), 10);
}

#[test]
fn digest_round_trips_through_packed_value() {
    let sample = RollingDigest::new(0x1357, 0x2468, 4096);
    let unpacked = RollingDigest::from_value(sample.value(), sample.len());

    assert_eq!(unpacked, sample);
    assert_eq!(u32::from(unpacked), sample.value());
}

#[test]
fn checksum_restores_from_digest() {
    let data = b"resume from a stored digest";
    let digest = RollingDigest::from_bytes(&data[..8]);

    let mut restored = RollingChecksum::from(digest);
    restored.roll(data[0], data[8]).expect("window is seeded");

    assert_eq!(restored.digest(), RollingDigest::from_bytes(&data[1..9]));
}
