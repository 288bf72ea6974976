//! ECDSA sign / verify / recover round trips on secp256k1.

use dashu::integer::{IBig, UBig};
use gost_elliptic::{big_from_hex, curves, ecdsa, CurveError, Signature};
use rand::rngs::mock::StepRng;
use sha3::{Digest, Sha3_256};

fn test_digest() -> Vec<u8> {
    // The reference message of the original test suite.
    Sha3_256::digest(b"Hello signature!").to_vec()
}

fn test_key() -> (UBig, gost_elliptic::AffinePoint) {
    let d = big_from_hex("52edb68fe48aff9b5c071f076285c53ac5b1a3501139bb2cb2922b7f3923d23e");
    let q = curves::SECP256K1
        .scalar_base_mult(&IBig::from(d.clone()))
        .unwrap();
    (d, q)
}

#[test]
fn public_key_matches_the_published_vector() {
    // Pins the derived Q to its independently published coordinates, so
    // the round-trip tests below cannot mask an engine bug that is
    // consistent between signing and verification.
    let (_, q) = test_key();
    assert_eq!(
        q,
        gost_elliptic::AffinePoint::new(
            big_from_hex("bfcc520f6d4f804ed5b4aaa30c483b2fc340767d0ffbba3d904de06d77442a97"),
            big_from_hex("c46c2712541b1fe3e84f97e2ea74326266b77a32e1a8f0e979989966f39f14e"),
        )
    );
}

#[test]
fn sign_verify_round_trip() {
    let curve = &*curves::SECP256K1;
    let (d, q) = test_key();
    let digest = test_digest();

    let mut rng = StepRng::new(0x1357_9bdf_2468_ace0, 0x0f0f_0f0f_0f0f_0f0f);
    let sig = ecdsa::sign(&d, &digest, curve, &mut rng).unwrap();

    assert!(sig.r >= UBig::ONE && sig.r < curve.n);
    assert!(sig.s >= UBig::ONE && sig.s < curve.n);
    assert!(ecdsa::verify(&digest, &sig, &q, curve));
}

#[test]
fn verification_rejects_a_tampered_digest() {
    let curve = &*curves::SECP256K1;
    let (d, q) = test_key();
    let digest = test_digest();

    let mut rng = StepRng::new(0xaaaa_bbbb_cccc_dddd, 0x1111_2222_3333_4444);
    let sig = ecdsa::sign(&d, &digest, curve, &mut rng).unwrap();

    let mut other = digest.clone();
    other[0] ^= 0x01;
    assert!(!ecdsa::verify(&other, &sig, &q, curve));
}

#[test]
fn verification_rejects_out_of_range_components() {
    let curve = &*curves::SECP256K1;
    let (d, q) = test_key();
    let digest = test_digest();

    let mut rng = StepRng::new(0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210);
    let sig = ecdsa::sign(&d, &digest, curve, &mut rng).unwrap();

    for bad in [
        Signature::new(UBig::ZERO, sig.s.clone()),
        Signature::new(sig.r.clone(), UBig::ZERO),
        Signature::new(curve.n.clone(), sig.s.clone()),
        Signature::new(sig.r.clone(), curve.n.clone()),
    ] {
        assert!(!ecdsa::verify(&digest, &bad, &q, curve));
    }
}

#[test]
fn recovery_returns_the_signing_key() {
    let curve = &*curves::SECP256K1;
    let (d, q) = test_key();
    let digest = test_digest();

    let mut rng = StepRng::new(0x1357_9bdf_2468_ace0, 0x0f0f_0f0f_0f0f_0f0f);
    let sig = ecdsa::sign(&d, &digest, curve, &mut rng).unwrap();

    let recovered = ecdsa::recover(&digest, &sig, &q, curve).unwrap();
    assert_eq!(recovered, Some(q));
}

#[test]
fn recovery_of_a_foreign_key_finds_no_match() {
    let curve = &*curves::SECP256K1;
    let (d, q) = test_key();
    let digest = test_digest();

    let mut rng = StepRng::new(0x1357_9bdf_2468_ace0, 0x0f0f_0f0f_0f0f_0f0f);
    let sig = ecdsa::sign(&d, &digest, curve, &mut rng).unwrap();

    // A different key cannot be recovered from this signature.
    let other = curve.scalar_base_mult(&IBig::from(12345)).unwrap();
    assert_ne!(other, q);
    assert_eq!(ecdsa::recover(&digest, &sig, &other, curve).unwrap(), None);
}

#[test]
fn recovery_fails_when_r_has_no_lift() {
    // On the tiny curve, x = 4 gives x³ + 7 ≡ 3 (mod 17), a non-residue.
    let curve = &*curves::TINY_EC;
    let sig = Signature::new(UBig::from_word(4), UBig::from_word(5));
    let q = curve.generator();
    assert_eq!(
        ecdsa::recover(&[0x01], &sig, &q, curve),
        Err(CurveError::Recovery)
    );
}

#[test]
fn recovery_validates_component_ranges() {
    let curve = &*curves::SECP256K1;
    let q = curve.generator();
    let sig = Signature::new(UBig::ZERO, UBig::from_word(1));
    assert_eq!(
        ecdsa::recover(&test_digest(), &sig, &q, curve),
        Err(CurveError::InvalidSignature)
    );
}

#[test]
fn entropy_mixed_signing_is_deterministic_per_entropy() {
    let curve = &*curves::SECP256K1;
    let (d, q) = test_key();
    let digest = test_digest();

    // Identical reader state means identical mixed entropy, hence an
    // identical nonce stream and signature.
    let mut rng_a = StepRng::new(0x42, 0);
    let mut rng_b = StepRng::new(0x42, 0);
    let sig_a = ecdsa::sign_with_entropy(&d, &digest, curve, &mut rng_a).unwrap();
    let sig_b = ecdsa::sign_with_entropy(&d, &digest, curve, &mut rng_b).unwrap();

    assert_eq!(sig_a, sig_b);
    assert!(ecdsa::verify(&digest, &sig_a, &q, curve));

    // Different entropy diverges.
    let mut rng_c = StepRng::new(0x43, 0);
    let sig_c = ecdsa::sign_with_entropy(&d, &digest, curve, &mut rng_c).unwrap();
    assert_ne!(sig_a, sig_c);
    assert!(ecdsa::verify(&digest, &sig_c, &q, curve));
}

#[test]
fn der_round_trip_of_a_real_signature() {
    let curve = &*curves::SECP256K1;
    let (d, q) = test_key();
    let digest = test_digest();

    let mut rng = StepRng::new(0x7777_8888_9999_aaaa, 0x0101_0101_0101_0101);
    let sig = ecdsa::sign(&d, &digest, curve, &mut rng).unwrap();

    let decoded = Signature::from_der(&sig.to_der()).unwrap();
    assert_eq!(decoded, sig);
    assert!(ecdsa::verify(&digest, &decoded, &q, curve));
}
