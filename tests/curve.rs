//! Group-law and engine-agreement tests over the named curves.

use dashu::integer::{IBig, UBig};
use gost_elliptic::{big_from_hex, curves, AffinePoint, Curve};

#[test]
fn tiny_curve_walks_its_whole_group() {
    let curve = &*curves::TINY_EC;
    let g = curve.generator();

    let mut acc = AffinePoint::Infinity;
    for k in 1u64..=18 {
        acc = curve.add(&acc, &g).unwrap();
        assert!(curve.is_on_curve(&acc), "k = {k}");
        assert_eq!(acc, curve.scalar_base_mult(&IBig::from(k)).unwrap(), "k = {k}");
    }
    // The 18th multiple closes the cycle.
    assert_eq!(acc, AffinePoint::Infinity);
}

#[test]
fn tiny_curve_known_multiples() {
    let curve = &*curves::TINY_EC;
    let pt = |x: u64, y: u64| AffinePoint::new(UBig::from_word(x), UBig::from_word(y));

    assert_eq!(curve.scalar_base_mult(&IBig::from(1)).unwrap(), pt(15, 13));
    assert_eq!(curve.scalar_base_mult(&IBig::from(2)).unwrap(), pt(2, 10));
    assert_eq!(curve.scalar_base_mult(&IBig::from(3)).unwrap(), pt(8, 3));
    assert_eq!(curve.scalar_base_mult(&IBig::from(17)).unwrap(), pt(15, 4));
    assert_eq!(
        curve.scalar_base_mult(&IBig::from(18)).unwrap(),
        AffinePoint::Infinity
    );
}

#[test]
fn tiny_curve_membership() {
    let curve = &*curves::TINY_EC;
    assert!(curve.is_on_curve(&AffinePoint::new(UBig::from_word(2), UBig::from_word(10))));
    assert!(!curve.is_on_curve(&AffinePoint::new(UBig::from_word(2), UBig::from_word(11))));
    // Coordinates at or above p are rejected outright.
    assert!(!curve.is_on_curve(&AffinePoint::new(UBig::from_word(17), UBig::from_word(0))));
    assert!(curve.is_on_curve(&AffinePoint::Infinity));
}

#[test]
fn secp256k1_doubled_generator_matches_the_published_point() {
    let curve = &*curves::SECP256K1;
    let two_g = curve.double(&curve.generator()).unwrap();
    assert_eq!(
        two_g,
        AffinePoint::new(
            big_from_hex("c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"),
            big_from_hex("1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a"),
        )
    );
}

#[test]
fn secp256k1_order_times_g_is_identity() {
    let curve = &*curves::SECP256K1;
    // Drive the full Jacobian ladder rather than the k mod n shortcut.
    let n_bytes: Vec<u8> = curve.n.to_be_bytes().into();
    assert_eq!(
        curve.scalar_base_mult_bytes(&n_bytes).unwrap(),
        AffinePoint::Infinity
    );
}

#[test]
fn addition_is_homomorphic_in_the_scalar() {
    let curve = &*curves::TINY_EC;
    for a in 0u64..19 {
        for b in 0u64..19 {
            let lhs = curve
                .add(
                    &curve.scalar_base_mult(&IBig::from(a)).unwrap(),
                    &curve.scalar_base_mult(&IBig::from(b)).unwrap(),
                )
                .unwrap();
            let rhs = curve.scalar_base_mult(&IBig::from((a + b) % 18)).unwrap();
            assert_eq!(lhs, rhs, "a = {a}, b = {b}");
        }
    }
}

#[test]
fn engines_agree_on_secp256k1() {
    let curve = &*curves::SECP256K1;
    let d = big_from_hex("52edb68fe48aff9b5c071f076285c53ac5b1a3501139bb2cb2922b7f3923d23e");

    let affine = curve.scalar_base_mult(&IBig::from(d.clone())).unwrap();
    let d_bytes: Vec<u8> = d.to_be_bytes().into();
    let jacobian = curve.scalar_base_mult_bytes(&d_bytes).unwrap();

    assert!(curve.is_on_curve(&affine));
    assert_eq!(affine, jacobian);
}

#[test]
fn engines_agree_on_a_gost_curve() {
    let curve = &*curves::GOST_EX1;
    for k in 1u64..32 {
        let affine = curve.scalar_base_mult(&IBig::from(k)).unwrap();
        let jacobian = curve.scalar_base_mult_bytes(&k.to_be_bytes()).unwrap();
        assert_eq!(affine, jacobian, "k = {k}");
    }
}

#[test]
fn scalar_mult_of_identity_is_identity() {
    let curve = &*curves::SECP256K1;
    assert_eq!(
        curve
            .scalar_mult(&AffinePoint::Infinity, &IBig::from(12345))
            .unwrap(),
        AffinePoint::Infinity
    );
}
