//! Property tests for the group laws, driven on the tiny curve where the
//! whole group is enumerable.

use dashu::integer::IBig;
use gost_elliptic::{curves, Curve};
use proptest::prelude::*;

proptest! {
    #[test]
    fn scalar_addition_is_homomorphic(a in 0u64..1000, b in 0u64..1000) {
        let curve = &*curves::TINY_EC;
        let lhs = curve.add(
            &curve.scalar_base_mult(&IBig::from(a)).unwrap(),
            &curve.scalar_base_mult(&IBig::from(b)).unwrap(),
        ).unwrap();
        let rhs = curve.scalar_base_mult(&IBig::from((a + b) % 18)).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn affine_and_jacobian_engines_agree(k in 0u64..10_000) {
        let curve = &*curves::TINY_EC;
        let affine = curve.scalar_base_mult(&IBig::from(k)).unwrap();
        let jacobian = curve.scalar_base_mult_bytes(&k.to_be_bytes()).unwrap();
        prop_assert_eq!(affine, jacobian);
    }

    #[test]
    fn negation_inverts_every_multiple(k in 1u64..18) {
        let curve = &*curves::TINY_EC;
        let p = curve.scalar_base_mult(&IBig::from(k)).unwrap();
        prop_assert_eq!(curve.negate(&curve.negate(&p)), p.clone());
        prop_assert!(curve.add(&p, &curve.negate(&p)).unwrap().is_infinity());
    }

    #[test]
    fn negative_scalars_mirror_positive_ones(k in 0i64..1000) {
        let curve = &*curves::TINY_EC;
        let pos = curve.scalar_base_mult(&IBig::from(k)).unwrap();
        let neg = curve.scalar_base_mult(&IBig::from(-k)).unwrap();
        prop_assert_eq!(curve.negate(&pos), neg);
    }
}
