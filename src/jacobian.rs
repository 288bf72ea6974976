//! Jacobian-coordinate engine.
//!
//! A triple `(X, Y, Z)` stands for the affine point `(X/Z², Y/Z³)`; `Z = 0`
//! is the point at infinity. Addition follows add-2007-bl and doubling
//! dbl-2001-b, so whole scalar multiplications run without a single field
//! inversion until the final crossing back to affine coordinates.

use dashu::integer::UBig;

use crate::arith::{mod_inverse, sub_mod};
use crate::curve::{AffinePoint, CurveParams};
use crate::errors::CurveError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JacobianPoint {
    pub x: UBig,
    pub y: UBig,
    pub z: UBig,
}

impl JacobianPoint {
    pub fn infinity() -> Self {
        JacobianPoint {
            x: UBig::ZERO,
            y: UBig::ZERO,
            z: UBig::ZERO,
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.z == UBig::ZERO
    }

    /// Lifts an affine point with `Z = 1`; `O` maps to `Z = 0`.
    pub fn from_affine(point: &AffinePoint) -> Self {
        match point.coords() {
            None => JacobianPoint::infinity(),
            Some((x, y)) => JacobianPoint {
                x: x.clone(),
                y: y.clone(),
                z: UBig::ONE,
            },
        }
    }
}

/// Reverses the Jacobian transform: `x = X·Z⁻², y = Y·Z⁻³`.
pub(crate) fn to_affine(curve: &CurveParams, point: &JacobianPoint) -> Result<AffinePoint, CurveError> {
    if point.is_infinity() {
        return Ok(AffinePoint::Infinity);
    }

    let zinv = mod_inverse(&point.z, &curve.p)?;
    let zinv_sq = (&zinv * &zinv) % &curve.p;
    let x = (&point.x * &zinv_sq) % &curve.p;
    let y = (&point.y * &((&zinv_sq * &zinv) % &curve.p)) % &curve.p;
    Ok(AffinePoint::Point { x, y })
}

/// add-2007-bl. Every intermediate is kept in `[0, p)`; the subtractions go
/// through the canonical [`sub_mod`] rather than a trailing sign fix.
pub(crate) fn add(curve: &CurveParams, p1: &JacobianPoint, p2: &JacobianPoint) -> JacobianPoint {
    let p = &curve.p;

    if p1.is_infinity() {
        return p2.clone();
    }
    if p2.is_infinity() {
        return p1.clone();
    }

    let z1z1 = (&p1.z * &p1.z) % p;
    let z2z2 = (&p2.z * &p2.z) % p;

    let u1 = (&p1.x * &z2z2) % p;
    let u2 = (&p2.x * &z1z1) % p;
    let h = sub_mod(&u2, &u1, p);

    let s1 = (&((&p1.y * &p2.z) % p) * &z2z2) % p;
    let s2 = (&((&p2.y * &p1.z) % p) * &z1z1) % p;
    let r = sub_mod(&s2, &s1, p);

    if h == UBig::ZERO && r == UBig::ZERO {
        return double(curve, p1);
    }

    let i = {
        let t = (h.clone() << 1) % p;
        (&t * &t) % p
    };
    let j = (&h * &i) % p;
    let r = (r << 1) % p;
    let v = (&u1 * &i) % p;

    // x₃ = r² − j − 2v
    let x3 = sub_mod(
        &sub_mod(&((&r * &r) % p), &j, p),
        &((v.clone() << 1) % p),
        p,
    );

    // y₃ = r·(v − x₃) − 2·s₁·j
    let y3 = sub_mod(
        &((&r * &sub_mod(&v, &x3, p)) % p),
        &((((&s1 * &j) % p) << 1) % p),
        p,
    );

    // z₃ = ((z₁ + z₂)² − z₁² − z₂²)·h
    let z_sum = &p1.z + &p2.z;
    let mut z3 = (&z_sum * &z_sum) % p;
    z3 = sub_mod(&z3, &z1z1, p);
    z3 = sub_mod(&z3, &z2z2, p);
    z3 = (&z3 * &h) % p;

    JacobianPoint { x: x3, y: y3, z: z3 }
}

/// dbl-2001-b.
pub(crate) fn double(curve: &CurveParams, point: &JacobianPoint) -> JacobianPoint {
    let p = &curve.p;

    let delta = (&point.z * &point.z) % p;
    let gamma = (&point.y * &point.y) % p;

    // α = 3·(x − δ)·(x + δ)
    let alpha = {
        let t1 = sub_mod(&point.x, &delta, p);
        let t2 = (&point.x + &delta) % p;
        (UBig::from_word(3) * ((&t1 * &t2) % p)) % p
    };
    let beta = (&point.x * &gamma) % p;

    // x₃ = α² − 8β
    let x3 = sub_mod(&((&alpha * &alpha) % p), &((beta.clone() << 3) % p), p);

    // z₃ = (y + z)² − γ − δ
    let yz_sum = &point.y + &point.z;
    let mut z3 = (&yz_sum * &yz_sum) % p;
    z3 = sub_mod(&z3, &gamma, p);
    z3 = sub_mod(&z3, &delta, p);

    // y₃ = α·(4β − x₃) − 8γ²
    let y3 = sub_mod(
        &((&alpha * &sub_mod(&((beta << 2) % p), &x3, p)) % p),
        &((((&gamma * &gamma) % p) << 3) % p),
        p,
    );

    JacobianPoint { x: x3, y: y3, z: z3 }
}

/// Byte-wise double-and-add over a big-endian scalar, high bit first.
///
/// Variable time, but with a fixed double/add shape per byte length.
pub(crate) fn scalar_mult_bytes(
    curve: &CurveParams,
    point: &AffinePoint,
    k: &[u8],
) -> Result<AffinePoint, CurveError> {
    let base = JacobianPoint::from_affine(point);
    let mut acc = JacobianPoint::infinity();

    for &byte in k {
        let mut byte = byte;
        for _ in 0..8 {
            acc = double(curve, &acc);
            if byte & 0x80 == 0x80 {
                acc = add(curve, &base, &acc);
            }
            byte <<= 1;
        }
    }

    to_affine(curve, &acc)
}
