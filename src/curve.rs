use dashu::base::{BitTest, Sign};
use dashu::integer::{IBig, UBig};

use crate::arith::{mod_inverse, mod_sqrt, sub_mod};
use crate::errors::CurveError;
use crate::jacobian;

/// A point on a short Weierstrass curve, or the group identity.
///
/// The identity gets its own variant; the `(0, 0)` sentinel of the wire
/// formats only appears at encoding boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffinePoint {
    /// The point at infinity `O`, additive identity of the curve group.
    Infinity,
    Point { x: UBig, y: UBig },
}

impl AffinePoint {
    pub fn new(x: UBig, y: UBig) -> Self {
        AffinePoint::Point { x, y }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, AffinePoint::Infinity)
    }

    /// Coordinates of a finite point, `None` for `O`.
    pub fn coords(&self) -> Option<(&UBig, &UBig)> {
        match self {
            AffinePoint::Infinity => None,
            AffinePoint::Point { x, y } => Some((x, y)),
        }
    }

    /// The `x`-coordinate, with `O` reading as zero.
    pub fn x(&self) -> UBig {
        match self {
            AffinePoint::Infinity => UBig::ZERO,
            AffinePoint::Point { x, .. } => x.clone(),
        }
    }

    /// The `y`-coordinate, with `O` reading as zero.
    pub fn y(&self) -> UBig {
        match self {
            AffinePoint::Infinity => UBig::ZERO,
            AffinePoint::Point { y, .. } => y.clone(),
        }
    }
}

/// Parameters of a short Weierstrass curve `y² = x³ + a·x + b (mod p)`
/// together with a generic, variable-time implementation of [`Curve`].
///
/// Curves are trusted data: no discriminant or cofactor validation happens
/// here. The named constants in [`crate::curves`] hold by construction that
/// `(gx, gy)` lies on the curve and generates a subgroup of order `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParams {
    /// Order of the underlying prime field, `p > 3`.
    pub p: UBig,
    /// Order of the base-point subgroup.
    pub n: UBig,
    /// Curve coefficient `a`.
    pub a: UBig,
    /// Curve coefficient `b`.
    pub b: UBig,
    /// Base point x-coordinate.
    pub gx: UBig,
    /// Base point y-coordinate.
    pub gy: UBig,
    /// Bit length of the underlying field; sizes random buffers.
    pub bit_size: usize,
    /// Canonical name of the curve.
    pub name: &'static str,
}

/// The capability set of a curve implementation.
///
/// [`CurveParams`] provides the generic engines; a hand-tuned curve (say, a
/// constant-time secp256k1) can stand in anywhere the trait is accepted.
pub trait Curve {
    fn params(&self) -> &CurveParams;

    /// Reports whether `point` lies on the curve. `O` is always on curve.
    fn is_on_curve(&self, point: &AffinePoint) -> bool;

    /// Group addition.
    fn add(&self, p1: &AffinePoint, p2: &AffinePoint) -> Result<AffinePoint, CurveError>;

    /// Point doubling.
    fn double(&self, point: &AffinePoint) -> Result<AffinePoint, CurveError>;

    /// `k · point` for a signed integer scalar, affine double-and-add.
    fn scalar_mult(&self, point: &AffinePoint, k: &IBig) -> Result<AffinePoint, CurveError>;

    /// `k · G`.
    fn scalar_base_mult(&self, k: &IBig) -> Result<AffinePoint, CurveError>;

    /// `k · point` with `k` as big-endian bytes, through the Jacobian engine.
    fn scalar_mult_bytes(&self, point: &AffinePoint, k: &[u8]) -> Result<AffinePoint, CurveError>;

    /// `k · G` with `k` as big-endian bytes, through the Jacobian engine.
    fn scalar_base_mult_bytes(&self, k: &[u8]) -> Result<AffinePoint, CurveError>;

    /// `k⁻¹ mod n`. Hand-tuned curves can override this with a faster
    /// scalar inverse.
    fn inverse(&self, k: &UBig) -> Result<UBig, CurveError> {
        mod_inverse(k, &self.params().n)
    }

    /// `s₁·G + s₂·point`, both scalars as big-endian bytes: the shape
    /// every verification identity needs. The default runs two Jacobian
    /// ladders and one affine addition; hand-tuned curves can override it
    /// with a proper multi-scalar multiplication.
    fn combined_mult(
        &self,
        point: &AffinePoint,
        s1: &[u8],
        s2: &[u8],
    ) -> Result<AffinePoint, CurveError> {
        let s1_g = self.scalar_base_mult_bytes(s1)?;
        let s2_p = self.scalar_mult_bytes(point, s2)?;
        self.add(&s1_g, &s2_p)
    }
}

impl CurveParams {
    /// The base point `G`.
    pub fn generator(&self) -> AffinePoint {
        AffinePoint::Point {
            x: self.gx.clone(),
            y: self.gy.clone(),
        }
    }

    /// Right-hand side of the curve equation at `x`, reduced mod `p`.
    ///
    /// The NIST prime curves fix `a = p − 3`; for those the `x³ − 3x + b`
    /// shape is used, everything else takes the generic `x³ + a·x + b`.
    pub(crate) fn polynomial(&self, x: &UBig) -> UBig {
        let x3 = (&((x * x) % &self.p) * x) % &self.p;
        if self.a == &self.p - UBig::from_word(3) {
            let three_x = (UBig::from_word(3) * x) % &self.p;
            (sub_mod(&x3, &three_x, &self.p) + &self.b) % &self.p
        } else {
            (x3 + (&self.a * x) % &self.p + &self.b) % &self.p
        }
    }

    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        match point {
            AffinePoint::Infinity => true,
            AffinePoint::Point { x, y } => {
                if x >= &self.p || y >= &self.p {
                    return false;
                }
                (y * y) % &self.p == self.polynomial(x)
            }
        }
    }

    /// `−P`, i.e. `(x, p − y)`. `O` negates to itself. Inputs are never
    /// mutated; a fresh point is returned.
    pub fn negate(&self, point: &AffinePoint) -> AffinePoint {
        match point {
            AffinePoint::Infinity => AffinePoint::Infinity,
            AffinePoint::Point { x, y } => AffinePoint::Point {
                x: x.clone(),
                y: (&self.p - y) % &self.p,
            },
        }
    }

    /// Textbook affine addition with the full case analysis: identity
    /// operands, inverse operands, tangent (doubling) and chord slopes.
    ///
    /// Both inputs must be on the curve or [`CurveError::InvalidPoint`] is
    /// returned; a result off the curve (unreachable for valid inputs)
    /// fails with [`CurveError::Arithmetic`].
    pub fn add(&self, p1: &AffinePoint, p2: &AffinePoint) -> Result<AffinePoint, CurveError> {
        if !self.is_on_curve(p1) || !self.is_on_curve(p2) {
            return Err(CurveError::InvalidPoint);
        }

        let (x1, y1) = match p1.coords() {
            None => return Ok(p2.clone()),
            Some(c) => c,
        };
        let (x2, y2) = match p2.coords() {
            None => return Ok(p1.clone()),
            Some(c) => c,
        };

        if x1 == x2 && y1 != y2 {
            return Ok(AffinePoint::Infinity);
        }

        let lambda = if x1 == x2 {
            // λ = (3·x₁² + a) / (2·y₁)
            let num = (UBig::from_word(3) * x1 * x1 + &self.a) % &self.p;
            let den = mod_inverse(&((UBig::from_word(2) * y1) % &self.p), &self.p)?;
            (num * den) % &self.p
        } else {
            // λ = (y₁ − y₂) / (x₁ − x₂)
            let num = sub_mod(y1, y2, &self.p);
            let den = mod_inverse(&sub_mod(x1, x2, &self.p), &self.p)?;
            (num * den) % &self.p
        };

        let x3 = sub_mod(
            &sub_mod(&((&lambda * &lambda) % &self.p), x1, &self.p),
            x2,
            &self.p,
        );
        let y3 = sub_mod(&((&lambda * &sub_mod(x1, &x3, &self.p)) % &self.p), y1, &self.p);

        let sum = AffinePoint::Point { x: x3, y: y3 };
        if !self.is_on_curve(&sum) {
            return Err(CurveError::Arithmetic("point addition left the curve"));
        }
        Ok(sum)
    }

    /// `2·P`. `Double(O) = O`.
    pub fn double(&self, point: &AffinePoint) -> Result<AffinePoint, CurveError> {
        if point.is_infinity() {
            return Ok(AffinePoint::Infinity);
        }
        self.add(point, point)
    }

    /// Right-to-left double-and-add: walks the bits of `k` from the least
    /// significant up, doubling the addend each step.
    ///
    /// `k < 0` multiplies the negated point by `−k`; `k ≡ 0 (mod n)` and
    /// `P = O` both yield `O`.
    pub fn scalar_mult(&self, point: &AffinePoint, k: &IBig) -> Result<AffinePoint, CurveError> {
        if !self.is_on_curve(point) {
            return Err(CurveError::InvalidPoint);
        }

        let (sign, mag) = k.clone().into_parts();
        if sign == Sign::Negative {
            return self.scalar_mult(&self.negate(point), &IBig::from(mag));
        }

        if &mag % &self.n == UBig::ZERO {
            return Ok(AffinePoint::Infinity);
        }
        if point.is_infinity() {
            return Ok(AffinePoint::Infinity);
        }

        let mut result = AffinePoint::Infinity;
        let mut addend = point.clone();
        let bits = mag.bit_len();
        for bit in 0..bits {
            if mag.bit(bit) {
                result = self.add(&result, &addend)?;
            }
            if bit + 1 < bits {
                addend = self.double(&addend)?;
            }
        }

        if !self.is_on_curve(&result) {
            return Err(CurveError::Arithmetic("scalar multiple left the curve"));
        }
        Ok(result)
    }

    pub fn scalar_base_mult(&self, k: &IBig) -> Result<AffinePoint, CurveError> {
        self.scalar_mult(&self.generator(), k)
    }

    /// Lifts an x-coordinate to its two curve points `(x, y₀)` and
    /// `(x, p − y₀)`, the candidates a recovered signature point can be.
    ///
    /// Fails with [`CurveError::Recovery`] when `x³ + a·x + b` has no
    /// square root mod `p`.
    pub fn lift_x(&self, x: &UBig) -> Result<(AffinePoint, AffinePoint), CurveError> {
        let y0 = mod_sqrt(&self.polynomial(x), &self.p).ok_or(CurveError::Recovery)?;
        let y1 = sub_mod(&UBig::ZERO, &y0, &self.p);

        let root = AffinePoint::new(x.clone(), y0);
        let mirror = AffinePoint::new(x.clone(), y1);
        if !self.is_on_curve(&root) || !self.is_on_curve(&mirror) {
            return Err(CurveError::Recovery);
        }
        Ok((root, mirror))
    }
}

impl Curve for CurveParams {
    fn params(&self) -> &CurveParams {
        self
    }

    fn is_on_curve(&self, point: &AffinePoint) -> bool {
        CurveParams::is_on_curve(self, point)
    }

    fn add(&self, p1: &AffinePoint, p2: &AffinePoint) -> Result<AffinePoint, CurveError> {
        CurveParams::add(self, p1, p2)
    }

    fn double(&self, point: &AffinePoint) -> Result<AffinePoint, CurveError> {
        CurveParams::double(self, point)
    }

    fn scalar_mult(&self, point: &AffinePoint, k: &IBig) -> Result<AffinePoint, CurveError> {
        CurveParams::scalar_mult(self, point, k)
    }

    fn scalar_base_mult(&self, k: &IBig) -> Result<AffinePoint, CurveError> {
        CurveParams::scalar_base_mult(self, k)
    }

    fn scalar_mult_bytes(&self, point: &AffinePoint, k: &[u8]) -> Result<AffinePoint, CurveError> {
        jacobian::scalar_mult_bytes(self, point, k)
    }

    fn scalar_base_mult_bytes(&self, k: &[u8]) -> Result<AffinePoint, CurveError> {
        jacobian::scalar_mult_bytes(self, &self.generator(), k)
    }
}
