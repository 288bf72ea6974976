//! ECDSA over any supplied short Weierstrass curve.
//!
//! Digests enter as raw bytes and are integerized with the FIPS 186-4 §6.4
//! truncation; they are never re-hashed here.

use dashu::integer::UBig;
use tracing::trace;

use crate::arith::{hash_to_int, neg_mod};
use crate::csprng::AesCtrRng;
use crate::curve::{AffinePoint, Curve};
use crate::encoding::Signature;
use crate::errors::CurveError;
use crate::keys::{rand_scalar, EntropyReader};

/// ### ECDSA Sign
///
/// Produces `(r, s)` with both components in `[1, n−1]`:
/// `r = x(k·G) mod n`, `s = k⁻¹·(z + r·d) mod n`, resampling the nonce `k`
/// from `reader` until neither component is zero.
pub fn sign<C, R>(d: &UBig, digest: &[u8], curve: &C, reader: &mut R) -> Result<Signature, CurveError>
where
    C: Curve + ?Sized,
    R: EntropyReader + ?Sized,
{
    let params = curve.params();
    if params.n == UBig::ZERO {
        return Err(CurveError::Arithmetic("zero curve order"));
    }

    let z = hash_to_int(digest, &params.n);
    sign_inner(d, &z, curve, reader)
}

/// ### ECDSA Sign, entropy-mixed nonce stream
///
/// Standards-compatible variant: 32 bytes of `reader` entropy are mixed
/// with the private scalar and the digest into an AES-CTR CSPRNG
/// ([`AesCtrRng`]), and the signing loop draws its nonces from that stream
/// instead of the raw reader.
pub fn sign_with_entropy<C, R>(
    d: &UBig,
    digest: &[u8],
    curve: &C,
    reader: &mut R,
) -> Result<Signature, CurveError>
where
    C: Curve + ?Sized,
    R: EntropyReader + ?Sized,
{
    let params = curve.params();
    if params.n == UBig::ZERO {
        return Err(CurveError::Arithmetic("zero curve order"));
    }

    let mut entropy = [0u8; 32];
    reader.read_full(&mut entropy)?;
    let mut csprng = AesCtrRng::new(d, &entropy, digest);

    let z = hash_to_int(digest, &params.n);
    sign_inner(d, &z, curve, &mut csprng)
}

fn sign_inner<C, R>(d: &UBig, z: &UBig, curve: &C, reader: &mut R) -> Result<Signature, CurveError>
where
    C: Curve + ?Sized,
    R: EntropyReader + ?Sized,
{
    let params = curve.params();
    loop {
        let k = rand_scalar(curve, reader)?;
        let k_bytes: Vec<u8> = k.to_be_bytes().into();

        let r = curve.scalar_base_mult_bytes(&k_bytes)?.x() % &params.n;
        if r == UBig::ZERO {
            trace!("nonce produced r = 0, resampling");
            continue;
        }

        let k_inv = curve.inverse(&k)?;
        let s = (&k_inv * &((z + &r * d) % &params.n)) % &params.n;
        if s == UBig::ZERO {
            trace!("nonce produced s = 0, resampling");
            continue;
        }

        return Ok(Signature { r, s });
    }
}

/// ### ECDSA Verify
///
/// Rejects out-of-range components, then checks
/// `x(u₁·G + u₂·Q) ≡ r (mod n)` with `u₁ = z·s⁻¹`, `u₂ = r·s⁻¹`.
/// A sum at infinity verifies nothing.
pub fn verify<C>(digest: &[u8], sig: &Signature, public: &AffinePoint, curve: &C) -> bool
where
    C: Curve + ?Sized,
{
    let n = &curve.params().n;
    if sig.r == UBig::ZERO || sig.s == UBig::ZERO || &sig.r >= n || &sig.s >= n {
        return false;
    }

    let z = hash_to_int(digest, n);
    let w = match curve.inverse(&sig.s) {
        Ok(w) => w,
        Err(_) => return false,
    };
    let u1: Vec<u8> = ((&z * &w) % n).to_be_bytes().into();
    let u2: Vec<u8> = ((&sig.r * &w) % n).to_be_bytes().into();

    let sum = match curve.combined_mult(public, &u1, &u2) {
        Ok(p) => p,
        Err(_) => return false,
    };

    match sum.coords() {
        None => false,
        Some((x, _)) => x % n == sig.r,
    }
}

/// ### ECDSA Public Key Recovery
///
/// Lifts `r` back to the ephemeral point and recomputes
/// `Q' = (−z·r⁻¹)·G + (s·r⁻¹)·R` for both lifts of `r`, returning the
/// candidate that equals the asserted `public` point, or `None` when
/// neither does.
///
/// Only the `x = r` lift is attempted; when `r < p − n` the second
/// candidate `x = r + n` would also be valid but is not tried. Fails with
/// [`CurveError::Recovery`] when `r` lifts to no curve point at all.
pub fn recover<C>(
    digest: &[u8],
    sig: &Signature,
    public: &AffinePoint,
    curve: &C,
) -> Result<Option<AffinePoint>, CurveError>
where
    C: Curve + ?Sized,
{
    let params = curve.params();
    let n = &params.n;
    if sig.r == UBig::ZERO || sig.s == UBig::ZERO || &sig.r >= n || &sig.s >= n {
        return Err(CurveError::InvalidSignature);
    }

    let z = hash_to_int(digest, n);
    let (lift, mirror) = params.lift_x(&sig.r)?;

    let w = curve.inverse(&sig.r)?;
    let u1: Vec<u8> = neg_mod(&((&z * &w) % n), n).to_be_bytes().into();
    let u2: Vec<u8> = ((&sig.s * &w) % n).to_be_bytes().into();

    let u1_g = curve.scalar_base_mult_bytes(&u1)?;
    for (branch, ephemeral) in [lift, mirror].into_iter().enumerate() {
        let u2_r = curve.scalar_mult_bytes(&ephemeral, &u2)?;
        let candidate = curve.add(&u1_g, &u2_r)?;
        if &candidate == public {
            trace!(branch, "recovered key matched the asserted point");
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}
