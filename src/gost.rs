//! GOST R 34.10-2012 / 34.10-2001 signatures over any supplied curve.
//!
//! The family differs from ECDSA in the algebra of `s` and the verification
//! identity: `s = r·d + k·e (mod n)` with `e = z mod n` (zero mapped to
//! one), where `z` is the digest read as a big-endian integer.

use dashu::base::BitTest;
use dashu::integer::UBig;
use tracing::trace;

use crate::arith::neg_mod;
use crate::curve::{AffinePoint, Curve};
use crate::encoding::Signature;
use crate::errors::CurveError;
use crate::keys::EntropyReader;

/// `e = z mod n`, with `e = 0` replaced by `e = 1` as the standard requires.
fn digest_to_e(digest: &[u8], n: &UBig) -> UBig {
    let e = UBig::from_be_bytes(digest) % n;
    if e == UBig::ZERO {
        UBig::ONE
    } else {
        e
    }
}

/// Runs the signing equations for one nonce. `None` means the nonce
/// degenerated into `r = 0` or `s = 0` and the caller should pick another.
fn try_nonce<C>(d: &UBig, e: &UBig, k: &UBig, curve: &C) -> Result<Option<Signature>, CurveError>
where
    C: Curve + ?Sized,
{
    let params = curve.params();
    let k_bytes: Vec<u8> = k.to_be_bytes().into();

    let r = curve.scalar_base_mult_bytes(&k_bytes)?.x() % &params.n;
    if r == UBig::ZERO {
        return Ok(None);
    }

    let s = ((&r * d) % &params.n + (k * e) % &params.n) % &params.n;
    if s == UBig::ZERO {
        return Ok(None);
    }

    Ok(Some(Signature { r, s }))
}

/// ### GOST Sign
///
/// Draws nonces of `⌈n_bits/8⌉` bytes from `reader`, resampling on
/// `k = 0`, `k ≥ n` or a degenerate `r`/`s`, and returns
/// `(x(k·G) mod n, r·d + k·e mod n)`.
pub fn sign<C, R>(d: &UBig, digest: &[u8], curve: &C, reader: &mut R) -> Result<Signature, CurveError>
where
    C: Curve + ?Sized,
    R: EntropyReader + ?Sized,
{
    let params = curve.params();
    if params.n == UBig::ZERO {
        return Err(CurveError::Arithmetic("zero curve order"));
    }

    let e = digest_to_e(digest, &params.n);
    let mut buf = vec![0u8; (params.n.bit_len() + 7) / 8];

    loop {
        reader.read_full(&mut buf)?;
        let k = UBig::from_be_bytes(&buf);
        if k == UBig::ZERO || k >= params.n {
            continue;
        }

        if let Some(sig) = try_nonce(d, &e, &k, curve)? {
            return Ok(sig);
        }
        trace!("nonce produced a zero component, resampling");
    }
}

/// ### GOST Sign, explicit nonce
///
/// Deterministic entry point for standards test vectors: signs with the
/// caller-supplied `k` instead of sampling one. Never use a fixed or
/// repeated nonce with a production key; nonce reuse reveals `d`.
pub fn sign_with_nonce<C>(d: &UBig, digest: &[u8], curve: &C, k: &UBig) -> Result<Signature, CurveError>
where
    C: Curve + ?Sized,
{
    let params = curve.params();
    if params.n == UBig::ZERO {
        return Err(CurveError::Arithmetic("zero curve order"));
    }
    if *k == UBig::ZERO || k >= &params.n {
        return Err(CurveError::Arithmetic("nonce out of range"));
    }

    let e = digest_to_e(digest, &params.n);
    try_nonce(d, &e, k, curve)?.ok_or(CurveError::Arithmetic("nonce produced a degenerate signature"))
}

/// ### GOST Verify
///
/// Rejects out-of-range components, then checks
/// `x(z₁·G + z₂·Q) ≡ r (mod n)` with `z₁ = s·e⁻¹`, `z₂ = −r·e⁻¹`.
pub fn verify<C>(digest: &[u8], sig: &Signature, public: &AffinePoint, curve: &C) -> bool
where
    C: Curve + ?Sized,
{
    let n = &curve.params().n;
    if sig.r == UBig::ZERO || sig.s == UBig::ZERO || &sig.r >= n || &sig.s >= n {
        return false;
    }

    let e = digest_to_e(digest, n);
    let v = match curve.inverse(&e) {
        Ok(v) => v,
        Err(_) => return false,
    };
    let z1: Vec<u8> = ((&sig.s * &v) % n).to_be_bytes().into();
    let z2: Vec<u8> = neg_mod(&((&sig.r * &v) % n), n).to_be_bytes().into();

    let sum = match curve.combined_mult(public, &z1, &z2) {
        Ok(p) => p,
        Err(_) => return false,
    };

    match sum.coords() {
        None => false,
        Some((x, _)) => x % n == sig.r,
    }
}

/// ### GOST Public Key Recovery
///
/// Lifts `r` to the ephemeral point and recomputes
/// `Q' = (s·r⁻¹)·G + (−e·r⁻¹)·R` for both lifts, returning the candidate
/// equal to the asserted `public` point, or `None` when neither matches.
/// Note the coefficient swap against the ECDSA identity: here the digest
/// term multiplies `R` and the signature term multiplies `G`.
///
/// `e` is derived exactly as in signing (`z mod n`, zero to one), so a
/// signature over an all-zeros digest recovers too. Only the `x = r` lift
/// is attempted; the `x = r + n` candidate is a documented gap. Fails with
/// [`CurveError::Recovery`] when `r` lifts to no curve point.
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

    let e = digest_to_e(digest, n);
    let (lift, mirror) = params.lift_x(&sig.r)?;

    let w = curve.inverse(&sig.r)?;
    let u1: Vec<u8> = ((&sig.s * &w) % n).to_be_bytes().into();
    let u2: Vec<u8> = neg_mod(&((&e * &w) % n), n).to_be_bytes().into();

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
