use dashu::base::BitTest;
use dashu::integer::{fast_div::ConstDivisor, UBig};

use crate::errors::CurveError;

/// Parses a big-endian hex literal into a big integer.
///
/// Panics on a malformed literal; only the curve table and tests feed it.
pub fn big_from_hex(s: &str) -> UBig {
    UBig::from_str_radix(s, 16).expect("invalid hex encoding")
}

/// Parses a decimal literal into a big integer.
pub fn big_from_decimal(s: &str) -> UBig {
    UBig::from_str_radix(s, 10).expect("invalid decimal encoding")
}

/// Canonical subtraction in `[0, m)`: `(a - b) mod m` for reduced operands.
///
/// Both inputs must already be reduced below `m`; the result is the
/// non-negative residue without a trailing conditional correction.
pub(crate) fn sub_mod(a: &UBig, b: &UBig, m: &UBig) -> UBig {
    if a >= b {
        a - b
    } else {
        a + m - b
    }
}

/// ### Modular Inverse
///
/// Computes `k⁻¹ mod m`, the only residue `x` with `(x · k) mod m = 1`.
///
/// Fails with [`CurveError::Arithmetic`] when `k ≡ 0 (mod m)` or when no
/// inverse exists. Callers in the curve engines are required to keep zero
/// out of here; hitting the error indicates an invalid input point.
pub fn mod_inverse(k: &UBig, m: &UBig) -> Result<UBig, CurveError> {
    let k = k % m;
    if k == UBig::ZERO {
        return Err(CurveError::Arithmetic("modular inverse of zero"));
    }
    let ring = ConstDivisor::new(m.clone());
    ring.reduce(k)
        .inv()
        .map(|r| r.residue())
        .ok_or(CurveError::Arithmetic("no modular inverse"))
}

fn mod_pow(base: &UBig, exp: &UBig, ring: &ConstDivisor) -> UBig {
    ring.reduce(base.clone()).pow(exp).residue()
}

/// ### Modular Square Root
///
/// Finds `y` with `y² ≡ a (mod p)` for prime `p`, or `None` when `a` is a
/// quadratic non-residue.
///
/// Uses the `a^((p+1)/4)` shortcut when `p ≡ 3 (mod 4)` (secp256k1 and the
/// 512-bit GOST sets) and Tonelli–Shanks otherwise (the 256-bit GOST curves
/// have `p ≡ 1 (mod 4)`).
pub fn mod_sqrt(a: &UBig, p: &UBig) -> Option<UBig> {
    let a = a % p;
    if a == UBig::ZERO {
        return Some(UBig::ZERO);
    }

    let ring = ConstDivisor::new(p.clone());
    let legendre_exp = (p - UBig::ONE) >> 1;
    if mod_pow(&a, &legendre_exp, &ring) != UBig::ONE {
        return None;
    }

    if p % UBig::from_word(4) == UBig::from_word(3) {
        return Some(mod_pow(&a, &((p + UBig::ONE) >> 2), &ring));
    }

    // Tonelli–Shanks. Factor p − 1 = q · 2^s with q odd.
    let mut q = p - UBig::ONE;
    let mut s = 0usize;
    while !q.bit(0) {
        q = q >> 1usize;
        s += 1;
    }

    // Any quadratic non-residue will do as the seed.
    let mut z = UBig::from_word(2);
    while mod_pow(&z, &legendre_exp, &ring) == UBig::ONE {
        z = z + UBig::ONE;
    }

    let mut m = s;
    let mut c = mod_pow(&z, &q, &ring);
    let mut t = mod_pow(&a, &q, &ring);
    let mut r = mod_pow(&a, &((&q + UBig::ONE) >> 1), &ring);

    while t != UBig::ONE {
        let mut i = 0usize;
        let mut t2 = t.clone();
        while t2 != UBig::ONE {
            t2 = (&t2 * &t2) % p;
            i += 1;
            if i == m {
                return None;
            }
        }

        let mut b = c.clone();
        for _ in 0..(m - i - 1) {
            b = (&b * &b) % p;
        }
        m = i;
        c = (&b * &b) % p;
        t = (&t * &c) % p;
        r = (&r * &b) % p;
    }
    Some(r)
}

/// Converts a digest to an integer per FIPS 186-4 §6.4: keep the left-most
/// bits up to the bit-length of the order `n`. The input is a raw digest;
/// this truncates, it never re-hashes.
pub fn hash_to_int(digest: &[u8], n: &UBig) -> UBig {
    let order_bits = n.bit_len();
    let order_bytes = (order_bits + 7) / 8;
    let digest = if digest.len() > order_bytes {
        &digest[..order_bytes]
    } else {
        digest
    };

    let mut z = UBig::from_be_bytes(digest);
    if digest.len() * 8 > order_bits {
        z = z >> (digest.len() * 8 - order_bits);
    }
    z
}

/// `(-a) mod m`, canonical.
pub(crate) fn neg_mod(a: &UBig, m: &UBig) -> UBig {
    sub_mod(&UBig::ZERO, &(a % m), m)
}

/// Big-endian encoding left-padded with zeros to exactly `len` bytes.
pub(crate) fn pad_be(v: &UBig, len: usize) -> Vec<u8> {
    let bytes: Vec<u8> = v.to_be_bytes().into();
    let mut out = vec![0u8; len];
    out[len - bytes.len()..].copy_from_slice(&bytes);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_of_zero_fails() {
        let p = UBig::from_word(17);
        assert_eq!(
            mod_inverse(&UBig::ZERO, &p),
            Err(CurveError::Arithmetic("modular inverse of zero"))
        );
        assert_eq!(
            mod_inverse(&UBig::from_word(34), &p),
            Err(CurveError::Arithmetic("modular inverse of zero"))
        );
    }

    #[test]
    fn inverse_round_trips() {
        let p = UBig::from_word(17);
        for k in 1u64..17 {
            let k = UBig::from_word(k);
            let inv = mod_inverse(&k, &p).unwrap();
            assert_eq!((&k * &inv) % &p, UBig::ONE);
        }
    }

    #[test]
    fn sqrt_three_mod_four() {
        // p = 19 ≡ 3 (mod 4); 5² = 25 ≡ 6.
        let p = UBig::from_word(19);
        let root = mod_sqrt(&UBig::from_word(6), &p).unwrap();
        assert_eq!((&root * &root) % &p, UBig::from_word(6));
    }

    #[test]
    fn sqrt_tonelli_shanks() {
        // p = 13 ≡ 1 (mod 4); 10 is a residue (6² = 36 ≡ 10).
        let p = UBig::from_word(13);
        let root = mod_sqrt(&UBig::from_word(10), &p).unwrap();
        assert_eq!((&root * &root) % &p, UBig::from_word(10));
    }

    #[test]
    fn sqrt_of_non_residue_is_none() {
        // 5 is a non-residue mod 13.
        assert_eq!(mod_sqrt(&UBig::from_word(5), &UBig::from_word(13)), None);
    }

    #[test]
    fn hash_to_int_truncates_to_order_bits() {
        // n has 18 bits, so a 32-byte digest keeps 3 bytes shifted right by 6.
        let n = UBig::from_word(0x3ffff);
        let digest = [0xffu8; 32];
        assert_eq!(hash_to_int(&digest, &n), UBig::from_word(0x3ffff));

        // Short digests pass through unshifted.
        let n = big_from_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
        assert_eq!(hash_to_int(&[0x01, 0x02], &n), UBig::from_word(0x0102));
    }

    #[test]
    fn sub_mod_is_canonical() {
        let m = UBig::from_word(17);
        assert_eq!(
            sub_mod(&UBig::from_word(3), &UBig::from_word(11), &m),
            UBig::from_word(9)
        );
        assert_eq!(sub_mod(&UBig::from_word(11), &UBig::from_word(3), &m), UBig::from_word(8));
    }
}
