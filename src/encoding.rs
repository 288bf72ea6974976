//! Wire formats: SEC1 uncompressed points and the ASN.1 DER signature
//! sequence. The DER side is a deliberately thin codec around the `(r, s)`
//! pair; there is no general ASN.1 machinery here.

use dashu::integer::UBig;

use crate::arith::pad_be;
use crate::curve::{AffinePoint, Curve};
use crate::errors::CurveError;

pub const SEC1_OCTET_UNCOMPRESSED: u8 = 0x04;

const DER_SEQUENCE: u8 = 0x30;
const DER_INTEGER: u8 = 0x02;

/// A signature `(r, s)`, both components in `[1, n−1]` when produced by
/// the signers in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub r: UBig,
    pub s: UBig,
}

impl Signature {
    pub fn new(r: UBig, s: UBig) -> Self {
        Signature { r, s }
    }

    /// Encodes `SEQUENCE { INTEGER r, INTEGER s }`, each integer positive
    /// and minimal-length.
    pub fn to_der(&self) -> Vec<u8> {
        let mut body = der_integer(&self.r);
        body.extend(der_integer(&self.s));

        let mut out = vec![DER_SEQUENCE];
        push_der_length(&mut out, body.len());
        out.extend(body);
        out
    }

    /// Strict inverse of [`Signature::to_der`]: rejects trailing bytes,
    /// non-minimal lengths, padded integers and negative integers.
    pub fn from_der(data: &[u8]) -> Result<Signature, CurveError> {
        let (tag, body, rest) = read_tlv(data)?;
        if tag != DER_SEQUENCE || !rest.is_empty() {
            return Err(CurveError::InvalidSignature);
        }

        let (r_tag, r_bytes, body) = read_tlv(body)?;
        let (s_tag, s_bytes, body) = read_tlv(body)?;
        if r_tag != DER_INTEGER || s_tag != DER_INTEGER || !body.is_empty() {
            return Err(CurveError::InvalidSignature);
        }

        Ok(Signature {
            r: parse_der_integer(r_bytes)?,
            s: parse_der_integer(s_bytes)?,
        })
    }
}

/// Minimal-length positive INTEGER: strip to the shortest big-endian form,
/// then pad one zero octet back when the sign bit would read as negative.
fn der_integer(v: &UBig) -> Vec<u8> {
    let mut bytes: Vec<u8> = v.to_be_bytes().into();
    if bytes.is_empty() {
        bytes.push(0);
    }
    if bytes[0] & 0x80 != 0 {
        bytes.insert(0, 0);
    }

    let mut out = vec![DER_INTEGER];
    push_der_length(&mut out, bytes.len());
    out.extend(bytes);
    out
}

/// Short-form length below 128, long-form above. The 512-bit curves push
/// the sequence past the short-form limit.
fn push_der_length(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
    } else {
        let be = (len as u64).to_be_bytes();
        let skip = be.iter().position(|&b| b != 0).unwrap_or(be.len() - 1);
        out.push(0x80 | (be.len() - skip) as u8);
        out.extend_from_slice(&be[skip..]);
    }
}

/// Splits one TLV off the front of `data`, enforcing minimal lengths.
fn read_tlv(data: &[u8]) -> Result<(u8, &[u8], &[u8]), CurveError> {
    if data.len() < 2 {
        return Err(CurveError::InvalidSignature);
    }
    let tag = data[0];

    let (len, header) = if data[1] < 0x80 {
        (data[1] as usize, 2)
    } else {
        let count = (data[1] & 0x7f) as usize;
        if count == 0 || count > 8 || data.len() < 2 + count {
            return Err(CurveError::InvalidSignature);
        }
        let mut len = 0usize;
        for &b in &data[2..2 + count] {
            len = (len << 8) | b as usize;
        }
        if len < 0x80 {
            return Err(CurveError::InvalidSignature);
        }
        (len, 2 + count)
    };

    if data.len() < header + len {
        return Err(CurveError::InvalidSignature);
    }
    Ok((tag, &data[header..header + len], &data[header + len..]))
}

fn parse_der_integer(bytes: &[u8]) -> Result<UBig, CurveError> {
    if bytes.is_empty() {
        return Err(CurveError::InvalidSignature);
    }
    // Negative integers never encode a valid (r, s) component.
    if bytes[0] & 0x80 != 0 {
        return Err(CurveError::InvalidSignature);
    }
    // A leading zero is only allowed to clear the sign bit.
    if bytes.len() > 1 && bytes[0] == 0 && bytes[1] & 0x80 == 0 {
        return Err(CurveError::InvalidSignature);
    }
    Ok(UBig::from_be_bytes(bytes))
}

/// ### Marshal Point
///
/// SEC 1 uncompressed form: `0x04 ‖ x ‖ y`, both coordinates big-endian
/// and padded to `⌈bit_size/8⌉` bytes. The point at infinity keeps the
/// legacy all-zeros coordinate encoding.
pub fn marshal_point<C>(curve: &C, point: &AffinePoint) -> Vec<u8>
where
    C: Curve + ?Sized,
{
    let byte_len = (curve.params().bit_size + 7) / 8;
    let mut out = vec![0u8; 1 + 2 * byte_len];
    out[0] = SEC1_OCTET_UNCOMPRESSED;

    if let Some((x, y)) = point.coords() {
        out[1..1 + byte_len].copy_from_slice(&pad_be(x, byte_len));
        out[1 + byte_len..].copy_from_slice(&pad_be(y, byte_len));
    }
    out
}

/// ### Unmarshal Point
///
/// Strict inverse of [`marshal_point`]: checks the length and the `0x04`
/// octet, maps all-zeros coordinates back to `O`, and rejects any finite
/// point that does not lie on the curve.
pub fn unmarshal_point<C>(curve: &C, data: &[u8]) -> Result<AffinePoint, CurveError>
where
    C: Curve + ?Sized,
{
    let byte_len = (curve.params().bit_size + 7) / 8;
    if data.len() != 1 + 2 * byte_len || data[0] != SEC1_OCTET_UNCOMPRESSED {
        return Err(CurveError::InvalidPoint);
    }

    let x = UBig::from_be_bytes(&data[1..1 + byte_len]);
    let y = UBig::from_be_bytes(&data[1 + byte_len..]);
    if x == UBig::ZERO && y == UBig::ZERO {
        return Ok(AffinePoint::Infinity);
    }

    let point = AffinePoint::new(x, y);
    if !curve.is_on_curve(&point) {
        return Err(CurveError::InvalidPoint);
    }
    Ok(point)
}
