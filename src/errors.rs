use thiserror::Error;

/// Failure kinds surfaced by the curve engines and signature schemes.
///
/// Signing errors propagate to the caller. Verification never errors on
/// data-valid inputs; it returns `false`. Recovery distinguishes "no square
/// root for the lifted x-coordinate" (`Recovery`) from "neither lift matched
/// the asserted key" (a `None` result, not an error).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    #[error("entropy reader failed or was exhausted")]
    Rand,
    #[error("point is not on the curve")]
    InvalidPoint,
    #[error("arithmetic invariant violated: {0}")]
    Arithmetic(&'static str),
    #[error("x-coordinate of the signature has no square root on the curve")]
    Recovery,
    #[error("signature component out of range")]
    InvalidSignature,
}
