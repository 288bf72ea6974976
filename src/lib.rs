//! Generic short Weierstrass elliptic curve signatures.
//!
//! Three algorithmic families share one curve-arithmetic substrate:
//!
//! - **ECDSA** ([`ecdsa`]) as used with secp256k1 and the NIST prime curves,
//! - **GOST R 34.10-2012 / 34.10-2001** ([`gost`]), which derives the
//!   per-signature nonce and the `s` component differently,
//! - **public key recovery** for both families, returning the full point
//!   `Q` a signature verifies under.
//!
//! The engines work for *any* supplied [`CurveParams`], with no per-curve
//! fast path, in both affine and Jacobian coordinates. Callers
//! hash their own messages and pass digests; randomness comes in through
//! the [`EntropyReader`] seam, which any [`rand::RngCore`] satisfies.
//!
//! Everything runs in variable time. This crate is not hardened against
//! side channels; keep it away from adversarial timing oracles.
//!
//! ```
//! use gost_elliptic::{curves, ecdsa, generate_key};
//! use rand::rngs::OsRng;
//!
//! let digest = [0x42u8; 32]; // normally a real message hash
//! let key = generate_key(&*curves::SECP256K1, &mut OsRng).unwrap();
//! let sig = ecdsa::sign(&key.d, &digest, &*curves::SECP256K1, &mut OsRng).unwrap();
//! assert!(ecdsa::verify(&digest, &sig, &key.public.point, &*curves::SECP256K1));
//! ```

mod arith;
mod csprng;
mod curve;
pub mod curves;
pub mod ecdsa;
mod encoding;
mod errors;
pub mod gost;
mod jacobian;
mod keys;

pub use arith::{big_from_decimal, big_from_hex, hash_to_int, mod_inverse, mod_sqrt};
pub use csprng::{AesCtrRng, ZeroReader};
pub use curve::{AffinePoint, Curve, CurveParams};
pub use encoding::{marshal_point, unmarshal_point, Signature, SEC1_OCTET_UNCOMPRESSED};
pub use errors::CurveError;
pub use jacobian::JacobianPoint;
pub use keys::{
    generate_key, generate_key_bytes, rand_scalar, EntropyReader, PrivateKey, PublicKey,
};
