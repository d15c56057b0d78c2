//! Baby Jubjub elliptic-curve arithmetic and ECDSA, in three isomorphic
//! forms.
//!
//! Baby Jubjub is an elliptic curve defined over the scalar field of
//! BN254, designed for efficient arithmetic inside SNARK circuits. This
//! crate represents it in three birationally-equivalent affine forms —
//! Short Weierstrass ([`curve::SWPoint`]), Montgomery ([`curve::MontPoint`]),
//! and Twisted Edwards ([`curve::TwEdPoint`]) — and implements group
//! arithmetic, conversions between the forms, and ECDSA signing and
//! verification generically over all three.
//!
//! The headline feature is "efficient ECDSA": a signature produced against
//! one representation's public key can be verified against another
//! representation — typically Twisted Edwards, the cheapest form inside a
//! SNARK — given a precomputed advice point `k*G`. See
//! [`ecdsa::verify_with_advice`].
//!
//! ```
//! use babyjubjub_ecdsa::curve::{Representation, SWPoint};
//! use babyjubjub_ecdsa::ecdsa::{keygen, sign, verify};
//! use num_bigint::BigUint;
//!
//! let seed = BigUint::from(12345u64);
//! let digest = BigUint::from(999u64);
//! let nonce = BigUint::from(10u64);
//!
//! let (priv_key, pub_key) = keygen::<SWPoint>(&seed).unwrap();
//! let (r, s) = sign::<SWPoint>(&digest, &priv_key, &nonce).unwrap();
//! assert!(verify::<SWPoint>(&digest, &pub_key, &r, &s));
//! ```
//!
//! This crate does not implement constant-time arithmetic, message
//! hashing, deterministic nonce derivation, or any point/signature
//! encoding; see the crate's `SPEC_FULL.md` for the full non-goals list.

pub mod convert;
pub mod curve;
pub mod ecdsa;
pub mod error;
pub mod field;
pub mod params;

pub use convert::{
    montgomery_to_sw, montgomery_to_twisted_edwards, sw_to_montgomery, sw_to_twisted_edwards,
    twisted_edwards_to_montgomery, twisted_edwards_to_sw,
};
pub use curve::{MontPoint, Representation, SWPoint, TwEdPoint};
pub use ecdsa::{keygen, recover_public_key, sign, verify, verify_with_advice, KeyPair};
pub use error::{Error, Result};
pub use field::{Fq, Fr};
