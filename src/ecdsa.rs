//! ECDSA over Baby Jubjub, generic over the curve representation (§4.6).
//!
//! Every function here is parameterized by a [`Representation`] type
//! (`SWPoint`, `MontPoint`, or `TwEdPoint`) chosen at the call site; there is
//! no runtime dispatch on a form tag. `verify_with_advice` is the one place
//! a caller deliberately transports a public key and an advice point across
//! forms before calling back into this module.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::curve::Representation;
use crate::error::{Error, Result};
use crate::field::{Fr, SubgroupField};

/// Generate a keypair from a seed, `1 <= seed < n`. The public key is
/// `priv * B`, the base point of the prime-order subgroup (not `G`).
pub fn keygen<R: Representation>(seed: &BigUint) -> Result<(Fr, R)> {
    let n = SubgroupField::order();
    if seed.is_zero() || seed >= n {
        return Err(Error::InvalidScalar(format!(
            "seed {seed} is not in [1, n)"
        )));
    }
    let priv_key = Fr::from_biguint_reduced(seed);
    let pub_key = R::base().scalar_mul(&priv_key.to_biguint());
    Ok((priv_key, pub_key))
}

/// Sign a digest with a private key and caller-supplied nonce `k`.
///
/// The nonce is never generated here: per the spec's non-goals, this crate
/// does not derive nonces (RFC 6979 or otherwise) or draw randomness: the
/// caller is responsible for supplying a `k` that is fresh per signature.
pub fn sign<R: Representation>(digest: &BigUint, priv_key: &Fr, k: &BigUint) -> Result<(Fr, Fr)> {
    let r_point = R::base().scalar_mul(k);
    let r = match r_point.affine_x() {
        Some(x) => x.reduce_into::<SubgroupField>(),
        None => Fr::zero(),
    };
    if r.is_zero() {
        return Err(Error::SigningFailed);
    }

    let digest_f = Fr::from_biguint_reduced(digest);
    let k_f = Fr::from_biguint_reduced(k);
    let s = digest_f.add(&r.mul(priv_key)).div(&k_f);
    if s.is_zero() {
        return Err(Error::SigningFailed);
    }

    Ok((r, s))
}

/// Standard ECDSA verification: `u1 = digest/s`, `u2 = r/s`,
/// `P = u1*B + u2*pub`; accept iff `P` is finite and `P.x mod n = r`.
///
/// Never raises: a malformed `(r, s)` pair is adversary-controlled input
/// and simply fails verification.
pub fn verify<R: Representation>(digest: &BigUint, pub_key: &R, r: &Fr, s: &Fr) -> bool {
    if r.is_zero() || s.is_zero() {
        return false;
    }

    let digest_f = Fr::from_biguint_reduced(digest);
    let u1 = digest_f.div(s);
    let u2 = r.div(s);
    let candidate = R::base()
        .scalar_mul(&u1.to_biguint())
        .add(&pub_key.scalar_mul(&u2.to_biguint()));

    if candidate.is_identity() {
        return false;
    }

    match candidate.affine_x() {
        Some(x) => x.reduce_into::<SubgroupField>() == *r,
        None => false,
    }
}

/// Efficient cross-form verification: accept iff `s*advice = digest*B +
/// r*pub`, given the advice point `advice = k*G` transported into the same
/// representation as `pub`. Replaces the `u1*B + u2*Q` computation of
/// [`verify`] with three fixed scalar multiplications.
pub fn verify_with_advice<R: Representation>(
    digest: &BigUint,
    pub_key: &R,
    r: &Fr,
    s: &Fr,
    advice: &R,
) -> bool {
    if r.is_zero() || s.is_zero() {
        return false;
    }

    let digest_f = Fr::from_biguint_reduced(digest);
    let lhs = advice.scalar_mul(&s.to_biguint());
    let rhs = R::base()
        .scalar_mul(&digest_f.to_biguint())
        .add(&pub_key.scalar_mul(&r.to_biguint()));

    lhs == rhs
}

/// Recover the candidate public keys consistent with a signature `(r, s)`
/// over `digest`, by trying every point `R::recover_from_x(r)` returns.
///
/// Never raises for malformed input: returns an empty `Vec` instead.
pub fn recover_public_key<R: Representation>(digest: &BigUint, r: &Fr, s: &Fr) -> Vec<R> {
    if r.is_zero() || s.is_zero() {
        return Vec::new();
    }

    let digest_f = Fr::from_biguint_reduced(digest);
    let r_inv = r.invert();
    let neg_digest_over_r = digest_f.mul(&r_inv).neg();
    let s_over_r = s.mul(&r_inv);

    R::recover_from_x(r)
        .into_iter()
        .map(|candidate_r_point| {
            R::base()
                .scalar_mul(&neg_digest_over_r.to_biguint())
                .add(&candidate_r_point.scalar_mul(&s_over_r.to_biguint()))
        })
        .filter(|candidate_pub| verify::<R>(digest, candidate_pub, r, s))
        .collect()
}

/// A private/public keypair for a fixed representation `R`, for callers who
/// would rather carry the pair around than thread `priv`/`pub` through every
/// call. The free functions above remain the primary, directly-specified
/// API; this is ergonomic sugar over them.
#[derive(Clone, Copy, Debug)]
pub struct KeyPair<R: Representation> {
    /// The private scalar, `priv_key in [1, n)`.
    pub private: Fr,
    /// The public point, `priv_key * B`.
    pub public: R,
}

impl<R: Representation> KeyPair<R> {
    /// Generate a keypair from a seed, `1 <= seed < n`.
    pub fn generate(seed: &BigUint) -> Result<Self> {
        let (private, public) = keygen::<R>(seed)?;
        Ok(Self { private, public })
    }

    /// Sign a digest with this keypair's private key and a caller-supplied
    /// nonce.
    pub fn sign(&self, digest: &BigUint, k: &BigUint) -> Result<(Fr, Fr)> {
        sign::<R>(digest, &self.private, k)
    }

    /// Verify a signature against this keypair's public key.
    pub fn verify(&self, digest: &BigUint, r: &Fr, s: &Fr) -> bool {
        verify::<R>(digest, &self.public, r, s)
    }
}
