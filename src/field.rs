//! Prime-field arithmetic, generic over a compile-time modulus tag.
//!
//! Per the crate's design note on shared field tags: there are exactly two
//! moduli in play (the base field `F_p` and the scalar/subgroup field
//! `F_n`), so the modulus is encoded in the type via [`FieldParams`] rather
//! than carried as a runtime pointer. Arithmetic between elements of
//! different moduli is then a compile error, not a runtime check — there is
//! no representable call site left for a "field mismatch" error, so the
//! crate's error taxonomy carries none.

use core::fmt;
use core::marker::PhantomData;
use std::sync::OnceLock;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::params;

/// A prime modulus known at compile time, identified by a zero-sized marker
/// type. Sealed: only [`BaseField`] and [`SubgroupField`] implement it.
pub trait FieldParams: Copy + Clone + fmt::Debug + Eq + Send + Sync + 'static {
    /// Human-readable name, used in error messages and `Debug` output.
    const NAME: &'static str;

    /// The field's prime order.
    fn order() -> &'static BigUint;
}

/// Marker for the base field `F_p`, the field Baby Jubjub's curve equations
/// are defined over.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BaseField;

impl FieldParams for BaseField {
    const NAME: &'static str = "F_p";

    fn order() -> &'static BigUint {
        static P: OnceLock<BigUint> = OnceLock::new();
        P.get_or_init(|| parse_decimal(params::P_DEC))
    }
}

/// Marker for the scalar field `F_n`, `n` being the prime subgroup order
/// (`n = N / 8`). All ECDSA scalars (private keys, nonces, `r`, `s`) live here.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SubgroupField;

impl FieldParams for SubgroupField {
    const NAME: &'static str = "F_n";

    fn order() -> &'static BigUint {
        static N: OnceLock<BigUint> = OnceLock::new();
        N.get_or_init(|| {
            let full = parse_decimal(params::N_FULL_DEC);
            full / BigUint::from(params::COFACTOR)
        })
    }
}

pub(crate) fn parse_decimal(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 10).expect("curve constant is valid decimal")
}

/// An element of a prime field, tagged at the type level by its modulus.
///
/// Invariant: `0 <= value < P::order()` always holds for a live
/// `FieldElement<P>`; every arithmetic operation below returns a fresh,
/// already-reduced element.
#[derive(Clone)]
pub struct FieldElement<P: FieldParams> {
    value: BigUint,
    _field: PhantomData<P>,
}

/// A base-field element (`F_p`), following the `arkworks` convention of
/// naming the curve's base field `Fq`.
pub type Fq = FieldElement<BaseField>;

/// A scalar-field element (`F_n`), following the `arkworks` convention of
/// naming the scalar/subgroup field `Fr`.
pub type Fr = FieldElement<SubgroupField>;

impl<P: FieldParams> FieldElement<P> {
    /// Construct a field element, rejecting `value >= order`.
    ///
    /// Negative values are rejected: callers with a raw two's-complement
    /// integer must reduce it themselves; see [`Self::from_bigint_reduced`]
    /// for the intentionally-lenient constructor used internally where a
    /// derived quantity may legitimately be out of range before reduction.
    pub fn new(value: &BigUint) -> Result<Self> {
        if value >= P::order() {
            return Err(Error::ValueOutOfRange {
                value: value.to_string(),
                order: P::order().to_string(),
            });
        }
        Ok(Self {
            value: value.clone(),
            _field: PhantomData,
        })
    }

    /// Construct a field element from a signed integer, rejecting negative
    /// values and values `>= order`.
    pub fn from_bigint(value: &BigInt) -> Result<Self> {
        if value.sign() == Sign::Minus {
            return Err(Error::ValueOutOfRange {
                value: value.to_string(),
                order: P::order().to_string(),
            });
        }
        Self::new(&value.magnitude().clone())
    }

    /// Construct a field element from a `u64`.
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: BigUint::from(value),
            _field: PhantomData,
        }
    }

    /// Reduce an arbitrary (possibly negative, possibly oversized) integer
    /// modulo the field's order. Used internally for derived quantities such
    /// as `x_int + m*n` in [`crate::curve`]'s `recover_from_x`, which may
    /// exceed or fall outside `[0, order)` before reduction.
    pub(crate) fn from_bigint_reduced(value: &BigInt) -> Self {
        let order = BigInt::from(P::order().clone());
        let mut reduced = value % &order;
        if reduced.sign() == Sign::Minus {
            reduced += &order;
        }
        Self {
            value: reduced.magnitude().clone(),
            _field: PhantomData,
        }
    }

    pub(crate) fn from_biguint_reduced(value: &BigUint) -> Self {
        Self {
            value: value % P::order(),
            _field: PhantomData,
        }
    }

    /// The additive identity.
    pub fn zero() -> Self {
        Self {
            value: BigUint::zero(),
            _field: PhantomData,
        }
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        Self {
            value: BigUint::one(),
            _field: PhantomData,
        }
    }

    /// Whether this element is the additive identity.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// The element's canonical representative in `[0, order)`.
    pub fn to_biguint(&self) -> BigUint {
        self.value.clone()
    }

    /// Big-endian, fixed-width (32-byte) encoding of the canonical
    /// representative. Every element here fits in 32 bytes since both `F_p`
    /// and `F_n` are sub-2^254 BN254-scale primes.
    pub fn to_bytes_be(&self) -> [u8; 32] {
        let raw = self.value.to_bytes_be();
        let mut out = [0u8; 32];
        out[32 - raw.len()..].copy_from_slice(&raw);
        out
    }

    /// Inverse of [`Self::to_bytes_be`]: rejects encodings `>= order`.
    pub fn from_bytes_be(bytes: &[u8; 32]) -> Result<Self> {
        Self::new(&BigUint::from_bytes_be(bytes))
    }

    /// Reduce this element into the other field `Q`'s scalar range, i.e.
    /// compute `self.value mod Q::order()`. Used by ECDSA to take a base
    /// field `x`-coordinate and treat it as a scalar-field value (`r = x mod n`).
    pub fn reduce_into<Q: FieldParams>(&self) -> FieldElement<Q> {
        FieldElement::from_biguint_reduced(&self.value)
    }

    /// `self + rhs`.
    pub fn add(&self, rhs: &Self) -> Self {
        Self::from_biguint_reduced(&(&self.value + &rhs.value))
    }

    /// `self - rhs`.
    pub fn sub(&self, rhs: &Self) -> Self {
        let order = P::order();
        let lhs = &self.value + order;
        Self::from_biguint_reduced(&(lhs - &rhs.value))
    }

    /// `self * rhs`.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self::from_biguint_reduced(&(&self.value * &rhs.value))
    }

    /// Additive inverse: `order - self` if nonzero, else `0`.
    pub fn neg(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        Self {
            value: P::order() - &self.value,
            _field: PhantomData,
        }
    }

    /// `self^exponent mod order`, via repeated squaring.
    pub fn pow(&self, exponent: &BigUint) -> Self {
        Self {
            value: self.value.modpow(exponent, P::order()),
            _field: PhantomData,
        }
    }

    /// Multiplicative inverse / division: `self * rhs^(order - 2)`.
    ///
    /// `rhs = 0` is the caller's responsibility to avoid; Fermat's identity
    /// degrades gracefully (`0^(order-2) = 0`), so division by zero silently
    /// yields `0` rather than panicking, matching the documented behavior of
    /// the reference algorithm.
    pub fn div(&self, rhs: &Self) -> Self {
        let exponent = P::order() - BigUint::from(2u32);
        self.mul(&rhs.pow(&exponent))
    }

    /// Multiplicative inverse of `self` (`self^(order - 2)`).
    pub fn invert(&self) -> Self {
        Self::one().div(self)
    }

    /// Doubling, `self + self`.
    pub fn double(&self) -> Self {
        self.add(self)
    }
}

impl Fq {
    /// Square root mod `p`, via Tonelli–Shanks.
    ///
    /// `p ≡ 1 (mod 4)` for the BN254 scalar prime, so the simpler
    /// `a^((p+1)/4)` shortcut (valid only when `p ≡ 3 mod 4`) does not apply.
    pub fn sqrt(&self) -> Result<Self> {
        tonelli_shanks(&self.value, BaseField::order())
            .map(|value| Self {
                value,
                _field: PhantomData,
            })
            .ok_or(Error::NoSquareRoot)
    }
}

/// Tonelli–Shanks square root mod an odd prime `p`. Returns `None` when `n`
/// is a quadratic non-residue.
fn tonelli_shanks(n: &BigUint, p: &BigUint) -> Option<BigUint> {
    if n.is_zero() {
        return Some(BigUint::zero());
    }

    let one = BigUint::one();
    let two = BigUint::from(2u32);
    let p_minus_1 = p - &one;
    let euler_exp = &p_minus_1 / &two;

    if n.modpow(&euler_exp, p) != one {
        return None;
    }

    // Factor p - 1 = q * 2^s with q odd.
    let mut q = p_minus_1.clone();
    let mut s: u32 = 0;
    while (&q % &two).is_zero() {
        q /= &two;
        s += 1;
    }

    if s == 1 {
        // p ≡ 3 (mod 4): a single exponentiation suffices.
        let exp = (p + &one) / BigUint::from(4u32);
        return Some(n.modpow(&exp, p));
    }

    // Find a quadratic non-residue z.
    let mut z = two.clone();
    while z.modpow(&euler_exp, p) != p_minus_1 {
        z += &one;
    }

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = n.modpow(&q, p);
    let mut r = n.modpow(&((&q + &one) / &two), p);

    loop {
        if t == one {
            return Some(r);
        }

        // Least i, 0 < i < m, with t^(2^i) == 1.
        let mut i = 0u32;
        let mut temp = t.clone();
        while temp != one {
            temp = (&temp * &temp) % p;
            i += 1;
            if i == m {
                return None;
            }
        }

        let shift = m - i - 1;
        let b_exp = BigUint::one() << shift;
        let b = c.modpow(&b_exp, p);
        m = i;
        c = (&b * &b) % p;
        t = (&t * &c) % p;
        r = (&r * &b) % p;
    }
}

impl<P: FieldParams> PartialEq for FieldElement<P> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<P: FieldParams> Eq for FieldElement<P> {}

impl<P: FieldParams> fmt::Debug for FieldElement<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", P::NAME, self.value)
    }
}

impl<P: FieldParams> fmt::Display for FieldElement<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<P: FieldParams> Copy for FieldElement<P> {}

macro_rules! forward_ops {
    ($trait:ident, $method:ident, $op:ident) => {
        impl<P: FieldParams> core::ops::$trait for FieldElement<P> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                self.$op(&rhs)
            }
        }

        impl<P: FieldParams> core::ops::$trait<&FieldElement<P>> for &FieldElement<P> {
            type Output = FieldElement<P>;

            fn $method(self, rhs: &FieldElement<P>) -> FieldElement<P> {
                FieldElement::$op(self, rhs)
            }
        }
    };
}

forward_ops!(Add, add, add);
forward_ops!(Sub, sub, sub);
forward_ops!(Mul, mul, mul);

impl<P: FieldParams> core::ops::Neg for FieldElement<P> {
    type Output = Self;

    fn neg(self) -> Self {
        FieldElement::neg(&self)
    }
}

impl<P: FieldParams> core::ops::Neg for &FieldElement<P> {
    type Output = FieldElement<P>;

    fn neg(self) -> FieldElement<P> {
        FieldElement::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_roundtrip() {
        let a = Fq::from_u64(12345);
        let b = Fq::from_u64(67890);
        assert_eq!(a.add(&b).sub(&b), a);
    }

    #[test]
    fn neg_is_additive_inverse() {
        let a = Fq::from_u64(42);
        assert_eq!(a.add(&a.neg()), Fq::zero());
        assert_eq!(Fq::zero().neg(), Fq::zero());
    }

    #[test]
    fn div_by_self_is_one() {
        let a = Fq::from_u64(7);
        assert_eq!(a.div(&a), Fq::one());
    }

    #[test]
    fn div_by_zero_yields_zero() {
        let a = Fq::from_u64(7);
        assert_eq!(a.div(&Fq::zero()), Fq::zero());
    }

    #[test]
    fn sqrt_of_square_round_trips() {
        let a = Fq::from_u64(99991);
        let square = a.mul(&a);
        let root = square.sqrt().expect("square has a root");
        assert!(root == a || root == a.neg());
    }

    #[test]
    fn sqrt_of_non_residue_fails() {
        // A small-known non-residue search: find one by trial, since which
        // small integers are QRs depends on the (very large) prime modulus.
        let mut candidate = 2u64;
        loop {
            let a = Fq::from_u64(candidate);
            if a.sqrt().is_err() {
                break;
            }
            candidate += 1;
        }
    }

    #[test]
    fn construct_rejects_out_of_range() {
        let order = BaseField::order().clone();
        assert!(Fq::new(&order).is_err());
    }

    #[test]
    fn construct_rejects_negative() {
        let neg_one = BigInt::from(-1);
        assert!(Fq::from_bigint(&neg_one).is_err());
    }

    #[test]
    fn pow_matches_repeated_mul() {
        let a = Fq::from_u64(3);
        let by_pow = a.pow(&BigUint::from(5u32));
        let by_mul = a.mul(&a).mul(&a).mul(&a).mul(&a);
        assert_eq!(by_pow, by_mul);
    }

    #[test]
    fn base_and_scalar_field_orders_differ() {
        assert_ne!(BaseField::order(), SubgroupField::order());
    }

    #[test]
    fn bytes_round_trip() {
        let a = Fq::from_u64(123456789);
        let bytes = a.to_bytes_be();
        assert_eq!(Fq::from_bytes_be(&bytes).unwrap(), a);
    }

    #[test]
    fn from_bytes_be_rejects_out_of_range() {
        let order_bytes = BaseField::order().to_bytes_be();
        let mut bytes = [0u8; 32];
        bytes[32 - order_bytes.len()..].copy_from_slice(&order_bytes);
        assert!(Fq::from_bytes_be(&bytes).is_err());
    }
}
