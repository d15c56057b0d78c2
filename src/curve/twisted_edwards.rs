//! Twisted Edwards form: `A_E*x^2 + y^2 = 1 + d*x^2*y^2`.
//!
//! Unlike Short Weierstrass and Montgomery form, the identity `(0, 1)` is an
//! ordinary affine point here, and the addition law is complete (no case
//! split on doubling or on either operand being the identity).

use std::sync::OnceLock;

use num_bigint::BigUint;

use crate::curve::{recover_from_x_generic, MontPoint, Representation};
use crate::error::{Error, Result};
use crate::field::{parse_decimal, Fq, Fr};
use crate::params;

/// A Baby Jubjub point in Twisted Edwards affine form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TwEdPoint {
    x: Fq,
    y: Fq,
}

impl TwEdPoint {
    pub(crate) fn coeff_a() -> &'static Fq {
        static A: OnceLock<Fq> = OnceLock::new();
        A.get_or_init(|| Fq::from_biguint_reduced(&parse_decimal(params::TE_A_DEC)))
    }

    pub(crate) fn coeff_d() -> &'static Fq {
        static D: OnceLock<Fq> = OnceLock::new();
        D.get_or_init(|| Fq::from_biguint_reduced(&parse_decimal(params::TE_D_DEC)))
    }

    /// Construct a finite affine point, rejecting coordinates that do not
    /// satisfy `A_E*x^2 + y^2 = 1 + d*x^2*y^2`.
    pub fn new(x: Fq, y: Fq) -> Result<Self> {
        let point = Self { x, y };
        if !point.is_on_curve() {
            return Err(Error::NotOnCurve {
                x: x.to_biguint().to_string(),
                y: y.to_biguint().to_string(),
            });
        }
        Ok(point)
    }

    pub(crate) fn from_affine_unchecked(x: Fq, y: Fq) -> Self {
        Self { x, y }
    }

    /// Raw affine `x`-coordinate. TwEd points never carry `None`, unlike
    /// [`Representation::affine_x`]; use this when the form guarantee is
    /// already known at the call site (e.g. inside `convert`).
    pub(crate) fn x(&self) -> Fq {
        self.x
    }

    /// Raw affine `y`-coordinate.
    pub(crate) fn y(&self) -> Fq {
        self.y
    }

    fn rhs(x: &Fq) -> Fq {
        let numerator = Self::coeff_a().mul(x).mul(x).sub(&Fq::one());
        let denominator = Self::coeff_d().mul(x).mul(x).sub(&Fq::one());
        numerator.div(&denominator)
    }
}

impl Representation for TwEdPoint {
    const NAME: &'static str = "TwEdPoint";

    fn identity() -> Self {
        Self {
            x: Fq::zero(),
            y: Fq::one(),
        }
    }

    fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    fn generator() -> Self {
        static G: OnceLock<TwEdPoint> = OnceLock::new();
        *G.get_or_init(|| crate::convert::montgomery_to_twisted_edwards(&MontPoint::generator()))
    }

    fn base() -> Self {
        static B: OnceLock<TwEdPoint> = OnceLock::new();
        *B.get_or_init(|| crate::convert::montgomery_to_twisted_edwards(&MontPoint::base()))
    }

    fn is_on_curve(&self) -> bool {
        let lhs = Self::coeff_a().mul(&self.x).mul(&self.x).add(&self.y.mul(&self.y));
        let rhs = Fq::one().add(&Self::coeff_d().mul(&self.x).mul(&self.x).mul(&self.y).mul(&self.y));
        lhs == rhs
    }

    fn negate(&self) -> Self {
        Self {
            x: self.x.neg(),
            y: self.y,
        }
    }

    fn add(&self, rhs: &Self) -> Self {
        let (x1, y1) = (self.x, self.y);
        let (x2, y2) = (rhs.x, rhs.y);
        let d_prod = Self::coeff_d().mul(&x1).mul(&x2).mul(&y1).mul(&y2);
        let x3 = x1.mul(&y2).add(&y1.mul(&x2)).div(&Fq::one().add(&d_prod));
        let y3 = y1
            .mul(&y2)
            .sub(&Self::coeff_a().mul(&x1).mul(&x2))
            .div(&Fq::one().sub(&d_prod));
        Self { x: x3, y: y3 }
    }

    fn affine_x(&self) -> Option<Fq> {
        Some(self.x)
    }

    fn recover_from_x(x: &Fr) -> Vec<Self> {
        recover_from_x_generic(x, Self::rhs, Self::from_affine_unchecked)
    }

    fn from_affine(x: Fq, y: Fq) -> Result<Self> {
        Self::new(x, y)
    }
}

impl core::fmt::Display for TwEdPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "TwEd({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_zero_one() {
        let id = TwEdPoint::identity();
        assert_eq!(id.x, Fq::zero());
        assert_eq!(id.y, Fq::one());
        assert!(id.is_on_curve());
    }

    #[test]
    fn generator_and_base_are_on_curve() {
        assert!(TwEdPoint::generator().is_on_curve());
        assert!(TwEdPoint::base().is_on_curve());
    }

    #[test]
    fn base_is_eight_times_generator() {
        let eight_g = TwEdPoint::generator().scalar_mul(&BigUint::from(8u32));
        assert_eq!(eight_g, TwEdPoint::base());
    }

    #[test]
    fn identity_is_additive_neutral_without_case_split() {
        let g = TwEdPoint::generator();
        assert_eq!(g.add(&TwEdPoint::identity()), g);
        assert_eq!(TwEdPoint::identity().add(&g), g);
    }

    #[test]
    fn point_plus_negation_is_identity() {
        let g = TwEdPoint::generator();
        assert!(g.add(&g.negate()).is_identity());
    }

    #[test]
    fn addition_is_commutative() {
        let g = TwEdPoint::generator();
        let p = g.scalar_mul(&BigUint::from(3u32));
        let q = g.scalar_mul(&BigUint::from(8u32));
        assert_eq!(p.add(&q), q.add(&p));
    }

    #[test]
    fn scalar_mul_matches_repeated_addition() {
        let g = TwEdPoint::generator();
        let mut acc = TwEdPoint::identity();
        for _ in 0..6 {
            acc = acc.add(&g);
        }
        assert_eq!(acc, g.scalar_mul(&BigUint::from(6u32)));
    }

    #[test]
    fn subgroup_order_times_base_is_identity() {
        use crate::field::SubgroupField;
        let n = SubgroupField::order();
        assert!(TwEdPoint::base().scalar_mul(n).is_identity());
    }
}
