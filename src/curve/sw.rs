//! Short Weierstrass form: `y^2 = x^3 + a*x + b`.

use std::sync::OnceLock;

use num_bigint::BigUint;

use crate::curve::{recover_from_x_generic, Representation};
use crate::error::{Error, Result};
use crate::field::{parse_decimal, Fq, Fr};
use crate::params;

/// A Baby Jubjub point in Short Weierstrass affine form.
///
/// The identity is a distinct variant, per the design note in §9: nullable
/// coordinate fields would let a constructor mark infinity and then fall
/// through to assigning `x`/`y` anyway, leaving an inconsistent point. The
/// `Infinity` variant makes that bug unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SWPoint {
    /// The point at infinity, the group's neutral element.
    Infinity,
    /// A finite affine point `(x, y)` on the curve.
    Affine { x: Fq, y: Fq },
}

impl SWPoint {
    fn a() -> &'static Fq {
        static A: OnceLock<Fq> = OnceLock::new();
        A.get_or_init(|| Fq::from_biguint_reduced(&parse_decimal(params::SW_A_DEC)))
    }

    fn b() -> &'static Fq {
        static B: OnceLock<Fq> = OnceLock::new();
        B.get_or_init(|| Fq::from_biguint_reduced(&parse_decimal(params::SW_B_DEC)))
    }

    /// Construct a finite affine point, rejecting coordinates that do not
    /// satisfy `y^2 = x^3 + a*x + b`.
    pub fn new(x: Fq, y: Fq) -> Result<Self> {
        let point = Self::Affine { x, y };
        if !point.is_on_curve() {
            return Err(Error::NotOnCurve {
                x: x.to_biguint().to_string(),
                y: y.to_biguint().to_string(),
            });
        }
        Ok(point)
    }

    pub(crate) fn from_affine_unchecked(x: Fq, y: Fq) -> Self {
        Self::Affine { x, y }
    }

    fn rhs(x: &Fq) -> Fq {
        x.mul(x).mul(x).add(&Self::a().mul(x)).add(Self::b())
    }
}

impl Representation for SWPoint {
    const NAME: &'static str = "SWPoint";

    fn identity() -> Self {
        Self::Infinity
    }

    fn is_identity(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    fn generator() -> Self {
        static G: OnceLock<SWPoint> = OnceLock::new();
        *G.get_or_init(|| {
            SWPoint::from_affine_unchecked(
                Fq::from_biguint_reduced(&parse_decimal(params::SW_GX_DEC)),
                Fq::from_biguint_reduced(&parse_decimal(params::SW_GY_DEC)),
            )
        })
    }

    fn base() -> Self {
        static B: OnceLock<SWPoint> = OnceLock::new();
        *B.get_or_init(|| {
            SWPoint::from_affine_unchecked(
                Fq::from_biguint_reduced(&parse_decimal(params::SW_BX_DEC)),
                Fq::from_biguint_reduced(&parse_decimal(params::SW_BY_DEC)),
            )
        })
    }

    fn is_on_curve(&self) -> bool {
        match self {
            Self::Infinity => true,
            Self::Affine { x, y } => y.mul(y) == Self::rhs(x),
        }
    }

    fn negate(&self) -> Self {
        match self {
            Self::Infinity => Self::Infinity,
            Self::Affine { x, y } => Self::Affine { x: *x, y: y.neg() },
        }
    }

    fn add(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Self::Infinity, p) => *p,
            (p, Self::Infinity) => *p,
            (Self::Affine { x: x1, y: y1 }, Self::Affine { x: x2, y: y2 }) => {
                if x1 == x2 {
                    if y1.add(y2).is_zero() {
                        return Self::Infinity;
                    }
                    // P1 == P2: tangent slope.
                    let lambda = x1
                        .mul(x1)
                        .mul(&Fq::from_u64(3))
                        .add(Self::a())
                        .div(&y1.double());
                    let x3 = lambda.mul(&lambda).sub(x1).sub(x2);
                    let y3 = lambda.mul(&x1.sub(&x3)).sub(y1);
                    Self::Affine { x: x3, y: y3 }
                } else {
                    let lambda = y2.sub(y1).div(&x2.sub(x1));
                    let x3 = lambda.mul(&lambda).sub(x1).sub(x2);
                    let y3 = lambda.mul(&x1.sub(&x3)).sub(y1);
                    Self::Affine { x: x3, y: y3 }
                }
            }
        }
    }

    fn affine_x(&self) -> Option<Fq> {
        match self {
            Self::Infinity => None,
            Self::Affine { x, .. } => Some(*x),
        }
    }

    fn recover_from_x(x: &Fr) -> Vec<Self> {
        recover_from_x_generic(x, Self::rhs, Self::from_affine_unchecked)
    }

    fn from_affine(x: Fq, y: Fq) -> Result<Self> {
        Self::new(x, y)
    }
}

impl core::fmt::Display for SWPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Infinity => write!(f, "SW(infinity)"),
            Self::Affine { x, y } => write!(f, "SW({x}, {y})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_and_base_are_on_curve() {
        assert!(SWPoint::generator().is_on_curve());
        assert!(SWPoint::base().is_on_curve());
    }

    #[test]
    fn base_is_eight_times_generator() {
        let eight_g = SWPoint::generator().scalar_mul(&BigUint::from(8u32));
        assert_eq!(eight_g, SWPoint::base());
    }

    #[test]
    fn identity_is_additive_neutral() {
        let g = SWPoint::generator();
        assert_eq!(g.add(&SWPoint::Infinity), g);
        assert_eq!(SWPoint::Infinity.add(&g), g);
    }

    #[test]
    fn point_plus_negation_is_identity() {
        let g = SWPoint::generator();
        assert!(g.add(&g.negate()).is_identity());
    }

    #[test]
    fn addition_is_commutative_and_associative() {
        let g = SWPoint::generator();
        let p = g.scalar_mul(&BigUint::from(3u32));
        let q = g.scalar_mul(&BigUint::from(5u32));
        let s = g.scalar_mul(&BigUint::from(7u32));
        assert_eq!(p.add(&q), q.add(&p));
        assert_eq!(p.add(&q).add(&s), p.add(&q.add(&s)));
    }

    #[test]
    fn scalar_mul_matches_repeated_addition() {
        let g = SWPoint::generator();
        let mut acc = SWPoint::identity();
        for _ in 0..6 {
            acc = acc.add(&g);
        }
        assert_eq!(acc, g.scalar_mul(&BigUint::from(6u32)));
    }

    #[test]
    fn scalar_mul_distributes_over_scalar_addition() {
        let g = SWPoint::generator();
        let k = BigUint::from(11u32);
        let j = BigUint::from(13u32);
        let lhs = g.scalar_mul(&(&k + &j));
        let rhs = g.scalar_mul(&k).add(&g.scalar_mul(&j));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn scalar_mul_distributes_over_point_addition() {
        let g = SWPoint::generator();
        let h = SWPoint::generator().scalar_mul(&BigUint::from(17u32));
        let k = BigUint::from(9u32);
        let lhs = g.add(&h).scalar_mul(&k);
        let rhs = g.scalar_mul(&k).add(&h.scalar_mul(&k));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn subgroup_order_times_base_is_identity() {
        use crate::field::SubgroupField;
        let n = SubgroupField::order();
        assert!(SWPoint::base().scalar_mul(n).is_identity());
    }

    #[test]
    fn off_curve_point_is_rejected() {
        let x = Fq::from_u64(1);
        let y = Fq::from_u64(1);
        assert!(SWPoint::new(x, y).is_err());
    }

    #[test]
    fn recover_from_x_contains_original_point() {
        use crate::field::SubgroupField;
        let g = SWPoint::base().scalar_mul(&BigUint::from(42u32));
        let x = g.affine_x().expect("finite point");
        let r = x.reduce_into::<SubgroupField>();
        let candidates = SWPoint::recover_from_x(&r);
        assert!(candidates.contains(&g) || candidates.contains(&g.negate()));
    }
}
