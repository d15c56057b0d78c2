//! Montgomery form: `B*y^2 = x^3 + A*x^2 + x`.

use std::sync::OnceLock;

use num_bigint::BigUint;

use crate::curve::{recover_from_x_generic, Representation, SWPoint};
use crate::error::{Error, Result};
use crate::field::{parse_decimal, Fq, Fr};
use crate::params;

/// A Baby Jubjub point in Montgomery affine form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MontPoint {
    /// The point at infinity.
    Infinity,
    /// A finite affine point `(x, y)` on the curve.
    Affine { x: Fq, y: Fq },
}

impl MontPoint {
    pub(crate) fn coeff_a() -> &'static Fq {
        static A: OnceLock<Fq> = OnceLock::new();
        A.get_or_init(|| Fq::from_biguint_reduced(&parse_decimal(params::MONT_A_DEC)))
    }

    pub(crate) fn coeff_b() -> &'static Fq {
        static B: OnceLock<Fq> = OnceLock::new();
        B.get_or_init(|| Fq::from_biguint_reduced(&parse_decimal(params::MONT_B_DEC)))
    }

    /// `alpha = A / 3`, used by the SW<->Montgomery birational maps.
    pub(crate) fn alpha() -> &'static Fq {
        static ALPHA: OnceLock<Fq> = OnceLock::new();
        ALPHA.get_or_init(|| Self::coeff_a().div(&Fq::from_u64(3)))
    }

    /// `beta = 1 / B`.
    pub(crate) fn beta() -> &'static Fq {
        static BETA: OnceLock<Fq> = OnceLock::new();
        BETA.get_or_init(|| Fq::one().div(Self::coeff_b()))
    }

    /// Construct a finite affine point, rejecting coordinates that do not
    /// satisfy `B*y^2 = x^3 + A*x^2 + x`.
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
        let numerator = x.mul(x).mul(x).add(&Self::coeff_a().mul(x).mul(x)).add(x);
        numerator.mul(Self::beta())
    }
}

impl Representation for MontPoint {
    const NAME: &'static str = "MontPoint";

    fn identity() -> Self {
        Self::Infinity
    }

    fn is_identity(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    fn generator() -> Self {
        static G: OnceLock<MontPoint> = OnceLock::new();
        *G.get_or_init(|| crate::convert::sw_to_montgomery(&SWPoint::generator()))
    }

    fn base() -> Self {
        static B: OnceLock<MontPoint> = OnceLock::new();
        *B.get_or_init(|| crate::convert::sw_to_montgomery(&SWPoint::base()))
    }

    fn is_on_curve(&self) -> bool {
        match self {
            Self::Infinity => true,
            Self::Affine { x, y } => Self::coeff_b().mul(y).mul(y) == x.mul(x).mul(x).add(&Self::coeff_a().mul(x).mul(x)).add(x),
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
                    let three_x1_sq = x1.mul(x1).mul(&Fq::from_u64(3));
                    let two_a_x1 = Self::coeff_a().mul(x1).double();
                    let lambda = three_x1_sq
                        .add(&two_a_x1)
                        .add(&Fq::one())
                        .div(&Self::coeff_b().mul(y1).double());
                    let x3 = Self::coeff_b()
                        .mul(&lambda)
                        .mul(&lambda)
                        .sub(Self::coeff_a())
                        .sub(x1)
                        .sub(x2);
                    let y3 = Fq::from_u64(2)
                        .mul(x1)
                        .add(x2)
                        .add(Self::coeff_a())
                        .mul(&lambda)
                        .sub(&Self::coeff_b().mul(&lambda).mul(&lambda).mul(&lambda))
                        .sub(y1);
                    Self::Affine { x: x3, y: y3 }
                } else {
                    let lambda = y2.sub(y1).div(&x2.sub(x1));
                    let x3 = Self::coeff_b()
                        .mul(&lambda)
                        .mul(&lambda)
                        .sub(Self::coeff_a())
                        .sub(x1)
                        .sub(x2);
                    let y3 = Fq::from_u64(2)
                        .mul(x1)
                        .add(x2)
                        .add(Self::coeff_a())
                        .mul(&lambda)
                        .sub(&Self::coeff_b().mul(&lambda).mul(&lambda).mul(&lambda))
                        .sub(y1);
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

impl core::fmt::Display for MontPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Infinity => write!(f, "Mont(infinity)"),
            Self::Affine { x, y } => write!(f, "Mont({x}, {y})"),
        }
    }
}
