//! Birational maps between the three curve representations (§4.4).
//!
//! Each map is a group isomorphism: it sends the identity to the identity
//! and commutes with addition and scalar multiplication. Exposed both as
//! plain functions (used internally, e.g. to derive each form's generator
//! from the Short Weierstrass constants) and as `From` impls, following the
//! workspace convention of expressing canonical, infallible conversions as
//! `From` rather than bespoke `to_x()` methods.

use crate::curve::{MontPoint, Representation, SWPoint, TwEdPoint};
use crate::field::Fq;

/// `(x, y) -> (x - alpha, y)`, `alpha = A/3`. Infinity maps to infinity.
pub fn sw_to_montgomery(p: &SWPoint) -> MontPoint {
    match p {
        SWPoint::Infinity => MontPoint::Infinity,
        SWPoint::Affine { x, y } => {
            MontPoint::from_affine_unchecked(x.sub(MontPoint::alpha()), *y)
        }
    }
}

/// `(x, y) -> ((x + A/3)/B, y/B)`. Infinity maps to infinity.
pub fn montgomery_to_sw(p: &MontPoint) -> SWPoint {
    match p {
        MontPoint::Infinity => SWPoint::Infinity,
        MontPoint::Affine { x, y } => {
            let new_x = x.add(MontPoint::alpha()).mul(MontPoint::beta());
            let new_y = y.mul(MontPoint::beta());
            SWPoint::from_affine_unchecked(new_x, new_y)
        }
    }
}

/// `(x, y) -> (x/y, (x-1)/(x+1))`. Infinity maps to the TwEd identity `(0, 1)`.
pub fn montgomery_to_twisted_edwards(p: &MontPoint) -> TwEdPoint {
    match p {
        MontPoint::Infinity => TwEdPoint::identity(),
        MontPoint::Affine { x, y } => {
            let new_x = x.div(y);
            let new_y = x.sub(&Fq::one()).div(&x.add(&Fq::one()));
            TwEdPoint::from_affine_unchecked(new_x, new_y)
        }
    }
}

/// `(x, y) -> ((1+y)/(1-y), (1+y)/((1-y)*x))`. The TwEd identity `(0, 1)`
/// maps to Montgomery infinity.
pub fn twisted_edwards_to_montgomery(p: &TwEdPoint) -> MontPoint {
    if p.is_identity() {
        return MontPoint::Infinity;
    }
    let x = p.x();
    let y = p.y();
    let one_minus_y = Fq::one().sub(&y);
    let one_plus_y = Fq::one().add(&y);
    let new_x = one_plus_y.div(&one_minus_y);
    let new_y = one_plus_y.div(&one_minus_y.mul(&x));
    MontPoint::from_affine_unchecked(new_x, new_y)
}

/// Composition `SW -> Montgomery -> TwEd`.
pub fn sw_to_twisted_edwards(p: &SWPoint) -> TwEdPoint {
    montgomery_to_twisted_edwards(&sw_to_montgomery(p))
}

/// Composition `TwEd -> Montgomery -> SW`.
pub fn twisted_edwards_to_sw(p: &TwEdPoint) -> SWPoint {
    montgomery_to_sw(&twisted_edwards_to_montgomery(p))
}

impl From<&SWPoint> for MontPoint {
    fn from(p: &SWPoint) -> Self {
        sw_to_montgomery(p)
    }
}

impl From<&MontPoint> for SWPoint {
    fn from(p: &MontPoint) -> Self {
        montgomery_to_sw(p)
    }
}

impl From<&MontPoint> for TwEdPoint {
    fn from(p: &MontPoint) -> Self {
        montgomery_to_twisted_edwards(p)
    }
}

impl From<&TwEdPoint> for MontPoint {
    fn from(p: &TwEdPoint) -> Self {
        twisted_edwards_to_montgomery(p)
    }
}

impl From<&SWPoint> for TwEdPoint {
    fn from(p: &SWPoint) -> Self {
        sw_to_twisted_edwards(p)
    }
}

impl From<&TwEdPoint> for SWPoint {
    fn from(p: &TwEdPoint) -> Self {
        twisted_edwards_to_sw(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn sw_mont_round_trip() {
        let g = SWPoint::generator();
        let mont = MontPoint::from(&g);
        assert_eq!(SWPoint::from(&mont), g);
    }

    #[test]
    fn mont_tw_ed_round_trip() {
        let g = MontPoint::generator();
        let te = TwEdPoint::from(&g);
        assert_eq!(MontPoint::from(&te), g);
    }

    #[test]
    fn sw_tw_ed_round_trip() {
        let g = SWPoint::generator();
        let te = TwEdPoint::from(&g);
        assert_eq!(SWPoint::from(&te), g);
    }

    #[test]
    fn infinity_maps_to_infinity() {
        assert_eq!(MontPoint::from(&SWPoint::Infinity), MontPoint::Infinity);
        assert_eq!(SWPoint::from(&MontPoint::Infinity), SWPoint::Infinity);
        assert_eq!(TwEdPoint::from(&MontPoint::Infinity), TwEdPoint::identity());
        assert_eq!(
            MontPoint::from(&TwEdPoint::identity()),
            MontPoint::Infinity
        );
    }

    #[test]
    fn generators_match_across_forms() {
        assert_eq!(MontPoint::from(&SWPoint::generator()), MontPoint::generator());
        assert_eq!(
            TwEdPoint::from(&MontPoint::generator()),
            TwEdPoint::generator()
        );
        assert_eq!(
            TwEdPoint::from(&SWPoint::generator()),
            TwEdPoint::generator()
        );
    }

    #[test]
    fn maps_preserve_addition() {
        let g = SWPoint::generator();
        let p = g.scalar_mul(&BigUint::from(4u32));
        let q = g.scalar_mul(&BigUint::from(7u32));
        let sum_sw = p.add(&q);

        let p_m = MontPoint::from(&p);
        let q_m = MontPoint::from(&q);
        assert_eq!(MontPoint::from(&sum_sw), p_m.add(&q_m));

        let p_te = TwEdPoint::from(&p);
        let q_te = TwEdPoint::from(&q);
        assert_eq!(TwEdPoint::from(&sum_sw), p_te.add(&q_te));
    }

    #[test]
    fn maps_preserve_scalar_multiplication() {
        let g = SWPoint::generator();
        let k = BigUint::from(13u32);
        let kg_sw = g.scalar_mul(&k);

        let g_m = MontPoint::from(&g);
        assert_eq!(MontPoint::from(&kg_sw), g_m.scalar_mul(&k));

        let g_te = TwEdPoint::from(&g);
        assert_eq!(TwEdPoint::from(&kg_sw), g_te.scalar_mul(&k));
    }
}
