//! Compile-time-documented curve constants for Baby Jubjub, shared by every
//! representation.
//!
//! Values are recorded here as decimal literals and parsed once into
//! [`num_bigint::BigUint`]/[`crate::field::FieldElement`] values behind
//! `OnceLock` statics in [`crate::field`] and `crate::curve::*`, matching the
//! "precompute per-form constants once" requirement: the integers below are
//! bit-exact with the values recorded in EIP-2494.

/// The BN254 scalar field prime, shared by all three representations.
pub const P_DEC: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

/// The full group order `N` of the Baby Jubjub curve (`N = 8 * n`).
pub const N_FULL_DEC: &str =
    "21888242871839275222246405745257275088614511777268538073601725287587578984328";

/// The cofactor `h`.
pub const COFACTOR: u64 = 8;

/// Short Weierstrass curve coefficient `a` in `y^2 = x^3 + a*x + b`.
pub const SW_A_DEC: &str =
    "7296080957279758407415468581752425029516121466805344781232734728849116493472";

/// Short Weierstrass curve coefficient `b` in `y^2 = x^3 + a*x + b`.
pub const SW_B_DEC: &str =
    "16213513238399463127589930181672055621146936592900766180517188641980520820846";

/// Montgomery curve coefficient `A` in `B*y^2 = x^3 + A*x^2 + x`.
pub const MONT_A_DEC: &str = "168698";

/// Montgomery curve coefficient `B` in `B*y^2 = x^3 + A*x^2 + x`.
pub const MONT_B_DEC: &str = "1";

/// Twisted Edwards curve coefficient `A_E` in `A_E*x^2 + y^2 = 1 + d*x^2*y^2`.
pub const TE_A_DEC: &str = "168700";

/// Twisted Edwards curve coefficient `d` in `A_E*x^2 + y^2 = 1 + d*x^2*y^2`.
pub const TE_D_DEC: &str = "168696";

/// Short Weierstrass generator `G.x`.
pub const SW_GX_DEC: &str =
    "7296080957279758407415468581752425029516121466805344781232734728858602888112";

/// Short Weierstrass generator `G.y`.
pub const SW_GY_DEC: &str =
    "4258727773875940690362607550498304598101071202821725296872974770776423442226";

/// Short Weierstrass base point `B.x` (`B = 8*G`).
pub const SW_BX_DEC: &str =
    "14414009007687342025526645003307639786191886886413750648631138442071909631647";

/// Short Weierstrass base point `B.y` (`B = 8*G`).
pub const SW_BY_DEC: &str =
    "14577268218881899420966779687690205425227431577728659819975198491127179315626";

/// Asserts, at test time, the six curve-parameter identities relating the
/// Short Weierstrass, Montgomery, and Twisted Edwards coefficients (§3):
/// `(A+2)/B = A_E`, `(A-2)/B = d`, `2(A_E+d)/(A_E-d) = A`, `4/(A_E-d) = B`,
/// `(1/B^2)(1 - A^2/3) = a`, and `(A/(3*B^3))(2*A^2/9 - 1) = b`. `B = 8*G`
/// per form is asserted alongside each representation's own generator/base
/// tests (`src/curve/{sw,montgomery,twisted_edwards}.rs`), not here.
#[cfg(test)]
mod consistency {
    use crate::field::{parse_decimal, Fq};
    use crate::params::*;

    fn fq(dec: &str) -> Fq {
        Fq::from_biguint_reduced(&parse_decimal(dec))
    }

    #[test]
    fn mont_a_plus_two_over_b_is_te_a() {
        let (a, b, te_a) = (fq(MONT_A_DEC), fq(MONT_B_DEC), fq(TE_A_DEC));
        assert_eq!(a.add(&Fq::from_u64(2)).div(&b), te_a);
    }

    #[test]
    fn mont_a_minus_two_over_b_is_te_d() {
        let (a, b, d) = (fq(MONT_A_DEC), fq(MONT_B_DEC), fq(TE_D_DEC));
        assert_eq!(a.sub(&Fq::from_u64(2)).div(&b), d);
    }

    #[test]
    fn te_sum_over_difference_is_mont_a() {
        let (a, te_a, d) = (fq(MONT_A_DEC), fq(TE_A_DEC), fq(TE_D_DEC));
        let lhs = Fq::from_u64(2).mul(&te_a.add(&d)).div(&te_a.sub(&d));
        assert_eq!(lhs, a);
    }

    #[test]
    fn four_over_te_difference_is_mont_b() {
        let (b, te_a, d) = (fq(MONT_B_DEC), fq(TE_A_DEC), fq(TE_D_DEC));
        let lhs = Fq::from_u64(4).div(&te_a.sub(&d));
        assert_eq!(lhs, b);
    }

    #[test]
    fn mont_coefficients_yield_sw_a() {
        let (a, b, sw_a) = (fq(MONT_A_DEC), fq(MONT_B_DEC), fq(SW_A_DEC));
        let one_minus_a_sq_over_3 = Fq::one().sub(&a.mul(&a).div(&Fq::from_u64(3)));
        let lhs = one_minus_a_sq_over_3.div(&b.mul(&b));
        assert_eq!(lhs, sw_a);
    }

    #[test]
    fn mont_coefficients_yield_sw_b() {
        let (a, b, sw_b) = (fq(MONT_A_DEC), fq(MONT_B_DEC), fq(SW_B_DEC));
        let two_a_sq_over_9_minus_one = Fq::from_u64(2).mul(&a).mul(&a).div(&Fq::from_u64(9)).sub(&Fq::one());
        let lhs = a.div(&Fq::from_u64(3).mul(&b).mul(&b).mul(&b)).mul(&two_a_sq_over_9_minus_one);
        assert_eq!(lhs, sw_b);
    }
}
