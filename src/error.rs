//! Errors used throughout this crate.

/// Errors produced by field, curve, conversion, and ECDSA operations.
///
/// Construction errors (off-curve points, out-of-range field values) indicate a
/// programming bug or corrupted input and are meant to be propagated with `?`.
/// The ECDSA verification entry points never raise: malformed `(r, s)` pairs
/// are adversary-controlled and are rejected by returning `false` or an empty
/// list rather than an `Err`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A field element constructor was called with a value outside `[0, order)`.
    #[error("value out of range: {value} is not in [0, {order})")]
    ValueOutOfRange {
        /// The rejected value, rendered in decimal.
        value: String,
        /// The field's order, rendered in decimal.
        order: String,
    },

    /// A point constructor was called with coordinates that do not satisfy
    /// the curve equation of the requested representation.
    #[error("point ({x}, {y}) is not on the curve")]
    NotOnCurve {
        /// Affine x-coordinate, rendered in decimal.
        x: String,
        /// Affine y-coordinate, rendered in decimal.
        y: String,
    },

    /// `sqrt` was called on a quadratic non-residue.
    #[error("no square root exists for the given field element")]
    NoSquareRoot,

    /// A caller-supplied representation name did not match the curve
    /// representation actually being constructed — e.g. a fixture entry
    /// tagged `"MontPoint"` handed to [`crate::curve::Representation::from_affine`]
    /// under `R = SWPoint`. `Representation`'s sealing makes mixing two
    /// already-typed points of different forms a compile error rather than
    /// a runtime one; this variant is for the one remaining boundary where
    /// the form is still just a string, such as the fixture loader.
    #[error("form mismatch: operands belong to different curve representations")]
    FormMismatch,

    /// A negative or otherwise invalid scalar was supplied to scalar
    /// multiplication or to a keygen/signing operation expecting `seed`/`k`
    /// in a specific range.
    #[error("invalid scalar: {0}")]
    InvalidScalar(String),

    /// `sign` produced `r = 0` or `s = 0`; the caller must retry with a
    /// fresh nonce `k`.
    #[error("signing failed: nonce produced r = 0 or s = 0, retry with a fresh nonce")]
    SigningFailed,
}

/// Result type used by this crate.
pub type Result<T> = core::result::Result<T, Error>;
