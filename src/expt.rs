//! Fixed-parameter exponentiation in the cyclotomic subgroup.
//!
//! The BLS12-381 final exponentiation repeatedly raises cyclotomic-subgroup
//! elements to the curve parameter `t` (and to `t/2`). Because the exponent
//! is a compile-time constant, the exponentiation runs a hand-derived
//! addition chain instead of generic square-and-multiply, and performs the
//! long squaring runs in Karabina compressed form.
//!
//! The chain itself is data ([`EXPT_HALF_CHAIN`]) consumed by one generic
//! executor ([`exp_by_chain`]), so retargeting to a different curve
//! parameter is a constant change, not a code change.

use ark_bls12_381::Fq12;
use ark_ff::Field;

use crate::cyclotomic::{conjugate, cyclotomic_square, CompressedCyclotomic};

/// How a run of squarings is carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SquaringKind {
    /// Generic `Fq12` squaring.
    Full,
    /// Granger–Scott cyclotomic squaring on the full element.
    Cyclotomic,
    /// Karabina compressed squaring: compress once, square in the
    /// four-coordinate form, decompress once at the end of the run.
    Compressed,
}

/// One step of an addition chain: a run of squarings, optionally followed
/// by a multiplication with the chain base.
///
/// Multiplications always see the fully decompressed element; the
/// compressed form never crosses a step boundary, because it is not closed
/// under multiplication.
#[derive(Clone, Copy, Debug)]
pub struct ChainStep {
    pub kind: SquaringKind,
    pub squarings: usize,
    pub multiply_by_base: bool,
}

/// Addition chain for |t|/2 = 0x6900_8000_0000_8000: 62 squarings and
/// 5 multiplies, generated by github.com/mmcloughlin/addchain v0.4.0:
///
/// ```text
/// _10      = 2*1
/// _11      = 1 + _10
/// _1100    = _11 << 2
/// _1101    = 1 + _1100
/// _1101000 = _1101 << 3
/// _1101001 = 1 + _1101000
/// return     ((_1101001 << 9 + 1) << 32 + 1) << 15
/// ```
///
/// The short runs stay on the full element; each long run is a compressed
/// burst decompressed exactly once before the following multiply.
pub const EXPT_HALF_CHAIN: &[ChainStep] = &[
    ChainStep {
        kind: SquaringKind::Full,
        squarings: 1,
        multiply_by_base: true,
    },
    ChainStep {
        kind: SquaringKind::Cyclotomic,
        squarings: 2,
        multiply_by_base: true,
    },
    ChainStep {
        kind: SquaringKind::Compressed,
        squarings: 3,
        multiply_by_base: true,
    },
    ChainStep {
        kind: SquaringKind::Compressed,
        squarings: 9,
        multiply_by_base: true,
    },
    ChainStep {
        kind: SquaringKind::Compressed,
        squarings: 32,
        multiply_by_base: true,
    },
    ChainStep {
        kind: SquaringKind::Compressed,
        squarings: 15,
        multiply_by_base: false,
    },
];

/// Runs a declarative squaring/multiply chain on `x`.
///
/// The executed operation sequence depends only on the chain, never on the
/// value of `x`. Cyclotomic and compressed steps require `x` to lie in the
/// cyclotomic subgroup.
pub fn exp_by_chain(x: &Fq12, chain: &[ChainStep]) -> Fq12 {
    let mut z = *x;
    for step in chain {
        z = match step.kind {
            SquaringKind::Full => {
                let mut t = z;
                for _ in 0..step.squarings {
                    t = t.square();
                }
                t
            }
            SquaringKind::Cyclotomic => {
                let mut t = z;
                for _ in 0..step.squarings {
                    t = cyclotomic_square(&t);
                }
                t
            }
            SquaringKind::Compressed => CompressedCyclotomic::compress(&z)
                .square_n(step.squarings)
                .decompress(),
        };
        if step.multiply_by_base {
            z *= x;
        }
    }
    z
}

/// `x^(t/2)` for the BLS12-381 curve parameter `t` (which is negative).
///
/// Contract: `x` lies in the cyclotomic subgroup. Membership is not
/// checked; a non-member input yields a well-typed wrong result, never a
/// fault.
pub fn expt_half(x: &Fq12) -> Fq12 {
    // the chain computes x^(|t|/2); conjugation flips the exponent's sign
    conjugate(&exp_by_chain(x, EXPT_HALF_CHAIN))
}

/// `x^t`, as the cyclotomic square of [`expt_half`]. Same contract.
pub fn expt(x: &Fq12) -> Fq12 {
    cyclotomic_square(&expt_half(x))
}
