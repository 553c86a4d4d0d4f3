//! Sparse multiplications for pairing line evaluations.
//!
//! A Miller-loop line evaluation, once normalized by its constant
//! coefficient, populates only a known subset of the twelve tower
//! coordinates. Folding it into the loop accumulator with a generic Fq12
//! product would waste most of the work, so the products here exploit the
//! zero pattern down through the Fq6 level.
//!
//! Coordinate slots are numbered 0..5 over Fq2 as
//! `(c0.c0, c0.c1, c0.c2, c1.c0, c1.c1, c1.c2)`. Two unital shapes appear
//! in practice: slots {0,1,4} from M-twist curves such as BLS12-381
//! ([`mul_by_014`]) and slots {0,3,4} from D-twist curves such as BN254
//! ([`mul_by_034`]). The two formulas are not interchangeable; each is
//! verified against a densely constructed operand of its own shape.

use ark_bls12_381::{Fq12, Fq2, Fq6};
use ark_ff::{One, Zero};

use crate::tower::{mul_by_v, mul_by_xi};

/// `z·(c0 + c1·v)` — sparse product with an Fq6 element whose v² slot is
/// zero.
pub fn mul_by_01(z: &Fq6, c0: &Fq2, c1: &Fq2) -> Fq6 {
    let a = z.c0 * c0;
    let b = z.c1 * c1;
    let t0 = mul_by_xi(&((z.c1 + z.c2) * c1 - b)) + a;
    let t1 = (*c0 + c1) * (z.c0 + z.c1) - a - b;
    let t2 = (z.c0 + z.c2) * c0 - a + b;
    Fq6::new(t0, t1, t2)
}

/// `z·(c1·v)` — single-coordinate sparse product.
pub fn mul_by_1(z: &Fq6, c1: &Fq2) -> Fq6 {
    Fq6::new(mul_by_xi(&(z.c2 * c1)), z.c0 * c1, z.c1 * c1)
}

/// Multiplies `z` by the sparse element
///
/// ```text
/// Fq12 {
///     c0: Fq6 { c0: 1, c1: c1, c2: 0 },
///     c1: Fq6 { c0: 0, c1: c4, c2: 0 },
/// }
/// ```
///
/// the shape a BLS12-381 (M-twist) line evaluation takes once normalized by
/// its constant coefficient. Karatsuba over the quadratic layer: the two
/// half-products are sparse, and the cross term reuses their sum against
/// the shifted coefficient `c1 + c4`.
pub fn mul_by_014(z: &Fq12, c1: &Fq2, c4: &Fq2) -> Fq12 {
    let a = z.c0;
    let b = z.c1;

    // a·(1 + c1·v) and b·(c4·v)
    let aa = a + mul_by_1(&a, c1);
    let bb = mul_by_1(&b, c4);

    // (a + b)·(1 + (c1 + c4)·v)
    let s = a + b;
    let d = s + mul_by_1(&s, &(*c1 + c4));

    Fq12::new(mul_by_v(&bb) + aa, d - aa - bb)
}

/// Multiplies `z` by the sparse element
///
/// ```text
/// Fq12 {
///     c0: Fq6 { c0: 1, c1: 0, c2: 0 },
///     c1: Fq6 { c0: c3, c1: c4, c2: 0 },
/// }
/// ```
///
/// the shape a D-twist (BN254-style) line evaluation takes once normalized.
pub fn mul_by_034(z: &Fq12, c3: &Fq2, c4: &Fq2) -> Fq12 {
    let a = z.c0;
    let b = mul_by_01(&z.c1, c3, c4);

    let one = Fq2::one();
    let d = mul_by_01(&(z.c0 + z.c1), &(one + c3), c4);

    Fq12::new(mul_by_v(&b) + a, d - (a + b))
}

/// Dense embedding of the {0,1,4} sparse shape, for callers that need the
/// explicit operand.
pub fn sparse_014(c1: &Fq2, c4: &Fq2) -> Fq12 {
    Fq12::new(
        Fq6::new(Fq2::one(), *c1, Fq2::zero()),
        Fq6::new(Fq2::zero(), *c4, Fq2::zero()),
    )
}

/// Dense embedding of the {0,3,4} sparse shape.
pub fn sparse_034(c3: &Fq2, c4: &Fq2) -> Fq12 {
    Fq12::new(
        Fq6::new(Fq2::one(), Fq2::zero(), Fq2::zero()),
        Fq6::new(*c3, *c4, Fq2::zero()),
    )
}
