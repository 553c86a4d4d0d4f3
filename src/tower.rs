//! Non-residue helpers for the Fq2/Fq6/Fq12 tower.
//!
//! The constants are pulled from the arkworks configs so the tower semantics
//! are guaranteed to match the upstream curve definition.

use ark_bls12_381::{Fq2, Fq6, Fq6Config};
use ark_ff::Fp6Config;

/// Multiplies by ξ = u + 1, the cubic non-residue the Fq6 extension is
/// built on (v³ = ξ).
#[inline]
pub(crate) fn mul_by_xi(a: &Fq2) -> Fq2 {
    *a * <Fq6Config as Fp6Config>::NONRESIDUE
}

/// Multiplies an Fq6 value by v, the Fq12 non-residue (w² = v).
///
/// (b0 + b1·v + b2·v²)·v = ξ·b2 + b0·v + b1·v²
#[inline]
pub(crate) fn mul_by_v(a: &Fq6) -> Fq6 {
    Fq6::new(mul_by_xi(&a.c2), a.c0, a.c1)
}
