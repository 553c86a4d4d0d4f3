//! Cyclotomic-subgroup arithmetic for the BLS12-381 degree-12 extension.
//!
//! An Fq12 element `z` lies in the cyclotomic subgroup GΦ₆(p²) when
//! `conjugate(z) * z == 1`. Membership buys two shortcuts over generic Fq12
//! arithmetic: inversion is a conjugation, and squaring admits the
//! Granger–Scott formula as well as Karabina's compressed variant, which
//! tracks only four of the six Fq2 coordinates and reconstructs the other
//! two once at the end of a squaring run.
//!
//! None of these routines check membership. On inputs outside the subgroup
//! they return well-typed but meaningless values; callers (the final
//! exponentiation) establish membership upstream.

use ark_bls12_381::{Fq12, Fq2, Fq6};
use ark_ff::{AdditiveGroup, Field, One, Zero};

use crate::tower::mul_by_xi;

#[inline]
fn triple(a: &Fq2) -> Fq2 {
    a.double() + a
}

/// Conjugation in Fq12: negates the `c1` half.
///
/// This is the degree-6 Frobenius `z ↦ z^(p⁶)`, and therefore inversion on
/// the cyclotomic subgroup.
#[inline]
pub fn conjugate(z: &Fq12) -> Fq12 {
    Fq12::new(z.c0, -z.c1)
}

/// Granger–Scott squaring, valid only on the cyclotomic subgroup.
pub fn cyclotomic_square(z: &Fq12) -> Fq12 {
    let t0 = z.c1.c1.square();
    let t1 = z.c0.c0.square();
    let t6 = (z.c1.c1 + z.c0.c0).square() - t0 - t1;
    let t2 = z.c0.c2.square();
    let t3 = z.c1.c0.square();
    let t7 = (z.c0.c2 + z.c1.c0).square() - t2 - t3;
    let t4 = z.c1.c2.square();
    let t5 = z.c0.c1.square();
    let t8 = mul_by_xi(&((z.c1.c2 + z.c0.c1).square() - t4 - t5));

    let t0 = mul_by_xi(&t0) + t1;
    let t2 = mul_by_xi(&t2) + t3;
    let t4 = mul_by_xi(&t4) + t5;

    let z00 = (t0 - z.c0.c0).double() + t0;
    let z01 = (t2 - z.c0.c1).double() + t2;
    let z02 = (t4 - z.c0.c2).double() + t4;
    let z10 = (t8 + z.c1.c0).double() + t8;
    let z11 = (t6 + z.c1.c1).double() + t6;
    let z12 = (t7 + z.c1.c2).double() + t7;

    Fq12::new(Fq6::new(z00, z01, z02), Fq6::new(z10, z11, z12))
}

/// Karabina's 4-of-6 coordinate form of a cyclotomic Fq12 element.
///
/// The retained coordinates, in the usual g-numbering, are `g1 = z.c0.c1`,
/// `g2 = z.c0.c2`, `g3 = z.c1.c0` and `g5 = z.c1.c2`; [`Self::decompress`]
/// reconstructs `g4 = z.c1.c1` and `g0 = z.c0.c0` from the subgroup
/// relations. The form is only meaningful between a [`Self::compress`] and
/// the matching decompression: it is closed under squaring but not under
/// multiplication, which is why it is a distinct type rather than a flavor
/// of `Fq12`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompressedCyclotomic {
    g1: Fq2,
    g2: Fq2,
    g3: Fq2,
    g5: Fq2,
}

impl CompressedCyclotomic {
    /// Drops the two reconstructible coordinates of a cyclotomic element.
    pub fn compress(x: &Fq12) -> Self {
        Self {
            g1: x.c0.c1,
            g2: x.c0.c2,
            g3: x.c1.c0,
            g5: x.c1.c2,
        }
    }

    /// One compressed squaring.
    pub fn square(&self) -> Self {
        let t0 = self.g1.square();
        let t1 = self.g5.square();
        // 2·g1·g5
        let t2 = (self.g1 + self.g5).square() - t0 - t1;
        let t3 = self.g3.square();
        let t4 = self.g2.square();
        // 2·g3·g2
        let t5 = (self.g3 + self.g2).square() - t3 - t4;

        Self {
            // 3·(g3² + ξ·g2²) − 2·g1
            g1: triple(&(t3 + mul_by_xi(&t4))) - self.g1.double(),
            // 3·(g1² + ξ·g5²) − 2·g2
            g2: triple(&(t0 + mul_by_xi(&t1))) - self.g2.double(),
            // 6·ξ·g1·g5 + 2·g3
            g3: triple(&mul_by_xi(&t2)) + self.g3.double(),
            // 6·g3·g2 + 2·g5
            g5: triple(&t5) + self.g5.double(),
        }
    }

    /// `n` consecutive compressed squarings.
    pub fn square_n(self, n: usize) -> Self {
        let mut c = self;
        for _ in 0..n {
            c = c.square();
        }
        c
    }

    /// Reconstructs the full element:
    ///
    /// - `g4 = (ξ·g5² + 3·g1² − 2·g2) / 4·g3` when `g3 ≠ 0`,
    /// - `g4 = 2·g1·g5 / g2` when `g3 = 0`,
    /// - then `g0 = (2·g4² + g3·g5 − 3·g2·g1)·ξ + 1`.
    ///
    /// `g3 = g2 = 0` only compresses the identity, which is returned
    /// directly (the reconstruction relations hold on GΦ₆(p²) \ {1}).
    pub fn decompress(&self) -> Fq12 {
        let g4 = if self.g3.is_zero() {
            if self.g2.is_zero() {
                return Fq12::one();
            }
            (self.g1 * self.g5).double()
                * self.g2.inverse().expect("g2 is nonzero in this branch")
        } else {
            let num =
                mul_by_xi(&self.g5.square()) + triple(&self.g1.square()) - self.g2.double();
            num * self
                .g3
                .double()
                .double()
                .inverse()
                .expect("4·g3 is nonzero in this branch")
        };

        let g0 = mul_by_xi(
            &(g4.square().double() + self.g3 * self.g5 - triple(&(self.g2 * self.g1))),
        ) + Fq2::one();

        Fq12::new(
            Fq6::new(g0, self.g1, self.g2),
            Fq6::new(self.g3, g4, self.g5),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::{CyclotomicMultSubgroup, UniformRand};
    use ark_std::rand::Rng;
    use ark_std::test_rng;

    fn random_cyclotomic<R: Rng>(rng: &mut R) -> Fq12 {
        crate::final_exp::easy_part(&Fq12::rand(rng))
    }

    #[test]
    fn cyclotomic_square_matches_generic_square_in_subgroup() {
        let mut rng = test_rng();
        for _ in 0..20 {
            let x = random_cyclotomic(&mut rng);
            assert_eq!(cyclotomic_square(&x), x.square());
            assert_eq!(cyclotomic_square(&x), x.cyclotomic_square());
        }
    }

    #[test]
    fn conjugate_inverts_subgroup_elements() {
        let mut rng = test_rng();
        for _ in 0..10 {
            let x = random_cyclotomic(&mut rng);
            assert_eq!(conjugate(&x) * x, Fq12::one());
            assert_eq!(conjugate(&x), x.inverse().unwrap());
        }
    }

    #[test]
    fn compression_round_trips_through_squaring_bursts() {
        let mut rng = test_rng();
        for _ in 0..5 {
            let x = random_cyclotomic(&mut rng);
            assert_eq!(CompressedCyclotomic::compress(&x).decompress(), x);

            // every prefix of a burst must agree with plain squaring
            let mut compressed = CompressedCyclotomic::compress(&x);
            let mut plain = x;
            for _ in 0..40 {
                compressed = compressed.square();
                plain = cyclotomic_square(&plain);
                assert_eq!(compressed.decompress(), plain);
            }
        }
    }

    #[test]
    fn square_n_is_iterated_square() {
        let mut rng = test_rng();
        let x = random_cyclotomic(&mut rng);
        let c = CompressedCyclotomic::compress(&x);
        assert_eq!(c.square_n(9), c.square().square_n(8));
        assert_eq!(c.square_n(0), c);
    }

    #[test]
    fn compressed_identity_decompresses_to_one() {
        let c = CompressedCyclotomic::compress(&Fq12::one());
        assert_eq!(c.decompress(), Fq12::one());
        assert_eq!(c.square_n(7).decompress(), Fq12::one());
    }
}
