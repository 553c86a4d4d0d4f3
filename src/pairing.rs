//! Single-pair optimal-ate Miller loop for BLS12-381.
//!
//! The loop runs over the 64-bit curve parameter |t| in affine G2
//! coordinates: one doubling step per bit, one addition step per set bit,
//! one normalized line folded into the accumulator per step via
//! [`mul_by_014`].
//!
//! Lines are scaled into unital form by Fq2 constants, so the raw loop
//! output differs from the textbook Miller value by subfield factors; those
//! vanish under the final exponentiation, which is the only consumer.

use ark_bls12_381::{Fq12, Fq2, G1Affine, G2Affine};
use ark_ff::{AdditiveGroup, Field, One};

use crate::cyclotomic::conjugate;
use crate::final_exp::final_exponentiation;
use crate::line::mul_by_014;
use crate::T_ABS;

/// A line evaluated at the G1 argument and normalized to the unital shape
/// `1 + c1·v + c4·v·w`.
struct LineEval {
    c1: Fq2,
    c4: Fq2,
}

/// The line of slope `lambda` through `t`, evaluated at the twist image of
/// `p`: `(λ·x_T − y_T) − λ·x_P·v + y_P·v·w`, scaled by the inverse of its
/// constant coefficient.
fn line_through(t: &G2Affine, lambda: &Fq2, p: &G1Affine) -> LineEval {
    let d = *lambda * t.x - t.y;
    let d_inv = d.inverse().expect("line constant term must be nonzero");

    let mut c1 = -(*lambda * d_inv);
    c1.mul_assign_by_fp(&p.x);
    let mut c4 = d_inv;
    c4.mul_assign_by_fp(&p.y);

    LineEval { c1, c4 }
}

/// Tangent line at `t` evaluated at `p`; returns the doubled point.
fn doubling_step(t: &G2Affine, p: &G1Affine) -> (G2Affine, LineEval) {
    // λ = 3x² / 2y
    let x_sq = t.x.square();
    let num = x_sq.double() + x_sq;
    let lambda = num
        * t.y
            .double()
            .inverse()
            .expect("2y must be invertible in doubling step");

    let x3 = lambda.square() - t.x.double();
    let y3 = lambda * (t.x - x3) - t.y;
    let doubled = G2Affine {
        x: x3,
        y: y3,
        infinity: false,
    };

    let line = line_through(t, &lambda, p);
    (doubled, line)
}

/// Chord line through `t` and `q` evaluated at `p`; returns the sum.
fn addition_step(t: &G2Affine, q: &G2Affine, p: &G1Affine) -> (G2Affine, LineEval) {
    // λ = (y_q − y_t) / (x_q − x_t)
    let lambda = (q.y - t.y)
        * (q.x - t.x)
            .inverse()
            .expect("dx must be invertible in addition step");

    let x3 = lambda.square() - t.x - q.x;
    let y3 = lambda * (t.x - x3) - t.y;
    let sum = G2Affine {
        x: x3,
        y: y3,
        infinity: false,
    };

    let line = line_through(t, &lambda, p);
    (sum, line)
}

/// Optimal-ate Miller loop for one (G1, G2) pair.
///
/// See the module docs for the normalization caveat: compose with
/// [`final_exponentiation`] (or use [`pairing`]) before comparing against
/// other implementations.
#[tracing::instrument(skip_all, name = "miller_loop")]
pub fn miller_loop(p: &G1Affine, q: &G2Affine) -> Fq12 {
    assert!(!p.infinity, "G1 point at infinity not supported");
    assert!(!q.infinity, "G2 point at infinity not supported");

    let mut f = Fq12::one();
    let mut t = *q;

    // bits of |t| below the leading one, most significant first
    for i in (0..63).rev() {
        f = f.square();

        let (doubled, line) = doubling_step(&t, p);
        f = mul_by_014(&f, &line.c1, &line.c4);
        t = doubled;

        if (T_ABS >> i) & 1 == 1 {
            let (sum, line) = addition_step(&t, q, p);
            f = mul_by_014(&f, &line.c1, &line.c4);
            t = sum;
        }
    }

    // the curve parameter is negative
    conjugate(&f)
}

/// `e(p, q)`, equal to arkworks' `Bls12_381::pairing`.
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Fq12 {
    final_exponentiation(&miller_loop(p, q))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Bls12_381, Fr};
    use ark_ec::pairing::Pairing;
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::UniformRand;
    use ark_std::test_rng;

    #[test]
    fn pairing_of_generators_matches_arkworks() {
        let p = G1Affine::generator();
        let q = G2Affine::generator();
        assert_eq!(pairing(&p, &q), Bls12_381::pairing(p, q).0);
    }

    #[test]
    fn pairing_of_random_points_matches_arkworks() {
        let mut rng = test_rng();
        for _ in 0..3 {
            let s = Fr::rand(&mut rng);
            let r = Fr::rand(&mut rng);
            let p = (G1Affine::generator() * s).into_affine();
            let q = (G2Affine::generator() * r).into_affine();
            assert_eq!(pairing(&p, &q), Bls12_381::pairing(p, q).0);
        }
    }

    #[test]
    fn pairing_is_bilinear() {
        let mut rng = test_rng();
        let s = Fr::rand(&mut rng);
        let p = G1Affine::generator();
        let q = G2Affine::generator();
        let sp = (p * s).into_affine();
        let sq = (q * s).into_affine();
        assert_eq!(pairing(&sp, &q), pairing(&p, &sq));
    }
}
