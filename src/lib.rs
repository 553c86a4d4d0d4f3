//! # bls381-gt
//!
//! Fast cyclotomic-subgroup and sparse-line arithmetic for the BLS12-381
//! optimal-ate pairing, over [`ark_bls12_381`] field types.
//!
//! ## Structure
//!
//! - [`cyclotomic`] — conjugation, Granger–Scott squaring, and Karabina's
//!   compressed squaring with its distinct
//!   [`CompressedCyclotomic`](cyclotomic::CompressedCyclotomic) form
//! - [`mod@expt`] — exponentiation by the fixed curve parameter via a
//!   declarative addition chain ([`expt_half`], [`expt`](expt::expt))
//! - [`line`] — sparse products with line-evaluation-shaped Fq12 operands
//!   ([`mul_by_014`], [`mul_by_034`]) and their Fq6 building blocks
//! - [`final_exp`] — the final-exponentiation driver
//! - [`mod@pairing`] — a single-pair affine Miller loop and the full pairing
//!
//! ## Contracts
//!
//! Subgroup-membership and sparse-shape preconditions are documented
//! contracts, not runtime checks: violating one silently yields a
//! well-typed wrong value, never a fault. The pairing pipeline calling
//! these routines establishes the preconditions upstream, and correctness
//! is pinned by known-answer tests against arkworks' generic
//! implementations.

pub mod cyclotomic;
pub mod expt;
pub mod final_exp;
pub mod line;
pub mod pairing;
mod tower;

pub use cyclotomic::{conjugate, cyclotomic_square, CompressedCyclotomic};
pub use expt::{exp_by_chain, expt, expt_half, ChainStep, SquaringKind, EXPT_HALF_CHAIN};
pub use final_exp::final_exponentiation;
pub use line::{mul_by_01, mul_by_014, mul_by_034};
pub use pairing::{miller_loop, pairing};

/// Absolute value of the BLS12-381 curve parameter `t = -0xd201_0000_0001_0000`.
pub const T_ABS: u64 = 0xd201_0000_0001_0000;

/// |t|/2, the exponent computed by [`expt::EXPT_HALF_CHAIN`].
pub const T_HALF_ABS: u64 = T_ABS / 2;
