// Schnorr signature verification over BN254 G1.
//
// Given signature (R, s), public key PK, and message word m:
//   1. h = Keccak256(R.x ‖ R.y ‖ m) mod n
//   2. Accept iff  s · G == R + h · PK
//
// Malformed inputs (off-curve or identity points) are rejected before any
// arithmetic and surfaced as errors, distinct from `Ok(false)` which means
// the signature is definitively invalid.

use crate::curve::{check_point, generator, point_coords, G1Projective};
use crate::error::RingSchnorrError;
use crate::hash::{schnorr_challenge, Message};
use crate::keypair::PublicKey;
use crate::sign::SchnorrSig;

/// Verify a Schnorr signature against a public key and message word.
pub fn verify(
    pk: &PublicKey,
    message: &Message,
    sig: &SchnorrSig,
) -> Result<bool, RingSchnorrError> {
    check_point(&pk.point)?;
    check_point(&sig.r)?;

    let (r_x, r_y) = point_coords(&sig.r)?;
    let h = schnorr_challenge(&r_x, &r_y, message);

    // s · G  ==  R + h · PK
    let lhs = generator() * sig.s;
    let rhs = G1Projective::from(sig.r) + G1Projective::from(pk.point) * h;
    Ok(lhs == rhs)
}
