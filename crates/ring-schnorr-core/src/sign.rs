// Schnorr signing over BN254 G1.
//
// Signing a message word m with private key sk:
//   1. x ← uniform in [1, n-1]
//   2. R = x · G
//   3. h = Keccak256(R.x ‖ R.y ‖ m) mod n
//   4. s = x + h · sk  (mod n)
//   5. Signature = (R, s)
//
// The challenge hashes the packed uint256 encoding of R's affine
// coordinates and the message word, so it reproduces byte-for-byte what a
// Solidity verifier computes with keccak256(abi.encodePacked(...)).

use ark_ec::CurveGroup;
use ark_std::rand::{CryptoRng, RngCore};
use ark_std::Zero;

use crate::curve::{generator, point_coords, random_nonzero_scalar, Fr, G1Affine};
use crate::error::RingSchnorrError;
use crate::hash::{schnorr_challenge, Message};
use crate::keypair::PublicKey;

/// A Schnorr signature (R, s) over BN254 G1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchnorrSig {
    /// Commitment point R = x · G.
    pub r: G1Affine,
    /// Response scalar s = x + h · sk (mod n).
    pub s: Fr,
}

impl SchnorrSig {
    /// Sign a message word with the given private key.
    ///
    /// Returns the public key alongside the signature, so callers holding
    /// only the private scalar get the verification key in the same call.
    pub fn sign<R: RngCore + CryptoRng>(
        sk: &Fr,
        message: &Message,
        rng: &mut R,
    ) -> Result<(PublicKey, SchnorrSig), RingSchnorrError> {
        let x = random_nonzero_scalar(rng)?;
        Self::sign_with_nonce(sk, message, &x)
    }

    /// Sign with an explicit ephemeral scalar.  **Only for test vectors** —
    /// reusing a nonce across two messages leaks the private key.
    pub fn sign_with_nonce(
        sk: &Fr,
        message: &Message,
        x: &Fr,
    ) -> Result<(PublicKey, SchnorrSig), RingSchnorrError> {
        if sk.is_zero() || x.is_zero() {
            return Err(RingSchnorrError::InvalidScalar);
        }
        let g = generator();
        let pubkey = PublicKey::new((g * sk).into_affine())?;

        // R = x · G
        let r = (g * x).into_affine();
        let (r_x, r_y) = point_coords(&r)?;

        // h = Keccak256(R.x ‖ R.y ‖ m) mod n
        let h = schnorr_challenge(&r_x, &r_y, message);

        // s = x + h · sk  (mod n)
        let s = *x + h * sk;

        Ok((pubkey, SchnorrSig { r, s }))
    }
}
