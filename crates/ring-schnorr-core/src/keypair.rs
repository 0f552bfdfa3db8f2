// Key generation for ring Schnorr over BN254 G1.
//
// Private key: nonzero scalar sk ∈ Z_n
// Public key:  PK = sk · G  (never the identity)

use ark_ec::CurveGroup;
use ark_std::rand::{CryptoRng, RngCore};
use ark_std::Zero;

use crate::curve::{check_point, generator, point_coords, random_nonzero_scalar, Fq, Fr, G1Affine};
use crate::error::RingSchnorrError;

/// A signing keypair over BN254 G1.
#[derive(Clone, Debug)]
pub struct KeyPair {
    /// Secret scalar sk ∈ [1, n-1].
    pub sk: Fr,
    /// Public key PK = sk · G.
    pub pk: PublicKey,
}

/// A public key: a validated, non-identity point on BN254 G1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pub point: G1Affine,
}

impl KeyPair {
    /// Generate a fresh keypair from the caller's randomness source.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, RingSchnorrError> {
        let sk = random_nonzero_scalar(rng)?;
        Self::from_private_key(sk)
    }

    /// Derive a keypair from an existing private scalar.
    pub fn from_private_key(sk: Fr) -> Result<Self, RingSchnorrError> {
        if sk.is_zero() {
            return Err(RingSchnorrError::InvalidScalar);
        }
        let point = (generator() * sk).into_affine();
        Ok(KeyPair {
            sk,
            pk: PublicKey { point },
        })
    }
}

impl PublicKey {
    /// Validate and wrap a point received from a collaborator.
    pub fn new(point: G1Affine) -> Result<Self, RingSchnorrError> {
        check_point(&point)?;
        Ok(PublicKey { point })
    }

    /// Affine (x, y) coordinates.
    pub fn coords(&self) -> Result<(Fq, Fq), RingSchnorrError> {
        point_coords(&self.point)
    }
}
