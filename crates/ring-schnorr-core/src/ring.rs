// crates/ring-schnorr-core/src/ring.rs
//
// Node Ring Schnorr: a ring-style aggregate signature over BN254 G1.
//
// One member of a set of public keys produces a signature any verifier can
// check was made by *some* member of the set, without learning which one.
//
// Construction:
//   - derive an ephemeral signing key bound to (message, privkey, decoys)
//   - give every decoy slot fresh randomness R_i = a_i · G plus an inner
//     Schnorr proof under the ephemeral key, and a challenge
//     h_i = Keccak(m ‖ R_i ‖ σ_i) mod n
//   - solve for the real slot's commitment masterR = r·G − Σ h_i·Y_i so the
//     aggregate relation  masterSum·G == Σ (R_i + h_i·ring_i)  closes
//   - insert the real slot at a uniformly random index
//
// Every slot carries an equally well-formed inner proof under the shared
// ephemeral key, so no slot is structurally distinguishable from another.
// Anonymity rests on the uniform, independent index draw and on the
// ephemeral key being a one-way, context-bound derivation.

use ark_ec::{AffineRepr, CurveGroup};
use ark_std::rand::{CryptoRng, Rng, RngCore};
use ark_std::Zero;
use log::debug;

use crate::curve::{
    check_point, generator, point_coords, random_nonzero_scalar, fq_to_biguint, Fr, G1Affine,
    G1Projective, MAX_SAMPLING_ATTEMPTS,
};
use crate::error::RingSchnorrError;
use crate::hash::{hash_to_scalar, Message, PackedEncoder};
use crate::keypair::PublicKey;
use crate::sign::SchnorrSig;
use crate::verify::verify;

/// A Node Ring Schnorr signature.
///
/// Produced atomically by [`nr_sign`]; the three lists always have equal
/// length `n_decoys + 1`, and exactly one `ring` entry is the real signer's
/// public key, at a position a verifier cannot observe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeRingSig {
    /// Ephemeral public key shared by every inner Schnorr proof.
    pub ephemeral_pub: G1Affine,
    /// Slot commitments R_i.
    pub r_list: Vec<G1Affine>,
    /// Inner Schnorr proofs, one per slot, all under `ephemeral_pub`.
    pub sig_list: Vec<SchnorrSig>,
    /// Aggregate response scalar.
    pub master_sum: Fr,
    /// Candidate public keys: the decoys with the real key inserted.
    pub ring: Vec<G1Affine>,
}

impl NodeRingSig {
    /// Ring size (decoys plus the real slot).
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    fn check_shape(&self) -> Result<(), RingSchnorrError> {
        if self.ring.is_empty()
            || self.r_list.len() != self.ring.len()
            || self.sig_list.len() != self.ring.len()
        {
            return Err(RingSchnorrError::MalformedSignature);
        }
        Ok(())
    }
}

/// Produce a ring signature over `message` hiding the owner of `sk` among
/// `decoys` (the other candidate public keys, excluding the signer's own).
///
/// `decoys` may be empty: the result is then a ring of one, which still
/// verifies but hides nothing.
pub fn nr_sign<R: RngCore + CryptoRng>(
    sk: &Fr,
    message: &Message,
    decoys: &[G1Affine],
    rng: &mut R,
) -> Result<NodeRingSig, RingSchnorrError> {
    if sk.is_zero() {
        return Err(RingSchnorrError::InvalidScalar);
    }
    for y in decoys {
        check_point(y)?;
    }

    let g = generator();
    let real_pub = (g * sk).into_affine();

    // Ephemeral key bound to the message and the exact decoy set. Word
    // order: message, privkey, all x coordinates, then all y coordinates.
    let new_sk = derive_ephemeral_key(sk, message, decoys)?;
    if new_sk.is_zero() {
        // Hash-derived zero: randomness-induced, probability ~ 1/n.
        return Err(RingSchnorrError::DegenerateRandomness);
    }

    // Pairwise-distinct slot randomness. Distinctness backs the masterR
    // collision check below; it is a correctness guard, not a hardness
    // assumption.
    let slot_scalars = sample_distinct_scalars(decoys.len(), rng)?;

    // Decoy slots: commitment, inner proof, challenge. The negated
    // challenge-weighted decoy keys accumulate into the product term the
    // real slot must cancel.
    let mut r_list: Vec<G1Affine> = Vec::with_capacity(decoys.len() + 1);
    let mut sig_list: Vec<SchnorrSig> = Vec::with_capacity(decoys.len() + 1);
    let mut product = G1Projective::zero();
    for (a_i, y_i) in slot_scalars.iter().zip(decoys) {
        let r_i = (g * a_i).into_affine();
        let (_, sigma) = SchnorrSig::sign(&new_sk, &coordinate_sum(&r_i)?, rng)?;
        let h_i = ring_challenge(message, &r_i, &sigma)?;
        product -= G1Projective::from(*y_i) * h_i;
        r_list.push(r_i);
        sig_list.push(sigma);
    }

    // Real slot: find r with masterR = r·G + product neither the identity
    // nor colliding with a decoy commitment. A degenerate masterR would
    // break the aggregate equality or alias two slots.
    let mut attempts = 0;
    let (master_scalar, master_r) = loop {
        attempts += 1;
        if attempts > MAX_SAMPLING_ATTEMPTS {
            return Err(RingSchnorrError::DegenerateRandomness);
        }
        let r = random_nonzero_scalar(rng)?;
        let candidate = (g * r + product).into_affine();
        if candidate.is_zero() || r_list.contains(&candidate) {
            debug!("degenerate master commitment, resampling (attempt {attempts})");
            continue;
        }
        break (r, candidate);
    };

    let (_, master_sigma) = SchnorrSig::sign(&new_sk, &coordinate_sum(&master_r)?, rng)?;
    let master_hash = ring_challenge(message, &master_r, &master_sigma)?;

    // masterSum = r + sk·masterHash + Σ a_i  (mod n)
    let mut master_sum = master_scalar + *sk * master_hash;
    for a_i in &slot_scalars {
        master_sum += *a_i;
    }

    // Uniform, independent insertion position for the real slot.
    let index = rng.gen_range(0..=decoys.len());
    let mut ring = decoys.to_vec();
    r_list.insert(index, master_r);
    sig_list.insert(index, master_sigma);
    ring.insert(index, real_pub);

    Ok(NodeRingSig {
        ephemeral_pub: (g * new_sk).into_affine(),
        r_list,
        sig_list,
        master_sum,
        ring,
    })
}

/// Verify a ring signature: every inner Schnorr proof must hold under the
/// shared ephemeral key, and the aggregate relation
/// `masterSum·G == Σ (R_i + h_i·ring_i)` must close.
pub fn nr_verify(message: &Message, sig: &NodeRingSig) -> Result<bool, RingSchnorrError> {
    sig.check_shape()?;
    check_point(&sig.ephemeral_pub)?;
    for p in sig.r_list.iter().chain(sig.ring.iter()) {
        check_point(p)?;
    }

    let ephemeral = PublicKey {
        point: sig.ephemeral_pub,
    };
    let mut sum = G1Projective::zero();
    for ((r_i, sigma), y_i) in sig.r_list.iter().zip(&sig.sig_list).zip(&sig.ring) {
        // Inner proofs verify under the ephemeral key, not under ring[i].
        if !verify(&ephemeral, &coordinate_sum(r_i)?, sigma)? {
            return Ok(false);
        }
        let h_i = ring_challenge(message, r_i, sigma)?;
        sum += G1Projective::from(*r_i) + G1Projective::from(*y_i) * h_i;
    }

    Ok(generator() * sig.master_sum == sum)
}

/// newPriv = Keccak(m ‖ sk ‖ Y_1.x ‖ .. ‖ Y_n.x ‖ Y_1.y ‖ .. ‖ Y_n.y) mod n.
fn derive_ephemeral_key(
    sk: &Fr,
    message: &Message,
    decoys: &[G1Affine],
) -> Result<Fr, RingSchnorrError> {
    let mut enc = PackedEncoder::new().message(message).scalar(sk);
    for y in decoys {
        let (x, _) = point_coords(y)?;
        enc = enc.base_field(&x);
    }
    for y in decoys {
        let (_, y_coord) = point_coords(y)?;
        enc = enc.base_field(&y_coord);
    }
    Ok(hash_to_scalar(&enc.bytes()))
}

/// Sample `count` pairwise-distinct scalars in [1, n-1].
fn sample_distinct_scalars<R: RngCore + CryptoRng>(
    count: usize,
    rng: &mut R,
) -> Result<Vec<Fr>, RingSchnorrError> {
    let mut scalars: Vec<Fr> = Vec::with_capacity(count);
    while scalars.len() < count {
        let mut attempts = 0;
        loop {
            let a = random_nonzero_scalar(rng)?;
            if !scalars.contains(&a) {
                scalars.push(a);
                break;
            }
            attempts += 1;
            if attempts >= MAX_SAMPLING_ATTEMPTS {
                return Err(RingSchnorrError::DegenerateRandomness);
            }
            debug!("duplicate slot scalar, resampling (attempt {attempts})");
        }
    }
    Ok(scalars)
}

/// Inner message binding a slot to its commitment: the plain integer sum
/// int(R.x) + int(R.y), one uint256 word, never reduced mod n.
fn coordinate_sum(point: &G1Affine) -> Result<Message, RingSchnorrError> {
    let (x, y) = point_coords(point)?;
    let sum = fq_to_biguint(&x) + fq_to_biguint(&y);
    // Each coordinate is < q < 2^254, so the sum always fits one word.
    Message::from_biguint(&sum).ok_or(RingSchnorrError::InvalidPoint)
}

/// h_i = Keccak(m ‖ R_i.x ‖ R_i.y ‖ σ_i.R.x ‖ σ_i.R.y ‖ σ_i.s) mod n.
fn ring_challenge(
    message: &Message,
    r_i: &G1Affine,
    sigma: &SchnorrSig,
) -> Result<Fr, RingSchnorrError> {
    let (r_x, r_y) = point_coords(r_i)?;
    let (sr_x, sr_y) = point_coords(&sigma.r)?;
    Ok(hash_to_scalar(
        &PackedEncoder::new()
            .message(message)
            .base_field(&r_x)
            .base_field(&r_y)
            .base_field(&sr_x)
            .base_field(&sr_y)
            .scalar(&sigma.s)
            .bytes(),
    ))
}
