pub mod curve;
pub mod error;
pub mod hash;
pub mod keypair;
pub mod registry;
pub mod ring;
pub mod sign;
pub mod verify;

// Re-exports for convenience
pub use curve::{Fq, Fr, G1Affine, G1Projective, MAX_SAMPLING_ATTEMPTS};
pub use error::RingSchnorrError;
pub use hash::{hash_to_scalar, keccak256, Message, PackedEncoder};
pub use keypair::{KeyPair, PublicKey};
pub use registry::{InMemoryRegistry, KeyRegistry, UnknownKeyId};
pub use ring::{nr_sign, nr_verify, NodeRingSig};
pub use sign::SchnorrSig;
pub use verify::verify;

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::rand::rngs::OsRng;

    #[test]
    fn full_schnorr_roundtrip() {
        let kp = KeyPair::generate(&mut OsRng).unwrap();
        for m in [0u64, 1, 123, u64::MAX] {
            let msg = Message::from(m);
            let (pk, sig) = SchnorrSig::sign(&kp.sk, &msg, &mut OsRng).unwrap();
            assert!(
                verify(&pk, &msg, &sig).unwrap(),
                "signature should verify for message {m}"
            );
        }
    }

    #[test]
    fn full_ring_roundtrip_with_registry_decoys() {
        let mut registry = InMemoryRegistry::new();
        for id in 0..4u64 {
            registry.insert(id, KeyPair::generate(&mut OsRng).unwrap().pk);
        }

        let signer = KeyPair::generate(&mut OsRng).unwrap();
        let decoys: Vec<G1Affine> = registry
            .public_keys(&[0, 1, 2, 3])
            .unwrap()
            .into_iter()
            .map(|pk| pk.point)
            .collect();

        let msg = Message::from(123);
        let sig = nr_sign(&signer.sk, &msg, &decoys, &mut OsRng).unwrap();
        assert_eq!(sig.len(), 5);
        assert!(nr_verify(&msg, &sig).unwrap());
        assert!(!nr_verify(&Message::from(321), &sig).unwrap());
    }

    #[test]
    fn ring_signatures_are_unlinkable_values() {
        // Two signatures over the same inputs share the ephemeral key (it is
        // a deterministic derivation) but differ in their randomness.
        let signer = KeyPair::generate(&mut OsRng).unwrap();
        let decoys: Vec<G1Affine> = (0..2)
            .map(|_| KeyPair::generate(&mut OsRng).unwrap().pk.point)
            .collect();
        let msg = Message::from(7);

        let sig1 = nr_sign(&signer.sk, &msg, &decoys, &mut OsRng).unwrap();
        let sig2 = nr_sign(&signer.sk, &msg, &decoys, &mut OsRng).unwrap();
        assert_eq!(sig1.ephemeral_pub, sig2.ephemeral_pub);
        assert_ne!(sig1.master_sum, sig2.master_sum);
        assert!(nr_verify(&msg, &sig1).unwrap());
        assert!(nr_verify(&msg, &sig2).unwrap());
    }
}
