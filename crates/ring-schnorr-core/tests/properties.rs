// Property harness for the signature schemes.
//
// Keys are drawn from the full u128 range (well inside [1, n-1]) and all
// per-case randomness comes from a seeded StdRng so failures replay.

use ark_ec::CurveGroup;
use ark_std::rand::rngs::StdRng;
use ark_std::rand::SeedableRng;
use proptest::prelude::*;

use ring_schnorr_core::{
    curve::generator, nr_sign, nr_verify, verify, Fr, G1Affine, G1Projective, KeyPair, Message,
    SchnorrSig,
};

fn decoy_keys(count: usize, rng: &mut StdRng) -> Vec<G1Affine> {
    (0..count)
        .map(|_| KeyPair::generate(rng).unwrap().pk.point)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn schnorr_completeness(sk in 1u128.., m in any::<u64>(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let sk = Fr::from(sk);
        let msg = Message::from(m);
        let (pk, sig) = SchnorrSig::sign(&sk, &msg, &mut rng).unwrap();
        prop_assert!(verify(&pk, &msg, &sig).unwrap());
    }

    #[test]
    fn schnorr_rejects_other_message(sk in 1u128.., m in any::<u64>(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let sk = Fr::from(sk);
        let (pk, sig) = SchnorrSig::sign(&sk, &Message::from(m), &mut rng).unwrap();
        prop_assert!(!verify(&pk, &Message::from(m.wrapping_add(1)), &sig).unwrap());
    }

    #[test]
    fn schnorr_rejects_other_pubkey(sk in 1u128.., m in any::<u64>(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let sk = Fr::from(sk);
        let msg = Message::from(m);
        let (_, sig) = SchnorrSig::sign(&sk, &msg, &mut rng).unwrap();
        let other = KeyPair::generate(&mut rng).unwrap();
        prop_assert!(!verify(&other.pk, &msg, &sig).unwrap());
    }

    #[test]
    fn ring_completeness(
        sk in 1u128..,
        m in any::<u64>(),
        n_decoys in 0usize..4,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let sk = Fr::from(sk);
        let msg = Message::from(m);
        let decoys = decoy_keys(n_decoys, &mut rng);

        let sig = nr_sign(&sk, &msg, &decoys, &mut rng).unwrap();
        prop_assert_eq!(sig.len(), n_decoys + 1);
        prop_assert_eq!(sig.r_list.len(), sig.ring.len());
        prop_assert_eq!(sig.sig_list.len(), sig.ring.len());
        prop_assert!(nr_verify(&msg, &sig).unwrap());
    }

    #[test]
    fn ring_rejects_other_message(
        sk in 1u128..,
        m in any::<u64>(),
        n_decoys in 0usize..4,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let sk = Fr::from(sk);
        let decoys = decoy_keys(n_decoys, &mut rng);

        let sig = nr_sign(&sk, &Message::from(m), &decoys, &mut rng).unwrap();
        prop_assert!(!nr_verify(&Message::from(m.wrapping_add(1)), &sig).unwrap());
    }

    #[test]
    fn ring_rejects_tampered_master_sum(
        sk in 1u128..,
        m in any::<u64>(),
        n_decoys in 0usize..4,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let sk = Fr::from(sk);
        let msg = Message::from(m);
        let decoys = decoy_keys(n_decoys, &mut rng);

        let mut sig = nr_sign(&sk, &msg, &decoys, &mut rng).unwrap();
        sig.master_sum += Fr::from(1u64);
        prop_assert!(!nr_verify(&msg, &sig).unwrap());
    }

    #[test]
    fn ring_rejects_foreign_ring_entry(
        sk in 1u128..,
        m in any::<u64>(),
        n_decoys in 1usize..4,
        slot_seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(slot_seed);
        let sk = Fr::from(sk);
        let msg = Message::from(m);
        let decoys = decoy_keys(n_decoys, &mut rng);

        let mut sig = nr_sign(&sk, &msg, &decoys, &mut rng).unwrap();
        let slot = (slot_seed as usize) % sig.len();
        sig.ring[slot] = (G1Projective::from(sig.ring[slot]) + generator()).into_affine();
        prop_assert!(!nr_verify(&msg, &sig).unwrap());
    }
}
