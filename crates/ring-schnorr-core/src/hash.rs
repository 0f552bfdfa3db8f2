// crates/ring-schnorr-core/src/hash.rs
//
// Keccak-256 domain hashing over a Solidity-compatible packed encoding.
//
// Every challenge in the protocol is a hash over abi.encodePacked-style
// bytes: each input is one 32-byte big-endian uint256 word, concatenated
// with no separators or length prefixes. The digest is the pre-NIST
// Keccak-256 (the Ethereum variant), interpreted big-endian and reduced
// mod the group order n, so an on-chain verifier computing
// `uint256(keccak256(abi.encodePacked(...))) % n` derives the identical
// scalar.

use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;
use sha3::{Digest, Keccak256};

use crate::curve::{Fq, Fr};

/// A message word: a 256-bit unsigned integer, hashed as a single uint256.
///
/// The inner ring messages are the plain integer sum of a point's two
/// coordinates (always below 2^255, so one word suffices), deliberately not
/// reduced mod n — reduction would change the bytes an external verifier
/// hashes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Message([u8; 32]);

impl Message {
    /// Wrap a big integer; `None` if it does not fit in 256 bits.
    pub fn from_biguint(v: &BigUint) -> Option<Self> {
        if v.bits() > 256 {
            return None;
        }
        let bytes = v.to_bytes_be();
        let mut word = [0u8; 32];
        word[32 - bytes.len()..].copy_from_slice(&bytes);
        Some(Message(word))
    }

    /// The big-endian word.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Integer value of the word.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }
}

impl From<u64> for Message {
    fn from(v: u64) -> Self {
        let mut word = [0u8; 32];
        word[24..].copy_from_slice(&v.to_be_bytes());
        Message(word)
    }
}

/// Builder for the packed uint256 encoding.
#[derive(Default, Clone)]
pub struct PackedEncoder {
    buf: Vec<u8>,
}

impl PackedEncoder {
    pub fn new() -> Self {
        PackedEncoder { buf: Vec::new() }
    }

    /// Append a base-field coordinate as one word.
    pub fn base_field(mut self, v: &Fq) -> Self {
        self.buf.extend_from_slice(&v.into_bigint().to_bytes_be());
        self
    }

    /// Append a scalar as one word.
    pub fn scalar(mut self, v: &Fr) -> Self {
        self.buf.extend_from_slice(&v.into_bigint().to_bytes_be());
        self
    }

    /// Append a message word.
    pub fn message(mut self, m: &Message) -> Self {
        self.buf.extend_from_slice(m.as_bytes());
        self
    }

    /// The packed byte string.
    pub fn bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Keccak-256 digest (pre-NIST padding).
pub fn keccak256(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}

/// Hash packed bytes to a scalar: the digest as a big-endian integer mod n.
pub fn hash_to_scalar(bytes: &[u8]) -> Fr {
    Fr::from_be_bytes_mod_order(&keccak256(bytes))
}

/// Single-key Schnorr challenge: h = Keccak256(R.x ‖ R.y ‖ m) mod n.
pub fn schnorr_challenge(r_x: &Fq, r_y: &Fq, message: &Message) -> Fr {
    hash_to_scalar(
        &PackedEncoder::new()
            .base_field(r_x)
            .base_field(r_y)
            .message(message)
            .bytes(),
    )
}
