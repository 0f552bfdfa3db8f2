// Key-registry boundary: maps opaque member identifiers to public keys.
//
// The production registry is an external service with its own store; this
// crate only fixes the lookup contract and ships an in-memory
// implementation for tests and tools. No caching or freshness requirements
// are placed on implementors here.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::keypair::PublicKey;

/// Opaque lookup from member identifiers to ring public keys.
pub trait KeyRegistry {
    type Error;

    /// Resolve one identifier.
    fn public_key(&self, id: u64) -> Result<PublicKey, Self::Error>;

    /// Resolve a batch, preserving order.
    fn public_keys(&self, ids: &[u64]) -> Result<Vec<PublicKey>, Self::Error> {
        ids.iter().map(|id| self.public_key(*id)).collect()
    }
}

/// Lookup failure for the in-memory registry.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no public key registered for id {0}")]
pub struct UnknownKeyId(pub u64);

/// Registry backed by a sorted in-process map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    keys: BTreeMap<u64, PublicKey>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: u64, key: PublicKey) {
        self.keys.insert(id, key);
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl KeyRegistry for InMemoryRegistry {
    type Error = UnknownKeyId;

    fn public_key(&self, id: u64) -> Result<PublicKey, UnknownKeyId> {
        self.keys.get(&id).copied().ok_or(UnknownKeyId(id))
    }
}
