//! Fixed, ordered identity pools.

use crate::{Identity, SigningKey};

/// A fixed ordered list of simulated identities.
///
/// Identities are supplied to the runners strictly in load order; the pool
/// never reorders or mutates them after construction. Both the workload
/// account set and the denylist are pools.
#[derive(Debug, Clone)]
pub struct IdentityPool {
    identities: Vec<Identity>,
}

impl IdentityPool {
    /// Build a pool from configured signing credentials, preserving order.
    pub fn from_keys(keys: Vec<SigningKey>) -> Self {
        let identities = keys.into_iter().map(Identity::from_key).collect();
        Self { identities }
    }

    /// Generate `count` deterministic identities from a seed.
    ///
    /// Key material is derived by mixing the seed with the identity index,
    /// so the same seed always yields the same ordered pool.
    pub fn generate(count: usize, seed: u64) -> Self {
        let keys = (0..count)
            .map(|i| {
                let mixed = seed
                    .wrapping_add(i as u64)
                    .wrapping_mul(0x517cc1b727220a95);
                let mut bytes = [0u8; 32];
                bytes[..8].copy_from_slice(&mixed.to_le_bytes());
                bytes[8..16].copy_from_slice(&(i as u64).to_le_bytes());
                SigningKey::from_bytes(bytes)
            })
            .collect();
        Self::from_keys(keys)
    }

    /// The identity at a fixed position.
    pub fn get(&self, index: usize) -> Option<&Identity> {
        self.identities.get(index)
    }

    /// Iterate identities in pool order.
    pub fn iter(&self) -> impl Iterator<Item = &Identity> {
        self.identities.iter()
    }

    /// Number of identities in the pool.
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}
