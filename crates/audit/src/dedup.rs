//! The audit deduplication gate.

use rampart_types::Address;
use std::collections::HashSet;
use std::sync::Mutex;

/// Process-lifetime set of already-claimed project addresses.
///
/// [`try_claim`](Self::try_claim) is the atomic check-and-insert gate: the
/// first caller for an address wins and every later caller, including a
/// concurrent duplicate, is refused. Entries are never removed, so a failed
/// audit is not retried within the process lifetime.
#[derive(Debug, Default)]
pub struct AuditDeduplicator {
    seen: Mutex<HashSet<Address>>,
}

impl AuditDeduplicator {
    /// Create an empty gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim an address for auditing.
    ///
    /// Returns `true` exactly once per address for the lifetime of the
    /// process.
    pub fn try_claim(&self, project: Address) -> bool {
        self.seen
            .lock()
            .expect("dedup set lock poisoned")
            .insert(project)
    }

    /// Whether an address has already been claimed.
    pub fn is_claimed(&self, project: Address) -> bool {
        self.seen
            .lock()
            .expect("dedup set lock poisoned")
            .contains(&project)
    }

    /// Number of claimed addresses.
    pub fn len(&self) -> usize {
        self.seen.lock().expect("dedup set lock poisoned").len()
    }

    /// Whether no address has been claimed yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 20])
    }

    #[test]
    fn second_claim_for_same_address_is_refused() {
        let dedup = AuditDeduplicator::new();
        assert!(dedup.try_claim(addr(1)));
        assert!(!dedup.try_claim(addr(1)));
        assert!(dedup.try_claim(addr(2)));
        assert_eq!(dedup.len(), 2);
    }

    #[test]
    fn concurrent_claims_admit_exactly_one_winner() {
        let dedup = Arc::new(AuditDeduplicator::new());
        let project = addr(0xAA);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let dedup = Arc::clone(&dedup);
                std::thread::spawn(move || dedup.try_claim(project))
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(winners, 1);
        assert!(dedup.is_claimed(project));
        assert_eq!(dedup.len(), 1);
    }
}
