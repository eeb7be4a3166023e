//! Audit pipeline tests: dedup gating under duplicate and concurrent
//! event delivery.

use rampart_audit::{
    AnalysisPolicy, AuditDeduplicator, AuditError, AuditOutcome, RegistrationListener,
};
use rampart_types::Address;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

fn addr(byte: u8) -> Address {
    Address::from_bytes([byte; 20])
}

/// Policy with zero delays that counts how many jobs reach classification.
struct CountingPolicy {
    executions: Arc<AtomicUsize>,
    fail: bool,
}

impl CountingPolicy {
    fn new(executions: Arc<AtomicUsize>) -> Self {
        Self {
            executions,
            fail: false,
        }
    }

    fn failing(executions: Arc<AtomicUsize>) -> Self {
        Self {
            executions,
            fail: true,
        }
    }
}

impl AnalysisPolicy for CountingPolicy {
    fn step_delay(&self, _step_index: usize) -> Duration {
        Duration::ZERO
    }

    fn classify(&self, _project: Address) -> Result<AuditOutcome, AuditError> {
        self.executions.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(AuditError::Analysis("synthetic failure".to_string()))
        } else {
            Ok(AuditOutcome::Clean)
        }
    }
}

/// Wait until `count` reaches `expected`, or fail after a second.
async fn wait_for_count(count: &AtomicUsize, expected: usize) {
    for _ in 0..100 {
        if count.load(Ordering::SeqCst) == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(count.load(Ordering::SeqCst), expected);
}

#[tokio::test]
async fn duplicate_event_triggers_exactly_one_audit() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let executions = Arc::new(AtomicUsize::new(0));
    let dedup = Arc::new(AuditDeduplicator::new());
    let (tx, rx) = mpsc::channel(8);

    let listener = RegistrationListener::new(
        rx,
        Arc::clone(&dedup),
        Arc::new(CountingPolicy::new(Arc::clone(&executions))),
    );
    let handle = tokio::spawn(listener.run());

    // The same project registers twice in quick succession.
    tx.send(addr(0xAA)).await.unwrap();
    tx.send(addr(0xAA)).await.unwrap();
    drop(tx);
    handle.await.unwrap();

    wait_for_count(&executions, 1).await;
    assert_eq!(dedup.len(), 1);
    assert!(dedup.is_claimed(addr(0xAA)));
}

#[tokio::test]
async fn interleaved_duplicates_audit_each_project_once() {
    let executions = Arc::new(AtomicUsize::new(0));
    let dedup = Arc::new(AuditDeduplicator::new());
    let (tx, rx) = mpsc::channel(64);

    let listener = RegistrationListener::new(
        rx,
        Arc::clone(&dedup),
        Arc::new(CountingPolicy::new(Arc::clone(&executions))),
    );
    let handle = tokio::spawn(listener.run());

    // Ten projects, each delivered three times, interleaved.
    for _round in 0..3 {
        for byte in 1u8..=10 {
            tx.send(addr(byte)).await.unwrap();
        }
    }
    drop(tx);
    handle.await.unwrap();

    wait_for_count(&executions, 10).await;
    assert_eq!(dedup.len(), 10);
}

#[tokio::test]
async fn failed_audit_keeps_its_dedup_entry() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let executions = Arc::new(AtomicUsize::new(0));
    let dedup = Arc::new(AuditDeduplicator::new());
    let (tx, rx) = mpsc::channel(8);

    let listener = RegistrationListener::new(
        rx,
        Arc::clone(&dedup),
        Arc::new(CountingPolicy::failing(Arc::clone(&executions))),
    );
    let handle = tokio::spawn(listener.run());

    // The job for the first event fails; the second event must still be
    // dropped at the gate rather than retried.
    tx.send(addr(0xCC)).await.unwrap();
    tx.send(addr(0xCC)).await.unwrap();
    drop(tx);
    handle.await.unwrap();

    wait_for_count(&executions, 1).await;
    assert!(dedup.is_claimed(addr(0xCC)));
}

#[tokio::test]
async fn listener_keeps_draining_while_jobs_run() {
    let executions = Arc::new(AtomicUsize::new(0));
    let dedup = Arc::new(AuditDeduplicator::new());
    let (tx, rx) = mpsc::channel(64);

    let listener = RegistrationListener::new(
        rx,
        Arc::clone(&dedup),
        Arc::new(CountingPolicy::new(Arc::clone(&executions))),
    );
    let handle = tokio::spawn(listener.run());

    for byte in 1u8..=30 {
        tx.send(addr(byte)).await.unwrap();
    }
    drop(tx);
    handle.await.unwrap();

    wait_for_count(&executions, 30).await;
    assert_eq!(dedup.len(), 30);
}
