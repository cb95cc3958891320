use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Datagram counters shared between the receive loop and its request tasks.
#[derive(Clone, Default)]
pub struct ServerMetrics {
    received: Arc<AtomicU64>,
    answered: Arc<AtomicU64>,
    dropped: Arc<AtomicU64>,
    encode_failures: Arc<AtomicU64>,
    send_failures: Arc<AtomicU64>,
}

impl ServerMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_received(&self) {
        self.received.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_answered(&self) {
        self.answered.fetch_add(1, Ordering::Relaxed);
    }

    /// Undecodable or unresolvable query: no response was sent.
    pub fn record_dropped(&self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_encode_failure(&self) {
        self.encode_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_send_failure(&self) {
        self.send_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn received(&self) -> u64 {
        self.received.load(Ordering::Relaxed)
    }

    pub fn answered(&self) -> u64 {
        self.answered.load(Ordering::Relaxed)
    }

    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    pub fn encode_failures(&self) -> u64 {
        self.encode_failures.load(Ordering::Relaxed)
    }

    pub fn send_failures(&self) -> u64 {
        self.send_failures.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for ServerMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerMetrics")
            .field("received", &self.received())
            .field("answered", &self.answered())
            .field("dropped", &self.dropped())
            .field("encode_failures", &self.encode_failures())
            .field("send_failures", &self.send_failures())
            .finish()
    }
}
