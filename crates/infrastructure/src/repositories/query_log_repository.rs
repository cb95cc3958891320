use async_trait::async_trait;
use pinpoint_dns_application::ports::QueryLogRepository;
use pinpoint_dns_domain::{DomainError, QueryLog};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Bounded, lock-guarded query log. Once full, each append evicts the oldest
/// entry; the lifetime total keeps counting.
pub struct InMemoryQueryLogRepository {
    entries: RwLock<VecDeque<QueryLog>>,
    capacity: usize,
    total: AtomicU64,
}

impl InMemoryQueryLogRepository {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: RwLock::new(VecDeque::with_capacity(capacity.min(1024))),
            capacity,
            total: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl QueryLogRepository for InMemoryQueryLogRepository {
    async fn append(&self, entry: QueryLog) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
        self.total.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_recent(&self, limit: usize) -> Result<Vec<QueryLog>, DomainError> {
        let entries = self.entries.read().await;
        let recent: Vec<QueryLog> = entries.iter().rev().take(limit).cloned().collect();
        debug!(returned = recent.len(), stored = entries.len(), "Fetched recent queries");
        Ok(recent)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.total.load(Ordering::Relaxed))
    }
}
