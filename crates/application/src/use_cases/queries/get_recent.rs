use crate::ports::QueryLogRepository;
use pinpoint_dns_domain::{DomainError, QueryLog};
use std::sync::Arc;

/// Snapshot of the query log: the newest entries plus the lifetime total.
#[derive(Debug, Clone)]
pub struct RecentQueries {
    pub entries: Vec<QueryLog>,
    pub total: u64,
}

pub struct GetRecentQueriesUseCase {
    repository: Arc<dyn QueryLogRepository>,
}

impl GetRecentQueriesUseCase {
    pub fn new(repository: Arc<dyn QueryLogRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, limit: usize) -> Result<RecentQueries, DomainError> {
        let entries = self.repository.get_recent(limit).await?;
        let total = self.repository.count().await?;
        Ok(RecentQueries { entries, total })
    }
}
