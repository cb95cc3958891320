use async_trait::async_trait;
use pinpoint_dns_domain::{DomainError, QueryLog};

#[async_trait]
pub trait QueryLogRepository: Send + Sync {
    async fn append(&self, entry: QueryLog) -> Result<(), DomainError>;

    /// Newest entries first.
    async fn get_recent(&self, limit: usize) -> Result<Vec<QueryLog>, DomainError>;

    /// Total entries ever appended, including evicted ones.
    async fn count(&self) -> Result<u64, DomainError>;
}
