use async_trait::async_trait;
use pinpoint_dns_domain::{DomainError, Question, Resolution};

/// Decides which records answer a single question.
///
/// Implementations must not depend on per-request mutable state: the dispatcher
/// calls `resolve` from many tasks at once.
#[async_trait]
pub trait RecordResolver: Send + Sync {
    async fn resolve(&self, question: &Question) -> Result<Resolution, DomainError>;
}
