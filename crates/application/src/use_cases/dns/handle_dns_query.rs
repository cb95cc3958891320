use crate::ports::{QueryLogSink, RecordResolver};
use pinpoint_dns_domain::{DnsRequest, DomainError, Message, QueryLog, Resolution};
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns a decoded query into the response message.
///
/// Every question is resolved in order and the resulting sections are
/// concatenated; one query-log entry is recorded per request, keyed on the
/// first question.
pub struct HandleDnsQueryUseCase {
    resolver: Arc<dyn RecordResolver>,
    query_log: Arc<dyn QueryLogSink>,
}

impl HandleDnsQueryUseCase {
    pub fn new(resolver: Arc<dyn RecordResolver>, query_log: Arc<dyn QueryLogSink>) -> Self {
        Self {
            resolver,
            query_log,
        }
    }

    pub async fn execute(&self, request: &DnsRequest) -> Result<Message, DomainError> {
        let first = request
            .query
            .first_question()
            .ok_or(DomainError::NoQuestions)?;

        let mut resolution = Resolution::empty();
        for question in &request.query.questions {
            resolution.extend(self.resolver.resolve(question).await?);
        }

        let entry = QueryLog::new(request.peer, first.name.clone(), first.record_type);
        if let Err(e) = self.query_log.log_query(entry).await {
            warn!(error = %e, peer = %request.peer, "Failed to log query");
        }

        debug!(
            id = request.query.header.id,
            peer = %request.peer,
            answers = resolution.answers.len(),
            authority = resolution.authority.len(),
            additional = resolution.additional.len(),
            "Query resolved"
        );

        Message::response_to(&request.query, resolution)
    }
}
