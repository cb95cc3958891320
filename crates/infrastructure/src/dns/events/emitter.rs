use async_trait::async_trait;
use pinpoint_dns_application::ports::QueryLogSink;
use pinpoint_dns_domain::{DomainError, QueryLog};
use tokio::sync::mpsc;

/// Producer half of the query log. Every request task holds a clone; a single
/// `QueryEventLogger` drains the receiver, so appends never race.
#[derive(Clone)]
pub struct QueryEventEmitter {
    sender: mpsc::UnboundedSender<QueryLog>,
}

impl QueryEventEmitter {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<QueryLog>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { sender: tx }, rx)
    }

    pub fn emit(&self, entry: QueryLog) -> Result<(), DomainError> {
        self.sender
            .send(entry)
            .map_err(|_| DomainError::QueryLogError("query log consumer has stopped".into()))
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

#[async_trait]
impl QueryLogSink for QueryEventEmitter {
    async fn log_query(&self, entry: QueryLog) -> Result<(), DomainError> {
        self.emit(entry)
    }
}

impl std::fmt::Debug for QueryEventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryEventEmitter")
            .field("closed", &self.is_closed())
            .finish()
    }
}
