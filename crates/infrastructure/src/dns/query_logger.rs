use pinpoint_dns_application::ports::QueryLogRepository;
use pinpoint_dns_domain::QueryLog;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

const MAX_BATCH: usize = 100;

/// Single consumer of the query-log channel. It is the only writer to the
/// repository, so entries land in the order they were emitted.
pub struct QueryEventLogger {
    repository: Arc<dyn QueryLogRepository>,
}

impl QueryEventLogger {
    pub fn new(repository: Arc<dyn QueryLogRepository>) -> Self {
        Self { repository }
    }

    /// Runs until every emitter is dropped and the channel is drained. The
    /// handle resolves to the number of entries written.
    pub fn start(self, mut rx: mpsc::UnboundedReceiver<QueryLog>) -> JoinHandle<u64> {
        tokio::spawn(async move {
            debug!("QueryEventLogger: starting consumer");

            let mut batch = Vec::with_capacity(MAX_BATCH);
            let mut written = 0u64;
            let mut failed = 0u64;

            while let Some(entry) = rx.recv().await {
                batch.push(entry);
                while batch.len() < MAX_BATCH {
                    match rx.try_recv() {
                        Ok(entry) => batch.push(entry),
                        Err(_) => break,
                    }
                }

                let batch_size = batch.len();
                for entry in batch.drain(..) {
                    match self.repository.append(entry).await {
                        Ok(()) => written += 1,
                        Err(e) => {
                            failed += 1;
                            warn!(error = %e, "QueryEventLogger: failed to append entry");
                        }
                    }
                }
                debug!(batch_size, written, "QueryEventLogger: batch written");
            }

            debug!(written, failed, "QueryEventLogger: consumer shutting down");
            written
        })
    }
}
