use pinpoint_dns_application::use_cases::queries::RecentQueries;
use pinpoint_dns_application::use_cases::{GetRecentQueriesUseCase, HandleDnsQueryUseCase};
use pinpoint_dns_domain::Config;
use pinpoint_dns_infrastructure::dns::{
    DnsDispatcher, FixedAddressResolver, QueryEventEmitter, QueryEventLogger,
};
use pinpoint_dns_infrastructure::repositories::InMemoryQueryLogRepository;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

pub struct DnsServices {
    pub dispatcher: Arc<DnsDispatcher>,
    pub get_recent_queries: Arc<GetRecentQueriesUseCase>,
    query_logger: JoinHandle<u64>,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        let repository = Arc::new(InMemoryQueryLogRepository::new(config.query_log.capacity));
        let (emitter, event_rx) = QueryEventEmitter::new();
        let query_logger = QueryEventLogger::new(repository.clone()).start(event_rx);

        let resolver = FixedAddressResolver::from_config(&config.dns);
        info!(
            answer_address = %resolver.address(),
            ttl = resolver.ttl(),
            "Fixed-address resolver configured"
        );

        let handle_query = Arc::new(HandleDnsQueryUseCase::new(
            Arc::new(resolver),
            Arc::new(emitter),
        ));
        let dispatcher = Arc::new(DnsDispatcher::new(
            handle_query,
            config.dns.additional_rdata,
        ));

        Self {
            dispatcher,
            get_recent_queries: Arc::new(GetRecentQueriesUseCase::new(repository)),
            query_logger,
        }
    }

    /// Drops the dispatcher so the query-log channel closes, waits for the
    /// logger to drain it, then reads back the newest entries.
    pub async fn shutdown(self, limit: usize) -> anyhow::Result<RecentQueries> {
        drop(self.dispatcher);
        let written = self.query_logger.await?;
        debug!(written, "Query logger drained");

        Ok(self.get_recent_queries.execute(limit).await?)
    }
}
