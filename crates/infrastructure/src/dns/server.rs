use crate::dns::events::ServerMetrics;
use crate::dns::transport::DatagramEndpoint;
use crate::dns::wire::{self, MAX_DATAGRAM_SIZE};
use bytes::{Bytes, BytesMut};
use pinpoint_dns_application::use_cases::HandleDnsQueryUseCase;
use pinpoint_dns_domain::config::AdditionalRdata;
use pinpoint_dns_domain::{DnsRequest, DomainError};
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// Receive loop plus the per-datagram pipeline: decode, resolve, encode, send.
///
/// Each received datagram is handled on its own task; the loop never waits on
/// a response being sent.
pub struct DnsDispatcher {
    use_case: Arc<HandleDnsQueryUseCase>,
    additional_rdata: AdditionalRdata,
    metrics: ServerMetrics,
}

impl DnsDispatcher {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>, additional_rdata: AdditionalRdata) -> Self {
        Self {
            use_case,
            additional_rdata,
            metrics: ServerMetrics::new(),
        }
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.metrics
    }

    /// Produces the encoded response for one datagram, or `None` when the
    /// datagram is dropped. Malformed input never gets an error reply.
    pub async fn handle_datagram(&self, datagram: &[u8], peer: SocketAddr) -> Option<BytesMut> {
        let decoded = match wire::decode_query(datagram) {
            Ok(decoded) => decoded,
            Err(e) => {
                self.metrics.record_dropped();
                warn!(peer = %peer, size = datagram.len(), error = %e, "Dropping undecodable query");
                return None;
            }
        };

        for question in &decoded.message.questions {
            debug!(
                id = decoded.message.header.id,
                peer = %peer,
                size = datagram.len(),
                name = %question.name,
                record_type = %question.record_type,
                class = question.class,
                "DNS query received"
            );
        }

        let request = DnsRequest::new(peer, decoded.message);
        let response = match self.use_case.execute(&request).await {
            Ok(response) => response,
            Err(e) => {
                self.metrics.record_dropped();
                warn!(peer = %peer, id = request.query.header.id, error = %e, "Query resolution failed");
                return None;
            }
        };

        match wire::encode_response(&response, &decoded.question_section, self.additional_rdata) {
            Ok(encoded) => Some(encoded),
            Err(e) => {
                self.metrics.record_encode_failure();
                error!(peer = %peer, id = response.header.id, error = %e, "Failed to encode response");
                None
            }
        }
    }

    /// Runs until the endpoint fails. See [`DnsDispatcher::run_with_shutdown`].
    pub async fn run<E>(self: Arc<Self>, endpoint: Arc<E>) -> Result<(), DomainError>
    where
        E: DatagramEndpoint + 'static,
    {
        self.run_with_shutdown(endpoint, std::future::pending()).await
    }

    /// Receives datagrams until `shutdown` resolves or the endpoint returns a
    /// non-transient error, then waits for in-flight requests to finish.
    /// `Interrupted` and `ConnectionReset` receive errors are transient.
    pub async fn run_with_shutdown<E, F>(
        self: Arc<Self>,
        endpoint: Arc<E>,
        shutdown: F,
    ) -> Result<(), DomainError>
    where
        E: DatagramEndpoint + 'static,
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        let mut buf = [0u8; MAX_DATAGRAM_SIZE];
        let mut in_flight: JoinSet<()> = JoinSet::new();

        info!(additional_rdata = ?self.additional_rdata, "DNS dispatcher ready");

        let result = loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutdown requested, no longer receiving");
                    break Ok(());
                }
                received = receive(endpoint.as_ref(), &mut buf) => match received {
                    Ok((datagram, peer)) => {
                        self.metrics.record_received();
                        let dispatcher = Arc::clone(&self);
                        let endpoint = Arc::clone(&endpoint);
                        in_flight.spawn(async move {
                            dispatcher.respond(endpoint.as_ref(), &datagram, peer).await;
                        });
                    }
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) if e.kind() == io::ErrorKind::ConnectionReset => {
                        // Windows reports an earlier send's ICMP port-unreachable here.
                        warn!(error = %e, "UDP recv reset by peer, continuing");
                        continue;
                    }
                    Err(e) => {
                        error!(error = %e, "UDP recv error");
                        break Err(DomainError::IoError(e.to_string()));
                    }
                },
            }

            while let Some(finished) = in_flight.try_join_next() {
                log_task_failure(finished);
            }
        };

        debug!(in_flight = in_flight.len(), "Draining in-flight requests");
        while let Some(finished) = in_flight.join_next().await {
            log_task_failure(finished);
        }

        info!(
            received = self.metrics.received(),
            answered = self.metrics.answered(),
            dropped = self.metrics.dropped(),
            encode_failures = self.metrics.encode_failures(),
            send_failures = self.metrics.send_failures(),
            "DNS dispatcher stopped"
        );

        result
    }

    async fn respond<E>(&self, endpoint: &E, datagram: &[u8], peer: SocketAddr)
    where
        E: DatagramEndpoint + ?Sized,
    {
        let Some(response) = self.handle_datagram(datagram, peer).await else {
            return;
        };

        if response.len() > MAX_DATAGRAM_SIZE {
            debug!(peer = %peer, size = response.len(), "Response exceeds 512 bytes, sent untruncated");
        }

        match endpoint.send_to(&response, peer).await {
            Ok(_) => self.metrics.record_answered(),
            Err(e) => {
                self.metrics.record_send_failure();
                warn!(peer = %peer, error = %e, "Failed to send response");
            }
        }
    }
}

async fn receive<E>(endpoint: &E, buf: &mut [u8]) -> io::Result<(Bytes, SocketAddr)>
where
    E: DatagramEndpoint + ?Sized,
{
    let (len, peer) = endpoint.recv_from(buf).await?;
    Ok((Bytes::copy_from_slice(&buf[..len]), peer))
}

fn log_task_failure(finished: Result<(), tokio::task::JoinError>) {
    if let Err(e) = finished {
        error!(error = %e, "Request task failed");
    }
}
