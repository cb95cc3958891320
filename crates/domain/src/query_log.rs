use crate::dns_record::RecordType;
use crate::DomainName;
use chrono::{DateTime, Utc};
use std::net::SocketAddr;

/// One observed query: who asked, and for which name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryLog {
    pub peer: SocketAddr,
    pub domain: DomainName,
    pub record_type: RecordType,
    pub timestamp: DateTime<Utc>,
}

impl QueryLog {
    pub fn new(peer: SocketAddr, domain: impl Into<DomainName>, record_type: RecordType) -> Self {
        Self {
            peer,
            domain: domain.into(),
            record_type,
            timestamp: Utc::now(),
        }
    }
}
