use super::{RecordType, CLASS_IN};
use crate::DomainName;
use std::net::Ipv4Addr;

/// A resource record as placed in the answer, authority or additional section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: DomainName,

    pub record_type: RecordType,

    pub class: u16,

    pub ttl: u32,

    pub rdata: Vec<u8>,
}

impl ResourceRecord {
    pub fn new(
        name: impl Into<DomainName>,
        record_type: RecordType,
        class: u16,
        ttl: u32,
        rdata: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
            ttl,
            rdata,
        }
    }

    /// Builds an IN A record carrying `address` as its four rdata bytes.
    pub fn a(name: impl Into<DomainName>, address: Ipv4Addr, ttl: u32) -> Self {
        Self::new(name, RecordType::A, CLASS_IN, ttl, address.octets().to_vec())
    }

    pub fn rdlength(&self) -> usize {
        self.rdata.len()
    }
}
