use async_trait::async_trait;
use pinpoint_dns_application::ports::RecordResolver;
use pinpoint_dns_domain::config::DnsConfig;
use pinpoint_dns_domain::{DomainError, Question, RecordType, Resolution, ResourceRecord};
use std::net::Ipv4Addr;

/// Answers every A question with one configured address; every other type gets
/// empty sections. Holds no mutable state.
#[derive(Debug, Clone, Copy)]
pub struct FixedAddressResolver {
    address: Ipv4Addr,
    ttl: u32,
}

impl FixedAddressResolver {
    pub fn new(address: Ipv4Addr, ttl: u32) -> Self {
        Self { address, ttl }
    }

    pub fn from_config(config: &DnsConfig) -> Self {
        Self::new(config.answer_address, config.answer_ttl)
    }

    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }
}

#[async_trait]
impl RecordResolver for FixedAddressResolver {
    async fn resolve(&self, question: &Question) -> Result<Resolution, DomainError> {
        if question.record_type != RecordType::A {
            return Ok(Resolution::empty());
        }

        Ok(Resolution::answer(ResourceRecord::a(
            question.name.clone(),
            self.address,
            self.ttl,
        )))
    }
}
