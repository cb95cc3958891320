use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// How additional-section records are serialized.
///
/// `Omit` writes the rdata length but not the rdata bytes, which is how older
/// deployments of this responder behaved. Clients parsing such a response will
/// misread everything after the first additional record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdditionalRdata {
    #[default]
    Emit,
    Omit,
}

impl AdditionalRdata {
    pub fn include_data(&self) -> bool {
        matches!(self, AdditionalRdata::Emit)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Address returned for every A question.
    #[serde(default = "default_answer_address")]
    pub answer_address: Ipv4Addr,

    /// TTL, in seconds, placed on every answer.
    #[serde(default = "default_answer_ttl")]
    pub answer_ttl: u32,

    #[serde(default)]
    pub additional_rdata: AdditionalRdata,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            answer_address: default_answer_address(),
            answer_ttl: default_answer_ttl(),
            additional_rdata: AdditionalRdata::default(),
        }
    }
}

fn default_answer_address() -> Ipv4Addr {
    Ipv4Addr::LOCALHOST
}

fn default_answer_ttl() -> u32 {
    31337
}
