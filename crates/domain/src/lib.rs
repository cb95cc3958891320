//! Pinpoint DNS Domain Layer
pub mod config;
pub mod dns_header;
pub mod dns_message;
pub mod dns_question;
pub mod dns_record;
pub mod dns_request;
pub mod domain_name;
pub mod errors;
pub mod query_log;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_header::{Header, FLAG_RESPONSE, HEADER_LEN};
pub use dns_message::{Message, Resolution};
pub use dns_question::Question;
pub use dns_record::{RecordType, ResourceRecord, CLASS_IN};
pub use dns_request::DnsRequest;
pub use domain_name::DomainName;
pub use errors::{DomainError, WireError};
pub use query_log::QueryLog;
