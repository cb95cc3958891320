use thiserror::Error;

/// Failures raised by the wire codec while reading a query or writing a response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Truncated header: need 12 bytes, got {0}")]
    TruncatedHeader(usize),

    #[error("Malformed domain name: datagram ended before the terminating label")]
    MalformedName,

    #[error("Truncated question: missing type or class")]
    TruncatedQuestion,

    #[error("Label too long: {0} bytes (max 255)")]
    LabelTooLong(usize),

    #[error("Resource data too long: {0} bytes (max 65535)")]
    RdataTooLong(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Wire format error: {0}")]
    Wire(#[from] WireError),

    #[error("Query carries no questions")]
    NoQuestions,

    #[error("Section too large: {section} has {len} records")]
    SectionTooLarge { section: &'static str, len: usize },

    #[error("Resolution failed: {0}")]
    ResolutionFailed(String),

    #[error("Query log error: {0}")]
    QueryLogError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
