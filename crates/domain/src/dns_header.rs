/// Size of the fixed message header on the wire.
pub const HEADER_LEN: usize = 12;

/// QR bit: set on every message this server sends.
pub const FLAG_RESPONSE: u16 = 1 << 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    /// Header for a plain query: only the id and question count are set.
    pub fn query(id: u16, qdcount: u16) -> Self {
        Self {
            id,
            qdcount,
            ..Self::default()
        }
    }
}
