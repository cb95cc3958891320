use bytes::{Buf, BufMut};
use pinpoint_dns_domain::{Header, WireError, HEADER_LEN};

/// Reads the six big-endian header fields: id, flags, qdcount, ancount, nscount, arcount.
pub fn decode_header<B: Buf>(buf: &mut B) -> Result<Header, WireError> {
    if buf.remaining() < HEADER_LEN {
        return Err(WireError::TruncatedHeader(buf.remaining()));
    }

    Ok(Header {
        id: buf.get_u16(),
        flags: buf.get_u16(),
        qdcount: buf.get_u16(),
        ancount: buf.get_u16(),
        nscount: buf.get_u16(),
        arcount: buf.get_u16(),
    })
}

/// Writes the header as-is. Callers are responsible for the counts matching the
/// sections that follow.
pub fn encode_header<B: BufMut>(buf: &mut B, header: &Header) {
    buf.put_u16(header.id);
    buf.put_u16(header.flags);
    buf.put_u16(header.qdcount);
    buf.put_u16(header.ancount);
    buf.put_u16(header.nscount);
    buf.put_u16(header.arcount);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_header_field_order() {
        let mut wire: &[u8] = &[
            0x12, 0x34, 0x01, 0x00, 0x00, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04,
        ];
        let header = decode_header(&mut wire).unwrap();

        assert_eq!(header.id, 0x1234);
        assert_eq!(header.flags, 0x0100);
        assert_eq!(header.qdcount, 1);
        assert_eq!(header.ancount, 2);
        assert_eq!(header.nscount, 3);
        assert_eq!(header.arcount, 4);
    }

    #[test]
    fn test_decode_header_truncated() {
        let mut wire: &[u8] = &[0x12, 0x34, 0x01];
        assert_eq!(decode_header(&mut wire), Err(WireError::TruncatedHeader(3)));
    }

    #[test]
    fn test_encode_header_is_big_endian() {
        let header = Header {
            id: 0xABCD,
            flags: 0x8000,
            qdcount: 1,
            ancount: 0x0102,
            nscount: 0,
            arcount: 0xFFFF,
        };
        let mut buf = Vec::new();
        encode_header(&mut buf, &header);

        assert_eq!(
            buf,
            vec![0xAB, 0xCD, 0x80, 0x00, 0x00, 0x01, 0x01, 0x02, 0x00, 0x00, 0xFF, 0xFF]
        );
    }
}
