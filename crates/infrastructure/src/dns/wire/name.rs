use bytes::{Buf, BufMut};
use pinpoint_dns_domain::{DomainName, WireError};

/// Largest label the one-byte length prefix can describe.
pub const MAX_LABEL_LEN: usize = u8::MAX as usize;

/// Reads length-prefixed labels up to the terminating zero byte. Label bytes are
/// kept verbatim.
///
/// Compression pointers (RFC 1035 §4.1.4) are not followed. A pointer's first byte
/// is taken as a plain label length, so a compressed name either fails with
/// `MalformedName` or decodes to the wrong name. Clients that compress the
/// question name are not supported.
pub fn decode_name<B: Buf>(buf: &mut B) -> Result<DomainName, WireError> {
    let mut labels: Vec<Box<[u8]>> = Vec::new();

    loop {
        if !buf.has_remaining() {
            return Err(WireError::MalformedName);
        }

        let label_len = buf.get_u8() as usize;
        if label_len == 0 {
            return Ok(DomainName::from_labels(labels));
        }
        if buf.remaining() < label_len {
            return Err(WireError::MalformedName);
        }

        let mut label = vec![0u8; label_len];
        buf.copy_to_slice(&mut label);
        labels.push(label.into_boxed_slice());
    }
}

/// Writes each label with its length prefix, then a zero byte.
pub fn encode_name<B: BufMut>(buf: &mut B, name: &DomainName) -> Result<(), WireError> {
    for label in name.labels() {
        let label_len =
            u8::try_from(label.len()).map_err(|_| WireError::LabelTooLong(label.len()))?;
        buf.put_u8(label_len);
        buf.put_slice(label);
    }
    buf.put_u8(0);
    Ok(())
}
