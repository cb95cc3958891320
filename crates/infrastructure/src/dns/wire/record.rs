use super::name::{decode_name, encode_name};
use bytes::{Buf, BufMut};
use pinpoint_dns_domain::{Question, RecordType, ResourceRecord, WireError};

pub fn decode_question<B: Buf>(buf: &mut B) -> Result<Question, WireError> {
    let name = decode_name(buf)?;

    if buf.remaining() < 4 {
        return Err(WireError::TruncatedQuestion);
    }
    let record_type = RecordType::from_u16(buf.get_u16());
    let class = buf.get_u16();

    Ok(Question::new(name, record_type, class))
}

/// Question shape: name, type, class.
pub fn encode_question<B: BufMut>(buf: &mut B, question: &Question) -> Result<(), WireError> {
    encode_name(buf, &question.name)?;
    buf.put_u16(question.record_type.to_u16());
    buf.put_u16(question.class);
    Ok(())
}

/// Record shape: name, type, class, TTL, rdata length, then the rdata bytes when
/// `include_data` is set. Without the data the length field still describes it.
pub fn encode_record<B: BufMut>(
    buf: &mut B,
    record: &ResourceRecord,
    include_data: bool,
) -> Result<(), WireError> {
    let rdlength =
        u16::try_from(record.rdlength()).map_err(|_| WireError::RdataTooLong(record.rdlength()))?;

    encode_name(buf, &record.name)?;
    buf.put_u16(record.record_type.to_u16());
    buf.put_u16(record.class);
    buf.put_u32(record.ttl);
    buf.put_u16(rdlength);
    if include_data {
        buf.put_slice(&record.rdata);
    }
    Ok(())
}
