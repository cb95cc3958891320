use super::header::{decode_header, encode_header};
use super::record::{decode_question, encode_question, encode_record};
use bytes::{BufMut, Bytes, BytesMut};
use pinpoint_dns_domain::config::AdditionalRdata;
use pinpoint_dns_domain::{DomainError, Message, ResourceRecord, WireError, HEADER_LEN};

/// Largest datagram read from or written to the wire.
pub const MAX_DATAGRAM_SIZE: usize = 512;

// Caps the upfront allocation; a hostile qdcount still decodes lazily.
const QUESTION_CAPACITY_HINT: usize = 16;

/// A decoded query plus the raw bytes of its question section, kept so the
/// response can echo them unchanged.
#[derive(Debug, Clone)]
pub struct DecodedQuery {
    pub message: Message,
    pub question_section: Bytes,
}

/// Decodes the header and then `qdcount` questions. Anything after the last
/// question (answer, authority, additional, EDNS) is ignored.
pub fn decode_query(datagram: &[u8]) -> Result<DecodedQuery, DomainError> {
    let mut reader = datagram;
    let header = decode_header(&mut reader)?;

    if header.qdcount == 0 {
        return Err(DomainError::NoQuestions);
    }

    let mut questions =
        Vec::with_capacity((header.qdcount as usize).min(QUESTION_CAPACITY_HINT));
    for _ in 0..header.qdcount {
        questions.push(decode_question(&mut reader)?);
    }

    let question_end = datagram.len() - reader.len();
    let mut message = Message::query(header.id, questions)?;
    message.header.flags = header.flags;
    message.header.ancount = header.ancount;
    message.header.nscount = header.nscount;
    message.header.arcount = header.arcount;

    Ok(DecodedQuery {
        message,
        question_section: Bytes::copy_from_slice(&datagram[HEADER_LEN..question_end]),
    })
}

/// Encodes a response whose question section is the query's raw bytes.
///
/// The header's qdcount must describe `question_section`; `Message::response_to`
/// guarantees that when it was built from the same decoded query.
pub fn encode_response(
    response: &Message,
    question_section: &[u8],
    additional: AdditionalRdata,
) -> Result<BytesMut, WireError> {
    let mut buf = BytesMut::with_capacity(MAX_DATAGRAM_SIZE);
    encode_header(&mut buf, &response.header);
    buf.put_slice(question_section);
    encode_sections(&mut buf, response, additional)?;
    Ok(buf)
}

/// Encodes a message from its decoded form, re-serializing each question.
pub fn encode_message(message: &Message, additional: AdditionalRdata) -> Result<BytesMut, WireError> {
    let mut buf = BytesMut::with_capacity(MAX_DATAGRAM_SIZE);
    encode_header(&mut buf, &message.header);
    for question in &message.questions {
        encode_question(&mut buf, question)?;
    }
    encode_sections(&mut buf, message, additional)?;
    Ok(buf)
}

fn encode_sections(
    buf: &mut BytesMut,
    message: &Message,
    additional: AdditionalRdata,
) -> Result<(), WireError> {
    encode_records(buf, &message.answers, true)?;
    encode_records(buf, &message.authority, true)?;
    encode_records(buf, &message.additional, additional.include_data())
}

fn encode_records(
    buf: &mut BytesMut,
    records: &[ResourceRecord],
    include_data: bool,
) -> Result<(), WireError> {
    for record in records {
        encode_record(buf, record, include_data)?;
    }
    Ok(())
}
