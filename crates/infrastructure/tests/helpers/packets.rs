use bytes::Buf;
use pinpoint_dns_domain::{DomainName, Header, Question};
use pinpoint_dns_infrastructure::dns::wire::{decode_header, decode_name, decode_question};

/// Hand-assembled single-question query with RD set.
pub fn build_query(id: u16, name: &str, qtype: u16) -> Vec<u8> {
    let labels: Vec<&[u8]> = name.split('.').map(str::as_bytes).collect();
    build_query_with_labels(id, &labels, qtype)
}

/// Same as `build_query`, with the question name given as raw labels.
pub fn build_query_with_labels(id: u16, labels: &[&[u8]], qtype: u16) -> Vec<u8> {
    let mut packet = Vec::new();
    packet.extend_from_slice(&id.to_be_bytes());
    packet.extend_from_slice(&[0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
    for label in labels {
        packet.push(label.len() as u8);
        packet.extend_from_slice(label);
    }
    packet.push(0);
    packet.extend_from_slice(&qtype.to_be_bytes());
    packet.extend_from_slice(&1u16.to_be_bytes());
    packet
}

#[derive(Debug)]
pub struct ParsedRecord {
    pub name: DomainName,
    pub rtype: u16,
    pub class: u16,
    pub ttl: u32,
    pub rdata: Vec<u8>,
}

#[derive(Debug)]
pub struct ParsedResponse {
    pub header: Header,
    pub questions: Vec<Question>,
    pub question_bytes: Vec<u8>,
    pub answers: Vec<ParsedRecord>,
    pub authority: Vec<ParsedRecord>,
    pub additional: Vec<ParsedRecord>,
}

/// Parses a response independently of the dispatcher, consuming every byte.
pub fn parse_response(bytes: &[u8]) -> ParsedResponse {
    let mut reader = bytes;
    let header = decode_header(&mut reader).unwrap();

    let questions_start = bytes.len() - reader.len();
    let questions: Vec<Question> = (0..header.qdcount)
        .map(|_| decode_question(&mut reader).unwrap())
        .collect();
    let question_bytes = bytes[questions_start..bytes.len() - reader.len()].to_vec();

    let answers = parse_records(&mut reader, header.ancount);
    let authority = parse_records(&mut reader, header.nscount);
    let additional = parse_records(&mut reader, header.arcount);
    assert!(reader.is_empty(), "trailing bytes after last section");

    ParsedResponse {
        header,
        questions,
        question_bytes,
        answers,
        authority,
        additional,
    }
}

fn parse_records(reader: &mut &[u8], count: u16) -> Vec<ParsedRecord> {
    (0..count)
        .map(|_| {
            let name = decode_name(reader).unwrap();
            let rtype = reader.get_u16();
            let class = reader.get_u16();
            let ttl = reader.get_u32();
            let rdlength = reader.get_u16() as usize;
            let rdata = (*reader)[..rdlength].to_vec();
            reader.advance(rdlength);
            ParsedRecord {
                name,
                rtype,
                class,
                ttl,
                rdata,
            }
        })
        .collect()
}
