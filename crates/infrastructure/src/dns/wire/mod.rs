pub mod header;
pub mod message;
pub mod name;
pub mod record;

pub use header::{decode_header, encode_header};
pub use message::{
    decode_query, encode_message, encode_response, DecodedQuery, MAX_DATAGRAM_SIZE,
};
pub use name::{decode_name, encode_name, MAX_LABEL_LEN};
pub use record::{decode_question, encode_question, encode_record};
