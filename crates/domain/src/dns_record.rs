mod record;
mod record_type;

pub use record::ResourceRecord;
pub use record_type::RecordType;

/// The Internet class.
pub const CLASS_IN: u16 = 1;
