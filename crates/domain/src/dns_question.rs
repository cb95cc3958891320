use super::{DomainName, RecordType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: DomainName,
    pub record_type: RecordType,
    pub class: u16,
}

impl Question {
    pub fn new(name: impl Into<DomainName>, record_type: RecordType, class: u16) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
        }
    }
}
