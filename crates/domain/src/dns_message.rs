use super::{DomainError, Header, Question, ResourceRecord, FLAG_RESPONSE};

/// Records produced for one or more questions, kept in section order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

impl Resolution {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn answer(record: ResourceRecord) -> Self {
        Self {
            answers: vec![record],
            ..Self::default()
        }
    }

    /// Appends `other` section by section, preserving order.
    pub fn extend(&mut self, other: Resolution) {
        self.answers.extend(other.answers);
        self.authority.extend(other.authority);
        self.additional.extend(other.additional);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

impl Message {
    pub fn query(id: u16, questions: Vec<Question>) -> Result<Self, DomainError> {
        let qdcount = section_count("question", questions.len())?;
        Ok(Self {
            header: Header::query(id, qdcount),
            questions,
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        })
    }

    /// Builds the response to `query`: id and questions echoed, response bit set,
    /// section counts taken from the records actually carried.
    pub fn response_to(query: &Message, resolution: Resolution) -> Result<Self, DomainError> {
        let header = Header {
            id: query.header.id,
            flags: FLAG_RESPONSE,
            qdcount: section_count("question", query.questions.len())?,
            ancount: section_count("answer", resolution.answers.len())?,
            nscount: section_count("authority", resolution.authority.len())?,
            arcount: section_count("additional", resolution.additional.len())?,
        };

        Ok(Self {
            header,
            questions: query.questions.clone(),
            answers: resolution.answers,
            authority: resolution.authority,
            additional: resolution.additional,
        })
    }

    pub fn first_question(&self) -> Option<&Question> {
        self.questions.first()
    }
}

fn section_count(section: &'static str, len: usize) -> Result<u16, DomainError> {
    u16::try_from(len).map_err(|_| DomainError::SectionTooLarge { section, len })
}
