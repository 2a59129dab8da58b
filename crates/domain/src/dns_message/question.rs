use crate::dns_record::RecordType;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Dot-joined labels without a trailing dot; empty for the root. Label
    /// bytes outside printable ASCII, `.` and `\\` are escaped (RFC 4343).
    pub name: String,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(name: impl Into<String>, qtype: u16, qclass: u16) -> Self {
        Self {
            name: name.into(),
            qtype,
            qclass,
        }
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.qtype)
    }

    pub fn type_mnemonic(&self) -> String {
        RecordType::mnemonic(self.qtype)
    }
}
