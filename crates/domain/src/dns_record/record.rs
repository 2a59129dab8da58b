use super::RecordType;
use serde::{Serialize, Serializer};

/// A resource record as it appears in the answer, authority or additional
/// section. `rdata` is kept as opaque bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    /// Owner name in the same escaped presentation form as [`Question::name`].
    ///
    /// [`Question::name`]: crate::Question::name
    pub name: String,

    #[serde(rename = "type")]
    pub rtype: u16,

    pub class: u16,

    pub ttl: u32,

    pub rdlength: u16,

    #[serde(serialize_with = "serialize_hex")]
    pub rdata: Vec<u8>,
}

impl ResourceRecord {
    /// Builds a record whose `rdlength` matches `rdata`.
    ///
    /// `rdata` longer than `u16::MAX` bytes cannot appear on the wire; its
    /// length saturates.
    pub fn new(name: impl Into<String>, rtype: u16, class: u16, ttl: u32, rdata: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            rtype,
            class,
            ttl,
            rdlength: u16::try_from(rdata.len()).unwrap_or(u16::MAX),
            rdata,
        }
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.rtype)
    }

    pub fn type_mnemonic(&self) -> String {
        RecordType::mnemonic(self.rtype)
    }
}

fn serialize_hex<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}
