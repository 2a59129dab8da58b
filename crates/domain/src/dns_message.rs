//! In-memory representation of a decoded DNS message.
mod header;
mod question;
mod section;

pub use header::Header;
pub use question::Question;
pub use section::Section;

use crate::dns_record::{class_name, opcode_name, rcode_name, ResourceRecord};
use serde::Serialize;
use std::fmt;

/// A fully decoded DNS message.
///
/// Every vector holds exactly as many entries as the matching count in
/// [`Header`]; the decoder refuses to build a `Message` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

impl Message {
    pub fn id(&self) -> u16 {
        self.header.id
    }

    pub fn is_response(&self) -> bool {
        self.header.response
    }

    /// Records of one of the three resource-record sections.
    ///
    /// Returns an empty slice for [`Section::Question`].
    pub fn records(&self, section: Section) -> &[ResourceRecord] {
        match section {
            Section::Question => &[],
            Section::Answer => &self.answers,
            Section::Authority => &self.authority,
            Section::Additional => &self.additional,
        }
    }

    pub fn record_count(&self) -> usize {
        self.answers.len() + self.authority.len() + self.additional.len()
    }
}

fn fqdn(name: &str) -> String {
    if name.is_empty() {
        ".".to_string()
    } else {
        format!("{}.", name)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = &self.header;
        writeln!(
            f,
            ";; ->>HEADER<<- opcode: {}, status: {}, id: {}",
            opcode_name(h.opcode),
            rcode_name(h.rcode),
            h.id
        )?;
        writeln!(
            f,
            ";; flags: {}; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            h.flag_mnemonics().join(" "),
            h.question_count,
            h.answer_count,
            h.authority_count,
            h.additional_count
        )?;

        if !self.questions.is_empty() {
            writeln!(f)?;
            writeln!(f, ";; {} SECTION:", Section::Question.heading())?;
            for q in &self.questions {
                writeln!(
                    f,
                    ";{}\t\t{}\t{}",
                    fqdn(&q.name),
                    class_name(q.qclass),
                    q.type_mnemonic()
                )?;
            }
        }

        for section in [Section::Answer, Section::Authority, Section::Additional] {
            let records = self.records(section);
            if records.is_empty() {
                continue;
            }
            writeln!(f)?;
            writeln!(f, ";; {} SECTION:", section.heading())?;
            for rr in records {
                writeln!(f, "{}", rr)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // RFC 3597 generic RDATA notation keeps the payload opaque
        write!(
            f,
            "{}\t{}\t{}\t{}\t\\# {} {}",
            fqdn(&self.name),
            self.ttl,
            class_name(self.class),
            self.type_mnemonic(),
            self.rdlength,
            hex::encode(&self.rdata)
        )
    }
}
