use super::bounds::take;
use super::name::{decode_name_with_limit, DomainName};
use dnswire_domain::config::{DecoderConfig, DEFAULT_MAX_POINTER_HOPS};
use dnswire_domain::{DecodeError, Header, Message, Question, ResourceRecord, Section};
use tracing::trace;

/// Size of the fixed header.
pub const HEADER_LEN: usize = 12;

/// TYPE, CLASS, TTL and RDLENGTH following an RR name.
const RR_FIXED_LEN: usize = 10;

/// Smallest possible encodings, used to bound preallocation by buffer size
/// rather than by the (untrusted) header counts.
const MIN_QUESTION_LEN: usize = 5;
const MIN_RR_LEN: usize = 11;

const FLAG_QR: u16 = 0x8000;
const FLAG_AA: u16 = 0x0400;
const FLAG_TC: u16 = 0x0200;
const FLAG_RD: u16 = 0x0100;
const FLAG_RA: u16 = 0x0080;
const FLAG_AD: u16 = 0x0020;
const FLAG_CD: u16 = 0x0010;

/// Decodes `buf` as a complete DNS message with the default pointer-hop cap.
pub fn decode(buf: &[u8]) -> Result<Message, DecodeError> {
    MessageDecoder::default().decode(buf)
}

/// Stateless message decoder. Holds only its limits, so one instance can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageDecoder {
    max_pointer_hops: u8,
}

impl Default for MessageDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_POINTER_HOPS)
    }
}

impl MessageDecoder {
    pub fn new(max_pointer_hops: u8) -> Self {
        Self { max_pointer_hops }
    }

    pub fn from_config(config: &DecoderConfig) -> Self {
        Self::new(config.max_pointer_hops)
    }

    pub fn max_pointer_hops(&self) -> u8 {
        self.max_pointer_hops
    }

    pub fn decode_name(&self, buf: &[u8], offset: usize) -> Result<DomainName, DecodeError> {
        decode_name_with_limit(buf, offset, self.max_pointer_hops)
    }

    /// Decodes a whole message. Either every section matches its header
    /// count or an error is returned; partial messages never escape.
    pub fn decode(&self, buf: &[u8]) -> Result<Message, DecodeError> {
        let header = decode_header(buf)?;
        let mut pos = HEADER_LEN;

        let mut questions = Vec::with_capacity(preallocation(
            header.question_count,
            buf.len() - pos,
            MIN_QUESTION_LEN,
        ));
        for parsed in 0..header.question_count {
            ensure_remaining(buf, pos, Section::Question, header.question_count, parsed)?;
            let (question, next) = self.decode_question(buf, pos)?;
            questions.push(question);
            pos = next;
        }

        let answers = self.decode_records(buf, &mut pos, Section::Answer, header.answer_count)?;
        let authority =
            self.decode_records(buf, &mut pos, Section::Authority, header.authority_count)?;
        let additional =
            self.decode_records(buf, &mut pos, Section::Additional, header.additional_count)?;

        trace!(
            id = header.id,
            questions = questions.len(),
            answers = answers.len(),
            authority = authority.len(),
            additional = additional.len(),
            trailing = buf.len() - pos,
            "DNS message decoded"
        );

        Ok(Message {
            header,
            questions,
            answers,
            authority,
            additional,
        })
    }

    fn decode_question(&self, buf: &[u8], pos: usize) -> Result<(Question, usize), DecodeError> {
        let name = self.decode_name(buf, pos)?;
        let pos = name.next;
        let fixed = take(buf, pos, 4, "qtype/qclass")?;
        let qtype = u16::from_be_bytes([fixed[0], fixed[1]]);
        let qclass = u16::from_be_bytes([fixed[2], fixed[3]]);

        Ok((
            Question {
                name: name.name(),
                qtype,
                qclass,
            },
            pos + 4,
        ))
    }

    fn decode_records(
        &self,
        buf: &[u8],
        pos: &mut usize,
        section: Section,
        count: u16,
    ) -> Result<Vec<ResourceRecord>, DecodeError> {
        let mut records =
            Vec::with_capacity(preallocation(count, buf.len() - *pos, MIN_RR_LEN));
        for parsed in 0..count {
            ensure_remaining(buf, *pos, section, count, parsed)?;
            let (record, next) = self.decode_record(buf, *pos)?;
            records.push(record);
            *pos = next;
        }
        Ok(records)
    }

    fn decode_record(&self, buf: &[u8], pos: usize) -> Result<(ResourceRecord, usize), DecodeError> {
        let name = self.decode_name(buf, pos)?;
        let pos = name.next;
        let fixed = take(buf, pos, RR_FIXED_LEN, "resource record header")?;

        let rtype = u16::from_be_bytes([fixed[0], fixed[1]]);
        let class = u16::from_be_bytes([fixed[2], fixed[3]]);
        let ttl = u32::from_be_bytes([fixed[4], fixed[5], fixed[6], fixed[7]]);
        let rdlength = u16::from_be_bytes([fixed[8], fixed[9]]);

        let rdata_start = pos + RR_FIXED_LEN;
        let rdata = take(buf, rdata_start, rdlength as usize, "rdata")?.to_vec();

        Ok((
            ResourceRecord {
                name: name.name(),
                rtype,
                class,
                ttl,
                rdlength,
                rdata,
            },
            rdata_start + rdlength as usize,
        ))
    }
}

fn decode_header(buf: &[u8]) -> Result<Header, DecodeError> {
    if buf.len() < HEADER_LEN {
        return Err(DecodeError::TruncatedHeader { len: buf.len() });
    }

    let word = |at: usize| u16::from_be_bytes([buf[at], buf[at + 1]]);
    let flags = word(2);

    Ok(Header {
        id: word(0),
        response: flags & FLAG_QR != 0,
        opcode: ((flags >> 11) & 0x0F) as u8,
        authoritative: flags & FLAG_AA != 0,
        truncated: flags & FLAG_TC != 0,
        recursion_desired: flags & FLAG_RD != 0,
        recursion_available: flags & FLAG_RA != 0,
        authentic_data: flags & FLAG_AD != 0,
        checking_disabled: flags & FLAG_CD != 0,
        rcode: (flags & 0x000F) as u8,
        question_count: word(4),
        answer_count: word(6),
        authority_count: word(8),
        additional_count: word(10),
    })
}

/// A section that still owes records must have bytes left to read them from.
/// Running dry exactly between records is a count mismatch; running dry
/// inside a record is reported by the field reader instead.
fn ensure_remaining(
    buf: &[u8],
    pos: usize,
    section: Section,
    declared: u16,
    parsed: u16,
) -> Result<(), DecodeError> {
    if pos >= buf.len() {
        return Err(DecodeError::RecordCountMismatch {
            section,
            declared,
            parsed,
        });
    }
    Ok(())
}

fn preallocation(count: u16, remaining: usize, min_len: usize) -> usize {
    (count as usize).min(remaining / min_len)
}
