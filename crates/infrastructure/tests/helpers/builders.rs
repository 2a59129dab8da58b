#![allow(dead_code)]
use dnswire_domain::{Header, Message, Question, ResourceRecord};
use dnswire_infrastructure::dns::wire::MAX_LABEL_LEN;

/// Assembles a `Message` whose header counts always match its sections.
pub struct MessageBuilder {
    header: Header,
    questions: Vec<Question>,
    answers: Vec<ResourceRecord>,
    authority: Vec<ResourceRecord>,
    additional: Vec<ResourceRecord>,
}

impl MessageBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            header: Header {
                id,
                ..Header::default()
            },
            questions: vec![],
            answers: vec![],
            authority: vec![],
            additional: vec![],
        }
    }

    pub fn header(mut self, f: impl FnOnce(&mut Header)) -> Self {
        f(&mut self.header);
        self
    }

    pub fn question(mut self, name: &str, qtype: u16) -> Self {
        self.questions.push(Question::new(name, qtype, 1));
        self
    }

    pub fn answer(mut self, name: &str, rtype: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.answers
            .push(ResourceRecord::new(name, rtype, 1, ttl, rdata.to_vec()));
        self
    }

    pub fn authority(mut self, name: &str, rtype: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.authority
            .push(ResourceRecord::new(name, rtype, 1, ttl, rdata.to_vec()));
        self
    }

    pub fn additional(mut self, record: ResourceRecord) -> Self {
        self.additional.push(record);
        self
    }

    pub fn build(mut self) -> Message {
        self.header.question_count = self.questions.len() as u16;
        self.header.answer_count = self.answers.len() as u16;
        self.header.authority_count = self.authority.len() as u16;
        self.header.additional_count = self.additional.len() as u16;
        Message {
            header: self.header,
            questions: self.questions,
            answers: self.answers,
            authority: self.authority,
            additional: self.additional,
        }
    }
}

pub fn flags_word(h: &Header) -> u16 {
    let mut flags = ((h.opcode as u16 & 0x0F) << 11) | (h.rcode as u16 & 0x0F);
    for (set, bit) in [
        (h.response, 0x8000),
        (h.authoritative, 0x0400),
        (h.truncated, 0x0200),
        (h.recursion_desired, 0x0100),
        (h.recursion_available, 0x0080),
        (h.authentic_data, 0x0020),
        (h.checking_disabled, 0x0010),
    ] {
        if set {
            flags |= bit;
        }
    }
    flags
}

/// Writes messages in wire format, optionally compressing repeated name
/// suffixes with pointers the way a real server would.
pub struct MessageEncoder {
    buf: Vec<u8>,
    compress: bool,
    names: Vec<(String, usize)>,
}

impl MessageEncoder {
    pub fn plain() -> Self {
        Self {
            buf: Vec::new(),
            compress: false,
            names: Vec::new(),
        }
    }

    pub fn compressed() -> Self {
        Self {
            compress: true,
            ..Self::plain()
        }
    }

    pub fn encode(mut self, message: &Message) -> Vec<u8> {
        let h = &message.header;
        self.u16(h.id);
        self.u16(flags_word(h));
        self.u16(message.questions.len() as u16);
        self.u16(message.answers.len() as u16);
        self.u16(message.authority.len() as u16);
        self.u16(message.additional.len() as u16);

        for q in &message.questions {
            self.name(&q.name);
            self.u16(q.qtype);
            self.u16(q.qclass);
        }
        for rr in message
            .answers
            .iter()
            .chain(&message.authority)
            .chain(&message.additional)
        {
            self.name(&rr.name);
            self.u16(rr.rtype);
            self.u16(rr.class);
            self.buf.extend_from_slice(&rr.ttl.to_be_bytes());
            self.u16(rr.rdata.len() as u16);
            self.buf.extend_from_slice(&rr.rdata);
        }
        self.buf
    }

    fn u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    fn name(&mut self, name: &str) {
        if name.is_empty() {
            self.buf.push(0);
            return;
        }
        let labels: Vec<&str> = name.split('.').collect();
        for i in 0..labels.len() {
            if self.compress {
                let suffix = labels[i..].join(".");
                if let Some(&(_, offset)) = self.names.iter().find(|(n, _)| *n == suffix) {
                    self.buf.push(0xC0 | (offset >> 8) as u8);
                    self.buf.push(offset as u8);
                    return;
                }
                if self.buf.len() < 0x4000 {
                    self.names.push((suffix, self.buf.len()));
                }
            }
            let label = labels[i].as_bytes();
            assert!(!label.is_empty() && label.len() <= MAX_LABEL_LEN);
            self.buf.push(label.len() as u8);
            self.buf.extend_from_slice(label);
        }
        self.buf.push(0);
    }
}

/// A buffer holding a root name at offset 0 followed by `hops` pointers, each
/// pointing at the previous one. Decoding from the returned offset follows
/// exactly `hops` pointers.
pub fn pointer_chain(hops: usize) -> (Vec<u8>, usize) {
    let mut buf = vec![0x00];
    let mut previous = 0usize;
    for _ in 0..hops {
        let here = buf.len();
        buf.push(0xC0 | (previous >> 8) as u8);
        buf.push(previous as u8);
        previous = here;
    }
    (buf, previous)
}
