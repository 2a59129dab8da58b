use serde::Serialize;

/// The fixed 12-byte header, with the flags word split into its fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Header {
    pub id: u16,
    /// QR bit: set on responses.
    pub response: bool,
    /// 4-bit operation code.
    pub opcode: u8,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    /// AD bit (RFC 4035).
    pub authentic_data: bool,
    /// CD bit (RFC 4035).
    pub checking_disabled: bool,
    /// 4-bit response code.
    pub rcode: u8,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    /// dig-style lowercase names of the flags that are set, in wire order.
    pub fn flag_mnemonics(&self) -> Vec<&'static str> {
        [
            (self.response, "qr"),
            (self.authoritative, "aa"),
            (self.truncated, "tc"),
            (self.recursion_desired, "rd"),
            (self.recursion_available, "ra"),
            (self.authentic_data, "ad"),
            (self.checking_disabled, "cd"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }

    pub fn total_records(&self) -> usize {
        self.answer_count as usize + self.authority_count as usize + self.additional_count as usize
    }
}
