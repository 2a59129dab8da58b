use super::bounds::{read_u8, take};
use dnswire_domain::config::DEFAULT_MAX_POINTER_HOPS;
use dnswire_domain::DecodeError;
use std::fmt;

/// Longest label a length byte can announce (top two bits clear).
pub const MAX_LABEL_LEN: usize = 63;

const POINTER_TAG: u8 = 0xC0;
const LABEL_TAG_MASK: u8 = 0xC0;

/// A name read from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainName {
    /// Raw label bytes in wire order; empty for the root.
    pub labels: Vec<Vec<u8>>,
    /// Offset right after the name's original encoding: past the terminating
    /// zero, or past the first compression pointer when one was followed.
    pub next: usize,
}

impl DomainName {
    /// Presentation form: labels joined with `.`, no trailing dot, the root
    /// as the empty string. Label bytes are escaped per RFC 4343 so distinct
    /// wire names never share a text form.
    pub fn name(&self) -> String {
        let mut out = String::new();
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            escape_label(label, &mut out);
        }
        out
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Decodes the name starting at `offset`, allowing the default number of
/// pointer hops.
pub fn decode_name(buf: &[u8], offset: usize) -> Result<DomainName, DecodeError> {
    decode_name_with_limit(buf, offset, DEFAULT_MAX_POINTER_HOPS)
}

/// Decodes the name starting at `offset`, following at most `max_hops`
/// compression pointers.
///
/// Labels are copied out of `buf` byte for byte.
pub fn decode_name_with_limit(
    buf: &[u8],
    offset: usize,
    max_hops: u8,
) -> Result<DomainName, DecodeError> {
    let mut labels = Vec::new();
    let mut pos = offset;
    let mut hops: u8 = 0;
    let mut resume: Option<usize> = None;

    loop {
        let len_byte = read_u8(buf, pos, "label length")?;

        match len_byte & LABEL_TAG_MASK {
            0x00 if len_byte == 0 => {
                return Ok(DomainName {
                    labels,
                    next: resume.unwrap_or(pos + 1),
                });
            }
            0x00 => {
                let label_len = len_byte as usize;
                let label = take(buf, pos + 1, label_len, "label")?;
                labels.push(label.to_vec());
                pos += 1 + label_len;
            }
            POINTER_TAG => {
                let low = read_u8(buf, pos + 1, "compression pointer")?;
                let target = (((len_byte & !LABEL_TAG_MASK) as usize) << 8) | low as usize;

                if resume.is_none() {
                    resume = Some(pos + 2);
                }

                if hops >= max_hops {
                    return Err(DecodeError::TooManyPointerHops {
                        offset,
                        max: max_hops,
                    });
                }
                hops += 1;

                if target >= buf.len() {
                    return Err(DecodeError::PointerOutOfRange {
                        offset: pos,
                        target,
                        len: buf.len(),
                    });
                }
                pos = target;
            }
            _ => {
                return Err(DecodeError::InvalidLabelLength {
                    offset: pos,
                    byte: len_byte,
                });
            }
        }
    }
}

/// `\.` and `\\` for the two bytes with meaning in presentation form,
/// `\DDD` (decimal) for anything outside printable ASCII.
fn escape_label(label: &[u8], out: &mut String) {
    for &byte in label {
        match byte {
            b'.' | b'\\' => {
                out.push('\\');
                out.push(byte as char);
            }
            0x21..=0x7E => out.push(byte as char),
            _ => out.push_str(&format!("\\{:03}", byte)),
        }
    }
}
