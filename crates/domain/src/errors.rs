use crate::dns_message::Section;
use thiserror::Error;

/// Why a buffer could not be decoded as a DNS message.
///
/// Offsets are absolute positions in the buffer handed to the decoder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("DNS header truncated: need 12 bytes, got {len}")]
    TruncatedHeader { len: usize },

    #[error("Truncated {field} at offset {offset}: need {needed} bytes, buffer has {len}")]
    TruncatedField {
        field: &'static str,
        offset: usize,
        needed: usize,
        len: usize,
    },

    #[error("Invalid label length byte {byte:#04x} at offset {offset}")]
    InvalidLabelLength { offset: usize, byte: u8 },

    #[error("Compression pointer at offset {offset} targets {target}, buffer has {len} bytes")]
    PointerOutOfRange {
        offset: usize,
        target: usize,
        len: usize,
    },

    #[error("Name at offset {offset} follows more than {max} compression pointers")]
    TooManyPointerHops { offset: usize, max: u8 },

    #[error("{section} section declares {declared} records but only {parsed} fit in the buffer")]
    RecordCountMismatch {
        section: Section,
        declared: u16,
        parsed: u16,
    },

    #[error("TCP frame truncated: length prefix declares {declared} bytes, {available} available")]
    TruncatedFrame { declared: usize, available: usize },
}

impl DecodeError {
    /// True for the errors caused by the buffer ending early.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            DecodeError::TruncatedHeader { .. }
                | DecodeError::TruncatedField { .. }
                | DecodeError::TruncatedFrame { .. }
        )
    }
}

/// Why a message could not be wrapped in a DNS-over-TCP frame.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("Message of {len} bytes does not fit a TCP length prefix")]
    TooLarge { len: usize },
}
