//! The 2-byte length prefix that carries DNS messages over TCP (RFC 1035
//! section 4.2.2).
use super::wire;
use dnswire_domain::{DecodeError, FrameError, Message};

pub const LENGTH_PREFIX_LEN: usize = 2;

/// Prepends the big-endian length prefix to an encoded message.
pub fn frame(message: &[u8]) -> Result<Vec<u8>, FrameError> {
    let len = u16::try_from(message.len())
        .map_err(|_| FrameError::TooLarge { len: message.len() })?;

    let mut framed = Vec::with_capacity(LENGTH_PREFIX_LEN + message.len());
    framed.extend_from_slice(&len.to_be_bytes());
    framed.extend_from_slice(message);
    Ok(framed)
}

/// Returns the message carried by the first frame in `buf`.
///
/// Bytes after the declared length are ignored; they belong to the next frame.
pub fn unframe(buf: &[u8]) -> Result<&[u8], DecodeError> {
    let prefix = buf
        .get(..LENGTH_PREFIX_LEN)
        .ok_or(DecodeError::TruncatedFrame {
            declared: LENGTH_PREFIX_LEN,
            available: buf.len(),
        })?;
    let declared = u16::from_be_bytes([prefix[0], prefix[1]]) as usize;

    buf.get(LENGTH_PREFIX_LEN..LENGTH_PREFIX_LEN + declared)
        .ok_or(DecodeError::TruncatedFrame {
            declared,
            available: buf.len() - LENGTH_PREFIX_LEN,
        })
}

/// Strips the length prefix and decodes the message it carries.
pub fn decode_framed(buf: &[u8]) -> Result<Message, DecodeError> {
    wire::decode(unframe(buf)?)
}
