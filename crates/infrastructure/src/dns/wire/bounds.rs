use dnswire_domain::DecodeError;

/// Borrows `needed` bytes at `pos`, or reports the field that ran off the end.
pub(super) fn take<'a>(
    buf: &'a [u8],
    pos: usize,
    needed: usize,
    field: &'static str,
) -> Result<&'a [u8], DecodeError> {
    pos.checked_add(needed)
        .and_then(|end| buf.get(pos..end))
        .ok_or(DecodeError::TruncatedField {
            field,
            offset: pos,
            needed,
            len: buf.len(),
        })
}

pub(super) fn read_u8(buf: &[u8], pos: usize, field: &'static str) -> Result<u8, DecodeError> {
    take(buf, pos, 1, field).map(|b| b[0])
}
