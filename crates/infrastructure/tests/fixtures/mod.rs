#![allow(dead_code)]

/// Response for `test.example.com A` carrying two answers. The second answer
/// name is `sub2` followed by a pointer to the question name at offset 12.
pub fn compressed_response() -> Vec<u8> {
    vec![
        // Header
        0x12, 0x34, // ID
        0x81, 0x80, // Flags: QR, RD, RA, NOERROR
        0x00, 0x01, // QDCOUNT
        0x00, 0x02, // ANCOUNT
        0x00, 0x00, // NSCOUNT
        0x00, 0x00, // ARCOUNT
        // Question at offset 12
        0x04, b't', b'e', b's', b't',
        0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e',
        0x03, b'c', b'o', b'm',
        0x00,
        0x00, 0x01, // QTYPE A
        0x00, 0x01, // QCLASS IN
        // Answer 1 at offset 34, uncompressed
        0x04, b's', b'u', b'b', b'1',
        0x04, b't', b'e', b's', b't',
        0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e',
        0x03, b'c', b'o', b'm',
        0x00,
        0x00, 0x01, // TYPE A
        0x00, 0x01, // CLASS IN
        0x00, 0x00, 0x00, 0xE1, // TTL 225
        0x00, 0x04, // RDLENGTH
        192, 0, 2, 1,
        // Answer 2 at offset 71, compressed
        0x04, b's', b'u', b'b', b'2',
        0xC0, 0x0C, // pointer to offset 12
        0x00, 0x01, // TYPE A
        0x00, 0x01, // CLASS IN
        0x00, 0x00, 0x00, 0xE1, // TTL 225
        0x00, 0x04, // RDLENGTH
        192, 0, 2, 2,
    ]
}

/// Offset of the first answer record in [`compressed_response`].
pub const FIRST_ANSWER_OFFSET: usize = 34;

/// Offset of the second answer record in [`compressed_response`].
pub const SECOND_ANSWER_OFFSET: usize = 71;
