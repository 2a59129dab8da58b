//! Decoding of DNS messages from their RFC 1035 wire format.
//!
//! [`decode`] walks the header, the question section and the three
//! resource-record sections of a buffer and returns an owned [`Message`].
//! Names are resolved through [`decode_name`], which follows compression
//! pointers up to a fixed number of hops.
//!
//! [`Message`]: dnswire_domain::Message
mod bounds;
mod message;
mod name;

pub use message::{decode, MessageDecoder, HEADER_LEN};
pub use name::{decode_name, decode_name_with_limit, DomainName, MAX_LABEL_LEN};
