pub mod tcp_framing;
pub mod wire;

pub use tcp_framing::{decode_framed, frame, unframe};
pub use wire::{decode, decode_name, DomainName, MessageDecoder};
