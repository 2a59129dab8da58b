//! dnswire domain layer: decoded message types, errors and configuration.
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, Config, DecoderConfig};
pub use dns_message::{Header, Message, Question, Section};
pub use dns_record::{class_name, opcode_name, rcode_name, RecordType, ResourceRecord};
pub use errors::{DecodeError, FrameError};
