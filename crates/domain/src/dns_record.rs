mod codes;
mod record;
mod record_type;

pub use codes::{class_name, opcode_name, rcode_name};
pub use record::ResourceRecord;
pub use record_type::RecordType;
