use serde::{Deserialize, Serialize};

/// Pointer hops allowed while decoding a single name.
pub const DEFAULT_MAX_POINTER_HOPS: u8 = 10;

/// Upper bound for `max_pointer_hops`. A 14-bit pointer chain longer than this
/// only happens in hostile packets.
pub const MAX_POINTER_HOPS_LIMIT: u8 = 127;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DecoderConfig {
    #[serde(default = "default_max_pointer_hops")]
    pub max_pointer_hops: u8,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_pointer_hops: default_max_pointer_hops(),
        }
    }
}

fn default_max_pointer_hops() -> u8 {
    DEFAULT_MAX_POINTER_HOPS
}
