pub mod decoder;
pub mod errors;
pub mod logging;
pub mod output;
pub mod root;

pub use decoder::{DecoderConfig, DEFAULT_MAX_POINTER_HOPS};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use output::{InputEncoding, OutputConfig, OutputFormat};
pub use root::{CliOverrides, Config};
