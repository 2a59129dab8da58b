use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a decoded message is printed.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How the packet bytes are written in the input.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputEncoding {
    #[default]
    Raw,
    Hex,
    /// Unpadded base64url, as carried in the `dns` parameter of DoH GET requests.
    Base64url,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub input_encoding: InputEncoding,

    /// Input carries the 2-byte length prefix used by DNS over TCP.
    #[serde(default)]
    pub tcp_framed: bool,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl InputEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputEncoding::Raw => "raw",
            InputEncoding::Hex => "hex",
            InputEncoding::Base64url => "base64url",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format '{}'. Expected: text, json", s)),
        }
    }
}

impl FromStr for InputEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" | "binary" => Ok(InputEncoding::Raw),
            "hex" => Ok(InputEncoding::Hex),
            "base64url" | "doh" => Ok(InputEncoding::Base64url),
            _ => Err(format!(
                "Unknown input encoding '{}'. Expected: raw, hex, base64url",
                s
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for InputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
