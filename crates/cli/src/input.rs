use anyhow::Context;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use dnswire_domain::config::InputEncoding;
use std::io::Read;

/// Reads the whole input, from `path` or from stdin when it is absent or "-".
pub fn read_input(path: Option<&str>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(path) if path != "-" => {
            std::fs::read(path).with_context(|| format!("Failed to read {}", path))
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Turns the input into packet bytes according to its encoding.
///
/// Text encodings tolerate surrounding whitespace; hex also tolerates
/// whitespace between digits so `xxd -p` output can be piped in.
pub fn decode_encoding(raw: &[u8], encoding: InputEncoding) -> anyhow::Result<Vec<u8>> {
    match encoding {
        InputEncoding::Raw => Ok(raw.to_vec()),
        InputEncoding::Hex => {
            let digits: Vec<u8> = raw
                .iter()
                .copied()
                .filter(|b| !b.is_ascii_whitespace())
                .collect();
            hex::decode(&digits).context("Input is not valid hex")
        }
        InputEncoding::Base64url => {
            let text = std::str::from_utf8(raw).context("base64url input is not UTF-8")?;
            let text = text.trim().trim_end_matches('=');
            URL_SAFE_NO_PAD
                .decode(text)
                .context("Input is not valid base64url")
        }
    }
}
