use anyhow::Context;
use clap::Parser;
use dnswire_domain::config::{InputEncoding, OutputFormat};
use dnswire_domain::CliOverrides;
use dnswire_infrastructure::dns::{unframe, MessageDecoder};
use tracing::{debug, info, warn};

mod bootstrap;
mod input;
mod output;

#[derive(Parser)]
#[command(name = "dnswire")]
#[command(version)]
#[command(about = "dnswire - decode DNS messages from their wire format")]
struct Cli {
    /// Packet file to decode; reads stdin when omitted or "-"
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'f', long)]
    format: Option<OutputFormat>,

    /// Input encoding (raw, hex, base64url)
    #[arg(short = 'e', long)]
    encoding: Option<InputEncoding>,

    /// Input starts with the 2-byte DNS-over-TCP length prefix
    #[arg(long)]
    tcp_framed: bool,

    /// Maximum compression pointers followed per name
    #[arg(long)]
    max_pointer_hops: Option<u8>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        max_pointer_hops: cli.max_pointer_hops,
        log_level: cli.log_level.clone(),
        format: cli.format,
        input_encoding: cli.encoding,
        tcp_framed: cli.tcp_framed,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        encoding = %config.output.input_encoding,
        tcp_framed = config.output.tcp_framed,
        max_pointer_hops = config.decoder.max_pointer_hops,
        "Decoding DNS message"
    );

    let raw = input::read_input(cli.input.as_deref())?;
    let packet = input::decode_encoding(&raw, config.output.input_encoding)?;
    debug!(bytes = packet.len(), "Packet loaded");

    let payload = if config.output.tcp_framed {
        unframe(&packet).context("Invalid DNS-over-TCP frame")?
    } else {
        &packet[..]
    };

    let decoder = MessageDecoder::from_config(&config.decoder);
    let message = decoder.decode(payload).map_err(|e| {
        warn!(error = %e, bytes = payload.len(), "DNS message rejected");
        anyhow::Error::new(e).context("Failed to decode DNS message")
    })?;

    print!("{}", output::render(&message, config.output.format)?);
    Ok(())
}
