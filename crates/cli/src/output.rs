use dnswire_domain::config::OutputFormat;
use dnswire_domain::Message;

pub fn render(message: &Message, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(message.to_string()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(message)?;
            json.push('\n');
            Ok(json)
        }
    }
}
