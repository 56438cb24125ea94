use anyhow::{Result, bail};
use serde::Serialize;
use std::str::FromStr;

/// Output format for one-shot subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text, one step per line
    #[default]
    Text,
    /// JSON - machine-parseable
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => bail!("Invalid format '{}'. Use: text or json", s),
        }
    }
}

impl OutputFormat {
    /// Serialize data to the requested format
    pub fn serialize<T: Serialize>(self, data: &T) -> Result<String> {
        match self {
            Self::Json => serde_json::to_string_pretty(data)
                .map_err(|e| anyhow::anyhow!("JSON serialization failed: {}", e)),
            Self::Text => {
                // Text output is rendered by the caller line by line
                bail!("Text format should not use serialize()")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("toon".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn json_serializes_and_text_refuses() {
        #[derive(Serialize)]
        struct Envelope {
            total_cost: u64,
        }
        let out = OutputFormat::Json
            .serialize(&Envelope { total_cost: 19 })
            .unwrap();
        assert!(out.contains("\"total_cost\": 19"));
        assert!(OutputFormat::Text.serialize(&Envelope { total_cost: 1 }).is_err());
    }
}
