use crate::core::engine::request_from_text;
use crate::domain::model::ConversionRequest;
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "base-convert")]
#[command(about = "Convert an integer literal between radices 2 to 36")]
pub struct CliConfig {
    /// Integer literal, e.g. 0xFF, -1010, 1111_0000
    #[arg(allow_hyphen_values = true)]
    pub input: String,

    /// Source radix (2-36)
    #[arg(short, long, default_value = "10")]
    pub from: String,

    /// Target radix (2-36)
    #[arg(short, long, default_value = "10")]
    pub to: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn to_request(&self) -> Result<ConversionRequest> {
        Ok(request_from_text(&self.input, &self.from, &self.to)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{AppError, ConversionError};

    #[test]
    fn test_parse_arguments() {
        let config =
            CliConfig::try_parse_from(["base-convert", "0xff", "--from", "16", "--to", "2"])
                .unwrap();
        assert_eq!(config.input, "0xff");
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(
            config.to_request().unwrap(),
            ConversionRequest::new("0xff", 16, 2)
        );
    }

    #[test]
    fn test_negative_input_is_not_a_flag() {
        let config =
            CliConfig::try_parse_from(["base-convert", "-42", "-t", "16", "--format", "json"])
                .unwrap();
        assert_eq!(config.input, "-42");
        assert_eq!(config.from, "10");
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_non_integer_radix_is_invalid_radix() {
        let config = CliConfig::try_parse_from(["base-convert", "10", "--from", "2.5"]).unwrap();
        assert!(matches!(
            config.to_request(),
            Err(AppError::Conversion(ConversionError::InvalidRadix { .. }))
        ));
    }
}
