//! Command line argument parsing for Sentix CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;
use crate::error::Result;

/// Sentix - sentiment and subjectivity scoring with a polarity gauge
#[derive(Parser, Debug, Clone)]
#[command(name = "sentix")]
#[command(about = "Sentiment and subjectivity scoring with a polarity gauge")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SentixArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SentixArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the HTTP server and dashboard
    Serve(ServeArgs),

    /// Analyze a single text and print the result
    Analyze(AnalyzeArgs),
}

/// Settings shared by every command that runs the classifier
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SENTIX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum input length in characters
    #[arg(long, value_name = "CHARS", env = "SENTIX_MAX_CHARS")]
    pub max_chars: Option<usize>,

    /// Inputs up to this many characters skip language detection
    #[arg(long, value_name = "CHARS", env = "SENTIX_MIN_DETECT_CHARS")]
    pub min_detect_chars: Option<usize>,

    /// Decimal places kept in scores
    #[arg(long, value_name = "PLACES", env = "SENTIX_PRECISION")]
    pub precision: Option<u32>,
}

impl SettingsArgs {
    /// Build the effective configuration: defaults, then the config file,
    /// then flags and environment variables.
    pub fn resolve(&self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };

        if let Some(max_chars) = self.max_chars {
            config.max_input_chars = max_chars;
        }
        if let Some(min_detect_chars) = self.min_detect_chars {
            config.classifier.min_detection_chars = min_detect_chars;
        }
        if let Some(precision) = self.precision {
            config.classifier.precision = precision;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Arguments for running the server
#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(short, long, value_name = "ADDR", env = "SENTIX_BIND")]
    pub bind: Option<String>,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

impl ServeArgs {
    /// Build the effective server configuration.
    pub fn resolve(&self) -> Result<ServerConfig> {
        let mut config = self.settings.resolve()?;
        if let Some(bind) = &self.bind {
            config.bind = bind.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Arguments for analyzing one text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze (reads standard input when neither TEXT nor --file is given)
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_command() {
        let args = SentixArgs::try_parse_from([
            "sentix",
            "serve",
            "--bind",
            "0.0.0.0:8080",
            "--max-chars",
            "500",
        ])
        .unwrap();

        if let Command::Serve(serve_args) = args.command {
            assert_eq!(serve_args.bind.as_deref(), Some("0.0.0.0:8080"));
            assert_eq!(serve_args.settings.max_chars, Some(500));
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    fn test_analyze_command() {
        let args = SentixArgs::try_parse_from(["sentix", "analyze", "what a lovely day"]).unwrap();

        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.text.as_deref(), Some("what a lovely day"));
            assert!(analyze_args.file.is_none());
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_text_conflicts_with_file() {
        let result =
            SentixArgs::try_parse_from(["sentix", "analyze", "hello", "--file", "input.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let args = SentixArgs::try_parse_from(["sentix", "analyze"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = SentixArgs::try_parse_from(["sentix", "-vv", "analyze"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = SentixArgs::try_parse_from(["sentix", "--quiet", "-vvv", "analyze"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = SentixArgs::try_parse_from(["sentix", "--format", "json", "analyze"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_settings_override_defaults() {
        let settings = SettingsArgs {
            max_chars: Some(100),
            min_detect_chars: Some(4),
            precision: Some(2),
            ..Default::default()
        };
        let config = settings.resolve().unwrap();

        assert_eq!(config.max_input_chars, 100);
        assert_eq!(config.classifier.min_detection_chars, 4);
        assert_eq!(config.classifier.precision, 2);
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let settings = SettingsArgs {
            max_chars: Some(0),
            ..Default::default()
        };
        assert!(settings.resolve().is_err());
    }
}
