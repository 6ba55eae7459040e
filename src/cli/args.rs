//! Command line argument parsing for the Ordanet CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::extractor::ExtractorConfig;

/// Ordanet - synonym extraction from The Icelandic Wordweb
#[derive(Parser, Debug, Clone)]
#[command(name = "ordanet")]
#[command(about = "Extract synonym pairs from The Icelandic Wordweb RDF dump")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct OrdanetArgs {
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

impl OrdanetArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Extract synonyms and write the synonym file
    Extract(ExtractArgs),

    /// Run both passes and report counts without writing anything
    Stats(StatsArgs),
}

/// Arguments for extracting synonyms
#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    /// Wordweb RDF dump (default: wordnet.rdf)
    #[arg(short, long, value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Synonym file to write (default: synonyms.txt)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// JSON config file; explicit flags take precedence over it
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

impl ExtractArgs {
    /// Resolve the effective configuration.
    pub fn extractor_config(&self) -> Result<ExtractorConfig> {
        let mut config = match &self.config {
            Some(path) => ExtractorConfig::from_file(path)?,
            None => ExtractorConfig::default(),
        };
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        Ok(config)
    }
}

/// Arguments for reporting counts
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Wordweb RDF dump (default: wordnet.rdf)
    #[arg(short, long, value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// JSON config file; explicit flags take precedence over it
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

impl StatsArgs {
    /// Resolve the effective configuration.
    pub fn extractor_config(&self) -> Result<ExtractorConfig> {
        let config = match &self.config {
            Some(path) => ExtractorConfig::from_file(path)?,
            None => ExtractorConfig::default(),
        };
        Ok(match &self.input {
            Some(input) => config.with_input(input.clone()),
            None => config,
        })
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_command() {
        let args = OrdanetArgs::try_parse_from([
            "ordanet",
            "extract",
            "--input",
            "/data/wordnet.rdf",
            "-o",
            "/out/synonyms.txt",
        ])
        .unwrap();

        if let Command::Extract(extract_args) = args.command {
            let config = extract_args.extractor_config().unwrap();
            assert_eq!(config.input, PathBuf::from("/data/wordnet.rdf"));
            assert_eq!(config.output, PathBuf::from("/out/synonyms.txt"));
        } else {
            panic!("Expected Extract command");
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("ordanet.json");
        std::fs::write(
            &config_path,
            r#"{ "input": "from-config.rdf", "output": "from-config.txt" }"#,
        )
        .unwrap();

        let args = OrdanetArgs::try_parse_from([
            "ordanet",
            "extract",
            "--config",
            config_path.to_str().unwrap(),
            "--output",
            "flag.txt",
        ])
        .unwrap();

        if let Command::Extract(extract_args) = args.command {
            let config = extract_args.extractor_config().unwrap();
            assert_eq!(config.input, PathBuf::from("from-config.rdf"));
            assert_eq!(config.output, PathBuf::from("flag.txt"));
        } else {
            panic!("Expected Extract command");
        }
    }

    #[test]
    fn test_stats_command() {
        let args =
            OrdanetArgs::try_parse_from(["ordanet", "stats", "-i", "ordanet.rdf"]).unwrap();

        if let Command::Stats(stats_args) = args.command {
            let config = stats_args.extractor_config().unwrap();
            assert_eq!(config.input, PathBuf::from("ordanet.rdf"));
        } else {
            panic!("Expected Stats command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = OrdanetArgs::try_parse_from(["ordanet", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = OrdanetArgs::try_parse_from(["ordanet", "-vv", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = OrdanetArgs::try_parse_from(["ordanet", "-vvv", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = OrdanetArgs::try_parse_from(["ordanet", "-q", "-vv", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            OrdanetArgs::try_parse_from(["ordanet", "--format", "json", "--pretty", "stats"])
                .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
        assert!(args.pretty);
    }

    #[test]
    fn test_missing_subcommand() {
        assert!(OrdanetArgs::try_parse_from(["ordanet"]).is_err());
    }
}
