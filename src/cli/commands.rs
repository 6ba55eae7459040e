//! Command implementations for the Ordanet CLI.

use log::debug;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::extractor::Extractor;

/// Execute a CLI command.
pub fn execute_command(args: OrdanetArgs) -> Result<()> {
    match &args.command {
        Command::Extract(extract_args) => extract(extract_args, &args),
        Command::Stats(stats_args) => stats(stats_args, &args),
    }
}

/// Extract synonyms and write them to the output file.
fn extract(args: &ExtractArgs, cli_args: &OrdanetArgs) -> Result<()> {
    let config = args.extractor_config()?;
    debug!("Extract config: {config:?}");

    let summary = Extractor::new(config)?.run()?;
    output_summary("Synonyms extracted", &summary, cli_args)
}

/// Run both passes and report counts.
fn stats(args: &StatsArgs, cli_args: &OrdanetArgs) -> Result<()> {
    let config = args.extractor_config()?;
    debug!("Stats config: {config:?}");

    let summary = Extractor::new(config)?.stats()?;
    output_summary("Synonym statistics", &summary, cli_args)
}
