//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::{OrdanetArgs, OutputFormat};
use crate::error::Result;
use crate::extractor::ExtractionSummary;

/// Output a summary in the format selected on the command line.
pub fn output_summary(
    message: &str,
    summary: &ExtractionSummary,
    args: &OrdanetArgs,
) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.output_format {
        OutputFormat::Human => write_human(&mut out, message, summary, args),
        OutputFormat::Json => write_json(&mut out, summary, args),
    }
}

/// Write a summary as plain text.
pub fn write_human<W: Write>(
    out: &mut W,
    message: &str,
    summary: &ExtractionSummary,
    args: &OrdanetArgs,
) -> Result<()> {
    if args.verbosity() > 0 {
        writeln!(out, "{message}")?;
        writeln!(out)?;
    }

    writeln!(out, "Input:    {}", summary.input.display())?;
    if let Some(output) = &summary.output {
        writeln!(out, "Output:   {}", output.display())?;
    }
    writeln!(out, "Records:  {}", summary.records)?;
    writeln!(out, "Senses:   {}", summary.senses)?;
    writeln!(out, "Pairs:    {}", summary.pairs)?;
    Ok(())
}

/// Write any serializable result as JSON, honoring `--pretty`.
pub fn write_json<W: Write, T: Serialize>(
    out: &mut W,
    result: &T,
    args: &OrdanetArgs,
) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn summary() -> ExtractionSummary {
        ExtractionSummary {
            input: PathBuf::from("wordnet.rdf"),
            output: Some(PathBuf::from("synonyms.txt")),
            records: 10,
            senses: 4,
            pairs: 6,
        }
    }

    #[test]
    fn test_human_output() {
        let args = OrdanetArgs::try_parse_from(["ordanet", "extract"]).unwrap();
        let mut buf = Vec::new();
        write_human(&mut buf, "Synonyms extracted", &summary(), &args).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Synonyms extracted\n\n"));
        assert!(text.contains("Output:   synonyms.txt\n"));
        assert!(text.contains("Pairs:    6\n"));
    }

    #[test]
    fn test_human_output_quiet() {
        let args = OrdanetArgs::try_parse_from(["ordanet", "-q", "stats"]).unwrap();
        let mut stats = summary();
        stats.output = None;

        let mut buf = Vec::new();
        write_human(&mut buf, "Synonym statistics", &stats, &args).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Input:"));
        assert!(!text.contains("Output:"));
    }

    #[test]
    fn test_json_output() {
        let args = OrdanetArgs::try_parse_from(["ordanet", "-f", "json", "stats"]).unwrap();
        let mut buf = Vec::new();
        write_json(&mut buf, &summary(), &args).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["records"], 10);
        assert_eq!(value["output"], "synonyms.txt");
    }
}
