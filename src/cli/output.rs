//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::{OutputFormat, SentixArgs};
use crate::classifier::AnalysisResult;
use crate::error::Result;

/// Print an analysis result in the format chosen on the command line.
pub fn output_analysis(result: &AnalysisResult, args: &SentixArgs) -> Result<()> {
    let rendered = render_analysis(result, args.output_format, args.pretty)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}

/// Render an analysis result as text.
pub fn render_analysis(
    result: &AnalysisResult,
    format: OutputFormat,
    pretty: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(render_human(result)),
        OutputFormat::Json => render_json(result, pretty),
    }
}

fn render_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn render_human(result: &AnalysisResult) -> String {
    let english = if result.is_english {
        "yes"
    } else {
        "no (scores assume English text)"
    };

    [
        format!("Sentiment:     {} ({})", result.category, result.color),
        format!("Polarity:      {}", result.score),
        format!("Subjectivity:  {}", result.subjectivity),
        format!("Gauge:         {:.2}°", result.rotation),
        format!("English:       {english}"),
    ]
    .join("\n")
}
