//! Command implementations for Sentix CLI.

use std::fs;
use std::io::Read;

use anyhow::Context;
use log::debug;

use crate::classifier::{AnalysisClassifier, AnalysisOutcome};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, SentixError};
use crate::language;
use crate::server;

/// Execute a CLI command.
pub fn execute_command(args: SentixArgs) -> Result<()> {
    match &args.command {
        Command::Serve(serve_args) => run_server(serve_args),
        Command::Analyze(analyze_args) => analyze_text(analyze_args, &args),
    }
}

/// Run the HTTP server until interrupted.
fn run_server(args: &ServeArgs) -> Result<()> {
    let config = args.resolve()?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(config))
}

/// Analyze one text and print the result.
fn analyze_text(args: &AnalyzeArgs, cli_args: &SentixArgs) -> Result<()> {
    let config = args.settings.resolve()?;
    let text = read_input(args, std::io::stdin().lock())?;

    let length = check_length(&text, config.max_input_chars)?;

    language::warm_up();
    let classifier = AnalysisClassifier::with_config(config.classifier)?;
    debug!("analyzing {length} characters with {classifier:?}");

    match classifier.analyze(&text)? {
        AnalysisOutcome::Analyzed(result) => output_analysis(&result, cli_args),
        AnalysisOutcome::Rejected(rejection) => Err(SentixError::invalid_input(rejection.error)),
    }
}

/// Count the characters of `text`, failing when there are more than `max`.
fn check_length(text: &str, max: usize) -> Result<usize> {
    let length = text.chars().count();
    if length > max {
        return Err(SentixError::invalid_input(format!(
            "input has {length} characters, the maximum is {max}"
        )));
    }
    Ok(length)
}

/// Take the text from the argument, the file, or the given reader, in that
/// order.
pub fn read_input<R: Read>(args: &AnalyzeArgs, mut reader: R) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        debug!("reading input from {}", path.display());
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read input file {}", path.display()))?;
        return Ok(text);
    }

    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}
