use anyhow::{ Context, Result };
use std::path::Path;

use fraudlens::{ AnalysisReport, AnalysisResult };

use crate::cli::ui;
use crate::cli::OutputFormat;

pub mod image;
pub mod parse;
pub mod video;

/// Print a result in the requested format
pub fn emit(result: &AnalysisResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => ui::print_report(result),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}

/// Write the full report as JSON
pub fn save_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    let json = report.to_json_pretty()?;
    std::fs
        ::write(path, json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(())
}
