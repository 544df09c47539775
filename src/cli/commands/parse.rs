use anyhow::{ Context, Result };
use log::info;
use std::io::Read;
use std::path::Path;

use fraudlens::ResponseParser;

use crate::cli::commands::emit;
use crate::cli::{ ui, OutputFormat };

/// Offline parsing of a saved model reply
pub fn execute(input: &Path, format: OutputFormat) -> Result<()> {
    let raw = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("Failed to read reply from stdin")?;
        buf
    } else {
        std::fs
            ::read_to_string(input)
            .with_context(|| format!("Failed to read reply file {}", input.display()))?
    };

    info!("Parsing {} characters of model output", raw.chars().count());

    if format == OutputFormat::Text {
        ui::print_header("Parsing Model Reply");
    }

    let result = ResponseParser::parse(&raw);
    emit(&result, format)
}
