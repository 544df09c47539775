use anyhow::Result;
use std::path::Path;

use fraudlens::{ AnalysisReport, FraudDetector, MediaKind };

use crate::cli::commands::{ emit, save_report };
use crate::cli::{ ui, OutputFormat };

/// Single image analysis command
pub async fn execute<D: FraudDetector + Sync>(
    detector: &D,
    image_path: &Path,
    format: OutputFormat,
    save: Option<&Path>
) -> Result<()> {
    let interactive = format == OutputFormat::Text;
    if interactive {
        ui::print_header("Analyzing Image");
        ui::print_result("Image", &image_path.display().to_string());
        ui::print_result("Model", &format!("{} ({})", detector.model_name(), detector.provider_name()));
    }

    let spinner = interactive.then(|| ui::spinner_with_message("Waiting for model verdict..."));
    let outcome = detector.analyze_frame(image_path).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let result = outcome?;

    emit(&result, format)?;

    if let Some(path) = save {
        let report = AnalysisReport::new(
            image_path,
            MediaKind::Image,
            1,
            detector.provider_name(),
            detector.model_name(),
            result
        );
        save_report(&report, path)?;
        if interactive {
            ui::print_success(&format!("Report saved to {}", path.display()));
        }
    }

    Ok(())
}
