use anyhow::Result;
use std::path::Path;

use fraudlens::{ AnalysisReport, FraudDetector, MediaKind, Verdict };

use crate::cli::commands::{ emit, save_report };
use crate::cli::{ ui, OutputFormat };

/// Video analysis command
pub async fn execute<D: FraudDetector + Sync>(
    detector: &D,
    video_path: &Path,
    sample_frames: usize,
    format: OutputFormat,
    save: Option<&Path>
) -> Result<()> {
    let interactive = format == OutputFormat::Text;
    if interactive {
        ui::print_header("Analyzing Video");
        ui::print_result("Video", &video_path.display().to_string());
        ui::print_result("Frames to sample", &sample_frames.to_string());
        ui::print_result("Model", &format!("{} ({})", detector.model_name(), detector.provider_name()));
    }

    let progress_bar = interactive.then(|| ui::create_progress_bar(sample_frames as u64, "frames"));
    let on_progress = |done: usize, total: usize| {
        if let Some(pb) = &progress_bar {
            pb.set_length(total as u64);
            pb.set_position(done as u64);
        }
    };

    let callback: &(dyn Fn(usize, usize) + Send + Sync) = &on_progress;

    let outcome = detector.analyze_video(video_path, sample_frames, Some(callback)).await;
    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }
    let analysis = outcome?;

    if interactive {
        if analysis.frame_results.len() < sample_frames {
            ui::print_warning(
                &format!(
                    "Only {} of {} requested frames were analyzed",
                    analysis.frame_results.len(),
                    sample_frames
                )
            );
        }
        if analysis.overall.verdict() == Verdict::Uncertain {
            ui::print_info("Frame verdicts were inconclusive; consider sampling more frames.");
        }
    }

    emit(&analysis.overall, format)?;

    if let Some(path) = save {
        let report = AnalysisReport::new(
            video_path,
            MediaKind::Video,
            analysis.frame_results.len(),
            detector.provider_name(),
            detector.model_name(),
            analysis.overall
        );
        save_report(&report, path)?;
        if interactive {
            ui::print_success(&format!("Report saved to {}", path.display()));
        }
    }

    Ok(())
}
