//! Frame sampling for video analysis
//!
//! Probes the frame count with ffprobe, picks evenly spaced frame indices and
//! writes each one to a JPEG in a temporary directory with ffmpeg.

use std::path::{ Path, PathBuf };
use std::process::Stdio;
use log::{ debug, info, warn };
use tempfile::TempDir;
use tokio::process::Command;

use crate::errors::{ DetectorError, DetectorResult };

const TEMP_DIR_PREFIX: &str = "video_fraud_";
const JPEG_QUALITY: &str = "2";

/// Sampled frames on disk. The directory is removed on [`ExtractedFrames::cleanup`] or drop.
#[derive(Debug)]
pub struct ExtractedFrames {
    paths: Vec<PathBuf>,
    temp_dir: TempDir,
}

impl ExtractedFrames {
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn cleanup(self) {
        let dir = self.temp_dir.path().to_path_buf();
        if let Err(e) = self.temp_dir.close() {
            warn!("Failed to clean up temp dir {}: {}", dir.display(), e);
        } else {
            debug!("Removed temp dir {}", dir.display());
        }
    }
}

/// Evenly distributed frame indices. Every frame is used when `num_frames >= total_frames`.
pub fn frame_indices(total_frames: u64, num_frames: usize) -> Vec<u64> {
    if num_frames == 0 || total_frames == 0 {
        return Vec::new();
    }
    if (num_frames as u64) >= total_frames {
        return (0..total_frames).collect();
    }

    let step = (total_frames as f64) / (num_frames as f64);
    (0..num_frames).map(|i| ((i as f64) * step) as u64).collect()
}

/// Extract `num_frames` evenly spaced frames from `video_path`
pub async fn extract_frames(video_path: &Path, num_frames: usize) -> DetectorResult<ExtractedFrames> {
    let total_frames = probe_frame_count(video_path).await?;
    if total_frames == 0 {
        return Err(DetectorError::NoFrames(video_path.display().to_string()));
    }

    let indices = frame_indices(total_frames, num_frames);
    info!(
        "Sampling {} of {} frames from {}",
        indices.len(),
        total_frames,
        video_path.display()
    );

    let temp_dir = tempfile::Builder::new().prefix(TEMP_DIR_PREFIX).tempdir()?;
    let mut paths = Vec::with_capacity(indices.len());

    for (idx, frame_idx) in indices.iter().enumerate() {
        let frame_path = temp_dir.path().join(format!("frame_{:04}.jpg", idx));
        match extract_single_frame(video_path, *frame_idx, &frame_path).await {
            Ok(()) => paths.push(frame_path),
            Err(e) => warn!("Skipping frame {}: {}", frame_idx, e),
        }
    }

    if paths.is_empty() {
        // temp_dir is dropped (and removed) on return
        return Err(
            DetectorError::FrameExtraction(
                format!("Could not extract any frames from: {}", video_path.display())
            )
        );
    }

    Ok(ExtractedFrames { paths, temp_dir })
}

/// Count video packets in the first video stream
async fn probe_frame_count(video_path: &Path) -> DetectorResult<u64> {
    let output = Command::new("ffprobe")
        .args(["-v", "error"])
        .args(["-select_streams", "v:0"])
        .arg("-count_packets")
        .args(["-show_entries", "stream=nb_read_packets"])
        .args(["-of", "csv=p=0"])
        .arg(video_path)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| DetectorError::VideoOpen(format!("{}: ffprobe failed to run: {}", video_path.display(), e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DetectorError::VideoOpen(format!("{}: {}", video_path.display(), stderr.trim())));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let count = parse_frame_count(&stdout);
    debug!("ffprobe reported {} frames for {}", count, video_path.display());
    Ok(count)
}

/// ffprobe prints one line per stream; an empty or non-numeric answer means no frames
fn parse_frame_count(stdout: &str) -> u64 {
    stdout
        .lines()
        .next()
        .and_then(|line| line.trim().trim_end_matches(',').parse::<u64>().ok())
        .unwrap_or(0)
}

async fn extract_single_frame(video_path: &Path, frame_idx: u64, out: &Path) -> DetectorResult<()> {
    let select = format!("select=eq(n\\,{})", frame_idx);
    let output = Command::new("ffmpeg")
        .args(["-hide_banner", "-loglevel", "error", "-nostdin"])
        .arg("-i")
        .arg(video_path)
        .args(["-an", "-sn"])
        .args(["-vf", &select])
        .args(["-frames:v", "1"])
        .args(["-q:v", JPEG_QUALITY])
        .arg("-y")
        .arg(out)
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| DetectorError::FrameExtraction(format!("ffmpeg failed to run: {}", e)))?;

    if !output.status.success() || !out.exists() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DetectorError::FrameExtraction(stderr.trim().to_string()));
    }

    Ok(())
}
