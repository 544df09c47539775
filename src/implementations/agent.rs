use std::path::{ Path, PathBuf };
use std::sync::Arc;
use async_trait::async_trait;
use log::{ debug, error, info, warn };

use crate::errors::{ DetectorError, DetectorResult };
use crate::implementations::aggregation::ResultAggregator;
use crate::implementations::frames::extract_frames;
use crate::implementations::parsing::ResponseParser;
use crate::models::analysis::AnalysisResult;
use crate::models::image::EncodedImage;
use crate::traits::fraud_detector::{ FraudDetector, ProgressCallback, VideoAnalysis };
use crate::traits::vision_provider::VisionProvider;

/// Security-analyst agent that asks a vision model about images and video frames
///
/// # Usage Example
/// ```rust,no_run
/// use std::path::Path;
/// use fraudlens::{ build_provider, DetectorConfig, FraudDetectionAgent, FraudDetector };
///
/// async fn check() -> Result<(), Box<dyn std::error::Error>> {
///     let provider = build_provider(&DetectorConfig::default())?;
///     let agent = FraudDetectionAgent::new(provider);
///
///     let analysis = agent.analyze_video(Path::new("clip.mp4"), 5, None).await?;
///     println!("{} ({:.1}%)", analysis.overall.verdict(), analysis.overall.confidence() * 100.0);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct FraudDetectionAgent {
    provider: Arc<dyn VisionProvider>,
}

impl FraudDetectionAgent {
    pub fn new(provider: Arc<dyn VisionProvider>) -> Self {
        Self { provider }
    }

    async fn query(&self, image_path: &Path, context: &str) -> DetectorResult<AnalysisResult> {
        let image = EncodedImage::from_path(image_path).await?;
        debug!(
            "Sending {} ({}, {} base64 bytes) to {}",
            image_path.display(),
            image.media_type,
            image.data_base64.len(),
            self.provider.name()
        );

        let reply = self.provider.analyze_image(&image, context).await?;
        debug!("Model reply length: {} characters", reply.chars().count());

        Ok(ResponseParser::parse(&reply))
    }

    /// Query every extracted frame and aggregate the ones that succeed.
    /// Fails only when no frame could be analyzed.
    pub(crate) async fn analyze_frames(
        &self,
        frame_paths: &[PathBuf],
        video_name: &str,
        progress: Option<ProgressCallback<'_>>
    ) -> DetectorResult<VideoAnalysis> {
        let total = frame_paths.len();
        let mut frame_results = Vec::with_capacity(total);
        let mut last_error = None;

        for (i, frame_path) in frame_paths.iter().enumerate() {
            let context = format!("frame {} of {} from {}", i + 1, total, video_name);
            match self.query(frame_path, &context).await {
                Ok(result) => {
                    debug!("Frame {}: {} ({:.1}%)", i + 1, result.verdict(), result.confidence() * 100.0);
                    frame_results.push(result);
                }
                Err(e) => {
                    warn!("Frame {} of {} failed: {}", i + 1, total, e);
                    last_error = Some(e);
                }
            }
            if let Some(report) = progress {
                report(i + 1, total);
            }
        }

        if frame_results.is_empty() {
            if let Some(e) = last_error {
                error!("Every frame failed to analyze");
                return Err(e);
            }
        }

        let overall = ResultAggregator::aggregate(&frame_results);
        info!("Video verdict: {} ({:.1}%)", overall.verdict(), overall.confidence() * 100.0);

        Ok(VideoAnalysis { frame_results, overall })
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[async_trait]
impl FraudDetector for FraudDetectionAgent {
    fn provider_name(&self) -> &str {
        self.provider.name()
    }

    fn model_name(&self) -> &str {
        self.provider.model()
    }

    async fn analyze_frame(&self, image_path: &Path) -> DetectorResult<AnalysisResult> {
        if !image_path.exists() {
            return Err(DetectorError::FileNotFound(image_path.to_path_buf()));
        }

        info!("Analyzing image {}", image_path.display());
        let context = format!("single image: {}", display_name(image_path));
        let result = self.query(image_path, &context).await?;
        info!("Image verdict: {} ({:.1}%)", result.verdict(), result.confidence() * 100.0);

        Ok(result)
    }

    async fn analyze_video(
        &self,
        video_path: &Path,
        sample_frames: usize,
        progress: Option<ProgressCallback<'_>>
    ) -> DetectorResult<VideoAnalysis> {
        if !video_path.exists() {
            return Err(DetectorError::FileNotFound(video_path.to_path_buf()));
        }
        if sample_frames == 0 {
            return Err(DetectorError::InvalidInput("frame count must be at least 1".to_string()));
        }

        info!("Analyzing video {} ({} frames requested)", video_path.display(), sample_frames);
        let frames = extract_frames(video_path, sample_frames).await?;
        let outcome = self.analyze_frames(frames.paths(), &display_name(video_path), progress).await;
        frames.cleanup();

        outcome
    }
}
