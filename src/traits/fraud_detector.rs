use std::path::Path;
use async_trait::async_trait;

use crate::errors::DetectorResult;
use crate::models::analysis::AnalysisResult;

/// Outcome of analyzing a video: every parsed frame plus the aggregate
#[derive(Debug, Clone)]
pub struct VideoAnalysis {
    pub frame_results: Vec<AnalysisResult>,
    pub overall: AnalysisResult,
}

/// Called after each frame with (frames done, frames total)
pub type ProgressCallback<'a> = &'a (dyn Fn(usize, usize) + Send + Sync);

/// Main entry points for investigating media
#[async_trait]
pub trait FraudDetector {
    /// Name of the backing provider
    fn provider_name(&self) -> &str;

    /// Name of the backing model
    fn model_name(&self) -> &str;

    /// Analyze a single image or frame
    async fn analyze_frame(&self, image_path: &Path) -> DetectorResult<AnalysisResult>;

    /// Sample `sample_frames` frames from a video, analyze each and aggregate
    async fn analyze_video(
        &self,
        video_path: &Path,
        sample_frames: usize,
        progress: Option<ProgressCallback<'_>>
    ) -> DetectorResult<VideoAnalysis>;
}
