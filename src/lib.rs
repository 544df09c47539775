pub mod models;
pub mod traits;
pub mod errors;
pub mod prompts;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use errors::{ DetectorError, DetectorResult };
pub use implementations::{
    agent::FraudDetectionAgent,
    aggregation::ResultAggregator,
    config::{ ConfigError, DetectorConfig, ProviderKind },
    frames::{ extract_frames, frame_indices, ExtractedFrames },
    parsing::ResponseParser,
    providers::{ build_provider, AnthropicProvider, OllamaProvider, OpenAiProvider },
};
pub use models::{
    analysis::AnalysisResult,
    image::EncodedImage,
    report::{ AnalysisReport, MediaKind },
    verdict::Verdict,
};
pub use traits::{ FraudDetector, ProgressCallback, VideoAnalysis, VisionProvider };
