pub mod fraud_detector;
pub mod vision_provider;

// Re-export traits
pub use fraud_detector::{ FraudDetector, ProgressCallback, VideoAnalysis };
pub use vision_provider::VisionProvider;
