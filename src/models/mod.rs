pub mod analysis;
pub mod image;
pub mod report;
pub mod verdict;

// Re-export common model types
pub use analysis::AnalysisResult;
pub use image::EncodedImage;
pub use report::{ AnalysisReport, MediaKind };
pub use verdict::Verdict;
