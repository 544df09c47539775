use serde::Serialize;

use crate::models::verdict::Verdict;

/// Result of analyzing one frame, or the aggregate over all frames of a video.
///
/// Values are immutable once built. `confidence` is a fraction in `[0.0, 1.0]`;
/// [`AnalysisResult::new`] clamps anything outside that range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    verdict: Verdict,
    confidence: f64,
    reasoning: String,
    indicators: Vec<String>,
    recommendations: Vec<String>,
}

impl AnalysisResult {
    pub fn new(
        verdict: Verdict,
        confidence: f64,
        reasoning: impl Into<String>,
        indicators: Vec<String>,
        recommendations: Vec<String>
    ) -> Self {
        Self {
            verdict,
            confidence: clamp_confidence(confidence),
            reasoning: reasoning.into(),
            indicators,
            recommendations,
        }
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Confidence as a fraction between 0.0 and 1.0
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    /// Specific evidence the model cited
    pub fn indicators(&self) -> &[String] {
        &self.indicators
    }

    /// Follow-up actions suggested by the model
    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }
}

fn clamp_confidence(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}
