use std::path::{ Path, PathBuf };
use chrono::{ DateTime, Utc };
use serde::Serialize;

use crate::models::analysis::AnalysisResult;

/// Kind of media that was analyzed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// Export envelope written by `--save`
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub source: PathBuf,
    pub media_kind: MediaKind,
    pub frames_analyzed: usize,
    pub provider: String,
    pub model: String,
    pub analyzed_at: DateTime<Utc>,
    pub result: AnalysisResult,
}

impl AnalysisReport {
    pub fn new(
        source: &Path,
        media_kind: MediaKind,
        frames_analyzed: usize,
        provider: &str,
        model: &str,
        result: AnalysisResult
    ) -> Self {
        Self {
            source: source.to_path_buf(),
            media_kind,
            frames_analyzed,
            provider: provider.to_string(),
            model: model.to_string(),
            analyzed_at: Utc::now(),
            result,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
