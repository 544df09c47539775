use std::path::Path;
use base64::Engine;

use crate::errors::{ DetectorError, DetectorResult };

/// Image payload ready to be embedded in a provider request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub media_type: &'static str,
    pub data_base64: String,
}

impl EncodedImage {
    pub fn from_bytes(media_type: &'static str, bytes: &[u8]) -> Self {
        Self {
            media_type,
            data_base64: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    /// Read and encode an image file
    pub async fn from_path(path: &Path) -> DetectorResult<Self> {
        if !path.exists() {
            return Err(DetectorError::FileNotFound(path.to_path_buf()));
        }
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::from_bytes(media_type_for(path), &bytes))
    }

    /// `data:` URL form used by OpenAI-style APIs
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data_base64)
    }
}

/// Guess the MIME type from the file extension, defaulting to JPEG
pub fn media_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}
