use async_trait::async_trait;

use crate::errors::DetectorResult;
use crate::models::image::EncodedImage;

/// A vision-capable language model that can be asked about one image
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Short provider name used in logs and reports
    fn name(&self) -> &str;

    /// Model identifier sent with each request
    fn model(&self) -> &str;

    /// Send the image with the analysis prompt for `context` and return the raw reply text
    async fn analyze_image(&self, image: &EncodedImage, context: &str) -> DetectorResult<String>;
}
