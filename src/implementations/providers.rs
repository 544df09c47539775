use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use log::{ debug, info, warn };
use serde::{ Deserialize, Serialize };
use thiserror::Error;

use crate::errors::{ DetectorError, DetectorResult };
use crate::implementations::config::{ ConfigError, DetectorConfig, ProviderKind };
use crate::models::image::EncodedImage;
use crate::prompts::{ analysis_prompt, SYSTEM_PROMPT };
use crate::traits::vision_provider::VisionProvider;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API error: {0}")] ApiError(String),

    #[error("Configuration error: {0}")] ConfigError(#[from] ConfigError),

    #[error("Failed to parse API response: {0}")] ParseError(String),

    #[error("Network error: {0}")] NetworkError(String),

    #[error(transparent)] SerdeError(#[from] serde_json::Error),

    #[error("HTTP error: {status} - {message}")] HttpError {
        status: u16,
        message: String,
    },
}

impl ProviderError {
    fn into_detector_error(self, provider: &str) -> DetectorError {
        match self {
            ProviderError::ConfigError(err) => DetectorError::Config(err),
            other =>
                DetectorError::Provider {
                    provider: provider.to_string(),
                    message: other.to_string(),
                },
        }
    }
}

/// Build the provider selected in `config`
pub fn build_provider(config: &DetectorConfig) -> DetectorResult<Arc<dyn VisionProvider>> {
    let client = http_client(config.timeout_secs())?;
    let model = config.model().to_string();

    let provider: Arc<dyn VisionProvider> = match config.provider() {
        ProviderKind::Ollama => Arc::new(OllamaProvider::new(client, config.ollama_host(), model)),
        ProviderKind::OpenAi => {
            let api_key = config.get_api_key(ProviderKind::OpenAi)?;
            Arc::new(
                OpenAiProvider::new(
                    client,
                    config.openai_endpoint().to_string(),
                    api_key,
                    model,
                    config.max_tokens(),
                    config.temperature()
                )
            )
        }
        ProviderKind::Anthropic => {
            let api_key = config.get_api_key(ProviderKind::Anthropic)?;
            Arc::new(
                AnthropicProvider::new(
                    client,
                    config.anthropic_endpoint().to_string(),
                    api_key,
                    model,
                    config.max_tokens(),
                    config.temperature()
                )
            )
        }
    };

    info!("Using {} provider with model {}", provider.name(), provider.model());
    Ok(provider)
}

fn http_client(timeout_secs: u64) -> DetectorResult<reqwest::Client> {
    reqwest::Client
        ::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| DetectorError::Provider {
            provider: "http".to_string(),
            message: format!("Failed to create HTTP client: {}", e),
        })
}

fn network_error(provider: &str, e: reqwest::Error) -> ProviderError {
    let error_msg = format!("Network error when calling {} API: {}", provider, e);
    warn!("{}", error_msg);
    if e.is_timeout() {
        warn!("Request timed out");
    }
    if e.is_connect() {
        warn!("Connection error - check network connectivity");
    }
    ProviderError::NetworkError(error_msg)
}

/// Send a JSON request and return the decoded JSON body, mapping transport and status failures
async fn post_json(
    provider: &str,
    request: reqwest::RequestBuilder
) -> Result<serde_json::Value, ProviderError> {
    let response = request.send().await.map_err(|e| network_error(provider, e))?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let error_text = response
            .text().await
            .unwrap_or_else(|_| "Failed to get error message".to_string());

        warn!("API error: HTTP {} - {}", status, error_text);
        return Err(ProviderError::HttpError {
            status,
            message: error_text,
        });
    }

    let response_text = response.text().await.map_err(|e| {
        warn!("Failed to get response text: {}", e);
        ProviderError::ParseError(e.to_string())
    })?;
    debug!("Response length: {} characters", response_text.len());

    serde_json::from_str(&response_text).map_err(|e| {
        warn!("JSON parsing error: {}", e);
        ProviderError::ParseError(format!("Invalid JSON response: {}", e))
    })
}

/// Local Ollama server (`/api/generate`)
pub struct OllamaProvider {
    http_client: reqwest::Client,
    host: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: String,
    system: &'a str,
    images: Vec<&'a str>,
    stream: bool,
}

impl OllamaProvider {
    pub fn new(http_client: reqwest::Client, host: String, model: String) -> Self {
        Self { http_client, host: host.trim_end_matches('/').to_string(), model }
    }

    async fn generate(&self, image: &EncodedImage, context: &str) -> Result<String, ProviderError> {
        let request = OllamaRequest {
            model: &self.model,
            prompt: analysis_prompt(context),
            system: SYSTEM_PROMPT,
            images: vec![image.data_base64.as_str()],
            stream: false,
        };

        let endpoint = format!("{}/api/generate", self.host);
        debug!("Ollama endpoint: {}", endpoint);

        let body = post_json(self.name(), self.http_client.post(&endpoint).json(&request)).await?;

        // A missing "response" field is treated as an empty reply
        Ok(body["response"].as_str().unwrap_or_default().to_string())
    }
}

#[async_trait]
impl VisionProvider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn analyze_image(&self, image: &EncodedImage, context: &str) -> DetectorResult<String> {
        self.generate(image, context).await.map_err(|e| e.into_detector_error(self.name()))
    }
}

/// OpenAI-compatible chat completions with image content parts
pub struct OpenAiProvider {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatResponseChoice>,
}

impl OpenAiProvider {
    pub fn new(
        http_client: reqwest::Client,
        endpoint: String,
        api_key: String,
        model: String,
        max_tokens: usize,
        temperature: f32
    ) -> Self {
        Self { http_client, endpoint, api_key, model, max_tokens, temperature }
    }

    async fn complete(&self, image: &EncodedImage, context: &str) -> Result<String, ProviderError> {
        let request =
            serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                {
                    "role": "user",
                    "content": [
                        { "type": "text", "text": analysis_prompt(context) },
                        { "type": "image_url", "image_url": { "url": image.data_url() } }
                    ]
                }
            ]
        });

        debug!("OpenAI API endpoint: {}", self.endpoint);

        let builder = self.http_client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request);

        let body = post_json(self.name(), builder).await?;
        let response: ChatResponse = serde_json::from_value(body)?;

        let choice = response.choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::ApiError("No choices in response".to_string()))?;

        Ok(choice.message.content.unwrap_or_default())
    }
}

#[async_trait]
impl VisionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn analyze_image(&self, image: &EncodedImage, context: &str) -> DetectorResult<String> {
        self.complete(image, context).await.map_err(|e| e.into_detector_error(self.name()))
    }
}

/// Anthropic messages API with a base64 image block
pub struct AnthropicProvider {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
}

impl AnthropicProvider {
    pub fn new(
        http_client: reqwest::Client,
        endpoint: String,
        api_key: String,
        model: String,
        max_tokens: usize,
        temperature: f32
    ) -> Self {
        Self { http_client, endpoint, api_key, model, max_tokens, temperature }
    }

    async fn message(&self, image: &EncodedImage, context: &str) -> Result<String, ProviderError> {
        let request =
            serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
            "system": SYSTEM_PROMPT,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "image",
                            "source": {
                                "type": "base64",
                                "media_type": image.media_type,
                                "data": image.data_base64
                            }
                        },
                        { "type": "text", "text": analysis_prompt(context) }
                    ]
                }
            ]
        });

        debug!("Anthropic API endpoint: {}", self.endpoint);

        let builder = self.http_client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&request);

        let body = post_json(self.name(), builder).await?;

        body["content"]
            .as_array()
            .and_then(|blocks| blocks.iter().find_map(|b| b["text"].as_str()))
            .map(|text| text.to_string())
            .ok_or_else(|| {
                warn!("Failed to extract text from Anthropic response");
                ProviderError::ParseError("Unable to find text in Anthropic response".to_string())
            })
    }
}

#[async_trait]
impl VisionProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn analyze_image(&self, image: &EncodedImage, context: &str) -> DetectorResult<String> {
        self.message(image, context).await.map_err(|e| e.into_detector_error(self.name()))
    }
}
