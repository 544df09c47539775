use serde::{ Deserialize, Serialize };
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";
pub const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_ANTHROPIC_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MODEL: &str = "llava";
pub const DEFAULT_SAMPLE_FRAMES: usize = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Missing required API key: {0}")]
    MissingApiKey(String),

    #[error("Unknown provider: {0} (expected ollama, openai or anthropic)")]
    UnknownProvider(String),
}

/// Vision model backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Ollama,
    OpenAi,
    Anthropic,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Ollama => "ollama",
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
        }
    }

    /// Environment variable holding the API key, if the provider needs one
    pub fn api_key_env(&self) -> Option<&'static str> {
        match self {
            ProviderKind::Ollama => None,
            ProviderKind::OpenAi => Some("OPENAI_API_KEY"),
            ProviderKind::Anthropic => Some("ANTHROPIC_API_KEY"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ollama" => Ok(ProviderKind::Ollama),
            "openai" => Ok(ProviderKind::OpenAi),
            "anthropic" | "claude" => Ok(ProviderKind::Anthropic),
            _ => Err(ConfigError::UnknownProvider(s.to_string())),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DetectorConfig {
    /// Which backend to query
    pub provider: Option<ProviderKind>,

    /// Model name passed to the provider
    pub model: Option<String>,

    /// Base URL of the Ollama server
    pub ollama_host: Option<String>,

    /// Chat completions endpoint for OpenAI-compatible APIs
    pub openai_endpoint: Option<String>,

    /// Messages endpoint for Anthropic
    pub anthropic_endpoint: Option<String>,

    /// API key; environment variables are checked when unset
    pub api_key: Option<String>,

    /// HTTP timeout per request
    pub timeout_secs: Option<u64>,

    /// Maximum tokens for API calls
    pub max_tokens: Option<usize>,

    /// Temperature for generation (0.0-1.0)
    pub temperature: Option<f32>,

    /// Frames sampled from a video when not given on the command line
    pub sample_frames: Option<usize>,
}

impl DetectorConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: DetectorConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn provider(&self) -> ProviderKind {
        self.provider.unwrap_or(ProviderKind::Ollama)
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Ollama host from config, then `OLLAMA_HOST`, then the local default
    pub fn ollama_host(&self) -> String {
        if let Some(host) = &self.ollama_host {
            return host.clone();
        }
        std::env::var("OLLAMA_HOST").unwrap_or_else(|_| DEFAULT_OLLAMA_HOST.to_string())
    }

    pub fn openai_endpoint(&self) -> &str {
        self.openai_endpoint.as_deref().unwrap_or(DEFAULT_OPENAI_ENDPOINT)
    }

    pub fn anthropic_endpoint(&self) -> &str {
        self.anthropic_endpoint.as_deref().unwrap_or(DEFAULT_ANTHROPIC_ENDPOINT)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(120)
    }

    pub fn max_tokens(&self) -> usize {
        self.max_tokens.unwrap_or(1024)
    }

    pub fn temperature(&self) -> f32 {
        self.temperature.unwrap_or(0.2)
    }

    pub fn sample_frames(&self) -> usize {
        self.sample_frames.unwrap_or(DEFAULT_SAMPLE_FRAMES)
    }

    /// Get the API key for a provider, checking environment variables if not in config
    pub fn get_api_key(&self, provider: ProviderKind) -> Result<String, ConfigError> {
        use log::debug;

        if let Some(api_key) = &self.api_key {
            debug!("Using API key from config");
            return Ok(api_key.clone());
        }

        let env_var = match provider.api_key_env() {
            Some(name) => name,
            None => {
                return Ok(String::new());
            }
        };

        std::env
            ::var(env_var)
            .map_err(|_| ConfigError::MissingApiKey(format!("{} is not set", env_var)))
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        DetectorConfig {
            provider: None,
            model: None,
            ollama_host: None,
            openai_endpoint: None,
            anthropic_endpoint: None,
            api_key: None,
            timeout_secs: Some(120),
            max_tokens: Some(1024),
            temperature: Some(0.2),
            sample_frames: Some(DEFAULT_SAMPLE_FRAMES),
        }
    }
}
