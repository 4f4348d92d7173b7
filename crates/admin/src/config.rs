//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CLAUDE_API_KEY` - Anthropic Claude API key. When unset, AI copy is
//!   disabled and the dashboard shows fallback text instead.
//! - `CLAUDE_MODEL` - Claude model ID (default: claude-sonnet-4-20250514)
//! - `CLAUDE_MAX_TOKENS` - Response token limit (default: 1024)
//! - `CLAUDE_API_URL` - Messages endpoint (default: Anthropic's public API)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate (default: 1.0)

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_CLAUDE_MODEL: &str = "claude-sonnet-4-20250514";
const DEFAULT_CLAUDE_MAX_TOKENS: u32 = 1024;

/// Anthropic Messages API endpoint.
pub const DEFAULT_CLAUDE_API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Fragments found in sample keys copied from docs or `.env.example`.
const SAMPLE_KEY_MARKERS: &[&str] = &["your", "changeme", "placeholder", "example", "xxx", "<", ">"];

/// Shorter than any key the API issues.
const MIN_API_KEY_LEN: usize = 20;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Admin dashboard configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Claude AI configuration (`None` disables AI copy)
    pub claude: Option<ClaudeConfig>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// Claude AI API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct ClaudeConfig {
    /// Anthropic API key
    pub api_key: SecretString,
    /// Model ID (e.g., claude-sonnet-4-20250514)
    pub model: String,
    /// Maximum tokens per response
    pub max_tokens: u32,
    /// Messages endpoint URL
    pub api_url: String,
}

impl ClaudeConfig {
    /// Configuration for `api_key` with default model, limit and endpoint.
    #[must_use]
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            model: DEFAULT_CLAUDE_MODEL.to_string(),
            max_tokens: DEFAULT_CLAUDE_MAX_TOKENS,
            api_url: DEFAULT_CLAUDE_API_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for ClaudeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaudeConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid, or if the
    /// Claude API key looks like a sample value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let claude = ClaudeConfig::from_env()?;
        if claude.is_none() {
            tracing::warn!("CLAUDE_API_KEY not set, AI copy generation disabled");
        }

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            claude,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns a reference to the Claude configuration, if available.
    ///
    /// Returns `None` if `CLAUDE_API_KEY` was not set, which disables
    /// AI-generated copy.
    #[must_use]
    pub const fn claude(&self) -> Option<&ClaudeConfig> {
        self.claude.as_ref()
    }
}

impl ClaudeConfig {
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let Some(api_key) = get_optional_env("CLAUDE_API_KEY") else {
            return Ok(None);
        };
        check_api_key(&api_key)?;

        let max_tokens = get_env_or_default(
            "CLAUDE_MAX_TOKENS",
            &DEFAULT_CLAUDE_MAX_TOKENS.to_string(),
        )
        .parse::<u32>()
        .map_err(|e| ConfigError::InvalidEnvVar("CLAUDE_MAX_TOKENS".to_string(), e.to_string()))?;

        Ok(Some(Self {
            api_key: SecretString::from(api_key),
            model: get_env_or_default("CLAUDE_MODEL", DEFAULT_CLAUDE_MODEL),
            max_tokens,
            api_url: get_env_or_default("CLAUDE_API_URL", DEFAULT_CLAUDE_API_URL),
        }))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional, non-empty environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Reject values that cannot be a real API key.
fn check_api_key(key: &str) -> Result<(), ConfigError> {
    let insecure = |reason: String| ConfigError::InsecureSecret("CLAUDE_API_KEY".to_string(), reason);

    if key.chars().any(char::is_whitespace) {
        return Err(insecure("contains whitespace".to_string()));
    }
    if key.len() < MIN_API_KEY_LEN {
        return Err(insecure(format!("too short ({} chars)", key.len())));
    }

    let lower = key.to_ascii_lowercase();
    match SAMPLE_KEY_MARKERS.iter().find(|marker| lower.contains(**marker)) {
        Some(marker) => Err(insecure(format!("looks like a sample value (contains '{marker}')"))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_keys_are_rejected() {
        for key in ["your-api-key-goes-here-please", "sk-ant-REDACTED", "<CLAUDE_API_KEY_VALUE>"] {
            assert!(
                matches!(check_api_key(key), Err(ConfigError::InsecureSecret(_, _))),
                "{key}"
            );
        }
    }

    #[test]
    fn test_short_or_spaced_keys_are_rejected() {
        assert!(check_api_key("sk-ant-123").is_err());
        assert!(check_api_key("sk-ant-aB3xY9mK2nL5 pQ7rT0uW4zC6").is_err());
    }

    #[test]
    fn test_real_looking_key_is_accepted() {
        assert!(check_api_key("sk-ant-REDACTED").is_ok());
    }

    #[test]
    fn test_claude_config_defaults() {
        let config = ClaudeConfig::new(SecretString::from("sk-ant-test"));
        assert_eq!(config.model, "claude-sonnet-4-20250514");
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.api_url, DEFAULT_CLAUDE_API_URL);
    }

    #[test]
    fn test_claude_config_debug_redacts_secrets() {
        let config = ClaudeConfig::new(SecretString::from("sk-ant-super-secret-key"));

        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("claude-sonnet-4-20250514"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("sk-ant-super-secret-key"));
    }

    #[test]
    fn test_admin_config_without_claude() {
        let config = AdminConfig {
            claude: None,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        };
        assert!(config.claude().is_none());
    }
}
