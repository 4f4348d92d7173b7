//! AI-generated product descriptions and marketing insights.
//!
//! [`Copywriter`] never fails: any error from the text generator (or a missing
//! API key) is logged and replaced by a fixed fallback string, so callers can
//! put the result straight into the catalog or onto the dashboard.

use std::future::Future;
use std::sync::Arc;

use tracing::{instrument, warn};

use berrima_core::Product;

use crate::claude::{ClaudeClient, ClaudeError};
use crate::config::ClaudeConfig;
use crate::prompts::{self, PromptError};

/// Shown when description generation fails.
pub const DESCRIPTION_FALLBACK: &str = "Error connecting to AI service.";

/// Shown when the generator returns an empty description.
pub const DESCRIPTION_EMPTY: &str = "Failed to generate description.";

/// Shown when insight generation fails.
pub const INSIGHT_FALLBACK: &str = "Insights unavailable.";

/// Shown when the generator returns an empty insight.
pub const INSIGHT_EMPTY: &str = "No insights available.";

/// Errors that can occur while generating copy.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    /// Claude API call failed.
    #[error("Claude API error: {0}")]
    Claude(#[from] ClaudeError),

    /// The prompt could not be built.
    #[error("prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// No generator is configured.
    #[error("AI copy generation is not configured")]
    NotConfigured,

    /// Any other generator failure.
    #[error("generator unavailable: {0}")]
    Unavailable(String),
}

/// Something that turns a prompt into text.
pub trait TextGenerator: Send + Sync {
    /// Generate text in response to `prompt`.
    fn generate(&self, prompt: String) -> impl Future<Output = Result<String, CopyError>> + Send;
}

impl<T: TextGenerator> TextGenerator for Arc<T> {
    fn generate(&self, prompt: String) -> impl Future<Output = Result<String, CopyError>> + Send {
        (**self).generate(prompt)
    }
}

impl TextGenerator for ClaudeClient {
    async fn generate(&self, prompt: String) -> Result<String, CopyError> {
        Ok(self.complete(prompt).await?)
    }
}

/// Generates marketing copy, degrading to fallback text on any failure.
#[derive(Debug, Clone)]
pub struct Copywriter<G> {
    generator: Option<G>,
}

impl<G: TextGenerator> Copywriter<G> {
    /// A copywriter backed by `generator`.
    #[must_use]
    pub const fn new(generator: G) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// A copywriter with no generator; every call yields fallback text.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { generator: None }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.generator.is_some()
    }

    /// Product description for `name` in `category`.
    #[instrument(skip(self))]
    pub async fn describe(&self, name: &str, category: &str) -> String {
        match self.try_describe(name, category).await {
            Ok(text) => non_empty_or(text, DESCRIPTION_EMPTY),
            Err(e) => {
                warn!(error = %e, "Product description generation failed");
                DESCRIPTION_FALLBACK.to_string()
            }
        }
    }

    /// Marketing insight for a catalog snapshot.
    #[instrument(skip_all, fields(products = products.len()))]
    pub async fn insight(&self, products: &[Product]) -> String {
        match self.try_insight(products).await {
            Ok(text) => non_empty_or(text, INSIGHT_EMPTY),
            Err(e) => {
                warn!(error = %e, "Marketing insight generation failed");
                INSIGHT_FALLBACK.to_string()
            }
        }
    }

    /// Like [`Copywriter::describe`] but surfaces the error.
    ///
    /// # Errors
    ///
    /// Returns an error if no generator is configured, the prompt fails to
    /// render, or the generator fails.
    pub async fn try_describe(&self, name: &str, category: &str) -> Result<String, CopyError> {
        let prompt = prompts::product_description(name, category)?;
        self.complete(prompt).await
    }

    /// Like [`Copywriter::insight`] but surfaces the error.
    ///
    /// # Errors
    ///
    /// Returns an error if no generator is configured, the prompt fails to
    /// render, or the generator fails.
    pub async fn try_insight(&self, products: &[Product]) -> Result<String, CopyError> {
        let prompt = prompts::marketing_insight(products)?;
        self.complete(prompt).await
    }

    async fn complete(&self, prompt: String) -> Result<String, CopyError> {
        match &self.generator {
            Some(generator) => generator.generate(prompt).await,
            None => Err(CopyError::NotConfigured),
        }
    }
}

impl Copywriter<ClaudeClient> {
    /// A Claude-backed copywriter, or a disabled one when `config` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the Claude client cannot be built.
    pub fn from_config(config: Option<&ClaudeConfig>) -> Result<Self, ClaudeError> {
        match config {
            Some(config) => Ok(Self::new(ClaudeClient::new(config)?)),
            None => Ok(Self::disabled()),
        }
    }
}

fn non_empty_or(text: String, fallback: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        warn!("Generator returned empty text");
        fallback.to_string()
    } else if trimmed.len() == text.len() {
        text
    } else {
        trimmed.to_string()
    }
}
