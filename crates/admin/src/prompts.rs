//! Prompt templates for AI-generated copy.

use askama::Template;

use berrima_core::Product;

/// Store name used in marketing prompts.
pub const STORE_NAME: &str = "Berrima Store";

/// Word limit requested for product descriptions.
const DESCRIPTION_MAX_WORDS: u32 = 100;

/// Errors that can occur while building a prompt.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("catalog snapshot serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),
}

#[derive(Template)]
#[template(path = "prompts/product_description.txt")]
struct ProductDescriptionPrompt<'a> {
    name: &'a str,
    category: &'a str,
    max_words: u32,
}

#[derive(Template)]
#[template(path = "prompts/marketing_insight.txt")]
struct MarketingInsightPrompt<'a> {
    snapshot: &'a str,
    store_name: &'a str,
}

/// Prompt asking for a product description.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn product_description(name: &str, category: &str) -> Result<String, PromptError> {
    Ok(ProductDescriptionPrompt {
        name,
        category,
        max_words: DESCRIPTION_MAX_WORDS,
    }
    .render()?)
}

/// Prompt asking for a slogan and a hero product, given the catalog as JSON.
///
/// # Errors
///
/// Returns an error if the catalog cannot be serialized or the template fails
/// to render.
pub fn marketing_insight(products: &[Product]) -> Result<String, PromptError> {
    let snapshot = serde_json::to_string(products)?;
    Ok(MarketingInsightPrompt {
        snapshot: &snapshot,
        store_name: STORE_NAME,
    }
    .render()?)
}
