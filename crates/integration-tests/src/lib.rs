//! Integration tests for the Berrima Store.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p berrima-integration-tests
//! ```
//!
//! No network access is needed: AI copy is produced by the fake generators
//! defined here.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::VecDeque;
use std::sync::Mutex;

use berrima_admin::{CopyError, TextGenerator};
use berrima_admin::claude::ClaudeError;
use berrima_core::ProductId;
use berrima_storefront::{Command, Store};

/// Replies with queued texts in order, then with `default`. Records prompts.
#[derive(Debug, Default)]
pub struct Scripted {
    replies: Mutex<VecDeque<String>>,
    default: String,
    prompts: Mutex<Vec<String>>,
}

impl Scripted {
    /// A generator that always replies `text`.
    #[must_use]
    pub fn always(text: &str) -> Self {
        Self {
            default: text.to_string(),
            ..Self::default()
        }
    }

    /// A generator that replies with `texts` in order.
    #[must_use]
    pub fn replies(texts: &[&str]) -> Self {
        Self {
            replies: Mutex::new(texts.iter().map(ToString::to_string).collect()),
            ..Self::default()
        }
    }

    /// Prompts received so far.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

impl TextGenerator for Scripted {
    async fn generate(&self, prompt: String) -> Result<String, CopyError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt);
        }
        let next = self
            .replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.pop_front());
        Ok(next.unwrap_or_else(|| self.default.clone()))
    }
}

/// Fails every request the way an unreachable API would.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unreachable;

impl TextGenerator for Unreachable {
    async fn generate(&self, _prompt: String) -> Result<String, CopyError> {
        Err(CopyError::Claude(ClaudeError::Api {
            error_type: "overloaded_error".to_string(),
            message: "Overloaded".to_string(),
        }))
    }
}

/// Seeded store with the given product ids added to the cart, in order.
#[must_use]
pub fn store_with_cart(ids: &[&str]) -> Store {
    let mut store = Store::seeded();
    for id in ids {
        store.dispatch(Command::AddToCart {
            id: ProductId::from(*id),
        });
    }
    store
}
