//! Berrima Store admin library.
//!
//! The admin dashboard works on the same [`Store`](berrima_storefront::Store)
//! as the storefront. It adds:
//!
//! - configuration from the environment ([`config`])
//! - a Claude Messages API client ([`claude`])
//! - AI product descriptions and marketing insight with fallback text
//!   ([`copywriter`])
//! - sequencing of in-flight AI requests ([`tracker`], [`dashboard`])

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod claude;
pub mod config;
pub mod copywriter;
pub mod dashboard;
pub mod prompts;
pub mod tracker;

pub use config::{AdminConfig, ClaudeConfig, ConfigError};
pub use copywriter::{CopyError, Copywriter, TextGenerator};
pub use dashboard::{Dashboard, DescriptionRequest, GeneratedDescription, InsightRequest};
pub use tracker::{RequestTracker, Ticket};
