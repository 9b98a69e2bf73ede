//! Translation Gateway - A caching façade over a remote translation API
//!
//! Answers translation requests from a cache when possible and otherwise
//! calls the provider with bounded exponential-backoff retries.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use error::{Result, TranslatorError};
pub use service::TranslationService;
