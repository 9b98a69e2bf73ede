//! Domain types and request/response models for the translation gateway
//!
//! `translation` holds the values the core produces; `requests` and
//! `responses` are the DTOs serialized at the HTTP boundary.

pub mod requests;
pub mod responses;
pub mod translation;

// Re-export commonly used types
pub use requests::{BatchTranslationRequest, TranslationRequest};
pub use responses::{
    BatchTranslationResponse, ErrorResponse, HealthResponse, LanguageResponse, MessageResponse,
    TranslationResponse,
};
pub use translation::{Language, TranslationResult};
