//! # Infrastructure Layer
//!
//! Concrete collaborators for the StartupVista verification service:
//!
//! - **Cache**: Redis client and the Redis-backed verification record store,
//!   plus an in-memory store for single-process deployments and tests
//! - **Email**: Resend API client for verification code delivery, plus a
//!   mock sender for development

pub mod cache;
pub mod email;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis record store error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email service error
    #[error("Email service error: {0}")]
    Email(String),

    /// Record serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
