//! Shared utilities and common types for the StartupVista server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - API response envelopes
//! - Utility functions (email validation, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, CacheConfig, CorsConfig, EmailConfig, Environment, ServerConfig, VerificationConfig};
pub use types::{ApiResponse, ErrorBody};
pub use utils::validation;
