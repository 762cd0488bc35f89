//! Shared utilities and common types for the Jobbe server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Utility functions (email validation, masking, etc.)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{Environment, ServerConfig};
pub use utils::email;
