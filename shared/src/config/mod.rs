//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `environment` - Environment detection
//! - `server` - HTTP server configuration

pub mod environment;
pub mod server;

// Re-export commonly used types
pub use environment::Environment;
pub use server::ServerConfig;
