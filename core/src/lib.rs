//! # Jobbe Core
//!
//! Core business logic and domain layer for the Jobbe backend.
//! This crate contains domain entities, business services, and error types
//! that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
