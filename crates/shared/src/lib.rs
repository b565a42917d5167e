//! Shared identifiers, errors, and configuration for Brokerbook.
//!
//! This crate provides common types used across all other crates:
//! - Typed identifiers for backend keys (brokers, merchants, products, ...)
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::AppError;
